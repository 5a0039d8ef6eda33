/// Headless native entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    if let Err(e) = ipz::native::run(std::env::args().skip(1)) {
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}
