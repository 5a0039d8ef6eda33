use wasm_bindgen::prelude::*;

use crate::config::LogLevel;
use crate::store::{LayoutStore, LocalStorageStore, MemoryStore};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A second init (e.g. hot reload) keeps the existing logger
    let _ = console_log::init_with_level(LogLevel::default().to_level());
    log::info!("ipz WASM started");
}

/// Layout store for browser builds: localStorage, or memory if unavailable.
pub fn browser_store() -> Box<dyn LayoutStore> {
    match LocalStorageStore::open() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("{}, layout will not persist", e);
            Box::new(MemoryStore::new())
        }
    }
}
