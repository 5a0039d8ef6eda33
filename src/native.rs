//! Headless native front end.
//!
//! Usage: `ipz-native [--clear] [--store PATH] <image>...`
//!
//! Lays the given image files out on an 800x600 headless surface against a
//! file-backed layout store and prints the exported snapshot as JSON.

use std::error::Error;
use std::path::PathBuf;

use ipz_surface::HeadlessSurface;

use crate::config::Settings;
use crate::model::ImageSpec;
use crate::probe;
use crate::store::FileStore;
use crate::widget::ImagePannerZoomer;

const SURFACE_WIDTH: f64 = 800.0;
const SURFACE_HEIGHT: f64 = 600.0;

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Options {
    pub clear: bool,
    pub store: Option<PathBuf>,
    pub images: Vec<PathBuf>,
}

impl Options {
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, String> {
        let mut options = Options::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--clear" => options.clear = true,
                "--store" => {
                    let path = args.next().ok_or("--store requires a path")?;
                    options.store = Some(PathBuf::from(path));
                }
                flag if flag.starts_with("--") => return Err(format!("Unknown option {flag}")),
                _ => options.images.push(PathBuf::from(arg)),
            }
        }
        if options.images.is_empty() {
            return Err("Usage: ipz-native [--clear] [--store PATH] <image>...".to_string());
        }
        Ok(options)
    }
}

/// Run the native front end with the process arguments (without argv[0]).
pub fn run(args: impl IntoIterator<Item = String>) -> Result<(), Box<dyn Error>> {
    let settings = Settings::load_from_default_path().unwrap_or_default();
    env_logger::Builder::new()
        .filter_level(settings.log_level.to_level_filter())
        .parse_default_env()
        .init();

    let options = Options::parse(args)?;
    let store_path = options
        .store
        .clone()
        .or_else(FileStore::default_path)
        .ok_or("Could not determine a layout store path")?;
    let store = FileStore::open(store_path);
    log::info!("Using layout store {:?}", store.path());

    let specs: Vec<ImageSpec> = options
        .images
        .iter()
        .map(|path| ImageSpec::from(path.display().to_string()))
        .collect();
    let surface = HeadlessSurface::new(SURFACE_WIDTH, SURFACE_HEIGHT);
    let mut widget = ImagePannerZoomer::new(specs, surface, settings.widget.clone(), Box::new(store))?
        .with_keybindings(settings.keybindings.clone());
    widget.run()?;

    if options.clear {
        widget.clear_storage();
    }

    for path in &options.images {
        let size = probe::intrinsic_size(path)?;
        widget.image_loaded(&path.display().to_string(), size);
    }

    println!("{}", widget.export().to_json()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_options() {
        let options = Options::parse(args(&["--clear", "a.png", "--store", "/tmp/s.json", "b.png"])).unwrap();
        assert!(options.clear);
        assert_eq!(options.store, Some(PathBuf::from("/tmp/s.json")));
        assert_eq!(options.images, vec![PathBuf::from("a.png"), PathBuf::from("b.png")]);
    }

    #[test]
    fn test_parse_requires_images() {
        assert!(Options::parse(args(&["--clear"])).is_err());
        assert!(Options::parse(args(&["--store"])).is_err());
        assert!(Options::parse(args(&["--bogus", "a.png"])).is_err());
    }
}
