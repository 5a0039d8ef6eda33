//! Global constants for the image panner/zoomer

/// Default zoom step for keyboard and wheel zoom commands
pub const DEFAULT_ZOOM_INCREMENT: f64 = 0.5;

/// Default logical width every image is laid out with
pub const DEFAULT_IMAGE_WIDTH: f64 = 128.0;

/// Default grid spacing for image snapping and the initial row layout
pub const DEFAULT_GRID_SPACING: f64 = 32.0;

/// Lowest zoom level (zoom ratio 1/16)
pub const MIN_ZOOM: f64 = -4.0;

/// Highest zoom level (zoom ratio 16)
pub const MAX_ZOOM: f64 = 4.0;

/// Pixels of horizontal drag per full zoom level in a zoom drag
pub const ZOOM_DRAG_DIVISOR: f64 = 100.0;

/// Default namespace tag for persisted layout keys
pub const DEFAULT_STORAGE_NAMESPACE: &str = "imagePannerZoomer";

/// Prompt shown before the persisted layout is cleared
pub const CLEAR_CACHE_PROMPT: &str = "Do you wish to clear the cache?";
