//! Placement mathematics.
//!
//! The viewport's logical point is always drawn at the container's pixel
//! center, and logical distances are scaled by `2^zoom`.

use ipz_surface::Rect;

use crate::constants::{MAX_ZOOM, MIN_ZOOM};
use crate::model::{Geometry, Viewport};

/// Round half toward positive infinity (`-2.5` rounds to `-2`).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Multiplicative scale of a zoom level: each unit doubles or halves it.
pub fn zoom_ratio(zoom: f64) -> f64 {
    zoom.exp2()
}

/// Clamp a zoom level to `[MIN_ZOOM, MAX_ZOOM]`. NaN clamps to zero.
pub fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_nan() {
        return 0.0;
    }
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Round a logical coordinate to the nearest multiple of `grid_spacing`.
pub fn snap_to_grid(value: f64, grid_spacing: f64) -> f64 {
    round_half_up(value / grid_spacing) * grid_spacing
}

/// Screen rectangle of an image in a container of `container` (width, height).
pub fn to_screen(geometry: &Geometry, viewport: &Viewport, container: (f64, f64)) -> Rect {
    let ratio = viewport.zoom_ratio();
    let (container_width, container_height) = container;
    Rect::new(
        container_width / 2.0 - viewport.x * ratio + geometry.x() * ratio,
        container_height / 2.0 - viewport.y * ratio + geometry.y() * ratio,
        geometry.width() * ratio,
        geometry.height() * ratio,
    )
}

/// Logical point under a container pixel; the inverse of [`to_screen`].
pub fn to_logical(screen_x: f64, screen_y: f64, viewport: &Viewport, container: (f64, f64)) -> (f64, f64) {
    let ratio = viewport.zoom_ratio();
    let (container_width, container_height) = container;
    (
        viewport.x + (screen_x - container_width / 2.0) / ratio,
        viewport.y + (screen_y - container_height / 2.0) / ratio,
    )
}
