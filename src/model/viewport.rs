use crate::store::{read_number, remove_key, write_number, LayoutStore, StorageKeys, ViewportField};
use crate::zoom_math::{clamp_zoom, zoom_ratio};

/// The logical point the container is centered on, and the zoom level.
///
/// The zoom level is clamped to `[MIN_ZOOM, MAX_ZOOM]` on every write.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    zoom: f64,
}

impl Viewport {
    pub fn new(x: f64, y: f64, zoom: f64) -> Self {
        Self {
            x,
            y,
            zoom: clamp_zoom(zoom),
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Scale factor logical units are multiplied by on screen.
    pub fn zoom_ratio(&self) -> f64 {
        zoom_ratio(self.zoom)
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = clamp_zoom(zoom);
    }

    /// Change the zoom level by a signed step, clamped.
    pub fn zoom_by(&mut self, step: f64) {
        self.set_zoom(self.zoom + step);
    }

    /// Override each field that has a persisted value.
    pub fn load(&mut self, store: &dyn LayoutStore, keys: &StorageKeys) {
        if let Some(x) = read_number(store, &keys.viewport(ViewportField::X)) {
            self.x = x;
        }
        if let Some(y) = read_number(store, &keys.viewport(ViewportField::Y)) {
            self.y = y;
        }
        if let Some(zoom) = read_number(store, &keys.viewport(ViewportField::Zoom)) {
            self.set_zoom(zoom);
        }
    }

    pub fn store(&self, store: &mut dyn LayoutStore, keys: &StorageKeys) {
        write_number(store, &keys.viewport(ViewportField::X), self.x);
        write_number(store, &keys.viewport(ViewportField::Y), self.y);
        write_number(store, &keys.viewport(ViewportField::Zoom), self.zoom);
    }

    /// Remove every persisted viewport field.
    pub fn clear_storage(store: &mut dyn LayoutStore, keys: &StorageKeys) {
        for field in ViewportField::ALL {
            remove_key(store, &keys.viewport(field));
        }
    }
}
