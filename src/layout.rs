//! Initial layout pass.
//!
//! Images are laid out in one row starting at the origin, each in the next
//! grid-aligned slot wide enough for the image plus spacing. Persisted
//! values override the computed defaults field by field, so the pass is
//! idempotent: a second run with an unchanged store reproduces the first.

use crate::config::WidgetConfig;
use crate::model::{Geometry, ImageItem, IntrinsicSize, Viewport};
use crate::store::{LayoutStore, StorageKeys};
use crate::zoom_math::round_half_up;

/// Horizontal distance between the default positions of neighbouring images.
pub fn slot_stride(image_width: f64, grid_spacing: f64) -> f64 {
    round_half_up((image_width + grid_spacing) / grid_spacing) * grid_spacing
}

/// Logical height of an image laid out at `width`, keeping its aspect ratio.
pub fn scaled_height(width: f64, intrinsic: IntrinsicSize) -> f64 {
    if intrinsic.width == 0 {
        log::warn!("Image reports zero intrinsic width, laying it out square");
        return width;
    }
    round_half_up(width * f64::from(intrinsic.height) / f64::from(intrinsic.width))
}

/// Bounding box (x_min, y_min, x_max, y_max) of every placed image.
pub fn bounding_box(images: &[ImageItem]) -> Option<(f64, f64, f64, f64)> {
    images
        .iter()
        .filter_map(ImageItem::geometry)
        .fold(None, |bounds, g| {
            Some(match bounds {
                None => (g.x(), g.y(), g.x_end(), g.y_end()),
                Some((x_min, y_min, x_max, y_max)) => (
                    f64::min(x_min, g.x()),
                    f64::min(y_min, g.y()),
                    f64::max(x_max, g.x_end()),
                    f64::max(y_max, g.y_end()),
                ),
            })
        })
}

/// Lay out every image and center the viewport on the result.
///
/// `intrinsic` is indexed like `images`. Persisted image and viewport
/// fields take precedence over the computed defaults, and the resulting
/// layout is written through to the store.
pub fn initialize_layout(
    images: &mut [ImageItem],
    intrinsic: &[IntrinsicSize],
    viewport: &mut Viewport,
    config: &WidgetConfig,
    store: &mut dyn LayoutStore,
    keys: &StorageKeys,
) {
    let stride = slot_stride(config.image_width, config.grid_spacing);
    let mut x = 0.0;
    let y = 0.0;
    for (image, size) in images.iter_mut().zip(intrinsic) {
        let width = config.image_width;
        let height = scaled_height(width, *size);
        image.initialize(Geometry::new(x, y, width, height), store, keys);
        x += stride;
    }

    let (center_x, center_y) = match bounding_box(images) {
        Some((x_min, y_min, x_max, y_max)) => (
            round_half_up((x_min + x_max) / 2.0),
            round_half_up((y_min + y_max) / 2.0),
        ),
        None => (0.0, 0.0),
    };
    *viewport = Viewport::new(center_x, center_y, 0.0);
    viewport.load(store, keys);
    viewport.store(store, keys);

    log::info!(
        "Laid out {} images, viewport at ({}, {}) zoom {}",
        images.len(),
        viewport.x,
        viewport.y,
        viewport.zoom()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ImageField, MemoryStore, ViewportField};

    fn items(ids: &[&str]) -> Vec<ImageItem> {
        ids.iter().map(|id| ImageItem::new(*id, None)).collect()
    }

    #[test]
    fn test_slot_stride() {
        assert_eq!(slot_stride(128.0, 32.0), 160.0);
        assert_eq!(slot_stride(100.0, 32.0), 128.0);
        assert_eq!(slot_stride(10.0, 100.0), 100.0);
    }

    #[test]
    fn test_scaled_height_keeps_aspect() {
        assert_eq!(scaled_height(128.0, IntrinsicSize::new(640, 480)), 96.0);
        assert_eq!(scaled_height(128.0, IntrinsicSize::new(300, 100)), 43.0);
        assert_eq!(scaled_height(128.0, IntrinsicSize::new(0, 100)), 128.0);
    }

    #[test]
    fn test_default_row_layout() {
        let config = WidgetConfig::default();
        let keys = StorageKeys::new(&config.storage_namespace);
        let mut store = MemoryStore::new();
        let mut images = items(&["a.png", "b.png", "c.png"]);
        let sizes = [
            IntrinsicSize::new(640, 480),
            IntrinsicSize::new(100, 100),
            IntrinsicSize::new(200, 400),
        ];
        let mut viewport = Viewport::default();

        initialize_layout(&mut images, &sizes, &mut viewport, &config, &mut store, &keys);

        let geometries: Vec<Geometry> = images.iter().filter_map(|i| i.geometry().copied()).collect();
        assert_eq!(
            geometries,
            vec![
                Geometry::new(0.0, 0.0, 128.0, 96.0),
                Geometry::new(160.0, 0.0, 128.0, 128.0),
                Geometry::new(320.0, 0.0, 128.0, 256.0),
            ]
        );
        // Bounding box 0..448 x 0..256
        assert_eq!(viewport, Viewport::new(224.0, 128.0, 0.0));
        assert_eq!(store.len(), 3 * 4 + 3);
    }

    #[test]
    fn test_persisted_values_override_defaults() {
        let config = WidgetConfig::default();
        let keys = StorageKeys::new(&config.storage_namespace);
        let mut store = MemoryStore::new();
        store.set(&keys.image("b.png", ImageField::Y), "-64").unwrap();
        store.set(&keys.viewport(ViewportField::Zoom), "1.5").unwrap();

        let mut images = items(&["a.png", "b.png"]);
        let sizes = [IntrinsicSize::new(128, 128); 2];
        let mut viewport = Viewport::default();
        initialize_layout(&mut images, &sizes, &mut viewport, &config, &mut store, &keys);

        assert_eq!(images[1].geometry().map(|g| g.y()), Some(-64.0));
        assert_eq!(images[1].geometry().map(|g| g.x()), Some(160.0));
        // Bounding box 0..288 x -64..128
        assert_eq!(viewport, Viewport::new(144.0, 32.0, 1.5));
    }

    #[test]
    fn test_bounding_box_ignores_unplaced() {
        assert_eq!(bounding_box(&items(&["a.png"])), None);
    }
}
