use super::{laid_out, SAMPLES};
use crate::constants::{MAX_ZOOM, MIN_ZOOM};
use crate::model::{Geometry, IntrinsicSize, Viewport};
use crate::store::MemoryStore;
use crate::zoom_math::{clamp_zoom, snap_to_grid, to_screen, zoom_ratio};

#[test]
fn test_clamp_zoom_is_range_limited_and_idempotent() {
    for z in SAMPLES.iter().map(|v| v * 3.0).chain([f64::INFINITY, f64::NEG_INFINITY]) {
        let clamped = clamp_zoom(z);
        assert!((MIN_ZOOM..=MAX_ZOOM).contains(&clamped), "{z} -> {clamped}");
        assert_eq!(clamp_zoom(clamped), clamped);
    }
}

#[test]
fn test_to_screen_centers_origin() {
    let geometry = Geometry::new(0.0, 0.0, 10.0, 10.0);
    let rect = to_screen(&geometry, &Viewport::default(), (200.0, 100.0));
    assert_eq!((rect.x, rect.y, rect.width, rect.height), (100.0, 50.0, 10.0, 10.0));
}

#[test]
fn test_zoom_ratio_doubles_per_level() {
    assert_eq!(zoom_ratio(1.0), 2.0 * zoom_ratio(0.0));
    assert_eq!(zoom_ratio(-1.0), zoom_ratio(0.0) / 2.0);
    for z in [-3.5, -1.25, 0.75, 2.5] {
        let ratio = zoom_ratio(z + 1.0) / zoom_ratio(z);
        assert!((ratio - 2.0).abs() < 1e-12);
    }
}

#[test]
fn test_snap_to_grid_is_idempotent_and_aligned() {
    for grid in [1.0, 8.0, 32.0, 100.0] {
        for v in SAMPLES {
            let snapped = snap_to_grid(v, grid);
            assert_eq!(snap_to_grid(snapped, grid), snapped, "v={v} grid={grid}");
            assert_eq!(snapped % grid, 0.0, "v={v} grid={grid}");
        }
    }
}

#[test]
fn test_viewport_center_is_drawn_at_container_center() {
    for x in SAMPLES {
        for zoom in [-4.0, -0.5, 0.0, 1.5, 4.0] {
            let viewport = Viewport::new(x, -x, zoom);
            let geometry = Geometry::new(x, -x, 1.0, 1.0);
            let rect = to_screen(&geometry, &viewport, (640.0, 480.0));
            assert!((rect.x - 320.0).abs() < 1e-9);
            assert!((rect.y - 240.0).abs() < 1e-9);
        }
    }
}

#[test]
fn test_initial_layout_is_idempotent() {
    let ids = ["a.png", "b.png", "c.png"];
    let sizes = [
        IntrinsicSize::new(640, 480),
        IntrinsicSize::new(333, 777),
        IntrinsicSize::new(1, 1),
    ];
    let mut controller = laid_out(&ids, &sizes, MemoryStore::new());
    let first = controller.export();

    assert!(controller.initialize_layout());
    assert_eq!(controller.export(), first);
}

#[test]
fn test_initial_layout_is_deterministic_without_persistence() {
    let ids = ["a.png", "b.png"];
    let sizes = [IntrinsicSize::new(50, 100), IntrinsicSize::new(100, 50)];
    let mut controller = laid_out(&ids, &sizes, MemoryStore::new().failing());
    let first = controller.export();

    controller.clear_cache();
    assert_eq!(controller.export(), first);
}
