use ipz_surface::Key;

use super::{laid_out, specs};
use crate::config::WidgetConfig;
use crate::controller::{InteractionController, InteractionState, PointerTarget};
use crate::model::{ImageItem, IntrinsicSize};
use crate::store::{write_number, ImageField, LayoutStore, MemoryStore, StorageKeys, ViewportField};

fn square() -> IntrinsicSize {
    IntrinsicSize::new(128, 128)
}

fn seeded_viewport(x: f64, y: f64, zoom: f64) -> MemoryStore {
    let keys = StorageKeys::new(&WidgetConfig::default().storage_namespace);
    let mut store = MemoryStore::new();
    write_number(&mut store, &keys.viewport(ViewportField::X), x);
    write_number(&mut store, &keys.viewport(ViewportField::Y), y);
    write_number(&mut store, &keys.viewport(ViewportField::Zoom), zoom);
    store
}

fn position(controller: &InteractionController, id: &str) -> (f64, f64) {
    let geometry = controller.image(id).and_then(ImageItem::geometry).copied().unwrap();
    (geometry.x(), geometry.y())
}

#[test]
fn test_pan_drag_moves_viewport_against_pointer() {
    let mut controller = laid_out(&["a.png"], &[square()], seeded_viewport(100.0, 100.0, 0.0));
    assert_eq!((controller.viewport().x, controller.viewport().y), (100.0, 100.0));

    assert!(controller.pointer_down(PointerTarget::Background));
    assert!(controller.pointer_move(10.0, 0.0));
    assert_eq!((controller.viewport().x, controller.viewport().y), (90.0, 100.0));

    let key = controller.storage_keys().viewport(ViewportField::X);
    assert_eq!(controller.store().get(&key).as_deref(), Some("90"));
}

#[test]
fn test_pan_drag_at_zoom_one_halves_movement() {
    let mut controller = laid_out(&["a.png"], &[square()], seeded_viewport(0.0, 0.0, 1.0));
    controller.pointer_down(PointerTarget::Background);
    controller.pointer_move(10.0, -20.0);
    assert_eq!((controller.viewport().x, controller.viewport().y), (-5.0, 10.0));
}

#[test]
fn test_image_drag_snaps_accumulated_movement() {
    let mut controller = laid_out(&["a.png"], &[square()], MemoryStore::new());
    assert_eq!(position(&controller, "a.png"), (0.0, 0.0));

    controller.pointer_down(PointerTarget::Image("a.png"));
    controller.pointer_move(30.0, 0.0);
    // 30 rounds to the nearest slot at 32
    assert_eq!(position(&controller, "a.png"), (32.0, 0.0));
    controller.pointer_move(20.0, 0.0);
    assert_eq!(position(&controller, "a.png"), (64.0, 0.0));

    controller.pointer_up();
    let key = controller.storage_keys().image("a.png", ImageField::X);
    assert_eq!(controller.store().get(&key).as_deref(), Some("64"));
}

#[test]
fn test_image_drag_snaps_total_not_steps() {
    let mut controller = laid_out(&["a.png"], &[square()], MemoryStore::new());
    controller.pointer_down(PointerTarget::Image("a.png"));
    controller.pointer_move(50.0, 0.0);
    assert_eq!(position(&controller, "a.png"), (64.0, 0.0));

    let mut controller = laid_out(&["a.png"], &[square()], MemoryStore::new());
    controller.pointer_down(PointerTarget::Image("a.png"));
    controller.pointer_move(25.0, 0.0);
    controller.pointer_move(25.0, 0.0);
    controller.pointer_move(-10.0, 0.0);
    // accumulated 40 snaps to 32
    assert_eq!(position(&controller, "a.png"), (32.0, 0.0));
}

#[test]
fn test_second_press_does_not_switch_drag() {
    let mut controller = laid_out(&["a.png", "b.png"], &[square(), square()], MemoryStore::new());
    assert!(controller.pointer_down(PointerTarget::Image("a.png")));
    controller.key_down(Key::Space);
    assert!(!controller.pointer_down(PointerTarget::Background));
    assert!(!controller.pointer_down(PointerTarget::Image("b.png")));
    assert_eq!(controller.state(), InteractionState::DraggingImage);

    controller.pointer_move(64.0, 0.0);
    assert_eq!(position(&controller, "a.png"), (64.0, 0.0));
    assert_eq!(position(&controller, "b.png"), (160.0, 0.0));
    assert_eq!((controller.viewport().x, controller.viewport().y), (144.0, 64.0));
}

#[test]
fn test_release_then_new_drag_starts_from_current_state() {
    let mut controller = laid_out(&["a.png"], &[square()], MemoryStore::new());
    controller.pointer_down(PointerTarget::Image("a.png"));
    controller.pointer_move(64.0, 0.0);
    controller.pointer_up();

    controller.pointer_down(PointerTarget::Image("a.png"));
    controller.pointer_move(0.0, 32.0);
    assert_eq!(position(&controller, "a.png"), (64.0, 32.0));
}

#[test]
fn test_persisted_layout_survives_reconstruction() {
    let keys = StorageKeys::new(&WidgetConfig::default().storage_namespace);
    let mut store = MemoryStore::new();
    write_number(&mut store, &keys.image("b.png", ImageField::X), 320.0);
    write_number(&mut store, &keys.image("b.png", ImageField::Y), -64.0);

    let controller = laid_out(&["a.png", "b.png"], &[square(), square()], store);
    assert_eq!(position(&controller, "a.png"), (0.0, 0.0));
    assert_eq!(position(&controller, "b.png"), (320.0, -64.0));
    // bounding box 0..448 x -64..128
    assert_eq!((controller.viewport().x, controller.viewport().y), (224.0, 32.0));
}

#[test]
fn test_garbage_persisted_values_fall_back_to_defaults() {
    let keys = StorageKeys::new(&WidgetConfig::default().storage_namespace);
    let mut store = MemoryStore::new();
    store.set(&keys.image("a.png", ImageField::X), "wide").unwrap();
    store.set(&keys.viewport(ViewportField::Zoom), "NaN").unwrap();
    store.set(&keys.viewport(ViewportField::X), "3").unwrap();

    let controller = laid_out(&["a.png"], &[square()], store);
    assert_eq!(position(&controller, "a.png"), (0.0, 0.0));
    assert_eq!(controller.viewport().zoom(), 0.0);
    assert_eq!(controller.viewport().x, 3.0);
}

#[test]
fn test_export_seeds_an_equivalent_layout() {
    let ids = ["a.png", "b.png", "c.png"];
    let sizes = [
        IntrinsicSize::new(1920, 1080),
        IntrinsicSize::new(600, 800),
        IntrinsicSize::new(0, 50),
    ];
    let config = WidgetConfig::default()
        .with_image_width(100.0)
        .with_grid_spacing(20.0)
        .with_zoom_increment(0.25);
    let mut original =
        InteractionController::new(specs(&ids), config, Box::new(MemoryStore::new())).unwrap();
    for (id, size) in ids.iter().zip(sizes) {
        original.record_intrinsic(id, size);
    }
    original.initialize_layout();
    original.pointer_down(PointerTarget::Image("b.png"));
    original.pointer_move(45.0, 90.0);
    original.pointer_up();
    original.wheel(-1.0);
    let snapshot = original.export();

    let config = snapshot.config(&WidgetConfig::default());
    let mut store = MemoryStore::new();
    snapshot.seed_store(&mut store, &StorageKeys::new(&config.storage_namespace));
    let mut restored = InteractionController::new(specs(&ids), config, Box::new(store)).unwrap();
    for (id, size) in ids.iter().zip(sizes) {
        restored.record_intrinsic(id, size);
    }
    restored.initialize_layout();

    assert_eq!(restored.export(), snapshot);
    assert_eq!(snapshot.zoom, 0.25);
    assert_eq!(snapshot.images[2].height, Some(100.0));
}

#[test]
fn test_store_failures_do_not_interrupt_interaction() {
    let mut controller = laid_out(&["a.png"], &[square()], MemoryStore::new().failing());
    controller.pointer_down(PointerTarget::Background);
    controller.pointer_move(-16.0, 0.0);
    controller.pointer_up();
    assert_eq!(controller.viewport().x, 80.0);
    assert!(controller.store().get(&controller.storage_keys().viewport(ViewportField::X)).is_none());
}
