//! Behavioural tests across the controller, layout pass and widget.
//!
//! Property checks iterate over fixed sample grids.

mod properties;
mod scenarios;

use crate::config::WidgetConfig;
use crate::controller::InteractionController;
use crate::model::{ImageSpec, IntrinsicSize};
use crate::store::MemoryStore;

/// Sample values covering negatives, halves and large magnitudes.
pub(crate) const SAMPLES: [f64; 14] = [
    0.0, 0.5, -0.5, 1.0, -1.0, 15.999, 16.0, -16.0, 47.25, -47.25, 1000.0, -1234.5, 4.0, -4.0001,
];

pub(crate) fn specs(ids: &[&str]) -> Vec<ImageSpec> {
    ids.iter().map(|id| ImageSpec::from(*id)).collect()
}

/// Controller over a fresh store with every image loaded and laid out.
pub(crate) fn laid_out(ids: &[&str], sizes: &[IntrinsicSize], store: MemoryStore) -> InteractionController {
    let mut controller =
        InteractionController::new(specs(ids), WidgetConfig::default(), Box::new(store)).unwrap();
    for (id, size) in ids.iter().zip(sizes) {
        controller.record_intrinsic(id, *size);
    }
    assert!(controller.initialize_layout());
    controller
}
