//! IPZ - Image Panner/Zoomer
//!
//! Lays out a collection of labeled images on a pannable, zoomable canvas,
//! lets the user pan the view, drag single images or drag to zoom, and
//! persists the resulting layout per image identity.

pub mod config;
pub mod constants;
pub mod controller;
pub mod drag;
pub mod error;
pub mod keybindings;
pub mod layout;
pub mod model;
pub mod snapshot;
pub mod store;
pub mod widget;
pub mod zoom_math;

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(not(target_arch = "wasm32"))]
pub mod probe;

#[cfg(test)]
mod tests;

pub use config::{Settings, WidgetConfig};
pub use controller::{InteractionController, InteractionState, PointerTarget};
pub use error::{ConstructionError, WidgetError};
pub use model::{ImageItem, ImageSpec, IntrinsicSize, Viewport};
pub use snapshot::LayoutSnapshot;
pub use widget::ImagePannerZoomer;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
