//! Data model: the viewport and the images laid out under it.

mod image;
mod viewport;

pub use image::{Geometry, ImageDescriptor, ImageItem, ImageSpec, IntrinsicSize};
pub use viewport::Viewport;
