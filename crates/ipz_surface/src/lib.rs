//! ipz_surface - the host surface boundary for the image panner/zoomer.
//!
//! The engine never touches a rendering toolkit directly. Everything it needs
//! from the host (container size, positioning mode, element creation,
//! placement and the element-to-identity mapping used for hit-testing) goes
//! through the [`Surface`] trait defined here, together with the input event
//! vocabulary the host translates its native events into.

mod error;
mod event;
mod handle;
mod headless;
mod positioning;
mod rect;
mod surface;

pub use error::SurfaceError;
pub use event::{Event, EventStatus, EventTarget, Key};
pub use handle::{ElementHandle, HandleMap};
pub use headless::{HeadlessElement, HeadlessSurface};
pub use positioning::{Adaptation, Positioning, DEFAULT_SIZE_FRACTION};
pub use rect::Rect;
pub use surface::Surface;
