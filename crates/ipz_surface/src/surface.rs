use crate::{Adaptation, ElementHandle, Positioning, Rect};

/// The host rendering surface the widget draws into.
///
/// Implementations own element creation and styling; the widget only asks
/// for sizes, hands out placements, and resolves hit-test targets back to
/// image identities.
pub trait Surface {
    /// Positioning mode of the container element.
    fn positioning(&self) -> Positioning;

    /// Adjust the container so images can be placed in it.
    fn adapt(&mut self, adaptation: Adaptation);

    /// Current content-box size of the container in pixels (width, height).
    fn content_size(&self) -> (f64, f64);

    /// Remove every element previously attached to the container.
    fn clear(&mut self);

    /// Create a hidden element for an image, with an optional label shown
    /// above it, and return its handle.
    fn attach_image(&mut self, identity: &str, label: Option<&str>) -> ElementHandle;

    /// Image identity an element handle belongs to.
    fn identity_of(&self, handle: ElementHandle) -> Option<&str>;

    /// Make an attached image visible once it has loaded.
    fn show_image(&mut self, handle: ElementHandle);

    /// Position and size an attached image.
    fn place(&mut self, handle: ElementHandle, rect: Rect);

    /// Ask the user to confirm a destructive action.
    fn confirm(&mut self, prompt: &str) -> bool;
}
