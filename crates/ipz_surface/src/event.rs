use serde::{Deserialize, Serialize};

use crate::ElementHandle;

/// Input events the host delivers to the widget.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Pointer button pressed.
    PointerPressed { target: EventTarget },
    /// Pointer button released.
    PointerReleased,
    /// Pointer moved by a relative amount since the previous move.
    PointerMoved { movement_x: f64, movement_y: f64 },
    /// Wheel scrolled. Negative `delta_y` scrolls up.
    Wheel { delta_y: f64 },
    /// Key went down (includes keys the host reserves for shortcuts).
    KeyDown { key: Key },
    /// Key went up.
    KeyUp { key: Key },
    /// Character-producing key press (excludes host shortcuts).
    KeyPress { key: Key },
    /// The host window was resized.
    Resized,
    /// The host window lost focus.
    Blurred,
}

/// What a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTarget {
    /// The container background itself
    Container,
    /// An element the widget attached through the surface
    Element(ElementHandle),
    /// Anything outside the widget
    Outside,
}

/// Keyboard keys (only what the engine distinguishes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    Char(char),
    Space,
    Control,
    Other,
}

/// Whether the widget handled an event, i.e. whether the host should
/// suppress its default action for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Consumed,
    Ignored,
}

impl EventStatus {
    /// Map a handled flag to a status.
    pub fn from_consumed(consumed: bool) -> Self {
        if consumed {
            EventStatus::Consumed
        } else {
            EventStatus::Ignored
        }
    }
}
