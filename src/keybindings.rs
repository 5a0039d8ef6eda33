//! Keyboard commands and drag modifiers.
//!
//! Commands fire on character key presses; the two modifiers are tracked
//! from key down/up and decide which drag a pointer press starts.

use ipz_surface::Key;
use serde::{Deserialize, Serialize};

/// A discrete keyboard command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ZoomIn,
    ZoomOut,
    ResetZoom,
    /// Forget the persisted layout (behind a confirmation)
    ClearCache,
}

/// A held key that overrides what a pointer press does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    /// Pan the viewport wherever the press lands
    Pan,
    /// Drag to change the zoom level wherever the press lands
    Zoom,
}

/// Keybinding configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub zoom_in: Vec<char>,
    pub zoom_out: Vec<char>,
    pub reset_zoom: Vec<char>,
    pub clear_cache: Vec<char>,
    pub pan_modifier: Key,
    pub zoom_modifier: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            // '=' shares a key with '+' on most layouts
            zoom_in: vec!['+', '='],
            zoom_out: vec!['-'],
            reset_zoom: vec!['0'],
            clear_cache: vec!['x'],
            pan_modifier: Key::Space,
            zoom_modifier: Key::Control,
        }
    }
}

impl KeyBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the command that corresponds to a key press, if any.
    pub fn command_for_key(&self, key: Key) -> Option<Command> {
        let Key::Char(c) = key else {
            return None;
        };
        if self.zoom_in.contains(&c) {
            Some(Command::ZoomIn)
        } else if self.zoom_out.contains(&c) {
            Some(Command::ZoomOut)
        } else if self.reset_zoom.contains(&c) {
            Some(Command::ResetZoom)
        } else if self.clear_cache.contains(&c) {
            Some(Command::ClearCache)
        } else {
            None
        }
    }

    /// Get the modifier a key controls, if any.
    pub fn modifier_for_key(&self, key: Key) -> Option<Modifier> {
        if key == self.pan_modifier {
            Some(Modifier::Pan)
        } else if key == self.zoom_modifier {
            Some(Modifier::Zoom)
        } else {
            None
        }
    }
}
