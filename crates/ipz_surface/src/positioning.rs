//! Container positioning modes and how the widget adapts to each.

use crate::SurfaceError;

/// Fraction of the host viewport used for a statically positioned container
/// that reports no size of its own.
pub const DEFAULT_SIZE_FRACTION: f64 = 0.5;

/// Positioning mode of the container element, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Positioning {
    Static,
    Relative,
    Absolute,
    Fixed,
    Sticky,
    Other(String),
}

/// How the container must be adjusted before images can be placed in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adaptation {
    /// Pin all four edges to the host viewport (fixed/absolute containers)
    StretchToViewport,
    /// Use the container as it is (relative containers)
    KeepAsIs,
    /// Make the container relative with hidden overflow, and give any zero
    /// dimension a default of [`DEFAULT_SIZE_FRACTION`] of the host viewport
    MakeRelative,
}

impl Positioning {
    /// Parse a CSS-like positioning value. An empty value means static.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "static" => Positioning::Static,
            "relative" => Positioning::Relative,
            "absolute" => Positioning::Absolute,
            "fixed" => Positioning::Fixed,
            "sticky" => Positioning::Sticky,
            other => Positioning::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Positioning::Static => "static",
            Positioning::Relative => "relative",
            Positioning::Absolute => "absolute",
            Positioning::Fixed => "fixed",
            Positioning::Sticky => "sticky",
            Positioning::Other(name) => name,
        }
    }

    /// Decide how to adapt a container with this positioning.
    pub fn adaptation(&self) -> Result<Adaptation, SurfaceError> {
        match self {
            Positioning::Fixed | Positioning::Absolute => Ok(Adaptation::StretchToViewport),
            Positioning::Relative => Ok(Adaptation::KeepAsIs),
            Positioning::Static => Ok(Adaptation::MakeRelative),
            Positioning::Sticky | Positioning::Other(_) => {
                Err(SurfaceError::unsupported_positioning(self.name()))
            }
        }
    }
}
