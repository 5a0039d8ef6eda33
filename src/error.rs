//! Error types for widget construction and activation.

use ipz_surface::SurfaceError;
use thiserror::Error;

/// Errors that make a widget unusable at construction time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConstructionError {
    /// No images were supplied
    #[error("No images specified")]
    NoImages,

    /// An image descriptor carried an empty identity
    #[error("Image descriptor at index {index} has an empty identity")]
    EmptyIdentity {
        /// Position of the descriptor in the supplied list
        index: usize,
    },

    /// Two descriptors share one identity, so their persisted keys would collide
    #[error("Duplicate image identity '{id}'")]
    DuplicateIdentity {
        /// The repeated identity
        id: String,
    },

    /// A configuration value is out of range
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the problem
        message: String,
    },
}

impl ConstructionError {
    /// Create an invalid configuration error with a message.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a duplicate identity error.
    pub fn duplicate_identity(id: impl Into<String>) -> Self {
        Self::DuplicateIdentity { id: id.into() }
    }
}

/// Errors surfaced by the widget façade.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WidgetError {
    /// The widget could not be constructed
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    /// The host environment is not supported
    #[error("Unsupported environment: {0}")]
    Surface(#[from] SurfaceError),
}
