use thiserror::Error;

/// Errors raised while adapting to the host environment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The container uses a positioning mode the engine cannot adapt to
    #[error("a '{mode}' positioned container element is not supported")]
    UnsupportedPositioning {
        /// The positioning mode reported by the host
        mode: String,
    },
}

impl SurfaceError {
    /// Create an unsupported positioning error.
    pub fn unsupported_positioning(mode: impl Into<String>) -> Self {
        Self::UnsupportedPositioning { mode: mode.into() }
    }
}
