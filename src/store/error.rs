use thiserror::Error;

/// Errors raised by a layout store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error from a file-backed store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The store file could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Backend-specific failure (localStorage in WASM, quota, ...)
    #[error("Storage error: {0}")]
    Storage(String),
}
