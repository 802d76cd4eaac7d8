//! Error types for strucad operations

use crate::types::Handle;
use std::io;
use thiserror::Error;

/// Main error type for strucad operations
#[derive(Debug, Error)]
pub enum DraftError {
    /// IO error occurred during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP transport error talking to the calculation backend
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Referenced layer does not exist in the drawing
    #[error("Layer not found: {0}")]
    LayerNotFound(String),

    /// A layer with the same name already exists
    #[error("Layer already exists: {0}")]
    DuplicateLayer(String),

    /// The operation targets an entity on a locked layer
    #[error("Layer is locked: {0}")]
    LayerLocked(String),

    /// Layer "0" cannot be removed or renamed
    #[error("The standard layer \"0\" cannot be modified")]
    StandardLayerImmutable,

    /// Entity not found in the drawing
    #[error("Entity not found: handle {0}")]
    EntityNotFound(Handle),

    /// A geometric input is out of range or inconsistent
    #[error("Invalid geometry for '{field}': {reason}")]
    InvalidGeometry { field: String, reason: String },

    /// The calculation backend rejected or failed the request
    #[error("Backend error from '{endpoint}': {message}")]
    Backend { endpoint: String, message: String },

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

impl DraftError {
    /// Shorthand for an invalid-geometry error
    pub fn invalid_geometry(field: impl Into<String>, reason: impl Into<String>) -> Self {
        DraftError::InvalidGeometry {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for strucad operations
pub type Result<T> = std::result::Result<T, DraftError>;

impl From<String> for DraftError {
    fn from(s: String) -> Self {
        DraftError::Custom(s)
    }
}

impl From<&str> for DraftError {
    fn from(s: &str) -> Self {
        DraftError::Custom(s.to_string())
    }
}
