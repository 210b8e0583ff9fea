//! Error types for the Quire domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for all Quire operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Editor errors ---
    #[error("Editor error: {0}")]
    Editor(#[from] EditorError),

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

#[derive(Debug, Error)]
pub enum EditorError {
    /// The view buffer refused a write. Never retried.
    #[error("Failed to write {stage} to the editor view buffer: {source}")]
    Construction {
        stage: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render field {field}: {reason}")]
    Render { field: String, reason: String },

    #[error("Content is not mergeable: {0}")]
    NotMergeable(String),
}

impl EditorError {
    /// Whether this is a buffer construction failure.
    pub fn is_construction(&self) -> bool {
        matches!(self, Self::Construction { .. })
    }
}

impl Error {
    /// Whether this error wraps an editor construction failure.
    pub fn is_construction(&self) -> bool {
        matches!(self, Self::Editor(e) if e.is_construction())
    }
}
