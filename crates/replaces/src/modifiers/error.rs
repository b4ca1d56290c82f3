use thiserror::Error;

use crate::types::NodeKind;

/// An error raised by a modifier.
#[derive(Debug, Error)]
pub enum ModifierError {
    /// The value has no display string to escape (null or absent).
    #[error("cannot convert {kind} to a string")]
    NotStringifiable { kind: NodeKind },

    /// Strict serialization met a container already being serialized.
    #[error("converting circular structure to JSON at {path}")]
    Circular { path: String },

    /// Nesting exceeded the depth limit.
    #[error("maximum nesting depth exceeded")]
    MaxDepthExceeded,

    /// The JSON encoder failed for another reason.
    #[error("JSON serialization failed: {0}")]
    Json(#[source] serde_json::Error),
}
