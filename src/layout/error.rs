//! Error types for the swap engine

use thiserror::Error;

/// Reasons a swap request ends without moving anything
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SwapError {
    /// The first selected node has no bounding box to anchor the layout
    #[error("no reference viewport: {reason}")]
    MissingViewport { reason: String },

    /// The message type or orientation is not one we handle
    #[error("unrecognized message type '{kind}' with orientation '{orientation}'")]
    UnrecognizedMessage { kind: String, orientation: String },

    /// The message could not be decoded at all
    #[error("malformed message: {0}")]
    MalformedMessage(String),
}

impl SwapError {
    pub fn missing_viewport(reason: impl Into<String>) -> Self {
        Self::MissingViewport {
            reason: reason.into(),
        }
    }

    pub fn unrecognized(kind: impl Into<String>, orientation: impl Into<String>) -> Self {
        Self::UnrecognizedMessage {
            kind: kind.into(),
            orientation: orientation.into(),
        }
    }
}

impl From<serde_json::Error> for SwapError {
    fn from(err: serde_json::Error) -> Self {
        SwapError::MalformedMessage(err.to_string())
    }
}
