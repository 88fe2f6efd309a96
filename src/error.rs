//! Error types for loading and saving canvas documents

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("Failed to read canvas: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse canvas JSON: {0}")]
    Json(#[from] serde_json::Error),
}
