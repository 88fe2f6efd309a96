//! In-memory canvas document
//!
//! Stands in for a live host: holds the selection and counts session closes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CanvasError;
use crate::host::Host;
use crate::layout::Node;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub selection: Vec<Node>,
    #[serde(skip)]
    closed: usize,
}

impl Canvas {
    pub fn new(selection: Vec<Node>) -> Self {
        Self {
            selection,
            closed: 0,
        }
    }

    /// Load a canvas from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, CanvasError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load a canvas from a JSON string
    pub fn from_json(content: &str) -> Result<Self, CanvasError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Serialize the canvas to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, CanvasError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// How many times the session has been closed
    pub fn closed_count(&self) -> usize {
        self.closed
    }
}

impl Host for Canvas {
    fn selection_mut(&mut self) -> &mut [Node] {
        &mut self.selection
    }

    fn close_session(&mut self) {
        self.closed += 1;
    }
}
