//! Inbound messages from the UI surface
//!
//! The only recognized message is `{"type": "orientation-swap", "orientation": "columns" | "rows"}`.

use serde::{Deserialize, Serialize};

use crate::layout::{Axis, SwapError};

/// Message type that requests a swap
pub const ORIENTATION_SWAP: &str = "orientation-swap";

/// A message posted by the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub orientation: String,
}

/// Target orientation chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Headers end up side by side, spread along x
    Columns,
    /// Headers end up stacked, spread along y
    Rows,
}

impl Orientation {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "columns" => Some(Orientation::Columns),
            "rows" => Some(Orientation::Rows),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Columns => "columns",
            Orientation::Rows => "rows",
        }
    }

    /// Axis the headers are laid out along
    pub fn axis(self) -> Axis {
        match self {
            Orientation::Columns => Axis::Horizontal,
            Orientation::Rows => Axis::Vertical,
        }
    }
}

impl Message {
    /// Build an orientation-swap message
    pub fn orientation_swap(orientation: Orientation) -> Self {
        Self {
            kind: ORIENTATION_SWAP.to_string(),
            orientation: orientation.as_str().to_string(),
        }
    }

    /// Decode a message from JSON
    pub fn parse(raw: &str) -> Result<Self, SwapError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The swap axis this message asks for
    pub fn axis(&self) -> Result<Axis, SwapError> {
        if self.kind != ORIENTATION_SWAP {
            return Err(SwapError::unrecognized(&self.kind, &self.orientation));
        }
        Orientation::parse(&self.orientation)
            .map(Orientation::axis)
            .ok_or_else(|| SwapError::unrecognized(&self.kind, &self.orientation))
    }
}
