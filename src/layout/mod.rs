//! Swap engine for re-flowing a selection of sticky notes
//!
//! This module takes a selection, classifies its sticky notes into headers and
//! content, binds content to headers, and writes the new positions back into
//! the nodes.

pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod group;
pub mod lint;
pub mod place;
pub mod types;

pub use classify::{classify, Classification};
pub use config::{
    ConfigError, ContentFlow, GroupingPolicy, SwapConfig, HEADER_TOLERANCE_UNITS, NODE_GAP_UNITS,
};
pub use engine::{reference_viewport, swap_orientation};
pub use error::SwapError;
pub use group::{group, Grouping};
pub use place::place;
pub use types::*;
