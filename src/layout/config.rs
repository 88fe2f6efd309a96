//! Configuration for the swap engine

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Half-width of the band used to match a coordinate against a reference
pub const HEADER_TOLERANCE_UNITS: f64 = 10.0;

/// Gap between adjacent node edges along the layout axis
pub const NODE_GAP_UNITS: f64 = 45.0;

/// Errors that can occur when loading a swap configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid value for '{key}': {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

/// How content nodes that match several headers are grouped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupingPolicy {
    /// Join every matching group
    #[default]
    AllMatches,
    /// Join only the first matching group in header order
    FirstMatch,
}

/// Direction content nodes are spread relative to their header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentFlow {
    /// Along the header axis, on the header's line
    #[default]
    Along,
    /// Along the orthogonal axis, stacked away from the header
    Across,
}

/// Configuration options for a swap
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwapConfig {
    /// Tolerance band half-width for header and group matching
    pub header_tolerance: f64,

    /// Gap added after each node's extent when spacing nodes
    pub node_gap: f64,

    pub grouping: GroupingPolicy,

    pub content_flow: ContentFlow,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            header_tolerance: HEADER_TOLERANCE_UNITS,
            node_gap: NODE_GAP_UNITS,
            grouping: GroupingPolicy::default(),
            content_flow: ContentFlow::default(),
        }
    }
}

impl SwapConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: SwapConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.header_tolerance.is_finite() || self.header_tolerance < 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "header_tolerance",
                reason: format!("expected a non-negative number, got {}", self.header_tolerance),
            });
        }
        if !self.node_gap.is_finite() {
            return Err(ConfigError::InvalidValue {
                key: "node_gap",
                reason: format!("expected a finite number, got {}", self.node_gap),
            });
        }
        Ok(())
    }

    /// Set the tolerance band half-width. Negative or NaN values clamp to zero.
    pub fn with_header_tolerance(mut self, tolerance: f64) -> Self {
        self.header_tolerance = tolerance.max(0.0);
        self
    }

    /// Set the gap between nodes
    pub fn with_node_gap(mut self, gap: f64) -> Self {
        self.node_gap = gap;
        self
    }

    /// Set the grouping policy
    pub fn with_grouping(mut self, grouping: GroupingPolicy) -> Self {
        self.grouping = grouping;
        self
    }

    /// Set the content flow direction
    pub fn with_content_flow(mut self, flow: ContentFlow) -> Self {
        self.content_flow = flow;
        self
    }
}
