//! Header/content classification.
//!
//! A sticky node whose coordinate along the swap axis falls within the
//! tolerance band around the reference origin is a header; every other sticky
//! node is content. Non-sticky nodes are dropped from both lists.

use tracing::debug;

use super::types::{Axis, Node, Point};

/// Result of classifying a selection
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Classification {
    /// Selection indices of header nodes, in selection order
    pub headers: Vec<usize>,
    /// Header positions captured before any node moves, parallel to `headers`
    pub header_original_positions: Vec<Point>,
    /// Selection indices of content nodes, in selection order
    pub content: Vec<usize>,
}

impl Classification {
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.content.is_empty()
    }
}

/// Closed band membership test: `|value - center| <= tolerance`
pub(crate) fn within_band(value: f64, center: f64, tolerance: f64) -> bool {
    value >= center - tolerance && value <= center + tolerance
}

/// Partition the sticky nodes in `selection` into headers and content.
pub fn classify(selection: &[Node], axis: Axis, origin: f64, tolerance: f64) -> Classification {
    let mut result = Classification::default();

    for (index, node) in selection.iter().enumerate() {
        if !node.is_sticky() {
            continue;
        }
        debug!(
            id = %node.id,
            text = %node.text,
            x = node.position.x,
            y = node.position.y,
            "classifying sticky"
        );
        if within_band(axis.coord(node.position), origin, tolerance) {
            result.headers.push(index);
            result.header_original_positions.push(node.position);
        } else {
            result.content.push(index);
        }
    }

    result
}
