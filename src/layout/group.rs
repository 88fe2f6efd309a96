//! Content-to-header grouping.
//!
//! Membership is decided against the headers' original positions, on the axis
//! orthogonal to the swap axis, so header placement order cannot affect it.

use tracing::warn;

use super::classify::within_band;
use super::config::GroupingPolicy;
use super::types::{Axis, Node, Point};

/// Content groups, one per header, plus the ambiguity found while grouping
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Grouping {
    /// `groups[i]` holds selection indices of content bound to header `i`
    pub groups: Vec<Vec<usize>>,
    /// Content that matched no header
    pub unmatched: Vec<usize>,
    /// Content that matched more than one header
    pub multi_grouped: Vec<usize>,
}

/// Assign each content node to the header(s) whose orthogonal band contains it.
///
/// With [`GroupingPolicy::AllMatches`] a node joins every group it matches;
/// [`GroupingPolicy::FirstMatch`] keeps it only in the earliest one.
pub fn group(
    selection: &[Node],
    header_original_positions: &[Point],
    content: &[usize],
    axis: Axis,
    tolerance: f64,
    policy: GroupingPolicy,
) -> Grouping {
    let across = axis.opposite();
    let mut grouping = Grouping {
        groups: vec![Vec::new(); header_original_positions.len()],
        ..Grouping::default()
    };

    for &index in content {
        let node = &selection[index];
        let coord = across.coord(node.position);
        let mut matches = 0usize;

        for (header, original) in header_original_positions.iter().enumerate() {
            if !within_band(coord, across.coord(*original), tolerance) {
                continue;
            }
            matches += 1;
            if matches == 1 || policy == GroupingPolicy::AllMatches {
                grouping.groups[header].push(index);
            }
        }

        match matches {
            0 => {
                warn!(id = %node.id, text = %node.text, "content matches no header, leaving in place");
                grouping.unmatched.push(index);
            }
            1 => {}
            n => {
                warn!(id = %node.id, text = %node.text, matches = n, "content matches several headers");
                grouping.multi_grouped.push(index);
            }
        }
    }

    grouping
}
