//! Lint checks for layout defects left behind by a swap.
//!
//! Runs after placement to flag sticky notes that now overlap and content
//! that grouping could not bind to exactly one header.

use std::fmt;

use super::types::{Node, SwapReport};

/// A lint warning about a layout defect
#[derive(Debug)]
pub struct LintWarning {
    pub category: LintCategory,
    pub message: String,
}

/// Category of lint defect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCategory {
    Overlap,
    Unmatched,
    MultiGroup,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::Overlap => write!(f, "overlap"),
            LintCategory::Unmatched => write!(f, "unmatched"),
            LintCategory::MultiGroup => write!(f, "multi-group"),
        }
    }
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.message)
    }
}

/// Run all lint checks on a swapped selection.
pub fn check(selection: &[Node], report: &SwapReport) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    check_grouping(selection, report, &mut warnings);
    check_overlaps(selection, &mut warnings);
    warnings
}

/// Display name for a node: its text if any, else its id.
fn display_name(node: &Node) -> String {
    if node.text.is_empty() {
        format!("'{}'", node.id)
    } else {
        format!("'{}' ({})", node.text, node.id)
    }
}

fn check_grouping(selection: &[Node], report: &SwapReport, warnings: &mut Vec<LintWarning>) {
    for &index in &report.unmatched {
        warnings.push(LintWarning {
            category: LintCategory::Unmatched,
            message: format!(
                "{} is not aligned with any header and was left in place",
                display_name(&selection[index])
            ),
        });
    }
    for &index in &report.multi_grouped {
        warnings.push(LintWarning {
            category: LintCategory::MultiGroup,
            message: format!(
                "{} is aligned with more than one header",
                display_name(&selection[index])
            ),
        });
    }
}

fn check_overlaps(selection: &[Node], warnings: &mut Vec<LintWarning>) {
    let boxes: Vec<_> = selection
        .iter()
        .filter(|n| n.is_sticky())
        .filter_map(|n| n.absolute_bounding_box().map(|b| (n, b)))
        .collect();

    for (i, (a, a_box)) in boxes.iter().enumerate() {
        for (b, b_box) in &boxes[i + 1..] {
            if a_box.intersects(b_box) {
                warnings.push(LintWarning {
                    category: LintCategory::Overlap,
                    message: format!("{} overlaps {}", display_name(a), display_name(b)),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::types::Axis;

    fn report() -> SwapReport {
        SwapReport {
            axis: Axis::Horizontal,
            headers: vec![0],
            content: vec![1, 2],
            unmatched: vec![2],
            multi_grouped: vec![],
            moved: 2,
        }
    }

    #[test]
    fn test_detects_overlap() {
        let sel = vec![
            Node::sticky("a", 0.0, 0.0, 100.0, 100.0).with_text("Todo"),
            Node::sticky("b", 50.0, 50.0, 100.0, 100.0),
            Node::sticky("c", 500.0, 500.0, 100.0, 100.0),
        ];
        let warnings = check(&sel, &report());
        let overlaps: Vec<_> = warnings
            .iter()
            .filter(|w| w.category == LintCategory::Overlap)
            .collect();
        assert_eq!(overlaps.len(), 1);
        assert!(overlaps[0].message.contains("'Todo' (a)"));
    }

    #[test]
    fn test_reports_unmatched() {
        let sel = vec![
            Node::sticky("a", 0.0, 0.0, 10.0, 10.0),
            Node::sticky("b", 100.0, 0.0, 10.0, 10.0),
            Node::sticky("c", 200.0, 0.0, 10.0, 10.0),
        ];
        let warnings = check(&sel, &report());
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0].to_string(),
            "unmatched: 'c' is not aligned with any header and was left in place"
        );
    }

    #[test]
    fn test_reports_multi_group() {
        let sel = vec![
            Node::sticky("h0", 0.0, 0.0, 100.0, 50.0),
            Node::sticky("h1", 145.0, 0.0, 100.0, 50.0),
            Node::sticky("s", 290.0, 0.0, 100.0, 50.0).with_text("Shared"),
        ];
        let report = SwapReport {
            axis: Axis::Horizontal,
            headers: vec![0, 1],
            content: vec![2],
            unmatched: vec![],
            multi_grouped: vec![2],
            moved: 4,
        };
        let warnings = check(&sel, &report);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].category, LintCategory::MultiGroup);
        assert_eq!(
            warnings[0].to_string(),
            "multi-group: 'Shared' (s) is aligned with more than one header"
        );
    }
}
