//! Swap pipeline: classify, group, place

use tracing::{debug, info};

use super::classify::classify;
use super::config::SwapConfig;
use super::error::SwapError;
use super::group::group;
use super::place::place;
use super::types::{Axis, BoundingBox, Node, SwapReport};

/// Bounding box of the first selected node, which anchors the new layout
pub fn reference_viewport(selection: &[Node]) -> Result<BoundingBox, SwapError> {
    let first = selection
        .first()
        .ok_or_else(|| SwapError::missing_viewport("selection is empty"))?;
    first.absolute_bounding_box().ok_or_else(|| {
        SwapError::missing_viewport(format!("node '{}' has no bounding box", first.id))
    })
}

/// Re-flow `selection` so its headers lie along `axis`.
///
/// Positions are rewritten in place. If the selection has no reference
/// viewport nothing is touched and [`SwapError::MissingViewport`] is returned.
pub fn swap_orientation(
    selection: &mut [Node],
    axis: Axis,
    config: &SwapConfig,
) -> Result<SwapReport, SwapError> {
    let viewport = reference_viewport(selection)?;
    let origin = viewport.origin();
    debug!(%axis, x = origin.x, y = origin.y, "reference viewport");

    let classification = classify(
        selection,
        axis,
        axis.coord(origin),
        config.header_tolerance,
    );

    let grouping = group(
        selection,
        &classification.header_original_positions,
        &classification.content,
        axis,
        config.header_tolerance,
        config.grouping,
    );

    let moved = place(
        selection,
        &classification.headers,
        &grouping.groups,
        axis,
        origin,
        config.node_gap,
        config.content_flow,
    );

    info!(
        %axis,
        headers = classification.headers.len(),
        content = classification.content.len(),
        unmatched = grouping.unmatched.len(),
        moved,
        "orientation swapped"
    );

    Ok(SwapReport {
        axis,
        headers: classification.headers,
        content: classification.content,
        unmatched: grouping.unmatched,
        multi_grouped: grouping.multi_grouped,
        moved,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::config::ContentFlow;
    use crate::layout::lint::{check, LintCategory};
    use crate::layout::types::{NodeKind, Point, Size};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_selection_is_missing_viewport() {
        let err = swap_orientation(&mut [], Axis::Horizontal, &SwapConfig::default()).unwrap_err();
        assert!(matches!(err, SwapError::MissingViewport { .. }));
    }

    #[test]
    fn test_connector_first_is_missing_viewport() {
        let mut sel = vec![
            Node::new(
                "line",
                NodeKind::Connector,
                Point::new(0.0, 0.0),
                Size::new(0.0, 0.0),
            ),
            Node::sticky("s", 300.0, 300.0, 100.0, 100.0),
        ];
        let before = sel.clone();
        let err = swap_orientation(&mut sel, Axis::Vertical, &SwapConfig::default()).unwrap_err();
        assert!(matches!(err, SwapError::MissingViewport { .. }));
        assert_eq!(sel, before);
    }

    #[test]
    fn test_row_headers_become_column_headers() {
        // Headers stacked in a column at x=0, content to their right.
        let mut sel = vec![
            Node::sticky("todo", 0.0, 0.0, 100.0, 100.0),
            Node::sticky("doing", 0.0, 150.0, 100.0, 100.0),
            Node::sticky("t1", 150.0, 0.0, 100.0, 100.0),
            Node::sticky("t2", 300.0, 0.0, 100.0, 100.0),
            Node::sticky("d1", 150.0, 150.0, 100.0, 100.0),
        ];
        let report = swap_orientation(&mut sel, Axis::Horizontal, &SwapConfig::default()).unwrap();

        assert_eq!(report.headers, vec![0, 1]);
        assert_eq!(report.content, vec![2, 3, 4]);
        assert_eq!(report.moved, 5);
        assert_eq!(sel[0].position, Point::new(0.0, 0.0));
        assert_eq!(sel[1].position, Point::new(145.0, 0.0));
        assert_eq!(sel[2].position, Point::new(145.0, 0.0));
        assert_eq!(sel[3].position, Point::new(290.0, 0.0));
        assert_eq!(sel[4].position, Point::new(290.0, 0.0));

        // Along flow keeps content on the header line, so t1 shares the slot of
        // the next header and d1 shares t2's. ContentFlow::Across avoids this.
        let overlaps = check(&sel, &report)
            .into_iter()
            .filter(|w| w.category == LintCategory::Overlap)
            .count();
        assert_eq!(overlaps, 2);
    }

    #[test]
    fn test_across_flow_keeps_content_off_header_line() {
        let mut sel = vec![
            Node::sticky("todo", 0.0, 0.0, 100.0, 100.0),
            Node::sticky("doing", 0.0, 150.0, 100.0, 100.0),
            Node::sticky("t1", 150.0, 0.0, 100.0, 100.0),
            Node::sticky("d1", 150.0, 150.0, 100.0, 100.0),
        ];
        let config = SwapConfig::new().with_content_flow(ContentFlow::Across);
        let report = swap_orientation(&mut sel, Axis::Horizontal, &config).unwrap();

        assert_eq!(sel[2].position, Point::new(0.0, 145.0));
        assert_eq!(sel[3].position, Point::new(145.0, 145.0));
        assert!(check(&sel, &report).is_empty());
    }

    #[test]
    fn test_viewport_from_first_node_even_if_not_sticky() {
        let mut sel = vec![
            Node::new(
                "frame",
                NodeKind::Shape,
                Point::new(5.0, 5.0),
                Size::new(10.0, 10.0),
            ),
            Node::sticky("h", 8.0, 90.0, 50.0, 50.0),
        ];
        let report = swap_orientation(&mut sel, Axis::Horizontal, &SwapConfig::default()).unwrap();
        assert_eq!(report.headers, vec![1]);
        assert_eq!(sel[0].position, Point::new(5.0, 5.0));
        assert_eq!(sel[1].position, Point::new(5.0, 5.0));
    }
}
