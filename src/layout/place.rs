//! Final placement of headers and their content.
//!
//! Pure arithmetic over sizes plus direct position writes. Headers are laid
//! end to end along the swap axis on a single line through the origin; each
//! group's content follows its header, separated by the configured gap.

use super::config::ContentFlow;
use super::types::{Axis, Node, Point};

/// Place headers and content groups, returning the number of position writes.
///
/// `groups[i]` belongs to `headers[i]`. A node present in several groups is
/// written once per group, so its last group decides where it ends up.
pub fn place(
    selection: &mut [Node],
    headers: &[usize],
    groups: &[Vec<usize>],
    axis: Axis,
    origin: Point,
    gap: f64,
    flow: ContentFlow,
) -> usize {
    let mut moved = 0;
    let across = axis.opposite();
    let line = across.coord(origin);

    let mut cursor = axis.coord(origin);
    for &index in headers {
        let node = &mut selection[index];
        node.position = axis.point(cursor, line);
        cursor += axis.extent(node.size) + gap;
        moved += 1;
    }

    for (&header, group) in headers.iter().zip(groups) {
        let anchor = selection[header].position;
        match flow {
            ContentFlow::Along => {
                let mut cursor = axis.coord(anchor);
                for &index in group {
                    let node = &mut selection[index];
                    cursor += axis.extent(node.size) + gap;
                    node.position = axis.point(cursor, across.coord(anchor));
                    moved += 1;
                }
            }
            ContentFlow::Across => {
                let mut cursor = across.coord(anchor);
                for &index in group {
                    let node = &mut selection[index];
                    cursor += across.extent(node.size) + gap;
                    node.position = axis.point(axis.coord(anchor), cursor);
                    moved += 1;
                }
            }
        }
    }

    moved
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_headers_spaced_by_own_extent() {
        let mut sel = vec![
            Node::sticky("h0", 0.0, 0.0, 100.0, 50.0),
            Node::sticky("h1", 0.0, 200.0, 60.0, 50.0),
            Node::sticky("h2", 0.0, 400.0, 80.0, 50.0),
        ];
        let moved = place(
            &mut sel,
            &[0, 1, 2],
            &[vec![], vec![], vec![]],
            Axis::Horizontal,
            Point::new(10.0, 20.0),
            45.0,
            ContentFlow::Along,
        );
        assert_eq!(moved, 3);
        assert_eq!(sel[0].position, Point::new(10.0, 20.0));
        assert_eq!(sel[1].position, Point::new(155.0, 20.0));
        assert_eq!(sel[2].position, Point::new(260.0, 20.0));
    }

    #[test]
    fn test_content_along_header_line() {
        let mut sel = vec![
            Node::sticky("h0", 0.0, 0.0, 100.0, 50.0),
            Node::sticky("c0", 0.0, 100.0, 100.0, 40.0),
            Node::sticky("c1", 0.0, 200.0, 100.0, 60.0),
        ];
        place(
            &mut sel,
            &[0],
            &[vec![1, 2]],
            Axis::Vertical,
            Point::new(0.0, 0.0),
            45.0,
            ContentFlow::Along,
        );
        assert_eq!(sel[0].position, Point::new(0.0, 0.0));
        assert_eq!(sel[1].position, Point::new(0.0, 85.0));
        assert_eq!(sel[2].position, Point::new(0.0, 190.0));
    }

    #[test]
    fn test_content_across_stacks_away_from_header() {
        let mut sel = vec![
            Node::sticky("h0", 0.0, 0.0, 100.0, 50.0),
            Node::sticky("h1", 0.0, 120.0, 100.0, 50.0),
            Node::sticky("c0", 150.0, 120.0, 100.0, 50.0),
            Node::sticky("c1", 300.0, 120.0, 100.0, 50.0),
        ];
        place(
            &mut sel,
            &[0, 1],
            &[vec![], vec![2, 3]],
            Axis::Horizontal,
            Point::new(0.0, 0.0),
            45.0,
            ContentFlow::Across,
        );
        assert_eq!(sel[1].position, Point::new(145.0, 0.0));
        assert_eq!(sel[2].position, Point::new(145.0, 95.0));
        assert_eq!(sel[3].position, Point::new(145.0, 190.0));
    }

    #[test]
    fn test_nothing_to_place() {
        let mut sel = vec![Node::sticky("lonely", 40.0, 40.0, 10.0, 10.0)];
        let moved = place(
            &mut sel,
            &[],
            &[],
            Axis::Horizontal,
            Point::new(0.0, 0.0),
            45.0,
            ContentFlow::Along,
        );
        assert_eq!(moved, 0);
        assert_eq!(sel[0].position, Point::new(40.0, 40.0));
    }
}
