//! Orientation Swap - re-flow a selection of sticky notes from rows to columns and back
//!
//! A selection holds one line of header stickies and content stickies aligned
//! with those headers. Swapping lays the headers out along the other axis and
//! moves each header's content with it.
//!
//! # Example
//!
//! ```rust
//! use orientation_swap::{swap_orientation, Axis, Node, Point, SwapConfig};
//!
//! let mut selection = vec![
//!     Node::sticky("todo", 0.0, 0.0, 100.0, 100.0),
//!     Node::sticky("done", 0.0, 150.0, 100.0, 100.0),
//! ];
//! swap_orientation(&mut selection, Axis::Horizontal, &SwapConfig::default()).unwrap();
//! assert_eq!(selection[1].position, Point::new(145.0, 0.0));
//! ```

pub mod canvas;
pub mod error;
pub mod host;
pub mod layout;
pub mod message;

use std::fmt::Write as _;

pub use canvas::Canvas;
pub use error::CanvasError;
pub use host::{handle, handle_message, Host, Outcome};
pub use layout::lint::{LintCategory, LintWarning};
pub use layout::{
    swap_orientation, Axis, ContentFlow, GroupingPolicy, Node, NodeId, NodeKind, Point, Size,
    SwapConfig, SwapError, SwapReport,
};
pub use message::{Message, Orientation};

/// Configuration for a complete run over a canvas document
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Swap engine configuration
    pub swap: SwapConfig,
    /// Collect lint warnings after the swap
    pub lint: bool,
}

impl RunConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the swap configuration
    pub fn with_swap(mut self, config: SwapConfig) -> Self {
        self.swap = config;
        self
    }

    /// Enable or disable lint checks
    pub fn with_lint(mut self, lint: bool) -> Self {
        self.lint = lint;
        self
    }
}

/// Result of running one message against a canvas
#[derive(Debug)]
pub struct RunOutput {
    pub canvas: Canvas,
    pub outcome: Outcome,
    /// Empty unless linting was enabled and the swap ran
    pub warnings: Vec<LintWarning>,
}

/// Run one raw message against a JSON canvas with default configuration
///
/// # Example
///
/// ```rust
/// use orientation_swap::run;
///
/// let output = run(
///     r#"{"selection": [{"id": "1", "kind": "sticky", "x": 0, "y": 0, "width": 100, "height": 100}]}"#,
///     r#"{"type": "orientation-swap", "orientation": "rows"}"#,
/// ).unwrap();
/// assert!(output.outcome.report().is_some());
/// assert_eq!(output.canvas.closed_count(), 1);
/// ```
pub fn run(source: &str, message: &str) -> Result<RunOutput, CanvasError> {
    run_with_config(source, message, &RunConfig::default())
}

/// Run one raw message against a JSON canvas
pub fn run_with_config(
    source: &str,
    message: &str,
    config: &RunConfig,
) -> Result<RunOutput, CanvasError> {
    let canvas = Canvas::from_json(source)?;
    Ok(run_canvas(canvas, message, config))
}

/// Run one raw message against an already loaded canvas
pub fn run_canvas(mut canvas: Canvas, message: &str, config: &RunConfig) -> RunOutput {
    let outcome = handle_message(&mut canvas, message, &config.swap);

    let warnings = match (&outcome, config.lint) {
        (Outcome::Applied(report), true) => layout::lint::check(&canvas.selection, report),
        _ => Vec::new(),
    };

    RunOutput {
        canvas,
        outcome,
        warnings,
    }
}

/// Describe how a swap classified and placed each node, one line per node
pub fn layout_dump(selection: &[Node], report: &SwapReport) -> String {
    let mut out = String::new();
    let _ = write!(out, "axis: {}", report.axis);
    for (index, node) in selection.iter().enumerate() {
        let role = if report.headers.contains(&index) {
            "header"
        } else if report.unmatched.contains(&index) {
            "unmatched"
        } else if report.content.contains(&index) {
            "content"
        } else {
            "ignored"
        };
        let _ = write!(
            out,
            "\n[{}] {} x={:.1} y={:.1} w={:.1} h={:.1}",
            node.id, role, node.position.x, node.position.y, node.size.width, node.size.height
        );
    }
    out
}
