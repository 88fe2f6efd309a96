//! Core types for the swap engine

use std::fmt;

use serde::{Deserialize, Serialize};

/// A 2D point in canvas coordinates (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height of a node
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A bounding box representing the spatial extent of a node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if this bounding box intersects another (touching edges do not count)
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// The coordinate along which headers are laid out after a swap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Headers spread along x
    Horizontal,
    /// Headers spread along y
    Vertical,
}

impl Axis {
    /// The orthogonal axis
    pub fn opposite(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Project a point onto this axis
    pub fn coord(self, point: Point) -> f64 {
        match self {
            Axis::Horizontal => point.x,
            Axis::Vertical => point.y,
        }
    }

    /// Extent of a size along this axis
    pub fn extent(self, size: Size) -> f64 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// Build a point from a coordinate on this axis and one on the opposite axis
    pub fn point(self, along: f64, across: f64) -> Point {
        match self {
            Axis::Horizontal => Point::new(along, across),
            Axis::Vertical => Point::new(across, along),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => write!(f, "horizontal"),
            Axis::Vertical => write!(f, "vertical"),
        }
    }
}

/// Host-assigned node identity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

/// The variant of a canvas node. Only sticky notes take part in a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Sticky,
    Shape,
    Text,
    Connector,
    Other,
}

impl NodeKind {
    /// Whether nodes of this kind have a computable bounding box
    pub fn has_geometry(self) -> bool {
        !matches!(self, NodeKind::Connector)
    }
}

/// A selectable node on the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(flatten)]
    pub position: Point,
    #[serde(flatten)]
    pub size: Size,
}

impl Node {
    pub fn new(id: impl Into<String>, kind: NodeKind, position: Point, size: Size) -> Self {
        Self {
            id: NodeId(id.into()),
            kind,
            text: String::new(),
            position,
            size,
        }
    }

    /// Shorthand for a sticky note at `(x, y)` with the given size
    pub fn sticky(id: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(id, NodeKind::Sticky, Point::new(x, y), Size::new(width, height))
    }

    /// Set the node's text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn is_sticky(&self) -> bool {
        self.kind == NodeKind::Sticky
    }

    /// Absolute bounding box, or `None` for kinds without geometry
    pub fn absolute_bounding_box(&self) -> Option<BoundingBox> {
        if !self.kind.has_geometry() {
            return None;
        }
        Some(BoundingBox::new(
            self.position.x,
            self.position.y,
            self.size.width,
            self.size.height,
        ))
    }
}

/// Summary of one completed swap
#[derive(Debug, Clone, PartialEq)]
pub struct SwapReport {
    /// Axis the headers were laid out along
    pub axis: Axis,
    /// Selection indices of headers, in placement order
    pub headers: Vec<usize>,
    /// Selection indices of content nodes
    pub content: Vec<usize>,
    /// Content nodes that matched no header and were left in place
    pub unmatched: Vec<usize>,
    /// Content nodes that matched more than one header
    pub multi_grouped: Vec<usize>,
    /// Number of position writes performed
    pub moved: usize,
}
