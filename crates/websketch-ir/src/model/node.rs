use serde::{Deserialize, Serialize};

use super::role::Role;

/// Axis-aligned rectangle in normalized page coordinates
///
/// Components are fractions of the capture viewport in `[0, 1]`: `(0, 0)` is
/// the top-left corner, `(1, 1)` the bottom-right. The wire format is a
/// compact 4-element array `[x, y, width, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Area of the overlap with `other`; zero when disjoint
    pub fn intersection_area(&self, other: &Rect) -> f64 {
        let overlap_w = (self.right().min(other.right()) - self.x.max(other.x)).max(0.0);
        let overlap_h = (self.bottom().min(other.bottom()) - self.y.max(other.y)).max(0.0);
        overlap_w * overlap_h
    }

    /// Intersection over union with `other`
    ///
    /// Identical rects score exactly 1.0, bypassing the division so that
    /// self-comparison is a perfect match even for degenerate zero-area
    /// rects and despite floating-point noise in the overlap arithmetic.
    /// Disjoint rects (and distinct rects with zero union area) score 0.0.
    pub fn iou(&self, other: &Rect) -> f64 {
        if self == other {
            return 1.0;
        }
        let intersection = self.intersection_area(other);
        let union = self.area() + other.area() - intersection;
        if union <= 0.0 {
            0.0
        } else {
            intersection / union
        }
    }
}

impl From<[f64; 4]> for Rect {
    fn from(parts: [f64; 4]) -> Self {
        Rect::new(parts[0], parts[1], parts[2], parts[3])
    }
}

impl From<Rect> for [f64; 4] {
    fn from(rect: Rect) -> Self {
        [rect.x, rect.y, rect.width, rect.height]
    }
}

/// Privacy-preserving summary of a node's text content
///
/// Captures never carry raw text. Producers hash the content and record its
/// length, which is enough for change detection and label sizing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSummary {
    /// Producer-computed digest of the text content
    pub hash: String,

    /// Character count of the original text
    pub len: u32,
}

/// A single element of the captured UI tree
///
/// Nodes exclusively own their children; the tree has no shared or back
/// references. Sibling order is meaningful: it is document order, and the
/// renderer's paint order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// UI primitive this element was classified as
    pub role: Role,

    /// Position and size, normalized to the viewport
    pub bounds: Rect,

    /// Whether the element accepts user interaction
    #[serde(default)]
    pub interactive: bool,

    /// Optional short semantic tag from the producer (e.g. "login")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantics: Option<String>,

    /// Text content summary; absent for non-text elements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextSummary>,

    /// Child nodes in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Create a non-interactive leaf with the given role and bounds
    pub fn new(role: Role, bounds: Rect) -> Self {
        Self {
            role,
            bounds,
            interactive: false,
            semantics: None,
            text: None,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including self
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }
}
