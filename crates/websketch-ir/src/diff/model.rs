//! Structural diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Collections are ordered deterministically: `matched` and `removed` by the
//! a-side tree position, `added` by the b-side tree position.

use serde::{Deserialize, Serialize};

use crate::model::{Rect, Role};

/// Tuning knobs for the diff engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiffOptions {
    /// Position delta (normalized units) beyond which a match counts as moved
    pub move_threshold: f64,

    /// Size delta (normalized units) beyond which a match counts as resized
    pub resize_threshold: f64,

    /// Minimum similarity score for a candidate pair to be considered
    pub match_threshold: f64,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            move_threshold: 0.01,
            resize_threshold: 0.01,
            match_threshold: 0.1,
        }
    }
}

/// A node as the diff reports it: identity without the subtree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffNode {
    /// Dotted tree path in the capture it came from, e.g. `root.children[1]`
    pub path: String,

    /// UI primitive of the node
    pub role: Role,

    /// Semantic tag, when the node carried one
    pub semantics: Option<String>,

    /// Normalized bounds in the capture it came from
    pub bounds: Rect,
}

/// How a matched pair's geometry changed between the two captures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    /// Both deltas are at or below their thresholds; not counted as a change
    Unchanged,
    /// Position delta exceeds the move threshold
    Moved,
    /// Size delta exceeds the resize threshold
    Resized,
    /// Both thresholds exceeded
    MovedAndResized,
}

/// One matched node pair across the two captures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeMatch {
    /// The node as it appears in capture `a`
    pub a: DiffNode,

    /// The node as it appears in capture `b`
    pub b: DiffNode,

    /// Similarity score the matcher accepted this pair at
    pub similarity: f64,

    /// Largest absolute x/y displacement, normalized units
    pub position_delta: f64,

    /// Largest absolute width/height change, normalized units
    pub size_delta: f64,

    /// Threshold classification of the two deltas
    pub change: ChangeKind,
}

/// Structured diff between two captures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffResult {
    /// Node pairs present in both captures, by a-side tree order
    pub matched: Vec<NodeMatch>,

    /// Nodes only in capture `b`, by b-side tree order
    pub added: Vec<DiffNode>,

    /// Nodes only in capture `a`, by a-side tree order
    pub removed: Vec<DiffNode>,
}

impl DiffResult {
    /// Matched pairs classified as moved (includes moved-and-resized)
    pub fn moved_count(&self) -> usize {
        self.matched
            .iter()
            .filter(|m| matches!(m.change, ChangeKind::Moved | ChangeKind::MovedAndResized))
            .count()
    }

    /// Matched pairs classified as resized (includes moved-and-resized)
    pub fn resized_count(&self) -> usize {
        self.matched
            .iter()
            .filter(|m| matches!(m.change, ChangeKind::Resized | ChangeKind::MovedAndResized))
            .count()
    }

    /// True when anything was added, removed, moved, or resized
    pub fn has_changes(&self) -> bool {
        !self.added.is_empty()
            || !self.removed.is_empty()
            || self.matched.iter().any(|m| m.change != ChangeKind::Unchanged)
    }
}
