//! Canonical serialization for fingerprinting.
//!
//! The canonical form is a JSON array built by streaming writes in a fixed
//! order, so host-language map ordering can never leak into the digest:
//!
//! ```text
//! ["ws-fp",1,"<mode>",<aspect>,<node>]
//! node := ["<ROLE>",[x,y,w,h],<interactive>,<semantics|null>,<hash|null>,[<children>...]]
//! ```
//!
//! Coordinates and the viewport aspect ratio are integerized at 4 decimal
//! places before writing, which removes floating-point noise from the digest.
//! `capturedAt` and `url` are volatile and never enter the canonical form.
//! Layout mode drops the `hash` slot entirely, so the two modes hash disjoint
//! canonical spaces even for text-free trees.

use crate::model::{Capture, Node};

/// Canonicalization version; bump on any change to the canonical form
const CANONICAL_VERSION: u32 = 1;

/// Fixed preamble naming the canonical space
const PREAMBLE: &str = "ws-fp";

/// Coordinate precision: values are rounded to 1/SCALE before hashing
const SCALE: f64 = 10_000.0;

/// Which node fields enter the canonical form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Mode {
    /// Structure plus per-node text hashes
    Full,
    /// Structure only; text changes do not perturb the digest
    Layout,
}

impl Mode {
    fn tag(self) -> &'static str {
        match self {
            Mode::Full => "full",
            Mode::Layout => "layout",
        }
    }
}

/// Serialize a capture into its canonical text under the given mode
pub(super) fn canonical_text(capture: &Capture, mode: Mode) -> String {
    let mut out = String::new();
    out.push_str("[\"");
    out.push_str(PREAMBLE);
    out.push_str("\",");
    out.push_str(&CANONICAL_VERSION.to_string());
    out.push_str(",\"");
    out.push_str(mode.tag());
    out.push_str("\",");
    out.push_str(&quantize(capture.viewport.aspect_ratio()).to_string());
    out.push(',');
    write_tree(&mut out, &capture.root, mode);
    out.push(']');
    out
}

/// One pending write in the streaming serializer
enum Step<'a> {
    Node(&'a Node),
    Literal(&'static str),
}

/// Stream the node tree into `out` with an explicit stack
///
/// A node's opening tokens are written when it is popped; its closing
/// brackets and the commas between siblings are queued as literals, so the
/// traversal never recurses and arbitrarily deep trees stay safe.
fn write_tree(out: &mut String, root: &Node, mode: Mode) {
    let mut stack: Vec<Step<'_>> = vec![Step::Node(root)];
    while let Some(step) = stack.pop() {
        match step {
            Step::Literal(text) => out.push_str(text),
            Step::Node(node) => {
                write_node_open(out, node, mode);
                stack.push(Step::Literal("]]"));
                for (index, child) in node.children.iter().enumerate().rev() {
                    stack.push(Step::Node(child));
                    if index > 0 {
                        stack.push(Step::Literal(","));
                    }
                }
            }
        }
    }
}

/// Write a node's fields up to and including its children array opener
fn write_node_open(out: &mut String, node: &Node, mode: Mode) {
    out.push('[');
    push_json_string(out, node.role.as_str());
    out.push_str(",[");
    out.push_str(&quantize(node.bounds.x).to_string());
    out.push(',');
    out.push_str(&quantize(node.bounds.y).to_string());
    out.push(',');
    out.push_str(&quantize(node.bounds.width).to_string());
    out.push(',');
    out.push_str(&quantize(node.bounds.height).to_string());
    out.push_str("],");
    out.push_str(if node.interactive { "true" } else { "false" });
    out.push(',');
    match &node.semantics {
        Some(tag) => push_json_string(out, tag),
        None => out.push_str("null"),
    }
    if mode == Mode::Full {
        out.push(',');
        match &node.text {
            Some(text) => push_json_string(out, &text.hash),
            None => out.push_str("null"),
        }
    }
    out.push_str(",[");
}

/// Integerize a coordinate at 4 decimal places
fn quantize(value: f64) -> i64 {
    (value * SCALE).round() as i64
}

/// Append `raw` as a JSON string literal (quoted and escaped)
fn push_json_string(out: &mut String, raw: &str) {
    out.push_str(&serde_json::to_string(raw).unwrap_or_default());
}
