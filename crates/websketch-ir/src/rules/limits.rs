//! Resource limits on capture trees.

use serde_json::Value;

/// Caps applied to a capture tree before full validation
///
/// The scan below aborts as soon as either cap is crossed, so an oversized
/// or adversarial tree costs O(cap) to reject, not O(input).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum total node count
    pub max_nodes: usize,

    /// Maximum nesting depth (the root is at depth 1)
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_nodes: 10_000,
            max_depth: 64,
        }
    }
}

/// Which cap a tree crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LimitBreach {
    Nodes,
    Depth,
}

/// Bounded scan of a raw tree: node count and depth, aborting at the caps
///
/// Children are read permissively here: a missing or mistyped `children`
/// field makes the node a leaf for counting purposes, and the per-node
/// checks report the shape problem separately.
pub(crate) fn scan_limits(root: &Value, limits: &Limits) -> Result<(usize, usize), LimitBreach> {
    let mut count = 0usize;
    let mut deepest = 0usize;
    let mut stack: Vec<(&Value, usize)> = vec![(root, 1)];

    while let Some((node, depth)) = stack.pop() {
        count += 1;
        if count > limits.max_nodes {
            return Err(LimitBreach::Nodes);
        }
        if depth > limits.max_depth {
            return Err(LimitBreach::Depth);
        }
        if depth > deepest {
            deepest = depth;
        }
        if let Some(children) = node.get("children").and_then(Value::as_array) {
            for child in children {
                if child.is_object() {
                    stack.push((child, depth + 1));
                }
            }
        }
    }

    Ok((count, deepest))
}
