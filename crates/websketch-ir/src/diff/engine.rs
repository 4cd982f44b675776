//! Capture diff computation.
//!
//! Matching is greedy, not globally optimal: candidate pairs are scored by
//! a composite similarity (bounds IoU plus a semantics bonus, with role
//! equality as a hard gate) and taken in descending score order, each node
//! used at most once. Ties are broken toward the earlier a-side tree
//! position, then the earlier b-side position, so diffs are deterministic.

use std::collections::VecDeque;
use std::time::Instant;

use super::model::{ChangeKind, DiffNode, DiffOptions, DiffResult, NodeMatch};
use crate::model::{Capture, Node};
use crate::{log_op_end, log_op_start};

/// Score bonus when both sides carry the same semantic tag
const SEMANTICS_BONUS: f64 = 0.25;

/// One entry of a flattened capture tree, in pre-order
struct FlatNode<'a> {
    node: &'a Node,
    path: String,
    children: Vec<usize>,
}

/// Structural diff between two captures
///
/// Produces matched pairs plus the nodes only present on one side. Matching
/// runs in two phases: children of matched parents are paired against each
/// other first (starting from the roots), then a whole-tree pass over the
/// leftovers catches subtrees that moved to a different parent.
///
/// Never fails; both inputs are read-only and the result ordering is
/// deterministic for identical inputs.
pub fn diff(a: &Capture, b: &Capture, options: &DiffOptions) -> DiffResult {
    let started = Instant::now();
    log_op_start!(
        "diff",
        a_nodes = a.node_count(),
        b_nodes = b.node_count(),
    );

    let a_flat = flatten(&a.root);
    let b_flat = flatten(&b.root);

    let mut a_used = vec![false; a_flat.len()];
    let mut b_used = vec![false; b_flat.len()];
    let mut pairs: Vec<(usize, usize, f64)> = Vec::new();

    // Phase 1: the root pair, then children of matched pairs, breadth-first.
    let mut frontier: VecDeque<(usize, usize)> = VecDeque::new();
    if let Some(score) = similarity(&a_flat[0], &b_flat[0], options) {
        a_used[0] = true;
        b_used[0] = true;
        pairs.push((0, 0, score));
        frontier.push_back((0, 0));
    }
    while let Some((parent_a, parent_b)) = frontier.pop_front() {
        let mut candidates = Vec::new();
        for &child_a in &a_flat[parent_a].children {
            for &child_b in &b_flat[parent_b].children {
                if let Some(score) = similarity(&a_flat[child_a], &b_flat[child_b], options) {
                    candidates.push(Candidate {
                        score,
                        a_index: child_a,
                        b_index: child_b,
                    });
                }
            }
        }
        for (child_a, child_b, score) in take_greedy(candidates, &mut a_used, &mut b_used) {
            pairs.push((child_a, child_b, score));
            frontier.push_back((child_a, child_b));
        }
    }

    // Phase 2: whole-tree fallback over everything still unmatched.
    let mut candidates = Vec::new();
    for (a_index, a_entry) in a_flat.iter().enumerate() {
        if a_used[a_index] {
            continue;
        }
        for (b_index, b_entry) in b_flat.iter().enumerate() {
            if b_used[b_index] {
                continue;
            }
            if let Some(score) = similarity(a_entry, b_entry, options) {
                candidates.push(Candidate {
                    score,
                    a_index,
                    b_index,
                });
            }
        }
    }
    pairs.extend(take_greedy(candidates, &mut a_used, &mut b_used));

    // Result ordering: matched/removed by a-side position, added by b-side.
    pairs.sort_by(|x, y| x.0.cmp(&y.0));

    let matched: Vec<NodeMatch> = pairs
        .into_iter()
        .map(|(a_index, b_index, score)| {
            classify(&a_flat[a_index], &b_flat[b_index], score, options)
        })
        .collect();
    let removed: Vec<DiffNode> = a_flat
        .iter()
        .enumerate()
        .filter(|(index, _)| !a_used[*index])
        .map(|(_, entry)| describe(entry))
        .collect();
    let added: Vec<DiffNode> = b_flat
        .iter()
        .enumerate()
        .filter(|(index, _)| !b_used[*index])
        .map(|(_, entry)| describe(entry))
        .collect();

    let result = DiffResult {
        matched,
        added,
        removed,
    };
    log_op_end!(
        "diff",
        duration_ms = started.elapsed().as_millis() as u64,
        matched = result.matched.len(),
        added = result.added.len(),
        removed = result.removed.len(),
    );
    result
}

/// Flatten a tree pre-order with an explicit stack
///
/// Entry order is document order, so entry indices double as the tie-break
/// rank. Each entry keeps its children's indices for the sibling phase.
fn flatten(root: &Node) -> Vec<FlatNode<'_>> {
    let mut entries: Vec<FlatNode<'_>> = Vec::new();
    let mut stack: Vec<(&Node, Option<usize>, String)> = vec![(root, None, "root".to_string())];

    while let Some((node, parent, path)) = stack.pop() {
        let index = entries.len();
        for (position, child) in node.children.iter().enumerate().rev() {
            stack.push((child, Some(index), format!("{path}.children[{position}]")));
        }
        entries.push(FlatNode {
            node,
            path,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            entries[parent].children.push(index);
        }
    }

    entries
}

/// A scored candidate pair awaiting greedy selection
struct Candidate {
    score: f64,
    a_index: usize,
    b_index: usize,
}

/// Similarity score for a candidate pair, if it clears the gates
///
/// Role inequality disqualifies outright. The score is the bounds IoU plus
/// [`SEMANTICS_BONUS`] when both semantic tags are present and equal; scores
/// below `match_threshold` are discarded.
fn similarity(a: &FlatNode<'_>, b: &FlatNode<'_>, options: &DiffOptions) -> Option<f64> {
    if a.node.role != b.node.role {
        return None;
    }
    let mut score = a.node.bounds.iou(&b.node.bounds);
    if let (Some(tag_a), Some(tag_b)) = (&a.node.semantics, &b.node.semantics) {
        if tag_a == tag_b {
            score += SEMANTICS_BONUS;
        }
    }
    (score >= options.match_threshold).then_some(score)
}

/// Take candidates greedily by descending score, each node used at most once
///
/// Equal scores order by a-side index, then b-side index, so earlier
/// siblings win ties and the selection is deterministic.
fn take_greedy(
    mut candidates: Vec<Candidate>,
    a_used: &mut [bool],
    b_used: &mut [bool],
) -> Vec<(usize, usize, f64)> {
    candidates.sort_by(|x, y| {
        y.score
            .total_cmp(&x.score)
            .then_with(|| x.a_index.cmp(&y.a_index))
            .then_with(|| x.b_index.cmp(&y.b_index))
    });

    let mut taken = Vec::new();
    for candidate in candidates {
        if !a_used[candidate.a_index] && !b_used[candidate.b_index] {
            a_used[candidate.a_index] = true;
            b_used[candidate.b_index] = true;
            taken.push((candidate.a_index, candidate.b_index, candidate.score));
        }
    }
    taken
}

/// Classify a matched pair by its bounds deltas
fn classify(
    a: &FlatNode<'_>,
    b: &FlatNode<'_>,
    similarity: f64,
    options: &DiffOptions,
) -> NodeMatch {
    let (bounds_a, bounds_b) = (&a.node.bounds, &b.node.bounds);
    let position_delta = (bounds_a.x - bounds_b.x)
        .abs()
        .max((bounds_a.y - bounds_b.y).abs());
    let size_delta = (bounds_a.width - bounds_b.width)
        .abs()
        .max((bounds_a.height - bounds_b.height).abs());

    let change = match (
        position_delta > options.move_threshold,
        size_delta > options.resize_threshold,
    ) {
        (true, true) => ChangeKind::MovedAndResized,
        (true, false) => ChangeKind::Moved,
        (false, true) => ChangeKind::Resized,
        (false, false) => ChangeKind::Unchanged,
    };

    NodeMatch {
        a: describe(a),
        b: describe(b),
        similarity,
        position_delta,
        size_delta,
        change,
    }
}

fn describe(entry: &FlatNode<'_>) -> DiffNode {
    DiffNode {
        path: entry.path.clone(),
        role: entry.node.role,
        semantics: entry.node.semantics.clone(),
        bounds: entry.node.bounds,
    }
}
