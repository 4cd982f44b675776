//! Human-readable summary renderer for capture diffs.

use super::model::{ChangeKind, DiffNode, DiffResult, NodeMatch};

/// Ranked changes shown in the summary
const TOP_CHANGES: usize = 10;

/// Render a human-readable Markdown/text summary of a [`DiffResult`]
///
/// A counts line, then the changed matches ranked by combined delta
/// magnitude (largest first, capped at ten), then the added/removed
/// listings. Matched entries are labeled with their b-side (after) state
/// and path. The summary is informational only; the structured result is
/// the contract.
pub fn format_diff(result: &DiffResult) -> String {
    let mut out = String::new();
    out.push_str("## Capture Diff\n\n");

    if !result.has_changes() {
        out.push_str("_No changes detected._\n");
        return out;
    }

    out.push_str(&format!(
        "added: {}, removed: {}, moved: {}, resized: {}\n\n",
        result.added.len(),
        result.removed.len(),
        result.moved_count(),
        result.resized_count(),
    ));

    let mut changed: Vec<&NodeMatch> = result
        .matched
        .iter()
        .filter(|entry| entry.change != ChangeKind::Unchanged)
        .collect();
    // Stable sort: equal magnitudes keep a-side tree order.
    changed.sort_by(|x, y| combined_delta(y).total_cmp(&combined_delta(x)));

    if !changed.is_empty() {
        out.push_str("### Top Changes\n\n");
        for entry in changed.iter().take(TOP_CHANGES) {
            out.push_str(&format!(
                "- {} {} (position {:.3}, size {:.3}) at {}\n",
                label(&entry.b),
                change_label(entry.change),
                entry.position_delta,
                entry.size_delta,
                entry.b.path,
            ));
        }
        out.push('\n');
    }

    if !result.added.is_empty() {
        out.push_str("### Added\n\n");
        for node in &result.added {
            out.push_str(&format!("- {} at {}\n", label(node), node.path));
        }
        out.push('\n');
    }

    if !result.removed.is_empty() {
        out.push_str("### Removed\n\n");
        for node in &result.removed {
            out.push_str(&format!("- {} at {}\n", label(node), node.path));
        }
        out.push('\n');
    }

    out
}

fn combined_delta(entry: &NodeMatch) -> f64 {
    entry.position_delta + entry.size_delta
}

/// Role wire name, with the semantic tag appended when present
fn label(node: &DiffNode) -> String {
    match &node.semantics {
        Some(tag) => format!("{}:{}", node.role.as_str(), tag),
        None => node.role.as_str().to_string(),
    }
}

fn change_label(change: ChangeKind) -> &'static str {
    match change {
        ChangeKind::Unchanged => "unchanged",
        ChangeKind::Moved => "moved",
        ChangeKind::Resized => "resized",
        ChangeKind::MovedAndResized => "moved+resized",
    }
}
