//! Wireframe rendering: a capture tree painted onto a fixed text grid.
//!
//! Painting is iterative pre-order, parents first, so children and later
//! siblings overwrite earlier content. That gives a stable z-order without
//! any z field in the model: document order is paint order.

use crate::errors::{Result, WsError};
use crate::model::{Capture, Node, Rect, Role};

use super::grid::{BorderSet, CharGrid, ASCII_BORDERS, UNICODE_BORDERS};

/// Canvas dimensions for the text renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Canvas width in character cells
    pub width: usize,

    /// Canvas height in character cells
    pub height: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: 80, height: 24 }
    }
}

/// Largest accepted canvas edge; bounds the allocation for hostile options
const MAX_DIMENSION: usize = 4096;

/// Which label details a render mode shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LabelStyle {
    /// Abbreviation plus the semantic tag when present
    Semantic,
    /// Abbreviation only; semantics are suppressed
    Structural,
}

/// Render the capture as a box-drawing wireframe
///
/// Labels carry the role abbreviation, the semantic tag when present, and a
/// dot tier for text length. Output is exactly `height` lines of `width`
/// characters; geometry outside the canvas is clipped, labels that do not
/// fit are truncated.
///
/// # Errors
/// * `WS_INVALID_ARGS` when either dimension is zero or above the cap
pub fn render_ascii(capture: &Capture, options: &RenderOptions) -> Result<String> {
    render_tree(capture, options, &UNICODE_BORDERS, LabelStyle::Semantic, "render_ascii")
}

/// Render the capture with plain `+ - |` borders and no semantic tags
///
/// Same geometry as [`render_ascii`]; only the glyph set and the label
/// detail differ. Structure mode is for diff-friendly output and terminals
/// without box-drawing glyphs.
pub fn render_structure(capture: &Capture, options: &RenderOptions) -> Result<String> {
    render_tree(capture, options, &ASCII_BORDERS, LabelStyle::Structural, "render_structure")
}

/// Render the composite view consumed by language models
///
/// Header (URL, viewport, timestamp), blank line, the default-size
/// wireframe, blank line, then the role legend.
pub fn render_for_llm(capture: &Capture) -> Result<String> {
    let body = render_ascii(capture, &RenderOptions::default())?;
    Ok(format!(
        "URL: {}\nViewport: {}x{}\nCaptured: {}\n\n{}\n\n{}",
        capture.url,
        capture.viewport.width,
        capture.viewport.height,
        capture.captured_at_iso(),
        body,
        generate_legend(),
    ))
}

/// Role legend: every abbreviation mapped to its wire name
///
/// One line per role in [`Role::ALL`] order, so the output is stable across
/// calls and releases.
pub fn generate_legend() -> String {
    let mut out = String::from("Legend:");
    for role in Role::ALL {
        out.push_str(&format!("\n  {:<4} = {}", role.abbreviation(), role.as_str()));
    }
    out
}

fn render_tree(
    capture: &Capture,
    options: &RenderOptions,
    borders: &BorderSet,
    style: LabelStyle,
    op: &str,
) -> Result<String> {
    check_dimensions(options, op)?;

    let mut grid = CharGrid::new(options.width, options.height);
    let mut stack: Vec<&Node> = vec![&capture.root];
    while let Some(node) = stack.pop() {
        paint_node(&mut grid, node, options, borders, style);
        for child in node.children.iter().rev() {
            stack.push(child);
        }
    }

    Ok(grid.into_text())
}

fn check_dimensions(options: &RenderOptions, op: &str) -> Result<()> {
    if options.width == 0
        || options.height == 0
        || options.width > MAX_DIMENSION
        || options.height > MAX_DIMENSION
    {
        return Err(WsError::InvalidArgs {
            op: op.to_string(),
            message: format!(
                "canvas must be between 1x1 and {MAX_DIMENSION}x{MAX_DIMENSION}, got {}x{}",
                options.width, options.height
            ),
        });
    }
    Ok(())
}

fn paint_node(
    grid: &mut CharGrid,
    node: &Node,
    options: &RenderOptions,
    borders: &BorderSet,
    style: LabelStyle,
) {
    let (top, left, bottom, right) = cell_box(&node.bounds, options);
    let cols = right.saturating_sub(left) + 1;
    let rows = bottom.saturating_sub(top) + 1;
    let label = node_label(node, style);

    if cols >= 2 && rows >= 2 {
        grid.draw_border(top, left, bottom, right, borders);
        if cols >= 3 && rows >= 3 {
            grid.put_text(top + 1, left + 1, &truncate(&label, cols - 2));
        }
    } else {
        // Too thin for a border: the label alone marks the node.
        grid.put_text(top, left, &truncate(&label, cols));
    }
}

/// Map normalized bounds onto an inclusive cell box, clipped to the canvas
fn cell_box(bounds: &Rect, options: &RenderOptions) -> (usize, usize, usize, usize) {
    let top = scale(bounds.y, options.height);
    let left = scale(bounds.x, options.width);
    let bottom = scale(bounds.bottom(), options.height);
    let right = scale(bounds.right(), options.width);
    (top, left, bottom, right)
}

/// Round a normalized coordinate to a cell index inside `[0, extent)`
fn scale(value: f64, extent: usize) -> usize {
    let cell = (value * extent as f64).round();
    if cell < 0.0 {
        0
    } else if cell > (extent - 1) as f64 {
        extent - 1
    } else {
        cell as usize
    }
}

/// Build a node's label
///
/// The base is the role abbreviation, with `:tag` appended in semantic mode.
/// Text presence selects the suffix: a dot tier sized by text length, or
/// brackets around the base when the node has no text.
fn node_label(node: &Node, style: LabelStyle) -> String {
    let mut base = node.role.abbreviation().to_string();
    if style == LabelStyle::Semantic {
        if let Some(tag) = &node.semantics {
            base.push(':');
            base.push_str(tag);
        }
    }
    match &node.text {
        Some(text) => {
            base.push_str(&".".repeat(dot_count(text.len)));
            base
        }
        None => format!("[{base}]"),
    }
}

/// Dot tier for a text length: one dot under 10 chars, two under 50,
/// three from 50 up (the cap)
fn dot_count(len: u32) -> usize {
    match len {
        0..=9 => 1,
        10..=49 => 2,
        _ => 3,
    }
}

fn truncate(label: &str, budget: usize) -> String {
    label.chars().take(budget).collect()
}
