mod common;

use common::{make_capture, make_node, make_text};
use websketch_ir::{
    generate_legend, render_ascii, render_for_llm, render_structure, RenderOptions, Role,
    WsErrorKind,
};

const BOX_GLYPHS: [char; 6] = ['┌', '┐', '└', '┘', '─', '│'];

fn assert_grid_shape(output: &str, width: usize, height: usize) {
    let lines: Vec<&str> = output.split('\n').collect();
    assert_eq!(lines.len(), height, "line count");
    for (row, line) in lines.iter().enumerate() {
        assert_eq!(line.chars().count(), width, "width of row {row}");
    }
}

// ===== GRID SHAPE TESTS =====

#[test]
fn test_default_canvas_is_80_by_24() {
    let capture = common::login_page();
    let options = RenderOptions::default();
    assert_grid_shape(&render_ascii(&capture, &options).unwrap(), 80, 24);
    assert_grid_shape(&render_structure(&capture, &options).unwrap(), 80, 24);
}

#[test]
fn test_custom_canvas_sizes() {
    let capture = common::login_page();
    for (width, height) in [(40, 12), (120, 40), (1, 1), (3, 200)] {
        let options = RenderOptions { width, height };
        assert_grid_shape(&render_ascii(&capture, &options).unwrap(), width, height);
        assert_grid_shape(&render_structure(&capture, &options).unwrap(), width, height);
    }
}

#[test]
fn test_pathological_fixtures_render_cleanly() {
    let options = RenderOptions::default();
    for capture in [
        common::minimal(),
        common::deep_nesting(),
        common::repeated_siblings(),
        common::odd_bounds(),
    ] {
        assert_grid_shape(&render_ascii(&capture, &options).unwrap(), 80, 24);
        assert_grid_shape(&render_structure(&capture, &options).unwrap(), 80, 24);
    }
}

// ===== DETERMINISM TESTS =====

#[test]
fn test_renders_are_deterministic() {
    let capture = common::login_page();
    let options = RenderOptions::default();
    assert_eq!(
        render_ascii(&capture, &options).unwrap(),
        render_ascii(&capture, &options).unwrap()
    );
    assert_eq!(
        render_structure(&capture, &options).unwrap(),
        render_structure(&capture, &options).unwrap()
    );
    assert_eq!(
        render_for_llm(&capture).unwrap(),
        render_for_llm(&capture).unwrap()
    );
}

// ===== MODE TESTS =====

#[test]
fn test_ascii_mode_uses_box_drawing_borders() {
    let output = render_ascii(&common::login_page(), &RenderOptions::default()).unwrap();
    assert!(output.contains('┌'));
    assert!(output.contains('│'));
}

#[test]
fn test_structure_mode_borders_are_plain_ascii() {
    let output = render_structure(&common::login_page(), &RenderOptions::default()).unwrap();
    assert!(output.contains('+'));
    assert!(output.contains('-'));
    assert!(output.contains('|'));
    for glyph in BOX_GLYPHS {
        assert!(!output.contains(glyph), "structure mode leaked {glyph:?}");
    }
}

#[test]
fn test_semantics_show_in_ascii_mode_only() {
    // A childless form so no later paint overwrites its label.
    let mut form = make_node(Role::Form, [0.2, 0.2, 0.6, 0.5]);
    form.semantics = Some("login".to_string());
    let mut root = make_node(Role::Page, [0.0, 0.0, 1.0, 1.0]);
    root.children.push(form);
    let capture = make_capture(root);

    let ascii = render_ascii(&capture, &RenderOptions::default()).unwrap();
    let structure = render_structure(&capture, &RenderOptions::default()).unwrap();
    assert!(ascii.contains("[FORM:login]"), "ascii:\n{ascii}");
    assert!(!structure.contains("login"));
    assert!(structure.contains("[FORM]"));
}

// ===== LABEL TESTS =====

fn page_with_button(text_len: Option<u32>) -> websketch_ir::Capture {
    let mut button = make_node(Role::Button, [0.1, 0.1, 0.5, 0.2]);
    button.interactive = true;
    button.text = text_len.map(|len| make_text("x", len));
    let mut root = make_node(Role::Page, [0.0, 0.0, 1.0, 1.0]);
    root.children.push(button);
    make_capture(root)
}

#[test]
fn test_textless_node_renders_bracketed_abbreviation() {
    let output = render_ascii(&page_with_button(None), &RenderOptions::default()).unwrap();
    assert!(output.contains("[BTN]"), "output:\n{output}");
}

#[test]
fn test_dot_tiers_track_text_length() {
    let cases = [
        (5, "BTN."),
        (30, "BTN.."),
        (150, "BTN..."),
        (5000, "BTN..."),
    ];
    for (len, expected) in cases {
        let output =
            render_ascii(&page_with_button(Some(len)), &RenderOptions::default()).unwrap();
        let overshoot = format!("{expected}.");
        assert!(output.contains(expected), "len {len}: expected {expected}");
        assert!(!output.contains(&overshoot), "len {len}: too many dots");
    }
}

#[test]
fn test_short_text_never_gets_two_dots() {
    let output = render_ascii(&page_with_button(Some(5)), &RenderOptions::default()).unwrap();
    assert!(!output.contains("BTN.."));
}

// ===== LLM VIEW TESTS =====

#[test]
fn test_llm_view_layout() {
    let capture = common::login_page();
    let output = render_for_llm(&capture).unwrap();
    let lines: Vec<&str> = output.split('\n').collect();

    assert_eq!(lines[0], "URL: https://example.com/login");
    assert_eq!(lines[1], "Viewport: 1920x1080");
    assert_eq!(lines[2], "Captured: 2024-01-15T10:30:00.000Z");
    assert_eq!(lines[3], "");

    // header (3) + blank + 24 body rows + blank + legend (24)
    assert_eq!(lines.len(), 53);
    assert!(output.ends_with(&generate_legend()));
}

#[test]
fn test_llm_body_matches_default_ascii_render() {
    let capture = common::login_page();
    let body = render_ascii(&capture, &RenderOptions::default()).unwrap();
    assert!(render_for_llm(&capture).unwrap().contains(&body));
}

// ===== LEGEND TESTS =====

#[test]
fn test_legend_covers_every_role() {
    let legend = generate_legend();
    assert!(legend.starts_with("Legend:"));
    assert_eq!(legend.lines().count(), 24);
    for role in Role::ALL {
        assert!(legend.contains(role.as_str()), "missing {}", role.as_str());
        assert!(
            legend.contains(role.abbreviation()),
            "missing {}",
            role.abbreviation()
        );
    }
}

#[test]
fn test_legend_is_order_stable() {
    assert_eq!(generate_legend(), generate_legend());
    let legend = generate_legend();
    let page = legend.find("= PAGE").unwrap();
    let modal = legend.find("= MODAL").unwrap();
    assert!(page < modal);
}

// ===== ARGUMENT TESTS =====

#[test]
fn test_degenerate_dimensions_are_rejected() {
    let capture = common::minimal();
    for (width, height) in [(0, 24), (80, 0), (0, 0), (5000, 24), (80, 5000)] {
        let options = RenderOptions { width, height };
        let err = render_ascii(&capture, &options).unwrap_err();
        assert_eq!(err.kind(), WsErrorKind::InvalidArgs, "{width}x{height}");
        assert_eq!(err.code(), "WS_INVALID_ARGS");
        assert!(render_structure(&capture, &options).is_err());
    }
}
