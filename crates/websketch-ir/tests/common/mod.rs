use chrono::{TimeZone, Utc};
use websketch_ir::{Capture, Node, Rect, Role, TextSummary, Viewport};

/// Build a node with the given role and `[x, y, w, h]` bounds
#[allow(dead_code)]
pub fn make_node(role: Role, bounds: [f64; 4]) -> Node {
    Node::new(role, Rect::new(bounds[0], bounds[1], bounds[2], bounds[3]))
}

/// Build a text summary with the given digest and length
#[allow(dead_code)]
pub fn make_text(hash: &str, len: u32) -> TextSummary {
    TextSummary {
        hash: hash.to_string(),
        len,
    }
}

/// Wrap a root node in the standard test envelope
///
/// Fixed URL, 1920x1080 viewport, and timestamp so that renders and
/// fingerprints are reproducible across runs.
#[allow(dead_code)]
pub fn make_capture(root: Node) -> Capture {
    Capture {
        schema_version: "0.5.0".to_string(),
        url: "https://example.com/login".to_string(),
        viewport: Viewport::new(1920, 1080),
        captured_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
        root,
    }
}

/// Smallest valid capture: a bare PAGE spanning the viewport
#[allow(dead_code)]
pub fn minimal() -> Capture {
    make_capture(make_node(Role::Page, [0.0, 0.0, 1.0, 1.0]))
}

/// A realistic login page: header/nav, a tagged form with inputs and a
/// submit button, and a footer
#[allow(dead_code)]
pub fn login_page() -> Capture {
    let mut header = make_node(Role::Header, [0.0, 0.0, 1.0, 0.1]);
    let mut nav = make_node(Role::Nav, [0.05, 0.02, 0.5, 0.06]);
    nav.interactive = true;
    header.children.push(nav);

    let mut form = make_node(Role::Form, [0.3, 0.3, 0.4, 0.4]);
    form.semantics = Some("login".to_string());

    let mut email = make_node(Role::Input, [0.35, 0.35, 0.3, 0.06]);
    email.interactive = true;
    email.semantics = Some("email".to_string());
    form.children.push(email);

    let mut password = make_node(Role::Input, [0.35, 0.45, 0.3, 0.06]);
    password.interactive = true;
    password.semantics = Some("password".to_string());
    form.children.push(password);

    let mut submit = make_node(Role::Button, [0.35, 0.55, 0.15, 0.07]);
    submit.interactive = true;
    submit.semantics = Some("submit".to_string());
    submit.text = Some(make_text("b1946ac9", 7));
    form.children.push(submit);

    let mut main = make_node(Role::Main, [0.0, 0.1, 1.0, 0.8]);
    main.children.push(form);

    let footer = make_node(Role::Footer, [0.0, 0.9, 1.0, 0.1]);

    let mut root = make_node(Role::Page, [0.0, 0.0, 1.0, 1.0]);
    root.children.push(header);
    root.children.push(main);
    root.children.push(footer);
    make_capture(root)
}

/// A 30-deep chain of nested sections with shrinking bounds
#[allow(dead_code)]
pub fn deep_nesting() -> Capture {
    let mut node = make_node(Role::Text, [0.45, 0.45, 0.1, 0.1]);
    for level in (1..30).rev() {
        let inset = f64::from(level) * 0.015;
        let mut section = make_node(
            Role::Section,
            [inset, inset, 1.0 - 2.0 * inset, 1.0 - 2.0 * inset],
        );
        section.children.push(node);
        node = section;
    }
    let mut root = make_node(Role::Page, [0.0, 0.0, 1.0, 1.0]);
    root.children.push(node);
    make_capture(root)
}

/// A list of 40 identical-width items stacked vertically
#[allow(dead_code)]
pub fn repeated_siblings() -> Capture {
    let mut list = make_node(Role::List, [0.1, 0.05, 0.8, 0.9]);
    for position in 0..40 {
        let y = 0.05 + f64::from(position) * 0.0225;
        let mut item = make_node(Role::ListItem, [0.1, y, 0.8, 0.02]);
        item.text = Some(make_text("item", 20));
        list.children.push(item);
    }
    let mut root = make_node(Role::Page, [0.0, 0.0, 1.0, 1.0]);
    root.children.push(list);
    make_capture(root)
}

/// Boundary-value geometry: zero-area nodes and bounds pinned at 0/1
#[allow(dead_code)]
pub fn odd_bounds() -> Capture {
    let mut root = make_node(Role::Page, [0.0, 0.0, 1.0, 1.0]);
    root.children.push(make_node(Role::Text, [0.5, 0.5, 0.0, 0.0]));
    root.children.push(make_node(Role::Image, [0.2, 0.2, 0.0, 0.5]));
    root.children.push(make_node(Role::Icon, [0.3, 0.3, 0.4, 0.0]));
    root.children.push(make_node(Role::Card, [1.0, 1.0, 0.0, 0.0]));
    root.children.push(make_node(Role::Section, [0.0, 0.0, 1.0, 1.0]));
    make_capture(root)
}

/// A single paragraph-sized text node
#[allow(dead_code)]
pub fn text_node() -> Capture {
    let mut text = make_node(Role::Text, [0.1, 0.2, 0.8, 0.3]);
    text.text = Some(make_text("2fd4e1c6", 120));
    let mut root = make_node(Role::Page, [0.0, 0.0, 1.0, 1.0]);
    root.children.push(text);
    make_capture(root)
}
