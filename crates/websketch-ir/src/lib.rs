//! WebSketch IR - grammar-based intermediate representation for captured web UI
//!
//! This crate is the core the websketch tooling (capture extension, CLI, MCP
//! server, demo site) builds on, providing:
//! - The capture data model with its closed 23-primitive role grammar
//! - Non-throwing validation and fail-fast parsing of untrusted JSON captures
//! - Deterministic fixed-grid wireframe rendering in three presentation modes
//! - Structural diffing by geometry, role, and semantics
//! - Content-addressed fingerprints in full and layout-only modes
//!
//! Every operation is synchronous, pure on its inputs, and never mutates a
//! parsed capture; captures can be shared freely across threads.

pub mod diff;
pub mod errors;
pub mod fingerprint;
pub mod logging;
pub mod model;
pub mod parse;
pub mod render;
pub mod rules;
pub mod version;

// Re-export the public surface
pub use diff::{diff, format_diff, ChangeKind, DiffNode, DiffOptions, DiffResult, NodeMatch};
pub use errors::{Result, WsError, WsErrorKind};
pub use fingerprint::{fingerprint_capture, fingerprint_layout};
pub use model::{Capture, Node, Rect, Role, TextSummary, Viewport};
pub use parse::{parse_capture, parse_capture_with};
pub use render::{generate_legend, render_ascii, render_for_llm, render_structure, RenderOptions};
pub use rules::{
    validate_capture, validate_capture_with, Limits, ValidationIssue, ValidationResult,
};
pub use version::CAPTURE_SCHEMA_VERSION;
