//! Capture validation: non-throwing, collects every applicable finding.
//!
//! Checks run in a fixed order: envelope shape, schema version, resource
//! limits, then per-node checks. Later phases that depend on an earlier
//! phase's field being well-formed are skipped for that field (a missing
//! `root` gets one shape finding, not a cascade), and a limit breach skips
//! the per-node phase entirely since the limits exist to bound its cost.
//!
//! Paths are dotted with indices: `schemaVersion`, `viewport.width`,
//! `root.children[2].bounds`. The whole document is `$`.

use chrono::DateTime;
use semver::Version;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::limits::{scan_limits, LimitBreach, Limits};
use crate::errors::{WsError, WsErrorKind};
use crate::model::Role;
use crate::version;

/// One validator finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Stable error code for this finding
    pub code: WsErrorKind,

    /// Dotted path to the offending value
    pub path: String,

    /// Human-readable description
    pub message: String,
}

impl ValidationIssue {
    fn new(code: WsErrorKind, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
        }
    }

    /// Convert this finding into the equivalent typed error
    pub fn into_error(self) -> WsError {
        match self.code {
            WsErrorKind::InvalidJson => WsError::InvalidJson {
                message: self.message,
            },
            WsErrorKind::InvalidCapture => WsError::InvalidCapture {
                path: self.path,
                message: self.message,
            },
            WsErrorKind::UnsupportedVersion => WsError::UnsupportedVersion {
                path: self.path,
                message: self.message,
            },
            WsErrorKind::LimitExceeded => WsError::LimitExceeded {
                path: self.path,
                message: self.message,
            },
            WsErrorKind::InvalidArgs => WsError::InvalidArgs {
                op: self.path,
                message: self.message,
            },
        }
    }
}

/// Outcome of validating one capture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True when no findings were collected
    pub valid: bool,

    /// Every finding, in check order
    pub errors: Vec<ValidationIssue>,
}

impl ValidationResult {
    fn from_issues(errors: Vec<ValidationIssue>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// First finding converted to a typed error, if any
    pub fn first_error(&self) -> Option<WsError> {
        self.errors.first().cloned().map(ValidationIssue::into_error)
    }
}

/// Validate a raw capture value with the default limits
///
/// Never fails; the non-throwing counterpart to `parse_capture` for
/// surfaces that want to show every problem at once.
pub fn validate_capture(raw: &Value) -> ValidationResult {
    validate_capture_with(raw, &Limits::default())
}

/// Validate a raw capture value with explicit resource limits
pub fn validate_capture_with(raw: &Value, limits: &Limits) -> ValidationResult {
    let mut issues = Vec::new();

    let Some(envelope) = raw.as_object() else {
        issues.push(ValidationIssue::new(
            WsErrorKind::InvalidCapture,
            "$",
            "capture must be a JSON object",
        ));
        return ValidationResult::from_issues(issues);
    };

    check_envelope(envelope, &mut issues);
    check_version(envelope, &mut issues);

    if let Some(root) = envelope.get("root").filter(|v| v.is_object()) {
        match scan_limits(root, limits) {
            Err(LimitBreach::Nodes) => issues.push(ValidationIssue::new(
                WsErrorKind::LimitExceeded,
                "root",
                format!("tree exceeds the node count limit of {}", limits.max_nodes),
            )),
            Err(LimitBreach::Depth) => issues.push(ValidationIssue::new(
                WsErrorKind::LimitExceeded,
                "root",
                format!("tree exceeds the depth limit of {}", limits.max_depth),
            )),
            Ok(_) => check_nodes(root, &mut issues),
        }
    }

    ValidationResult::from_issues(issues)
}

fn push(issues: &mut Vec<ValidationIssue>, path: impl Into<String>, message: impl Into<String>) {
    issues.push(ValidationIssue::new(WsErrorKind::InvalidCapture, path, message));
}

fn check_envelope(envelope: &Map<String, Value>, issues: &mut Vec<ValidationIssue>) {
    match envelope.get("schemaVersion") {
        None => push(issues, "schemaVersion", "missing required field"),
        Some(Value::String(_)) => {}
        Some(_) => push(issues, "schemaVersion", "must be a string"),
    }

    match envelope.get("url") {
        None => push(issues, "url", "missing required field"),
        Some(Value::String(_)) => {}
        Some(_) => push(issues, "url", "must be a string"),
    }

    match envelope.get("viewport") {
        None => push(issues, "viewport", "missing required field"),
        Some(Value::Object(viewport)) => {
            for axis in ["width", "height"] {
                match viewport.get(axis).and_then(Value::as_u64) {
                    Some(pixels) if pixels >= 1 && pixels <= u64::from(u32::MAX) => {}
                    _ => push(
                        issues,
                        format!("viewport.{axis}"),
                        "must be a positive integer",
                    ),
                }
            }
        }
        Some(_) => push(issues, "viewport", "must be an object"),
    }

    match envelope.get("capturedAt") {
        None => push(issues, "capturedAt", "missing required field"),
        Some(Value::String(stamp)) => {
            if DateTime::parse_from_rfc3339(stamp).is_err() {
                push(issues, "capturedAt", "must be an RFC 3339 timestamp");
            }
        }
        Some(_) => push(issues, "capturedAt", "must be a string"),
    }

    match envelope.get("root") {
        None => push(issues, "root", "missing required field"),
        Some(Value::Object(_)) => {}
        Some(_) => push(issues, "root", "must be an object"),
    }
}

fn check_version(envelope: &Map<String, Value>, issues: &mut Vec<ValidationIssue>) {
    let Some(Value::String(raw)) = envelope.get("schemaVersion") else {
        return;
    };
    match Version::parse(raw) {
        Ok(parsed) if version::is_supported(&parsed) => {}
        Ok(parsed) => issues.push(ValidationIssue::new(
            WsErrorKind::UnsupportedVersion,
            "schemaVersion",
            format!(
                "version {parsed} is outside the supported major {}",
                version::SUPPORTED_MAJOR
            ),
        )),
        Err(_) => issues.push(ValidationIssue::new(
            WsErrorKind::UnsupportedVersion,
            "schemaVersion",
            format!("`{raw}` is not a semantic version"),
        )),
    }
}

/// Per-node checks over the whole tree, in document order
///
/// Iterative traversal: validated depth is already bounded by the limits,
/// but hostile `Value` trees handed straight to `validate_capture` must not
/// be able to exhaust the call stack either.
fn check_nodes(root: &Value, issues: &mut Vec<ValidationIssue>) {
    let mut stack: Vec<(&Value, String)> = vec![(root, "root".to_string())];

    while let Some((value, path)) = stack.pop() {
        let Some(node) = value.as_object() else {
            push(issues, path, "node must be an object");
            continue;
        };

        check_role(node, &path, issues);
        check_bounds(node, &path, issues);

        if let Some(interactive) = node.get("interactive") {
            if !interactive.is_boolean() {
                push(issues, format!("{path}.interactive"), "must be a boolean");
            }
        }

        if let Some(semantics) = node.get("semantics") {
            if !semantics.is_string() {
                push(issues, format!("{path}.semantics"), "must be a string");
            }
        }

        if let Some(text) = node.get("text") {
            check_text(text, &path, issues);
        }

        match node.get("children") {
            None => {}
            Some(Value::Array(children)) => {
                for (index, child) in children.iter().enumerate().rev() {
                    stack.push((child, format!("{path}.children[{index}]")));
                }
            }
            Some(_) => push(issues, format!("{path}.children"), "must be an array"),
        }
    }
}

fn check_role(node: &Map<String, Value>, path: &str, issues: &mut Vec<ValidationIssue>) {
    match node.get("role") {
        None => push(issues, format!("{path}.role"), "missing required field"),
        Some(Value::String(raw)) => {
            if Role::parse(raw).is_none() {
                push(issues, format!("{path}.role"), format!("`{raw}` is not a known role"));
            }
        }
        Some(_) => push(issues, format!("{path}.role"), "must be a string"),
    }
}

fn check_bounds(node: &Map<String, Value>, path: &str, issues: &mut Vec<ValidationIssue>) {
    match node.get("bounds") {
        None => push(issues, format!("{path}.bounds"), "missing required field"),
        Some(Value::Array(parts)) if parts.len() == 4 => {
            for (index, part) in parts.iter().enumerate() {
                match part.as_f64() {
                    Some(component) if (0.0..=1.0).contains(&component) => {}
                    Some(component) => push(
                        issues,
                        format!("{path}.bounds"),
                        format!("bounds[{index}] value {component} is outside [0, 1]"),
                    ),
                    None => push(
                        issues,
                        format!("{path}.bounds"),
                        format!("bounds[{index}] must be a number"),
                    ),
                }
            }
        }
        Some(_) => push(
            issues,
            format!("{path}.bounds"),
            "must be an array of 4 numbers",
        ),
    }
}

fn check_text(text: &Value, path: &str, issues: &mut Vec<ValidationIssue>) {
    let Some(summary) = text.as_object() else {
        push(issues, format!("{path}.text"), "must be an object");
        return;
    };
    match summary.get("hash") {
        Some(Value::String(_)) => {}
        _ => push(issues, format!("{path}.text.hash"), "must be a string"),
    }
    match summary.get("len").and_then(Value::as_u64) {
        Some(_) => {}
        None => push(
            issues,
            format!("{path}.text.len"),
            "must be a non-negative integer",
        ),
    }
}
