//! Capture decoding: untrusted JSON text to a validated, typed [`Capture`].

use std::time::Instant;

use serde_json::Value;

use crate::errors::{Result, WsError};
use crate::model::Capture;
use crate::rules::{validate_capture_with, Limits};
use crate::{log_op_end, log_op_error, log_op_start};

/// Parse a capture from JSON text with the default limits
///
/// Fail-fast counterpart to [`crate::validate_capture`]: syntactically
/// invalid JSON reports `WS_INVALID_JSON`; otherwise the first validator
/// finding (in check order) becomes the error. On success the returned
/// capture has passed every schema check.
pub fn parse_capture(json: &str) -> Result<Capture> {
    parse_capture_with(json, &Limits::default())
}

/// Parse a capture from JSON text with explicit resource limits
pub fn parse_capture_with(json: &str, limits: &Limits) -> Result<Capture> {
    let started = Instant::now();
    log_op_start!("parse_capture", input_bytes = json.len());

    match decode(json, limits) {
        Ok(capture) => {
            log_op_end!(
                "parse_capture",
                duration_ms = started.elapsed().as_millis() as u64,
                node_count = capture.node_count(),
            );
            Ok(capture)
        }
        Err(err) => {
            log_op_error!(
                "parse_capture",
                &err,
                duration_ms = started.elapsed().as_millis() as u64,
            );
            Err(err)
        }
    }
}

fn decode(json: &str, limits: &Limits) -> Result<Capture> {
    let raw: Value = serde_json::from_str(json)?;

    let report = validate_capture_with(&raw, limits);
    if let Some(err) = report.first_error() {
        return Err(err);
    }

    // The validator vetted the shape; a residual serde error here means the
    // checks and the model have drifted apart.
    serde_json::from_value(raw).map_err(|err| WsError::InvalidCapture {
        path: "$".to_string(),
        message: err.to_string(),
    })
}
