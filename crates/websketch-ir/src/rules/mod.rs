//! Capture rules: resource limits and schema validation.

mod limits;
mod validation;

pub use limits::Limits;
pub use validation::{validate_capture, validate_capture_with, ValidationIssue, ValidationResult};
