use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using WsError
pub type Result<T> = std::result::Result<T, WsError>;

/// Canonical error kind taxonomy
///
/// Every failure this crate surfaces maps to one of these kinds, each with a
/// stable `WS_*` code shared with the rest of the websketch tooling (capture
/// extension, CLI, MCP server). Codes are contract: tests pin them, and they
/// serialize as-is in validation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WsErrorKind {
    /// Input text is not syntactically valid JSON
    #[serde(rename = "WS_INVALID_JSON")]
    InvalidJson,

    /// Envelope or node violates the capture schema
    #[serde(rename = "WS_INVALID_CAPTURE")]
    InvalidCapture,

    /// `schemaVersion` is outside the supported range
    #[serde(rename = "WS_UNSUPPORTED_VERSION")]
    UnsupportedVersion,

    /// Node count or nesting depth exceeds the configured limits
    #[serde(rename = "WS_LIMIT_EXCEEDED")]
    LimitExceeded,

    /// Malformed call arguments, e.g. a zero-sized render canvas
    #[serde(rename = "WS_INVALID_ARGS")]
    InvalidArgs,
}

impl WsErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            WsErrorKind::InvalidJson => "WS_INVALID_JSON",
            WsErrorKind::InvalidCapture => "WS_INVALID_CAPTURE",
            WsErrorKind::UnsupportedVersion => "WS_UNSUPPORTED_VERSION",
            WsErrorKind::LimitExceeded => "WS_LIMIT_EXCEEDED",
            WsErrorKind::InvalidArgs => "WS_INVALID_ARGS",
        }
    }
}

/// Typed error for the fail-fast operations
///
/// Each variant carries the context the failing operation had: the JSON path
/// of the offending value where one exists, or the operation name for
/// argument errors. The non-throwing validator reports findings as
/// `ValidationIssue`s instead; `ValidationIssue::into_error` converts one
/// into the matching variant here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WsError {
    /// Input text failed JSON parsing
    #[error("invalid JSON: {message}")]
    InvalidJson { message: String },

    /// Envelope or node violates the capture schema
    #[error("invalid capture at `{path}`: {message}")]
    InvalidCapture { path: String, message: String },

    /// Envelope schema version outside the supported range
    #[error("unsupported schema version at `{path}`: {message}")]
    UnsupportedVersion { path: String, message: String },

    /// Tree exceeds the configured node-count or depth limit
    #[error("limit exceeded at `{path}`: {message}")]
    LimitExceeded { path: String, message: String },

    /// Malformed arguments to an operation
    #[error("invalid arguments to `{op}`: {message}")]
    InvalidArgs { op: String, message: String },
}

impl WsError {
    /// Classify this error into its stable kind
    pub fn kind(&self) -> WsErrorKind {
        match self {
            WsError::InvalidJson { .. } => WsErrorKind::InvalidJson,
            WsError::InvalidCapture { .. } => WsErrorKind::InvalidCapture,
            WsError::UnsupportedVersion { .. } => WsErrorKind::UnsupportedVersion,
            WsError::LimitExceeded { .. } => WsErrorKind::LimitExceeded,
            WsError::InvalidArgs { .. } => WsErrorKind::InvalidArgs,
        }
    }

    /// Get the stable `WS_*` code for this error
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// JSON path of the offending value, when the failure has one
    pub fn path(&self) -> Option<&str> {
        match self {
            WsError::InvalidCapture { path, .. }
            | WsError::UnsupportedVersion { path, .. }
            | WsError::LimitExceeded { path, .. } => Some(path),
            WsError::InvalidJson { .. } | WsError::InvalidArgs { .. } => None,
        }
    }

    /// Human-readable description of the failure
    pub fn message(&self) -> &str {
        match self {
            WsError::InvalidJson { message }
            | WsError::InvalidCapture { message, .. }
            | WsError::UnsupportedVersion { message, .. }
            | WsError::LimitExceeded { message, .. }
            | WsError::InvalidArgs { message, .. } => message,
        }
    }
}

/// Conversion from serde_json::Error at the JSON decoding boundary
impl From<serde_json::Error> for WsError {
    fn from(err: serde_json::Error) -> Self {
        WsError::InvalidJson {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes_are_stable() {
        let cases = [
            (WsErrorKind::InvalidJson, "WS_INVALID_JSON"),
            (WsErrorKind::InvalidCapture, "WS_INVALID_CAPTURE"),
            (WsErrorKind::UnsupportedVersion, "WS_UNSUPPORTED_VERSION"),
            (WsErrorKind::LimitExceeded, "WS_LIMIT_EXCEEDED"),
            (WsErrorKind::InvalidArgs, "WS_INVALID_ARGS"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_kind_serializes_as_its_code() {
        let value = serde_json::to_value(WsErrorKind::UnsupportedVersion).unwrap();
        assert_eq!(value, "WS_UNSUPPORTED_VERSION");
        let back: WsErrorKind = serde_json::from_value(value).unwrap();
        assert_eq!(back, WsErrorKind::UnsupportedVersion);
    }

    #[test]
    fn test_display_carries_path_and_message() {
        let err = WsError::InvalidCapture {
            path: "root.children[2].bounds".to_string(),
            message: "bounds[0] must be a number".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("root.children[2].bounds"));
        assert!(rendered.contains("must be a number"));
        assert_eq!(err.path(), Some("root.children[2].bounds"));
        assert_eq!(err.code(), "WS_INVALID_CAPTURE");
    }

    #[test]
    fn test_from_serde_json_error() {
        let syntax_err = serde_json::from_str::<serde_json::Value>("{nope").unwrap_err();
        let err: WsError = syntax_err.into();
        assert_eq!(err.kind(), WsErrorKind::InvalidJson);
        assert!(err.path().is_none());
    }
}
