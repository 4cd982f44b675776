//! Envelope schema version policy.
//!
//! Captures carry a semantic version in `schemaVersion`. Compatibility is
//! major-based: minor and patch revisions only ever add optional fields,
//! which the validator and the serde layer both tolerate, so any version
//! within the supported major is accepted. Other majors are rejected with
//! `WS_UNSUPPORTED_VERSION`.

use semver::Version;

/// Schema version this crate writes into new captures
pub const CAPTURE_SCHEMA_VERSION: &str = "0.5.0";

/// Major version this crate accepts in incoming captures
pub const SUPPORTED_MAJOR: u64 = 0;

/// Check whether a parsed envelope version falls in the supported range
pub fn is_supported(version: &Version) -> bool {
    version.major == SUPPORTED_MAJOR
}
