//! Digest computation over canonical capture text.
//!
//! Both fingerprint modes hash their canonical form with SHA-256 and
//! hex-encode the result, giving a fixed 64-character string. Equal
//! fingerprints under a mode mean structurally identical captures under that
//! mode (ignoring `capturedAt` and `url`), up to the digest's own collision
//! strength.

use sha2::{Digest, Sha256};

use super::canonical::{canonical_text, Mode};
use crate::model::Capture;

/// Full structural fingerprint of a capture
///
/// Covers roles, quantized bounds, interactivity, semantics, sibling order,
/// per-node text hashes, and the viewport aspect ratio. Two captures that
/// differ only in text content get different full fingerprints.
pub fn fingerprint_capture(capture: &Capture) -> String {
    hash_string(&canonical_text(capture, Mode::Full))
}

/// Layout-only fingerprint of a capture
///
/// Same coverage as [`fingerprint_capture`] minus text, so text-only edits
/// leave the layout fingerprint unchanged. Useful for "did the page
/// structure move" checks across content updates.
pub fn fingerprint_layout(capture: &Capture) -> String {
    hash_string(&canonical_text(capture, Mode::Layout))
}

/// Hash a string using SHA-256, hex-encoded
fn hash_string(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
