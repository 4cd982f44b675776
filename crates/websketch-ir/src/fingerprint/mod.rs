//! Content-addressed capture fingerprints.
//!
//! A fingerprint is a SHA-256 digest over a canonical serialization of the
//! tree, in two modes:
//!
//! - **full** ([`fingerprint_capture`]): structure plus per-node text hashes
//! - **layout** ([`fingerprint_layout`]): structure only
//!
//! ## Guarantees
//!
//! - **Determinism**: identical captures produce identical digests; the
//!   canonical form has a fixed field order and quantized coordinates.
//! - **Volatile-field exclusion**: `capturedAt` and `url` never affect a
//!   fingerprint.
//! - **Mode separation**: text-only edits change the full fingerprint and
//!   leave the layout fingerprint untouched.

mod canonical;
mod digest;

pub use digest::{fingerprint_capture, fingerprint_layout};
