use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::node::Node;

/// Pixel dimensions of the browser viewport at capture time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in CSS pixels
    pub width: u32,

    /// Height in CSS pixels
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width/height ratio; the only viewport property fingerprints fold in
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            0.0
        } else {
            f64::from(self.width) / f64::from(self.height)
        }
    }
}

/// A captured page: the versioned envelope around the UI tree
///
/// Instances come out of `parse_capture` (or are built directly in tests)
/// and are never mutated afterwards; rendering, fingerprinting and diffing
/// are read-only projections over them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capture {
    /// Envelope schema version (semver) written by the producer
    pub schema_version: String,

    /// Page URL at capture time (excluded from fingerprints)
    pub url: String,

    /// Viewport the bounds were normalized against
    pub viewport: Viewport,

    /// Capture wall-clock timestamp (excluded from fingerprints)
    pub captured_at: DateTime<Utc>,

    /// Root of the UI tree, conventionally a PAGE node spanning the viewport
    pub root: Node,
}

impl Capture {
    /// Total node count of the tree
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }

    /// `capturedAt` in the fixed ISO-8601 form renderers print
    /// (millisecond precision, `Z` suffix)
    pub fn captured_at_iso(&self) -> String {
        self.captured_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
