//! Core types for mockup-bridge

use serde::{Deserialize, Serialize};

/// An exported artwork blob with its declared media type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    /// Declared media type (e.g. "image/png")
    pub content_type: String,
    /// Raw file bytes as handed out by the host
    pub data: Vec<u8>,
}

/// Result of one host export dialog interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The user confirmed the export
    Completed {
        /// Artwork title supplied by the host, if any
        title: Option<String>,
        /// Exported file blobs, in host order
        files: Vec<ExportFile>,
    },
    /// The user dismissed the dialog, or the host aborted it.
    /// Never an error; the session silently returns to idle.
    Cancelled,
}

/// Parsed reply from the upload endpoint
///
/// A reply missing `ok` deserializes with `ok = false` and is treated as a
/// rejection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Whether the service accepted and processed the upload
    #[serde(default)]
    pub ok: bool,
    /// Storage path assigned by the service
    #[serde(default)]
    pub path: String,
    /// Public URL of the stored artwork
    #[serde(default)]
    pub url: String,
    /// Correlation identifier for support requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Storage bucket the artwork landed in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    /// Stored size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Media type after server-side processing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type_out: Option<String>,
    /// Server-side timing breakdown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timings: Option<UploadTimings>,
    /// Human-readable failure reason, present only when `ok` is false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Server-side timings reported by the upload endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadTimings {
    /// Total processing time in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_ms: Option<u64>,
}
