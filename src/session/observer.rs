//! Observer trait for interface-agnostic session updates
//!
//! Lets different presentation layers (CLI, embedded panel) render the
//! lifecycle without the state machine knowing about them.

use crate::error::Error;
use crate::types::UploadResponse;
use async_trait::async_trait;
use std::fmt;

/// Discrete state of the session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing has happened yet
    #[default]
    Idle,
    /// Export dialog in flight
    Exporting,
    /// Upload request in flight
    Uploading,
    /// Terminal: upload accepted
    Success,
    /// Terminal: lifecycle failed, see `last_error`
    Failed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Idle => "Idle",
            Self::Exporting => "Exporting",
            Self::Uploading => "Uploading",
            Self::Success => "Success",
            Self::Failed => "Failed",
        };
        f.write_str(label)
    }
}

/// Session observer trait
///
/// Implement this to render lifecycle progress. All callbacks are
/// notifications; returning from them never influences the lifecycle.
#[async_trait]
pub trait SessionObserver: Send + Sync {
    /// Called on every phase change
    async fn on_phase(&self, phase: Phase);

    /// Called once the upload endpoint accepts the export
    async fn on_upload_accepted(&self, response: &UploadResponse);

    /// Called with the constructed preview URL after a successful upload.
    ///
    /// `opened` is false when the host declined to open it; the URL is
    /// still valid and should be rendered as a manual fallback.
    async fn on_preview_link(&self, url: &str, opened: bool);

    /// Called when the lifecycle fails
    async fn on_error(&self, error: &Error);
}

/// No-op observer for tests or headless use
pub struct NoopObserver;

#[async_trait]
impl SessionObserver for NoopObserver {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_upload_accepted(&self, _response: &UploadResponse) {}
    async fn on_preview_link(&self, _url: &str, _opened: bool) {}
    async fn on_error(&self, _error: &Error) {}
}
