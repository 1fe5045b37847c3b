//! Session state machine
//!
//! Runs the strict export → upload → preview sequence. Every failure inside
//! `start` is caught here and converted to the `Failed` phase; nothing
//! propagates to the presentation layer.

use crate::error::{Error, Result};
use crate::host::{HostCapabilities, ACCEPTED_EXPORT_TYPES};
use crate::preview::{build_preview_url, DEFAULT_TITLE};
use crate::session::{Phase, SessionObserver};
use crate::types::{ExportOutcome, UploadResponse};
use crate::upload::UploadClient;
use std::sync::Arc;

/// Snapshot of the session's mutable data
///
/// Exclusively owned by [`Session`]; presentation layers read clones.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Current lifecycle phase
    pub phase: Phase,
    /// Last known artwork title; empty until an export completes
    pub title: String,
    /// Message for the last failure, cleared on `start` and `reset`
    pub last_error: Option<String>,
    /// Response from the last accepted upload
    pub last_upload: Option<UploadResponse>,
}

/// What one lifecycle run produced, before it is folded into the state
enum RunOutcome {
    Cancelled,
    Uploaded(UploadResponse),
}

/// The session lifecycle state machine
pub struct Session {
    host: Arc<dyn HostCapabilities>,
    uploader: UploadClient,
    state: SessionState,
}

impl Session {
    /// Create an idle session against the production upload service
    pub fn new(host: Arc<dyn HostCapabilities>) -> Self {
        Self::with_uploader(host, UploadClient::new())
    }

    /// Create an idle session with a specific upload client (tests, staging)
    pub fn with_uploader(host: Arc<dyn HostCapabilities>, uploader: UploadClient) -> Self {
        Self {
            host,
            uploader,
            state: SessionState::default(),
        }
    }

    /// Read a snapshot of the session state
    pub fn snapshot(&self) -> SessionState {
        self.state.clone()
    }

    /// Run one full export → upload → preview lifecycle.
    ///
    /// Valid from `Idle`, `Success`, or `Failed`; ignored while a run is
    /// already in flight. Returns the resulting phase.
    pub async fn start(&mut self, observer: &dyn SessionObserver) -> Phase {
        if matches!(self.state.phase, Phase::Exporting | Phase::Uploading) {
            return self.state.phase;
        }

        self.state.last_error = None;
        self.state.last_upload = None;
        self.set_phase(Phase::Exporting, observer).await;

        match self.run_lifecycle(observer).await {
            Ok(RunOutcome::Cancelled) => {
                // Dismissing the dialog is not a failure
                tracing::debug!("export cancelled, returning to idle");
                self.set_phase(Phase::Idle, observer).await;
            }
            Ok(RunOutcome::Uploaded(response)) => {
                self.state.last_upload = Some(response.clone());
                self.set_phase(Phase::Success, observer).await;
                observer.on_upload_accepted(&response).await;
                self.open_preview(observer).await;
            }
            Err(err) => {
                self.state.last_error = Some(err.user_message());
                self.set_phase(Phase::Failed, observer).await;
                observer.on_error(&err).await;
            }
        }

        self.state.phase
    }

    /// Re-run the whole sequence after a failure.
    ///
    /// The export dialog must be re-invoked to obtain fresh blobs; the
    /// service cannot resume a prior upload.
    pub async fn retry(&mut self, observer: &dyn SessionObserver) -> Phase {
        self.start(observer).await
    }

    /// Return to `Idle`, clearing the title, the last error, and the last
    /// upload response
    pub fn reset(&mut self) {
        self.state = SessionState::default();
    }

    async fn run_lifecycle(&mut self, observer: &dyn SessionObserver) -> Result<RunOutcome> {
        let outcome = self.host.request_export(ACCEPTED_EXPORT_TYPES).await?;
        let ExportOutcome::Completed { title, files } = outcome else {
            return Ok(RunOutcome::Cancelled);
        };

        self.state.title = title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());
        self.set_phase(Phase::Uploading, observer).await;

        let user_token = self.host.user_token().await?;
        let design_token = self.host.design_token().await?;

        // An empty files list is forwarded unvalidated; the service decides
        let response = self
            .uploader
            .submit_export(&self.state.title, &files, &user_token, &design_token)
            .await?;

        Ok(RunOutcome::Uploaded(response))
    }

    /// Attempt to open the preview after a successful upload.
    ///
    /// Failure here is swallowed: the session stays in `Success` and the
    /// observer renders the URL as a manual fallback.
    async fn open_preview(&self, observer: &dyn SessionObserver) {
        let url = build_preview_url(&self.state.title, "");
        match self.host.open_url(&url).await {
            Ok(()) => observer.on_preview_link(&url, true).await,
            Err(err) => {
                tracing::warn!(%err, "host declined to open preview");
                observer.on_preview_link(&url, false).await;
            }
        }
    }

    async fn set_phase(&mut self, phase: Phase, observer: &dyn SessionObserver) {
        tracing::debug!(from = %self.state.phase, to = %phase, "phase transition");
        self.state.phase = phase;
        observer.on_phase(phase).await;
    }
}
