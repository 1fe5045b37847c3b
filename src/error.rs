//! Error types for mockup-bridge

use thiserror::Error;

/// Result alias using the crate error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while driving an export/upload session
#[derive(Debug, Error)]
pub enum Error {
    /// The host export dialog could not be opened or broke mid-flight.
    /// User cancellation is not an error; it is a non-completed
    /// [`ExportOutcome`](crate::types::ExportOutcome).
    #[error("export failed: {0}")]
    Export(String),

    /// A host credential provider failed to hand out a token
    #[error("credential acquisition failed: {0}")]
    Credential(String),

    /// The upload request could not be completed at the transport level
    #[error("upload transport failure: {0}")]
    Transport(String),

    /// The upload endpoint responded but declined the upload
    #[error("upload rejected: {0}")]
    UploadRejected(String),

    /// The upload endpoint replied with a body that is not the expected shape
    #[error("malformed response from upload service: {0}")]
    MalformedResponse(String),

    /// The host refused or failed to open the preview URL
    #[error("preview could not be opened: {0}")]
    PreviewOpen(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl Error {
    /// Message suitable for `SessionState::last_error`.
    ///
    /// An endpoint-supplied rejection reason is surfaced verbatim; every
    /// other variant renders through Display.
    pub fn user_message(&self) -> String {
        match self {
            Self::UploadRejected(reason) => reason.clone(),
            other => other.to_string(),
        }
    }
}
