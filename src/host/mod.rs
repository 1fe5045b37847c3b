//! Host capabilities
//!
//! Everything the session needs from the surrounding host application is
//! behind one injected trait, so the lifecycle can run against a real host,
//! the CLI adapter, or a scripted fake in tests.

mod local;

pub use local::LocalHost;

use crate::error::Result;
use crate::types::ExportOutcome;
use async_trait::async_trait;

/// Media types the session asks the host export dialog for
pub const ACCEPTED_EXPORT_TYPES: &[&str] = &["image/png", "image/jpeg"];

/// Capabilities provided by the hosting application
///
/// All operations may suspend; `request_export` suspends for as long as the
/// user keeps the dialog open.
#[async_trait]
pub trait HostCapabilities: Send + Sync {
    /// Open the host export dialog and wait for the user to finish.
    ///
    /// Dismissal is reported as [`ExportOutcome::Cancelled`], not as an
    /// error. `Err` means the dialog itself broke.
    async fn request_export(&self, accepted_types: &[&str]) -> Result<ExportOutcome>;

    /// Obtain the bearer token identifying the current end user
    async fn user_token(&self) -> Result<String>;

    /// Obtain the token identifying the current design document
    async fn design_token(&self) -> Result<String>;

    /// Ask the host to open a URL externally; may be blocked by host policy
    async fn open_url(&self, url: &str) -> Result<()>;
}
