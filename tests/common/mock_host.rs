//! Mock host capabilities for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use mockup_bridge::error::{Error, Result};
use mockup_bridge::host::HostCapabilities;
use mockup_bridge::types::ExportOutcome;
use std::sync::Mutex;

/// Scripted host for driving the session in tests
///
/// Features:
/// - configurable export outcome per run
/// - error injection for each capability
/// - call tracking for verification
pub struct MockHost {
    export_outcome: Mutex<ExportOutcome>,
    user_token: Mutex<Option<String>>,
    design_token: Mutex<Option<String>>,
    // Error injection
    error_on_export: Mutex<Option<String>>,
    error_on_open_url: Mutex<Option<String>>,
    // Call tracking
    export_calls: Mutex<Vec<Vec<String>>>,
    open_url_calls: Mutex<Vec<String>>,
}

impl MockHost {
    /// Mock that cancels the export and hands out default tokens
    pub fn new() -> Self {
        Self {
            export_outcome: Mutex::new(ExportOutcome::Cancelled),
            user_token: Mutex::new(Some("user-tok".to_string())),
            design_token: Mutex::new(Some("design-tok".to_string())),
            error_on_export: Mutex::new(None),
            error_on_open_url: Mutex::new(None),
            export_calls: Mutex::new(Vec::new()),
            open_url_calls: Mutex::new(Vec::new()),
        }
    }

    /// Script the next export outcome
    pub fn set_export_outcome(&self, outcome: ExportOutcome) {
        *self.export_outcome.lock().unwrap() = outcome;
    }

    /// Make `user_token` fail with a credential error
    pub fn clear_user_token(&self) {
        *self.user_token.lock().unwrap() = None;
    }

    /// Restore or change the user token
    pub fn set_user_token(&self, token: &str) {
        *self.user_token.lock().unwrap() = Some(token.to_string());
    }

    /// Make `design_token` fail with a credential error
    pub fn clear_design_token(&self) {
        *self.design_token.lock().unwrap() = None;
    }

    /// Make `request_export` fail (dialog plumbing broke, not cancellation)
    pub fn fail_export(&self, msg: &str) {
        *self.error_on_export.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `open_url` fail (host policy blocked it)
    pub fn fail_open_url(&self, msg: &str) {
        *self.error_on_open_url.lock().unwrap() = Some(msg.to_string());
    }

    /// Accepted-type sets passed to `request_export`, in call order
    pub fn get_export_calls(&self) -> Vec<Vec<String>> {
        self.export_calls.lock().unwrap().clone()
    }

    /// URLs passed to `open_url`, in call order
    pub fn get_open_url_calls(&self) -> Vec<String> {
        self.open_url_calls.lock().unwrap().clone()
    }

    /// Assert `open_url` was called exactly once and return the URL
    pub fn assert_opened_once(&self) -> String {
        let calls = self.get_open_url_calls();
        assert_eq!(
            calls.len(),
            1,
            "expected exactly one open_url call, got: {calls:?}"
        );
        calls[0].clone()
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostCapabilities for MockHost {
    async fn request_export(&self, accepted_types: &[&str]) -> Result<ExportOutcome> {
        self.export_calls
            .lock()
            .unwrap()
            .push(accepted_types.iter().map(ToString::to_string).collect());

        if let Some(msg) = self.error_on_export.lock().unwrap().as_ref() {
            return Err(Error::Export(msg.clone()));
        }

        Ok(self.export_outcome.lock().unwrap().clone())
    }

    async fn user_token(&self) -> Result<String> {
        self.user_token
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| Error::Credential("no user token available".to_string()))
    }

    async fn design_token(&self) -> Result<String> {
        self.design_token
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| Error::Credential("no design token available".to_string()))
    }

    async fn open_url(&self, url: &str) -> Result<()> {
        self.open_url_calls.lock().unwrap().push(url.to_string());

        if let Some(msg) = self.error_on_open_url.lock().unwrap().as_ref() {
            return Err(Error::PreviewOpen(msg.clone()));
        }

        Ok(())
    }
}
