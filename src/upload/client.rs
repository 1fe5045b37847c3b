//! HTTP client for the export upload endpoint

use crate::error::{Error, Result};
use crate::types::{ExportFile, UploadResponse};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::Client;
use serde::Serialize;

/// Production base address of the upload service
pub const UPLOAD_BASE: &str = "https://app.meumockup.com.br";

/// Endpoint path for artwork exports
const EXPORT_PATH: &str = "/api/canva/export";

/// Request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Reason shown when the service rejects an upload without saying why
const GENERIC_REJECTION: &str = "The upload service rejected the export";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportPayload<'a> {
    title: &'a str,
    files: Vec<FilePayload>,
    design_token: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FilePayload {
    content_type: String,
    data: String,
}

/// Client for the fixed upload endpoint
pub struct UploadClient {
    client: Client,
    base_url: String,
}

impl Default for UploadClient {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadClient {
    /// Create a client against the production service
    pub fn new() -> Self {
        Self::with_base_url(UPLOAD_BASE)
    }

    /// Create a client against a different base address (tests, staging)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Submit an export as a single JSON POST.
    ///
    /// The user token travels as a bearer credential; the design token and
    /// base64-encoded file blobs travel in the body. An empty `files` slice
    /// is forwarded as-is; the service decides whether that is valid.
    pub async fn submit_export(
        &self,
        title: &str,
        files: &[ExportFile],
        user_token: &str,
        design_token: &str,
    ) -> Result<UploadResponse> {
        let payload = ExportPayload {
            title,
            files: files
                .iter()
                .map(|f| FilePayload {
                    content_type: f.content_type.clone(),
                    data: BASE64.encode(&f.data),
                })
                .collect(),
            design_token,
        };

        let url = format!("{}{EXPORT_PATH}", self.base_url);
        tracing::debug!(%url, file_count = files.len(), "submitting export");

        let response = self
            .client
            .post(&url)
            .bearer_auth(user_token)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        // Rejections can arrive with any status; the body's `ok` field is
        // authoritative, so parse before looking at the status code.
        let parsed: UploadResponse = serde_json::from_str(&body).map_err(|e| {
            Error::MalformedResponse(format!("status {status}: {e}"))
        })?;

        if parsed.ok {
            Ok(parsed)
        } else {
            let reason = parsed
                .error
                .filter(|msg| !msg.trim().is_empty())
                .unwrap_or_else(|| GENERIC_REJECTION.to_string());
            Err(Error::UploadRejected(reason))
        }
    }
}
