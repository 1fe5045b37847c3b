//! Local host adapter for the `mockup` binary
//!
//! Stands in for the design host when running from a terminal: "exporting"
//! reads files from disk, credentials come from flags or the environment,
//! and opening the preview prints a terminal hyperlink.

use crate::error::{Error, Result};
use crate::host::HostCapabilities;
use crate::types::{ExportFile, ExportOutcome};
use async_trait::async_trait;
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable holding the user bearer token
pub const USER_TOKEN_VAR: &str = "MOCKUP_USER_TOKEN";

/// Environment variable holding the design document token
pub const DESIGN_TOKEN_VAR: &str = "MOCKUP_DESIGN_TOKEN";

/// Host adapter backed by the local filesystem and environment
#[derive(Debug, Clone, Default)]
pub struct LocalHost {
    files: Vec<PathBuf>,
    title: Option<String>,
    user_token: Option<String>,
    design_token: Option<String>,
}

impl LocalHost {
    /// Create a host that "exports" the given files under the given title
    pub fn new(files: Vec<PathBuf>, title: Option<String>) -> Self {
        Self {
            files,
            title,
            user_token: None,
            design_token: None,
        }
    }

    /// Override the user token instead of reading [`USER_TOKEN_VAR`]
    #[must_use]
    pub fn with_user_token(mut self, token: Option<String>) -> Self {
        self.user_token = token;
        self
    }

    /// Override the design token instead of reading [`DESIGN_TOKEN_VAR`]
    #[must_use]
    pub fn with_design_token(mut self, token: Option<String>) -> Self {
        self.design_token = token;
        self
    }
}

/// Declared media type for a path, by extension.
///
/// Unknown extensions are passed through as octet-stream; the upload
/// service decides what it accepts.
fn content_type_for(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
    .to_string()
}

/// OSC 8 hyperlink when the terminal supports it, plain URL otherwise
fn hyperlink(url: &str) -> String {
    if supports_hyperlinks::on(supports_hyperlinks::Stream::Stdout) {
        terminal_link::Link::new(url, url).to_string()
    } else {
        url.to_string()
    }
}

fn token_from(explicit: Option<&String>, var: &str) -> Result<String> {
    if let Some(token) = explicit {
        return Ok(token.clone());
    }
    env::var(var).map_err(|_| Error::Credential(format!("{var} not set")))
}

#[async_trait]
impl HostCapabilities for LocalHost {
    async fn request_export(&self, _accepted_types: &[&str]) -> Result<ExportOutcome> {
        let mut files = Vec::with_capacity(self.files.len());
        for path in &self.files {
            let data = tokio::fs::read(path)
                .await
                .map_err(|e| Error::Export(format!("cannot read {}: {e}", path.display())))?;
            files.push(ExportFile {
                content_type: content_type_for(path),
                data,
            });
        }

        let title = self.title.clone().or_else(|| {
            // Fall back to the first file's stem, like a host would name a document
            self.files
                .first()
                .and_then(|p| p.file_stem())
                .and_then(|s| s.to_str())
                .map(String::from)
        });

        Ok(ExportOutcome::Completed { title, files })
    }

    async fn user_token(&self) -> Result<String> {
        token_from(self.user_token.as_ref(), USER_TOKEN_VAR)
    }

    async fn design_token(&self) -> Result<String> {
        token_from(self.design_token.as_ref(), DESIGN_TOKEN_VAR)
    }

    async fn open_url(&self, url: &str) -> Result<()> {
        // A terminal cannot open a browser on the host's behalf; render the
        // link and let the terminal emulator make it clickable.
        println!("{}", hyperlink(url));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn export_reads_files_and_declares_types() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("logo.png");
        std::fs::File::create(&path)
            .and_then(|mut f| f.write_all(b"\x89PNG"))
            .expect("write fixture");

        let host = LocalHost::new(vec![path], Some("Logo".to_string()));
        let outcome = host
            .request_export(crate::host::ACCEPTED_EXPORT_TYPES)
            .await
            .expect("export");

        let ExportOutcome::Completed { title, files } = outcome else {
            panic!("expected completed export");
        };
        assert_eq!(title.as_deref(), Some("Logo"));
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].content_type, "image/png");
        assert_eq!(files[0].data, b"\x89PNG");
    }

    #[tokio::test]
    async fn missing_file_is_an_export_error() {
        let host = LocalHost::new(vec![PathBuf::from("/nonexistent/art.png")], None);
        let err = host
            .request_export(crate::host::ACCEPTED_EXPORT_TYPES)
            .await
            .expect_err("should fail");
        assert!(matches!(err, Error::Export(_)));
    }

    #[tokio::test]
    async fn title_falls_back_to_file_stem() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cartaz-final.jpg");
        std::fs::write(&path, b"jpg").expect("write fixture");

        let host = LocalHost::new(vec![path], None);
        let ExportOutcome::Completed { title, .. } = host
            .request_export(crate::host::ACCEPTED_EXPORT_TYPES)
            .await
            .expect("export")
        else {
            panic!("expected completed export");
        };
        assert_eq!(title.as_deref(), Some("cartaz-final"));
    }

    #[tokio::test]
    async fn explicit_tokens_win_over_environment() {
        let host = LocalHost::new(vec![], None)
            .with_user_token(Some("u-tok".to_string()))
            .with_design_token(Some("d-tok".to_string()));
        assert_eq!(host.user_token().await.expect("token"), "u-tok");
        assert_eq!(host.design_token().await.expect("token"), "d-tok");
    }

    #[test]
    fn unknown_extension_is_octet_stream() {
        assert_eq!(
            content_type_for(Path::new("art.svg")),
            "application/octet-stream"
        );
    }
}
