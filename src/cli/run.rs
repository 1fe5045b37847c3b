//! Upload and preview commands

use crate::cli::style::{check, cross, spinner_style, Stylize};
use anstream::{eprintln, println};
use async_trait::async_trait;
use indicatif::ProgressBar;
use mockup_bridge::error::Error;
use mockup_bridge::format::{format_bytes, format_duration_ms};
use mockup_bridge::host::LocalHost;
use mockup_bridge::preview::build_preview_url;
use mockup_bridge::session::{Phase, Session, SessionObserver};
use mockup_bridge::types::UploadResponse;
use mockup_bridge::upload::UploadClient;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Observer that renders the lifecycle to the terminal
struct CliObserver {
    spinner: Mutex<Option<ProgressBar>>,
}

impl CliObserver {
    fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn stop_spinner(&self) {
        if let Some(spinner) = self.spinner.lock().unwrap().take() {
            spinner.finish_and_clear();
        }
    }
}

#[async_trait]
impl SessionObserver for CliObserver {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::Exporting => println!("{}...", "Exporting artwork".emphasis()),
            Phase::Uploading => {
                let spinner = ProgressBar::new_spinner().with_style(spinner_style());
                spinner.set_message("Uploading to the mockup service...");
                spinner.enable_steady_tick(Duration::from_millis(80));
                *self.spinner.lock().unwrap() = Some(spinner);
            }
            Phase::Idle => {
                self.stop_spinner();
                println!("{}", "Export cancelled, nothing uploaded".muted());
            }
            Phase::Success | Phase::Failed => self.stop_spinner(),
        }
    }

    async fn on_upload_accepted(&self, response: &UploadResponse) {
        println!("{} Upload accepted", check());
        if let Some(size) = response.size {
            println!("  size: {}", format_bytes(size).accent());
        }
        if let Some(ms) = response.timings.and_then(|t| t.total_ms) {
            println!("  took: {}", format_duration_ms(ms).accent());
        }
        if !response.url.is_empty() {
            println!("  stored at: {}", response.url.accent());
        }
    }

    async fn on_preview_link(&self, url: &str, opened: bool) {
        if !opened {
            println!("Open the preview manually: {}", url.accent());
        }
    }

    async fn on_error(&self, error: &Error) {
        eprintln!("{} {}", cross(), error.to_string().error());
    }
}

/// Run a full export → upload → preview session over local files
pub async fn run_upload(
    files: Vec<PathBuf>,
    title: Option<String>,
    endpoint: Option<&str>,
    user_token: Option<String>,
    design_token: Option<String>,
) -> anyhow::Result<()> {
    let host = LocalHost::new(files, title)
        .with_user_token(user_token)
        .with_design_token(design_token);
    let uploader = endpoint.map_or_else(UploadClient::new, UploadClient::with_base_url);

    let mut session = Session::with_uploader(Arc::new(host), uploader);
    let observer = CliObserver::new();
    let phase = session.start(&observer).await;

    if phase == Phase::Failed {
        eprintln!("{}", "Upload failed - run the same command to try again".muted());
        anyhow::bail!(
            session
                .snapshot()
                .last_error
                .unwrap_or_else(|| "upload failed".to_string())
        );
    }

    Ok(())
}

/// Print the preview URL for a title without contacting the service
pub fn run_preview(title: Option<&str>) {
    println!("{}", build_preview_url(title.unwrap_or(""), ""));
}
