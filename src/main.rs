//! mockup - export artwork and preview it on product mockups
//!
//! CLI binary driving the session lifecycle with local files standing in
//! for the design host.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "mockup")]
#[command(about = "Upload artwork and open a product mockup preview")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export local files, upload them, and open the mockup preview
    Upload {
        /// Artwork files to upload
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Artwork title (defaults to the first file's name)
        #[arg(short, long)]
        title: Option<String>,

        /// Override the upload service base URL
        #[arg(long)]
        endpoint: Option<String>,

        /// User bearer token (defaults to $MOCKUP_USER_TOKEN)
        #[arg(long)]
        user_token: Option<String>,

        /// Design document token (defaults to $MOCKUP_DESIGN_TOKEN)
        #[arg(long)]
        design_token: Option<String>,
    },

    /// Print the preview URL for a title without uploading anything
    Preview {
        /// Artwork title to embed in the URL
        #[arg(short, long)]
        title: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Upload {
            files,
            title,
            endpoint,
            user_token,
            design_token,
        } => {
            cli::run_upload(files, title, endpoint.as_deref(), user_token, design_token).await?;
        }
        Commands::Preview { title } => {
            cli::run_preview(title.as_deref());
        }
    }

    Ok(())
}
