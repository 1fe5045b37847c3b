//! CLI commands
//!
//! Command implementations for the `mockup` binary.

mod run;
mod style;

pub use run::{run_preview, run_upload};
