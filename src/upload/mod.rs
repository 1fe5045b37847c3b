//! Upload client for the mockup service
//!
//! One JSON POST per session run; retry is a user action one layer up.

mod client;

pub use client::{UploadClient, UPLOAD_BASE};
