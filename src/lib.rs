//! mockup-bridge - export artwork from a design host, upload it, preview it
//!
//! Library crate behind the `mockup` binary. The host application (export
//! dialog, credential providers, URL opener) is injected through the
//! [`host::HostCapabilities`] trait so the session lifecycle can be driven
//! and tested without a real host.

pub mod error;
pub mod format;
pub mod host;
pub mod preview;
pub mod session;
pub mod types;
pub mod upload;
