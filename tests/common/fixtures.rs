//! Test data factories for mockup-bridge types
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use mockup_bridge::types::{ExportFile, ExportOutcome};

/// A small PNG-ish blob
pub fn make_png_file() -> ExportFile {
    ExportFile {
        content_type: "image/png".to_string(),
        data: vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A],
    }
}

/// A completed export carrying one PNG under the given title
pub fn make_completed_export(title: &str) -> ExportOutcome {
    ExportOutcome::Completed {
        title: Some(title.to_string()),
        files: vec![make_png_file()],
    }
}

/// A completed export with no title and no files
pub fn make_empty_export() -> ExportOutcome {
    ExportOutcome::Completed {
        title: None,
        files: vec![],
    }
}

/// Upload endpoint success body matching the wire contract
pub fn success_body() -> &'static str {
    r#"{
        "ok": true,
        "path": "uploads/arte.png",
        "url": "https://cdn.meumockup.com.br/uploads/arte.png",
        "requestId": "req-1",
        "bucket": "artwork",
        "size": 204800,
        "contentTypeOut": "image/png",
        "timings": { "totalMs": 1200 }
    }"#
}

/// Upload endpoint rejection body with a reason
pub fn rejection_body(reason: &str) -> String {
    format!(r#"{{"ok":false,"error":"{reason}"}}"#)
}
