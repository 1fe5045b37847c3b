//! Preview URL construction
//!
//! Builds the mockup preview URL from the fixed product template and an
//! artwork title. Pure string work; the URL is constructed here but never
//! fetched by this crate.

/// Base address of the mockup preview endpoint
pub const PREVIEW_BASE: &str = "https://app.meumockup.com.br/internal/mockup";

/// Title used when neither the export nor the session supplied one
pub const DEFAULT_TITLE: &str = "Arte sem título";

/// Product template selectors, fixed at build time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockupParams {
    /// Product template (`modelo` query parameter)
    pub model: &'static str,
    /// Product color (`cor` query parameter)
    pub color: &'static str,
}

/// The product this build renders previews on
pub const PRODUCT: MockupParams = MockupParams {
    model: "camiseta-premium",
    color: "branca",
};

/// Build the preview URL for an artwork title.
///
/// Uses `title` if non-empty after trimming, falling back to the session's
/// last known title, then to [`DEFAULT_TITLE`]. Every variable segment is
/// percent-encoded independently, so titles containing `&`, `=`, or
/// non-ASCII characters embed safely.
pub fn build_preview_url(title: &str, fallback: &str) -> String {
    let title = match (title.trim(), fallback.trim()) {
        ("", "") => DEFAULT_TITLE,
        ("", last) => last,
        (given, _) => given,
    };

    format!(
        "{PREVIEW_BASE}?modelo={}&arte={}&cor={}",
        urlencoding::encode(PRODUCT.model),
        urlencoding::encode(title),
        urlencoding::encode(PRODUCT.color),
    )
}
