//! Display helpers for upload summaries

/// Format a byte count for display (binary units).
///
/// `204800` renders as `"200 KB"`.
#[allow(clippy::cast_precision_loss)]
pub fn format_bytes(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;

    let bytes_f = bytes as f64;
    if bytes_f >= MB {
        scaled(bytes_f / MB, "MB")
    } else if bytes_f >= KB {
        scaled(bytes_f / KB, "KB")
    } else {
        format!("{bytes} B")
    }
}

/// Format a millisecond duration for display.
///
/// `1200` renders as `"1.20 s"`, sub-second values as `"350 ms"`.
#[allow(clippy::cast_precision_loss)]
pub fn format_duration_ms(ms: u64) -> String {
    if ms >= 1000 {
        format!("{:.2} s", ms as f64 / 1000.0)
    } else {
        format!("{ms} ms")
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_cmp
)]
fn scaled(value: f64, unit: &str) -> String {
    // Whole multiples print without a decimal point
    if value.fract().abs() < 0.05 {
        format!("{} {unit}", value.trunc() as u64)
    } else {
        format!("{value:.1} {unit}")
    }
}
