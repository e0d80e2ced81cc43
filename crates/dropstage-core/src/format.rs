//! Formatting helpers for preview overlays.

/// Bytes per kilobyte used in preview overlays.
const BYTES_PER_KB: f64 = 1024.0;

/// Format a byte count as kilobytes with two decimals (e.g., "1.50 KB").
///
/// Ties round up, so 128 bytes is "0.13 KB".
pub fn format_kilobytes(bytes: u64) -> String {
    let hundredths = (bytes as f64 / BYTES_PER_KB * 100.0).round();
    format!("{:.2} KB", hundredths / 100.0)
}
