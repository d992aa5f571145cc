/// Formats a byte count as a human-readable size.
///
/// Scales by 1024 through B, KB, MB, GB, TB and stops at the first unit
/// where the value drops below 1024, or at TB no matter how large the
/// input. Always renders two fractional digits: `1536` -> `"1.50 KB"`,
/// `1023` -> `"1023.00 B"`.
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: f64 = 1024.0;

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    format!("{:.2} {}", size, UNITS[unit_index])
}

/// Percentage saved going from `original` to `compressed` bytes.
/// Positive means the output shrank; negative means it grew.
pub fn savings_percent(original: u64, compressed: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    ((original as f64 - compressed as f64) / original as f64) * 100.0
}
