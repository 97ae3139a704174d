//! Formatting utilities for display values.

/// Units of the base-1024 size ladder.
const SIZE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Format a byte count for display (e.g., "512 B", "1.5 KB", "2 MB").
///
/// The unit index is `floor(log(size) / log(1024))`, clamped to the ladder;
/// the value is rounded to one decimal place with a trailing `.0` dropped.
/// Zero is special-cased to `"0 B"` since `log(0)` is undefined.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return format!("0 {}", SIZE_UNITS[0]);
    }

    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    // Sizes past the ladder end clamp to the last unit.
    let exponent = exponent.min(SIZE_UNITS.len() - 1);

    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (value * 10.0).round() / 10.0;

    if rounded.fract() == 0.0 {
        format!("{} {}", rounded as u64, SIZE_UNITS[exponent])
    } else {
        format!("{:.1} {}", rounded, SIZE_UNITS[exponent])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bytes() {
        assert_eq!(format_file_size(0), "0 B");
    }

    #[test]
    fn test_unit_boundaries() {
        assert_eq!(format_file_size(1), "1 B");
        assert_eq!(format_file_size(500), "500 B");
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
    }

    #[test]
    fn test_larger_units() {
        assert_eq!(format_file_size(1_572_864), "1.5 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024), "5 GB");
    }

    #[test]
    fn test_clamps_past_ladder_end() {
        // 2 TB has no unit of its own; it renders in GB.
        assert_eq!(format_file_size(2 * 1024_u64.pow(4)), "2048 GB");
    }
}
