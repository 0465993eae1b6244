//! Human-readable byte sizes for the status line and load banner.

/// Binary unit suffixes, smallest first. Values past the last unit clamp to it.
const UNITS: [&str; 7] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

/// Format `bytes` with two decimals and a binary unit (`1536` -> `"1.50 KiB"`).
pub fn format_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;

    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{:.2} {}", value, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bytes() {
        assert_eq!(format_bytes(0), "0.00 B");
    }

    #[test]
    fn just_below_one_kib_stays_in_bytes() {
        assert_eq!(format_bytes(1023), "1023.00 B");
    }

    #[test]
    fn one_and_a_half_kib() {
        assert_eq!(format_bytes(1536), "1.50 KiB");
    }

    #[test]
    fn mebibytes() {
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.00 MiB");
    }

    #[test]
    fn exbibyte_boundary() {
        assert_eq!(format_bytes(1u64 << 60), "1.00 EiB");
    }

    #[test]
    fn largest_value_clamps_at_exbibytes() {
        // u64::MAX is just under 16 EiB; there is no larger unit to move into
        assert_eq!(format_bytes(u64::MAX), "16.00 EiB");
    }
}
