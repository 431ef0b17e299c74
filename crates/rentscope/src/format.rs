//! Display formatting for engine results
//!
//! The engine returns raw numerics; everything about currency symbols and
//! rounding lives here.

/// Format an AED amount with thousands separators and no decimals
pub fn format_aed(value: f64) -> String {
    let abs_value = value.abs();
    let whole = abs_value.round() as i64;

    // Add thousands separators
    let digits = whole.to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let grouped: String = result.chars().rev().collect();

    if value >= 0.0 {
        format!("{grouped} AED")
    } else {
        format!("-{grouped} AED")
    }
}

/// Format an AED amount in compact form (e.g., 2.1M AED, 450K AED)
pub fn format_compact_aed(value: f64) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 1_000_000.0 {
        format!("{}{:.1}M AED", sign, abs_value / 1_000_000.0)
    } else if abs_value >= 1_000.0 {
        format!("{}{:.0}K AED", sign, abs_value / 1_000.0)
    } else {
        format!("{}{:.0} AED", sign, abs_value)
    }
}

/// Format a percentage already expressed in [0, 100]
pub fn format_percentage(value: f64) -> String {
    format!("{value:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_aed() {
        assert_eq!(format_aed(0.0), "0 AED");
        assert_eq!(format_aed(5_000.0), "5,000 AED");
        assert_eq!(format_aed(1_234_567.4), "1,234,567 AED");
        assert_eq!(format_aed(-65_000.0), "-65,000 AED");
    }

    #[test]
    fn test_format_aed_rounds() {
        assert_eq!(format_aed(999.6), "1,000 AED");
    }

    #[test]
    fn test_format_compact_aed() {
        assert_eq!(format_compact_aed(2_100_000.0), "2.1M AED");
        assert_eq!(format_compact_aed(450_000.0), "450K AED");
        assert_eq!(format_compact_aed(50.0), "50 AED");
        assert_eq!(format_compact_aed(-450_000.0), "-450K AED");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(33.333), "33.3%");
    }
}
