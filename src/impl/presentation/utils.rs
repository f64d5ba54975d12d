use num_format::{Locale, ToFormattedString as _};

use crate::entities::TrendDirection;

/// Market capitalization in euros, German grouping and decimal comma
/// (ex. 1234567.891 => "1.234.567,89 €").
pub(crate) fn format_market_cap(amount: f64) -> String {
    let cents = if amount.is_finite() {
        (amount * 100.0).round() as i64
    } else {
        0
    };
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!(
        "{}{},{:02} €",
        sign,
        (cents / 100).to_formatted_string(&Locale::de),
        cents % 100
    )
}

pub(crate) fn trend_arrow(trend: TrendDirection) -> char {
    match trend {
        TrendDirection::Up => '↑',
        TrendDirection::Down => '↓',
        TrendDirection::Equal => '=',
    }
}

/// Placeholder for empty free-text fields.
pub(crate) fn or_dash(s: &str) -> &str {
    if s.trim().is_empty() {
        "-"
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_market_cap() {
        assert_eq!(format_market_cap(1234567.891), "1.234.567,89 €");
        assert_eq!(format_market_cap(0.0), "0,00 €");
        assert_eq!(format_market_cap(999.999), "1.000,00 €");
        assert_eq!(format_market_cap(-0.5), "-0,50 €");
        assert_eq!(format_market_cap(f64::NAN), "0,00 €");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash("  "), "-");
        assert_eq!(or_dash("Euronext Paris"), "Euronext Paris");
    }
}
