//! Display helpers for document cells.
//!
//! Cells are plain strings by the time they reach a renderer, so every numeric
//! value passes through one of these helpers exactly once.

use rust_decimal::Decimal;

/// Placeholder text for fields and rows with no source data.
pub const PLACEHOLDER: &str = "—";

/// Formats an amount with its currency suffix, keeping the sourced scale.
///
/// `500` stays `"500 USD"`, `500.0` stays `"500.0 USD"`.
#[must_use]
pub fn format_amount(value: Decimal, currency: &str) -> String {
    format!("{value} {currency}")
}

/// Formats a value as a float would print: trailing zeros trimmed but at
/// least one fractional digit kept.
///
/// `350` prints as `"350.0"`, `123.450` as `"123.45"`.
#[must_use]
pub fn format_float(value: Decimal) -> String {
    let normalized = value.normalize();
    if normalized.scale() == 0 {
        format!("{normalized}.0")
    } else {
        normalized.to_string()
    }
}

/// Formats a value with a trailing percent sign, keeping the sourced scale.
#[must_use]
pub fn format_percent(value: Decimal) -> String {
    format!("{value}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_amount_keeps_scale() {
        assert_eq!(format_amount(dec!(500), "USD"), "500 USD");
        assert_eq!(format_amount(dec!(750.5), "EUR"), "750.5 EUR");
        assert_eq!(format_amount(dec!(1200.0), "GBP"), "1200.0 GBP");
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(dec!(350)), "350.0");
        assert_eq!(format_float(dec!(350.00)), "350.0");
        assert_eq!(format_float(dec!(123.450)), "123.45");
        assert_eq!(format_float(dec!(0)), "0.0");
        assert_eq!(format_float(dec!(-1.5)), "-1.5");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(dec!(12.0)), "12.0%");
        assert_eq!(format_percent(dec!(8)), "8%");
    }
}
