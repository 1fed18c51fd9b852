//! US currency formatting for amount fields.
//!
//! The API returns prices and contract amounts as decimal strings
//! (`"1234.56"`). Rendering follows the `en-US` currency style: a leading
//! `$`, thousands grouped by commas, and exactly two fraction digits.

/// Format a decimal amount string as US currency.
///
/// Empty input renders as an empty string. Input that is not a finite
/// number is returned unchanged.
#[must_use]
pub fn format_usd(amount: &str) -> String {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let Ok(value) = trimmed.parse::<f64>() else {
        return amount.to_string();
    };
    if !value.is_finite() {
        return amount.to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, ch) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${grouped}.{fraction}")
}

/// Format an optional amount, rendering `None` as an empty string.
#[must_use]
pub fn format_usd_opt(amount: Option<&str>) -> String {
    amount.map(format_usd).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_two_decimals() {
        assert_eq!(format_usd("1234.56"), "$1,234.56");
        assert_eq!(format_usd("1000000"), "$1,000,000.00");
    }

    #[test]
    fn small_amounts_have_no_separator() {
        assert_eq!(format_usd("9.9"), "$9.90");
        assert_eq!(format_usd("0"), "$0.00");
        assert_eq!(format_usd("999.999"), "$1,000.00");
    }

    #[test]
    fn negative_amounts_keep_sign_before_symbol() {
        assert_eq!(format_usd("-42.5"), "-$42.50");
    }

    #[test]
    fn empty_and_unparsable_inputs() {
        assert_eq!(format_usd(""), "");
        assert_eq!(format_usd("   "), "");
        assert_eq!(format_usd("None"), "None");
        assert_eq!(format_usd_opt(None), "");
        assert_eq!(format_usd_opt(Some("12")), "$12.00");
    }
}
