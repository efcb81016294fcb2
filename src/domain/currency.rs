//! Currency display formatting.
//!
//! Amounts in user-facing messages are rounded to whole units and grouped
//! with thousands separators. Codes we know get their symbol; anything else
//! falls back to `"<grouped number> <CODE>"` so an unexpected code still
//! produces a readable string instead of an error. Formatting is display
//! only; no computation happens on formatted strings.

/// Currency assumed when a profile or entry carries no code.
pub const DEFAULT_CURRENCY: &str = "USD";

fn symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "CNY" => Some("CN¥"),
        "INR" => Some("₹"),
        "KRW" => Some("₩"),
        "CAD" => Some("CA$"),
        "AUD" => Some("A$"),
        "NZD" => Some("NZ$"),
        "BRL" => Some("R$"),
        "MXN" => Some("MX$"),
        "CHF" => Some("CHF "),
        _ => None,
    }
}

/// Format an amount for display in the given currency, rounded to 0
/// fraction digits.
pub fn format_amount(value: f64, code: &str) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", value.abs().round());
    let grouped = group_thousands(&digits);
    match symbol(code) {
        Some(sym) => format!("{}{}{}", sign, sym, grouped),
        None => format!("{}{} {}", sign, grouped, code),
    }
}

fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_currency_uses_symbol() {
        assert_eq!(format_amount(1234567.0, "USD"), "$1,234,567");
        assert_eq!(format_amount(500.0, "EUR"), "€500");
        assert_eq!(format_amount(0.0, "USD"), "$0");
    }

    #[test]
    fn test_unknown_currency_falls_back_to_plain_text() {
        assert_eq!(format_amount(1234.0, "ZZZ"), "1,234 ZZZ");
        assert_eq!(format_amount(7.0, "WAT"), "7 WAT");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_amount(-500.0, "EUR"), "-€500");
        assert_eq!(format_amount(-1234.0, "ZZZ"), "-1,234 ZZZ");
    }

    #[test]
    fn test_rounds_to_whole_units() {
        assert_eq!(format_amount(999.5, "USD"), "$1,000");
        assert_eq!(format_amount(999.4, "USD"), "$999");
    }

    #[test]
    fn test_grouping_boundaries() {
        assert_eq!(format_amount(999.0, "USD"), "$999");
        assert_eq!(format_amount(1000.0, "USD"), "$1,000");
        assert_eq!(format_amount(100000.0, "USD"), "$100,000");
    }
}
