//! Number formatting shared by the panels.

/// `52450.3` -> `"52,450.30"`. Prices under 1 keep four decimals.
pub fn format_price(value: f64) -> String {
    let decimals = if value.abs() < 1.0 && value != 0.0 { 4 } else { 2 };
    let fixed = format!("{:.*}", decimals, value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction}")
    }
}

/// Signed with an explicit `+` for gains.
pub fn format_change(value: f64) -> String {
    if value >= 0.0 {
        format!("+{}", format_price(value))
    } else {
        format_price(value)
    }
}

pub fn format_percent(value: f64) -> String {
    if value >= 0.0 { format!("+{:.2}%", value) } else { format!("{:.2}%", value) }
}

/// `$1.02T`, `$28.50B`, `$890.00M`, smaller values as plain dollars.
pub fn format_compact_usd(value: f64) -> String {
    const UNITS: [(f64, &str); 3] = [(1e12, "T"), (1e9, "B"), (1e6, "M")];
    UNITS
        .iter()
        .find(|(scale, _)| value.abs() >= *scale)
        .map(|(scale, unit)| format!("${:.2}{}", value / scale, unit))
        .unwrap_or_else(|| format!("${}", format_price(value)))
}

/// CSS class for a signed change.
pub fn trend_class(value: f64) -> &'static str {
    if value >= 0.0 { "positive" } else { "negative" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_price(52_450.3), "52,450.30");
        assert_eq!(format_price(1_000_000.0), "1,000,000.00");
        assert_eq!(format_price(425.89), "425.89");
        assert_eq!(format_price(0.0), "0.00");
    }

    #[test]
    fn small_prices_keep_precision() {
        assert_eq!(format_price(0.5234), "0.5234");
    }

    #[test]
    fn changes_are_signed() {
        assert_eq!(format_change(1_250.45), "+1,250.45");
        assert_eq!(format_change(-85.23), "-85.23");
        assert_eq!(format_percent(2.44), "+2.44%");
        assert_eq!(format_percent(-2.56), "-2.56%");
    }

    #[test]
    fn compact_units() {
        assert_eq!(format_compact_usd(1.02e12), "$1.02T");
        assert_eq!(format_compact_usd(28.5e9), "$28.50B");
        assert_eq!(format_compact_usd(890e6), "$890.00M");
        assert_eq!(format_compact_usd(950.0), "$950.00");
    }
}
