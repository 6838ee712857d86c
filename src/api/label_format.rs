use crate::core::Measure;

/// Shown wherever a year lookup has no sample.
pub const MISSING_VALUE_PLACEHOLDER: &str = "–";
/// Shown when a stats list has no entries.
pub const EMPTY_STATS_PLACEHOLDER: &str = "n/a";

/// Formats arrivals with thousands separators (`1234567.5` → `1,234,567.5`).
#[must_use]
pub fn format_arrivals(value: f64) -> String {
    if !value.is_finite() {
        return "NaN".to_owned();
    }

    let rounded = (value * 100.0).round() / 100.0;
    let negative = rounded < 0.0;
    let abs = rounded.abs();
    let integer = abs.trunc();
    let fraction = abs - integer;

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(&format!("{integer:.0}")));
    if fraction > 0.0 {
        let decimals = format!("{fraction:.2}");
        let decimals = decimals.trim_start_matches('0').trim_end_matches('0');
        if decimals != "." {
            out.push_str(decimals);
        }
    }
    out
}

/// One decimal and a `%` suffix (`12.345` → `12.3%`).
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Like [`format_percent`] with an explicit `+` for positive values.
#[must_use]
pub fn format_signed_percent(value: f64) -> String {
    if value > 0.0 {
        format!("+{value:.1}%")
    } else {
        format_percent(value)
    }
}

#[must_use]
pub fn format_year(year: f64) -> String {
    format!("{:.0}", year.round())
}

/// Axis/tooltip text for a transformed value under `measure`.
#[must_use]
pub fn format_measure_value(measure: Measure, value: f64) -> String {
    if measure.is_percentage() {
        format_percent(value)
    } else {
        format_arrivals(value)
    }
}

#[must_use]
pub fn format_optional_arrivals(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING_VALUE_PLACEHOLDER.to_owned(), format_arrivals)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{format_arrivals, format_measure_value, format_signed_percent};
    use crate::core::Measure;

    #[test]
    fn arrivals_use_thousands_separators() {
        assert_eq!(format_arrivals(0.0), "0");
        assert_eq!(format_arrivals(999.0), "999");
        assert_eq!(format_arrivals(1_234_567.0), "1,234,567");
        assert_eq!(format_arrivals(-1_000.0), "-1,000");
        assert_eq!(format_arrivals(1_500.5), "1,500.5");
    }

    #[test]
    fn percentages_carry_sign_and_one_decimal() {
        assert_eq!(format_signed_percent(12.345), "+12.3%");
        assert_eq!(format_signed_percent(-4.0), "-4.0%");
        assert_eq!(format_signed_percent(0.0), "0.0%");
        assert_eq!(format_measure_value(Measure::Growth, 50.0), "50.0%");
        assert_eq!(format_measure_value(Measure::Absolute, 5_000.0), "5,000");
    }
}
