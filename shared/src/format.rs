use chrono::{DateTime, FixedOffset};
use std::cmp::Ordering;

/// Shown in place of a metric that could not be computed
pub const METRIC_PLACEHOLDER: &str = "-";

/// Shown in place of a count that is missing from the payload
pub const COUNT_PLACEHOLDER: &str = "--";

/// Compact count for cards: `950`, `1.5K`, `2M`, `3.1B`
pub fn format_compact(value: Option<f64>) -> String {
    let Some(value) = value else {
        return COUNT_PLACEHOLDER.to_string();
    };

    if value < 1_000.0 {
        return plain_number(value);
    }

    let (scaled, suffix) = if value < 1_000_000.0 {
        (value / 1_000.0, "K")
    } else if value < 1_000_000_000.0 {
        (value / 1_000_000.0, "M")
    } else {
        (value / 1_000_000_000.0, "B")
    };

    let rounded = format!("{:.1}", scaled);
    let trimmed = rounded.strip_suffix(".0").unwrap_or(&rounded);
    format!("{}{}", trimmed, suffix)
}

fn plain_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Integer with `.` thousands separators, as the Turkish locale prints it
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}

/// `dd.mm.yyyy`
pub fn format_date(date: &DateTime<FixedOffset>) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Fixed-decimal metric with a suffix, or the placeholder when unavailable
pub fn display_metric(value: Option<f64>, decimals: usize, suffix: &str) -> String {
    match value {
        Some(value) if value.is_finite() => format!("{:.*}{}", decimals, value, suffix),
        _ => METRIC_PLACEHOLDER.to_string(),
    }
}

/// Signed growth figure, e.g. `+12.5%` / `-5.2%`
pub fn display_growth(value: Option<f64>) -> String {
    match value {
        Some(value) if value > 0.0 => format!("+{:.1}%", value),
        Some(value) if value.is_finite() => format!("{:.1}%", value),
        _ => METRIC_PLACEHOLDER.to_string(),
    }
}

/// The `n` items with the largest key, largest first. Ties keep their
/// original order and the input is left as is.
pub fn top_n<T, F>(items: &[T], key: F, n: usize) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> f64,
{
    let mut sorted: Vec<T> = items.to_vec();
    sorted.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal));
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(None, "--" ; "missing")]
    #[test_case(Some(0.0), "0" ; "zero")]
    #[test_case(Some(950.0), "950" ; "below thousand")]
    #[test_case(Some(12.5), "12.5" ; "fraction below thousand")]
    #[test_case(Some(1_000.0), "1K" ; "exact thousand")]
    #[test_case(Some(1_500.0), "1.5K" ; "thousands")]
    #[test_case(Some(2_000_000.0), "2M" ; "millions")]
    #[test_case(Some(3_140_000_000.0), "3.1B" ; "billions")]
    fn test_format_compact(value: Option<f64>, expected: &str) {
        assert_eq!(format_compact(value), expected);
    }

    #[test_case(0, "0")]
    #[test_case(999, "999")]
    #[test_case(1_234, "1.234")]
    #[test_case(1_234_567, "1.234.567")]
    fn test_format_grouped(value: u64, expected: &str) {
        assert_eq!(format_grouped(value), expected);
    }

    #[test]
    fn test_format_date() {
        let date = DateTime::parse_from_rfc3339("2024-03-07T10:00:00+03:00").unwrap();
        assert_eq!(format_date(&date), "07.03.2024");
    }

    #[test]
    fn test_display_metric_placeholder() {
        assert_eq!(display_metric(None, 2, "%"), "-");
        assert_eq!(display_metric(Some(f64::NAN), 2, "%"), "-");
        assert_eq!(display_metric(Some(15.0), 2, "%"), "15.00%");
        assert_eq!(display_metric(Some(0.0), 1, ""), "0.0");
    }

    #[test]
    fn test_display_growth_sign() {
        assert_eq!(display_growth(Some(12.5)), "+12.5%");
        assert_eq!(display_growth(Some(-5.2)), "-5.2%");
        assert_eq!(display_growth(None), "-");
    }

    #[test]
    fn test_top_n_sorts_descending_and_keeps_input() {
        let items = vec![("a", 3.0), ("b", 9.0), ("c", 3.0), ("d", 1.0)];
        let top = top_n(&items, |item| item.1, 3);
        assert_eq!(top, vec![("b", 9.0), ("a", 3.0), ("c", 3.0)]);
        assert_eq!(items[0], ("a", 3.0));
        assert!(top_n(&items, |item| item.1, 0).is_empty());
    }
}
