//! Number formatting for currency and percentage output.

/// Format a number with `,` thousands separators and a fixed number of decimals.
///
/// Matches the `{:,.Nf}` mini-language: the sign precedes the digits and
/// rounding happens before grouping, so `999.999` becomes `"1,000.00"`.
#[must_use]
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let raw = format!("{value:.decimals$}");
    let (sign, unsigned) = raw
        .strip_prefix('-')
        .map_or(("", raw.as_str()), |rest| ("-", rest));
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    // Non-finite values ("inf", "NaN") have nothing to group.
    if !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return raw;
    }

    let mut out = String::with_capacity(raw.len() + int_part.len() / 3);
    out.push_str(sign);
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Format a dollar amount, e.g. `$1,234.50`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    format!("${}", format_grouped(amount, 2))
}

/// Format a ratio already scaled to percent with one decimal, e.g. `25.0%`.
#[must_use]
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_grouping() {
        assert_eq!(format_grouped(0.0, 2), "0.00");
        assert_eq!(format_grouped(999.0, 2), "999.00");
        assert_eq!(format_grouped(1000.0, 2), "1,000.00");
        assert_eq!(format_grouped(1_234_567.891, 2), "1,234,567.89");
        assert_eq!(format_grouped(123_456_789_012.5, 2), "123,456,789,012.50");
        assert_eq!(format_grouped(12345.0, 0), "12,345");
    }

    #[test]
    fn test_rounding_carries_into_grouping() {
        assert_eq!(format_grouped(999.999, 2), "1,000.00");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_currency(-1234.5), "$-1,234.50");
        assert_eq!(format_grouped(-999.0, 2), "-999.00");
    }

    #[test]
    fn test_non_finite_passthrough() {
        assert_eq!(format_grouped(f64::INFINITY, 2), "inf");
        assert_eq!(format_grouped(f64::NAN, 2), "NaN");
    }

    #[test]
    fn test_currency_and_percent() {
        assert_eq!(format_currency(1000.0), "$1,000.00");
        assert_eq!(format_currency(250.0), "$250.00");
        assert_eq!(format_percent(25.0), "25.0%");
        assert_eq!(format_percent(33.333_33), "33.3%");
    }

    proptest! {
        #[test]
        fn prop_grouping_only_inserts_commas(value in -1.0e15f64..1.0e15f64) {
            let grouped = format_grouped(value, 2);
            prop_assert_eq!(grouped.replace(',', ""), format!("{value:.2}"));
        }

        #[test]
        fn prop_groups_are_three_digits(value in 0.0f64..1.0e15f64) {
            let grouped = format_grouped(value, 2);
            let int_part = grouped.split('.').next().unwrap_or_default();
            let groups: Vec<&str> = int_part.split(',').collect();
            prop_assert!(!groups[0].is_empty() && groups[0].len() <= 3);
            for group in &groups[1..] {
                prop_assert_eq!(group.len(), 3);
            }
        }
    }
}
