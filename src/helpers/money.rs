//! Vietnamese đồng formatting, matching the `vi-VN` locale: `.` as thousands separator,
//! no decimals, ` ₫` suffix.

const CURRENCY_SUFFIX: &str = " ₫";

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_vnd(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("0{}", CURRENCY_SUFFIX);
    }

    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{}{}{}", sign, group_digits(&digits), CURRENCY_SUFFIX)
}

pub fn format_optional_vnd(amount: Option<f64>) -> String {
    amount.map_or_else(|| "-".to_string(), format_vnd)
}

/// Keep only the digits of a money input, e.g. `"1.000.000 ₫"` becomes `"1000000"`.
pub fn parse_money_input(formatted: &str) -> String {
    formatted.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn formats_with_dot_groups() {
        assert_eq!(format_vnd(1234567.0), "1.234.567 ₫");
        assert_eq!(format_vnd(999.0), "999 ₫");
        assert_eq!(format_vnd(0.0), "0 ₫");
        assert_eq!(format_vnd(1000.4), "1.000 ₫");
        assert_eq!(format_vnd(-25000.0), "-25.000 ₫");
    }

    #[test]
    fn optional_amounts() {
        assert_eq!(format_optional_vnd(None), "-");
        assert_eq!(format_optional_vnd(Some(5000000.0)), "5.000.000 ₫");
    }

    #[test]
    fn input_helpers() {
        assert_eq!(parse_money_input("1.000.000 ₫"), "1000000");
        assert_eq!(parse_money_input("abc"), "");
    }

    proptest! {
        #[test]
        fn formatted_amount_parses_back(n in 0u64..1_000_000_000_000u64) {
            #[allow(clippy::cast_precision_loss)]
            let formatted = format_vnd(n as f64);
            prop_assert_eq!(parse_money_input(&formatted), n.to_string());
        }
    }
}
