//! Decimal rendering: rounding, padding, and digit grouping.

use numfield_types::RawValue;

use crate::{DigitInfo, FormatError, Locale};

/// Formats a raw value as a grouped, padded decimal string.
///
/// Only strictly numeric values are accepted: finite numbers, and text that
/// parses fully as a finite decimal (surrounding whitespace allowed).
/// Everything else — non-numeric text, an unset value, a timestamp, an
/// infinity — is a [`FormatError::NotNumeric`]; callers decide what to show
/// instead.
///
/// # Arguments
/// * `value` - The raw value to render.
/// * `digits` - Digit counts controlling rounding and padding.
/// * `locale` - Separator characters and group width.
///
/// # Returns
/// The rendered string, or [`FormatError::NotNumeric`] for values with no
/// decimal interpretation.
///
/// # Example
/// ```rust
/// use numfield_format::{format_decimal, DigitInfo, Locale};
/// use numfield_types::RawValue;
///
/// let digits = DigitInfo::parse("1.5-5").unwrap();
/// let formatted = format_decimal(&RawValue::Number(12345.0003), &digits, &Locale::EN);
/// assert_eq!(formatted.unwrap(), "12,345.00030");
///
/// let rejected = format_decimal(&RawValue::Text("abracadabra".into()), &digits, &Locale::EN);
/// assert!(rejected.is_err());
/// ```
pub fn format_decimal(
    value: &RawValue,
    digits: &DigitInfo,
    locale: &Locale,
) -> Result<String, FormatError> {
    let number = value
        .as_finite_f64()
        .ok_or_else(|| FormatError::NotNumeric(value.to_string()))?;
    Ok(render(number, digits, locale))
}

fn render(number: f64, digits: &DigitInfo, locale: &Locale) -> String {
    let negative = number.is_sign_negative();
    let rounded = format!("{:.*}", digits.max_fraction_digits, number.abs());
    let (integer_part, fraction_part) = match rounded.split_once('.') {
        Some((integer, fraction)) => (integer.to_string(), fraction.to_string()),
        None => (rounded, String::new()),
    };

    let mut fraction = fraction_part;
    while fraction.len() > digits.min_fraction_digits && fraction.ends_with('0') {
        fraction.pop();
    }
    while fraction.len() < digits.min_fraction_digits {
        fraction.push('0');
    }

    let mut integer = integer_part;
    while integer.len() < digits.min_integer_digits {
        integer.insert(0, '0');
    }

    // A value that rounds to all zeros loses its sign ("-0.00" reads wrong).
    let all_zero = integer.bytes().chain(fraction.bytes()).all(|b| b == b'0');

    let mut out = String::with_capacity(integer.len() + fraction.len() + 8);
    if negative && !all_zero {
        out.push('-');
    }
    out.push_str(&group_digits(&integer, locale));
    if !fraction.is_empty() {
        out.push(locale.decimal_separator);
        out.push_str(&fraction);
    }
    out
}

/// Inserts the locale's group separator every `group_size` digits, counted
/// from the right.
fn group_digits(integer: &str, locale: &Locale) -> String {
    if locale.group_size == 0 || integer.len() <= locale.group_size {
        return integer.to_string();
    }
    let mut out = String::with_capacity(integer.len() + integer.len() / locale.group_size);
    let lead = integer.len() % locale.group_size;
    for (index, digit) in integer.chars().enumerate() {
        if index != 0 && index % locale.group_size == lead % locale.group_size {
            out.push(locale.group_separator);
        }
        out.push(digit);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_fraction_digits() -> DigitInfo {
        DigitInfo::parse("1.5-5").expect("valid digit info")
    }

    #[test]
    fn formats_valid_inputs_with_grouping_and_padding() {
        let digits = five_fraction_digits();
        let cases: &[(RawValue, &str)] = &[
            (RawValue::Text("0.00001".into()), "0.00001"),
            (RawValue::Text("0.012".into()), "0.01200"),
            (RawValue::Text("0.123".into()), "0.12300"),
            (RawValue::Text("0.1".into()), "0.10000"),
            (RawValue::Text("1.1".into()), "1.10000"),
            (RawValue::Text("123".into()), "123.00000"),
            (RawValue::Text("12345".into()), "12,345.00000"),
            (RawValue::Text("12345.0003".into()), "12,345.00030"),
            (RawValue::Text("-12345.0003".into()), "-12,345.00030"),
            (RawValue::Number(0.00001), "0.00001"),
            (RawValue::Number(-12345.0003), "-12,345.00030"),
        ];
        for (value, expected) in cases {
            assert_eq!(
                format_decimal(value, &digits, &Locale::EN).as_deref(),
                Ok(*expected),
                "formatting {value:?}"
            );
        }
    }

    #[test]
    fn rejects_values_with_no_decimal_interpretation() {
        let digits = five_fraction_digits();
        let invalid = [
            RawValue::Text("abracadabra".into()),
            RawValue::Text("123re".into()),
            RawValue::Text("123.45.67".into()),
            RawValue::Null,
            RawValue::Timestamp(chrono_now()),
            RawValue::Number(f64::NAN),
            RawValue::Number(f64::INFINITY),
        ];
        for value in invalid {
            let result = format_decimal(&value, &digits, &Locale::EN);
            assert!(
                matches!(result, Err(FormatError::NotNumeric(_))),
                "expected rejection of {value:?}, got {result:?}"
            );
        }
    }

    #[test]
    fn default_digits_round_to_three_fraction_digits() {
        let digits = DigitInfo::default();
        assert_eq!(
            format_decimal(&RawValue::Number(12345.0003), &digits, &Locale::EN).unwrap(),
            "12,345"
        );
        assert_eq!(
            format_decimal(&RawValue::Number(12345.6789), &digits, &Locale::EN).unwrap(),
            "12,345.679"
        );
    }

    #[test]
    fn pads_integer_digits_to_minimum() {
        let digits = DigitInfo::parse("3.2-2").unwrap();
        assert_eq!(
            format_decimal(&RawValue::Number(7.5), &digits, &Locale::EN).unwrap(),
            "007.50"
        );
    }

    #[test]
    fn locale_controls_separators() {
        let digits = five_fraction_digits();
        let value = RawValue::Number(12345.0003);
        assert_eq!(
            format_decimal(&value, &digits, &Locale::DE).unwrap(),
            "12.345,00030"
        );
        assert_eq!(
            format_decimal(&value, &digits, &Locale::PLAIN).unwrap(),
            "12345.00030"
        );
    }

    #[test]
    fn sign_is_dropped_when_everything_rounds_to_zero() {
        let digits = DigitInfo::parse("1.2-2").unwrap();
        assert_eq!(
            format_decimal(&RawValue::Number(-0.0001), &digits, &Locale::EN).unwrap(),
            "0.00"
        );
    }

    #[test]
    fn formatting_is_idempotent_per_call() {
        let digits = five_fraction_digits();
        let value = RawValue::Text("12345.0003".into());
        let first = format_decimal(&value, &digits, &Locale::EN);
        let second = format_decimal(&value, &digits, &Locale::EN);
        assert_eq!(first, second);
    }

    #[test]
    fn groups_long_integers_correctly() {
        let digits = DigitInfo::parse("1.0-0").unwrap();
        assert_eq!(
            format_decimal(&RawValue::Number(1234567890.0), &digits, &Locale::EN).unwrap(),
            "1,234,567,890"
        );
        assert_eq!(
            format_decimal(&RawValue::Number(100.0), &digits, &Locale::EN).unwrap(),
            "100"
        );
    }

    fn chrono_now() -> chrono::DateTime<chrono::Utc> {
        use chrono::TimeZone;
        chrono::Utc.with_ymd_and_hms(2017, 3, 15, 12, 30, 0).unwrap()
    }
}
