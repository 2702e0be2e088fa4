//! Digit-info specifier parsing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::FormatError;

const DEFAULT_MIN_INTEGER_DIGITS: usize = 1;
const DEFAULT_MIN_FRACTION_DIGITS: usize = 0;
const DEFAULT_MAX_FRACTION_DIGITS: usize = 3;

/// Grammar: `{minInt}.{minFrac}-{maxFrac}`, every part optional but the dot
/// mandatory, e.g. `"1.5-5"`, `".2"`, `"3."`.
static DIGIT_INFO_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)?\.((\d+)(-(\d+))?)?$").expect("digit info regex compiles"));

/// Minimum/maximum digit counts for decimal display.
///
/// Parsed from the compact specifier format used by the widget's `format`
/// input: `"1.5-5"` means at least one integer digit and exactly five
/// fraction digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitInfo {
    /// Minimum digits before the decimal separator (zero-padded up to this).
    pub min_integer_digits: usize,
    /// Minimum digits after the decimal separator (zero-padded up to this).
    pub min_fraction_digits: usize,
    /// Maximum digits after the decimal separator (rounded down to this).
    pub max_fraction_digits: usize,
}

impl Default for DigitInfo {
    /// The defaults applied when a part of the specifier is omitted:
    /// `1.0-3`.
    fn default() -> Self {
        Self {
            min_integer_digits: DEFAULT_MIN_INTEGER_DIGITS,
            min_fraction_digits: DEFAULT_MIN_FRACTION_DIGITS,
            max_fraction_digits: DEFAULT_MAX_FRACTION_DIGITS,
        }
    }
}

impl DigitInfo {
    /// Parses a digit-info specifier.
    ///
    /// # Arguments
    /// * `spec` - A specifier such as `"1.5-5"` (min 1 integer digit, 5 to 5
    ///   fraction digits). Omitted parts fall back to the defaults; a lone
    ///   minimum fraction count raises the maximum to match.
    ///
    /// # Returns
    /// The parsed [`DigitInfo`], or [`FormatError::InvalidDigitInfo`] when
    /// the string does not follow the grammar, or
    /// [`FormatError::InvertedFractionRange`] when an explicit minimum
    /// exceeds an explicit maximum.
    ///
    /// # Example
    /// ```rust
    /// use numfield_format::DigitInfo;
    ///
    /// let digits = DigitInfo::parse("1.5-5").unwrap();
    /// assert_eq!(digits.min_integer_digits, 1);
    /// assert_eq!(digits.min_fraction_digits, 5);
    /// assert_eq!(digits.max_fraction_digits, 5);
    ///
    /// assert!(DigitInfo::parse("five").is_err());
    /// ```
    pub fn parse(spec: &str) -> Result<Self, FormatError> {
        let captures = DIGIT_INFO_PATTERN
            .captures(spec)
            .ok_or_else(|| FormatError::InvalidDigitInfo(spec.to_string()))?;

        let mut digits = DigitInfo::default();
        if let Some(min_int) = captures.get(1) {
            digits.min_integer_digits = parse_count(min_int.as_str(), spec)?;
        }
        let min_frac = captures.get(3);
        let max_frac = captures.get(5);
        if let Some(min) = min_frac {
            digits.min_fraction_digits = parse_count(min.as_str(), spec)?;
        }
        match (min_frac, max_frac) {
            (_, Some(max)) => {
                digits.max_fraction_digits = parse_count(max.as_str(), spec)?;
                if digits.min_fraction_digits > digits.max_fraction_digits {
                    return Err(FormatError::InvertedFractionRange {
                        min: digits.min_fraction_digits,
                        max: digits.max_fraction_digits,
                    });
                }
            }
            (Some(_), None) => {
                // A lone minimum widens the maximum rather than conflicting
                // with the default of 3.
                digits.max_fraction_digits =
                    digits.max_fraction_digits.max(digits.min_fraction_digits);
            }
            (None, None) => {}
        }
        Ok(digits)
    }
}

fn parse_count(text: &str, spec: &str) -> Result<usize, FormatError> {
    text.parse::<usize>()
        .map_err(|_| FormatError::InvalidDigitInfo(spec.to_string()))
}
