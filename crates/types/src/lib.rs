//! Shared type definitions for the numfield workspace.
//!
//! The central type is [`RawValue`], the tagged union that carries whatever
//! the host hands the number input: free text the user typed, an actual
//! number, an absent value, or something number-shaped-but-not (a timestamp).
//! Its coercion rules intentionally mirror loosely-typed front-end inputs,
//! where `+value` turns an empty string into `0` and garbage into `NaN`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value as it crosses the widget boundary.
///
/// Hosts may assign any of these shapes to the widget at any time; nothing is
/// validated on write. The widget only interprets the value when formatting
/// or emitting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawValue {
    /// No value at all (an unset or cleared field).
    Null,
    /// A plain numeric value.
    Number(f64),
    /// Free text, typically what the user typed into the field.
    Text(String),
    /// A date-like object; numeric but not formattable as a decimal.
    Timestamp(DateTime<Utc>),
}

impl Default for RawValue {
    fn default() -> Self {
        RawValue::Null
    }
}

impl RawValue {
    /// Coerces the value to a number the way a loosely-typed front end would.
    ///
    /// The table is deliberately quirky to stay compatible with hosts that
    /// relied on the original `+value` semantics:
    ///
    /// - `Null` → `0.0`
    /// - `Number(n)` → `n`
    /// - `Text("")` (after trimming) → `0.0`
    /// - `Text` that parses as a finite decimal → that decimal
    /// - any other `Text` → `NaN`
    /// - `Timestamp` → milliseconds since the Unix epoch
    ///
    /// # Example
    /// ```rust
    /// use numfield_types::RawValue;
    ///
    /// assert_eq!(RawValue::Null.to_number(), 0.0);
    /// assert_eq!(RawValue::Text("  ".into()).to_number(), 0.0);
    /// assert_eq!(RawValue::Text("12.5".into()).to_number(), 12.5);
    /// assert!(RawValue::Text("123re".into()).to_number().is_nan());
    /// ```
    pub fn to_number(&self) -> f64 {
        match self {
            RawValue::Null => 0.0,
            RawValue::Number(n) => *n,
            RawValue::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    parse_decimal(trimmed).unwrap_or(f64::NAN)
                }
            }
            RawValue::Timestamp(ts) => ts.timestamp_millis() as f64,
        }
    }

    /// Returns the value as a finite `f64` when it is strictly numeric.
    ///
    /// Unlike [`RawValue::to_number`], this is the strict reading used by the
    /// formatter: empty text, `Null`, timestamps, and non-finite numbers all
    /// yield `None` instead of a coerced placeholder.
    pub fn as_finite_f64(&self) -> Option<f64> {
        match self {
            RawValue::Number(n) if n.is_finite() => Some(*n),
            RawValue::Text(text) => parse_decimal(text.trim()),
            _ => None,
        }
    }

    /// True when the value is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }
}

/// Strict full-string decimal parse.
///
/// Restricted to the characters a decimal literal may contain so that inputs
/// like `"inf"` or `"NaN"` (which `f64::from_str` would happily accept) are
/// rejected the same way `"abracadabra"` is. Multi-dot strings such as
/// `"123.45.67"` fall out of the `f64` parse itself.
fn parse_decimal(text: &str) -> Option<f64> {
    if text.is_empty() {
        return None;
    }
    let decimal_shaped = text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !decimal_shaped {
        return None;
    }
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

impl fmt::Display for RawValue {
    /// Renders the value verbatim, the way it would appear in an editable
    /// field: `Null` is an empty field, numbers use their shortest decimal
    /// form, text is untouched.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Null => Ok(()),
            RawValue::Number(n) => write!(f, "{n}"),
            RawValue::Text(text) => f.write_str(text),
            RawValue::Timestamp(ts) => f.write_str(&ts.to_rfc3339()),
        }
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Number(n as f64)
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        RawValue::Text(text.to_string())
    }
}

impl From<String> for RawValue {
    fn from(text: String) -> Self {
        RawValue::Text(text)
    }
}

impl From<DateTime<Utc>> for RawValue {
    fn from(ts: DateTime<Utc>) -> Self {
        RawValue::Timestamp(ts)
    }
}

/// A single "update" emission from the number input widget.
///
/// Fired when editing finishes (the field loses focus). Carries either the
/// numeric coercion of what was entered, or the entered value untouched when
/// it could not be formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateEvent {
    /// The emitted value per the blur emission rule.
    pub value: RawValue,
}

impl UpdateEvent {
    pub fn new(value: RawValue) -> Self {
        Self { value }
    }
}

/// Side effects a component reports to its host instead of mutating global
/// state directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// The number input finished an edit and produced an update.
    EmitUpdate(UpdateEvent),
    /// Request application shutdown.
    Quit,
}
