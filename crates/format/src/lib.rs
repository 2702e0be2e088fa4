//! # Decimal Formatting
//!
//! This crate is the formatting collaborator behind the number input widget:
//! it turns a [`RawValue`](numfield_types::RawValue) into a grouped, padded
//! decimal string under a [`DigitInfo`] specification and a [`Locale`].
//!
//! Failure is part of the contract. Anything that is not strictly numeric
//! (free text, an unset value, a timestamp) is rejected with
//! [`FormatError::NotNumeric`] so callers can fall back to showing the raw
//! value instead of a bogus rendering.

mod decimal;
mod digit_info;
mod locale;

pub use decimal::format_decimal;
pub use digit_info::DigitInfo;
pub use locale::Locale;

use thiserror::Error;

/// Errors produced while parsing a digit specifier or formatting a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The digit-info string does not follow `{minInt}.{minFrac}-{maxFrac}`.
    #[error("invalid digit info specifier '{0}'")]
    InvalidDigitInfo(String),
    /// Minimum fraction digits exceed the maximum.
    #[error("fraction digit range is inverted: min {min} > max {max}")]
    InvertedFractionRange { min: usize, max: usize },
    /// The value cannot be interpreted as a finite decimal.
    #[error("value '{0}' cannot be formatted as a decimal")]
    NotNumeric(String),
}
