//! Locale separator settings for decimal display.

/// Separators and grouping used when rendering a decimal.
///
/// This is deliberately a thin value type rather than a CLDR database: the
/// widget only needs to know which characters delimit groups and fractions,
/// and how wide a group is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// Character between the integer and fraction parts.
    pub decimal_separator: char,
    /// Character between integer digit groups.
    pub group_separator: char,
    /// Digits per group; `0` disables grouping.
    pub group_size: usize,
}

impl Locale {
    /// English-style formatting: `12,345.00030`.
    pub const EN: Locale = Locale {
        decimal_separator: '.',
        group_separator: ',',
        group_size: 3,
    };

    /// German-style formatting: `12.345,00030`.
    pub const DE: Locale = Locale {
        decimal_separator: ',',
        group_separator: '.',
        group_size: 3,
    };

    /// Plain formatting with no grouping: `12345.00030`.
    pub const PLAIN: Locale = Locale {
        decimal_separator: '.',
        group_separator: ',',
        group_size: 0,
    };
}

impl Default for Locale {
    fn default() -> Self {
        Locale::EN
    }
}
