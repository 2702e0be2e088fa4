//! Terminal rendering for `glyphicon-` icon classes.
//!
//! The icon convention comes from hosts that pass either a literal character
//! (rendered as-is) or an icon-font class name. A terminal has no icon font,
//! so known classes map to a symbol and anything else falls back to a
//! bullet. Classification of icon vs. character lives on the widget state;
//! this module only picks the symbol to draw.

/// Returns the symbol drawn for a `glyphicon-` class.
pub fn glyph_symbol(class: &str) -> &'static str {
    let name = class
        .rfind("glyphicon-")
        .map(|start| &class[start + "glyphicon-".len()..])
        .unwrap_or("");
    match name {
        "usd" => "$",
        "eur" | "euro" => "€",
        "gbp" => "£",
        "yen" => "¥",
        "bitcoin" | "btc" => "₿",
        "time" | "clock" => "◷",
        "calendar" => "▤",
        "star" => "★",
        _ => "•",
    }
}
