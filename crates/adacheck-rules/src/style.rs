//! Inline `style` attribute parsing.
//!
//! [CSS Style Attributes](https://www.w3.org/TR/css-style-attr/)
//!
//! Only the declaration list of a single `style` attribute is understood;
//! there is no cascade, no `!important` handling and no shorthand expansion.

use std::collections::HashMap;

/// Map of lowercased property names to trimmed values.
pub type StyleMap = HashMap<String, String>;

/// Minimum `font-size` in px for text to count as large.
pub const LARGE_TEXT_MIN_PX: f64 = 18.0;

/// Minimum `font-size` in px for bold text to count as large.
pub const LARGE_BOLD_TEXT_MIN_PX: f64 = 14.0;

/// Parse a `style` attribute into a [`StyleMap`].
///
/// Declarations are split on `;` and then once on the first `:`.
/// Declarations without a colon are skipped; a repeated property keeps the
/// last value.
#[must_use]
pub fn parse_inline_style(style_text: &str) -> StyleMap {
    style_text
        .split(';')
        .filter_map(|declaration| declaration.split_once(':'))
        .map(|(property, value)| (property.trim().to_lowercase(), value.trim().to_string()))
        .collect()
}

/// Parse a `font-size` value as pixels. A trailing `px` is optional; any
/// other unit or a non-numeric value counts as `0.0`.
#[must_use]
pub fn font_size_px(value: &str) -> f64 {
    let value = value.trim();
    value
        .strip_suffix("px")
        .unwrap_or(value)
        .trim()
        .parse()
        .unwrap_or(0.0)
}

/// Whether a `font-weight` value is bold: a number of at least 700, or the
/// keywords `bold`/`bolder` in any case.
#[must_use]
pub fn is_bold_weight(value: &str) -> bool {
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        // An all-digit value too large for u32 is still heavier than 700.
        return value.parse::<u32>().ok().is_none_or(|weight| weight >= 700);
    }
    value.eq_ignore_ascii_case("bold") || value.eq_ignore_ascii_case("bolder")
}

/// [WCAG 2.1 § large scale](https://www.w3.org/TR/WCAG21/#dfn-large-scale)
///
/// Text is large at 18px and above, or at 14px and above when bold.
#[must_use]
pub fn is_large_text(style: &StyleMap) -> bool {
    let px = style.get("font-size").map_or(0.0, |v| font_size_px(v));
    let bold = style.get("font-weight").is_some_and(|v| is_bold_weight(v));
    px >= LARGE_TEXT_MIN_PX || (px >= LARGE_BOLD_TEXT_MIN_PX && bold)
}
