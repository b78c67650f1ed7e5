//! sRGB colors and the WCAG contrast algorithm.
//!
//! [WCAG 2.1 § relative luminance](https://www.w3.org/TR/WCAG21/#dfn-relative-luminance)
//! [WCAG 2.1 § contrast ratio](https://www.w3.org/TR/WCAG21/#dfn-contrast-ratio)

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// An opaque sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Black (#000000), the fallback for unknown colors and text.
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// White (#ffffff), the fallback background.
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Create a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The small named-color table understood by [`parse_color`].
///
/// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
const NAMED_COLORS: &[(&str, &str)] = &[
    ("black", "#000000"),
    ("white", "#ffffff"),
    ("red", "#ff0000"),
    ("green", "#008000"),
    ("blue", "#0000ff"),
    ("gray", "#808080"),
    ("grey", "#808080"),
    ("lightgreen", "#90ee90"),
];

/// Parse a CSS color value.
///
/// Accepts the named colors in the table above, `#rgb`, `#rrggbb` and
/// `rgb(r, g, b)` with integer channels clamped to 0-255. Anything else,
/// including an empty value or invalid hex digits, is black. Input is
/// trimmed and case-insensitive.
#[must_use]
pub fn parse_color(value: &str) -> Rgb {
    let lowered = value.trim().to_lowercase();
    let resolved = NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lowered)
        .map_or(lowered.as_str(), |&(_, hex)| hex);

    if let Some(hex) = resolved.strip_prefix('#') {
        return parse_hex(hex.trim_start_matches('#')).unwrap_or(Rgb::BLACK);
    }

    parse_rgb_function(resolved).unwrap_or(Rgb::BLACK)
}

/// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
///
/// "The three-digit RGB notation (#RGB) is converted into six-digit form
/// (#RRGGBB) by replicating digits, not by adding zeros."
fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();
    match hex.len() {
        3 => Some(Rgb::new(
            channel(&hex[0..1])? * 17,
            channel(&hex[1..2])? * 17,
            channel(&hex[2..3])? * 17,
        )),
        6 => Some(Rgb::new(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

/// Leading `rgb(r, g, b)`; text after the closing parenthesis is ignored.
static RGB_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgb\(\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*\)")
        .expect("valid regex")
});

/// Parse an `rgb()` value. Channels above 255 are clamped.
fn parse_rgb_function(value: &str) -> Option<Rgb> {
    let caps = RGB_FUNCTION.captures(value)?;
    let channel = |i: usize| {
        caps[i]
            .parse::<u16>()
            .map_or(u8::MAX, |c| u8::try_from(c).unwrap_or(u8::MAX))
    };
    Some(Rgb::new(channel(1), channel(2), channel(3)))
}

/// Relative luminance of a color, in `[0, 1]`.
///
/// Each channel is normalized to `[0, 1]` and linearized with
/// `c / 12.92` when `c <= 0.03928`, else `((c + 0.055) / 1.055) ^ 2.4`.
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let linear = |channel: u8| {
        let c = f64::from(channel) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * linear(color.r) + 0.7152 * linear(color.g) + 0.0722 * linear(color.b)
}

/// Contrast ratio between two colors, in `[1, 21]`. Symmetric.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}
