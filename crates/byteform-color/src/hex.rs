// SPDX-License-Identifier: MIT
//
// Hex / RGB / RGBA string primitives.
//
// These operate on CSS text, not on `Color`: the token expander feeds
// palette strings straight through them, and the output must be exactly
// what a stylesheet expects (`"R, G, B"` triplets, `rgba(R, G, B, a)`).

use std::sync::LazyLock;

use regex::Regex;

/// Exactly three hex byte pairs, optional leading `#`, any case.
static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#?([a-f\d]{2})([a-f\d]{2})([a-f\d]{2})$")
        .expect("hex color pattern is a valid regex")
});

/// Split a 6-digit hex color into its 8-bit channels.
///
/// Accepts `#rrggbb` or `rrggbb`, case-insensitive. Shorthand (`#rgb`) and
/// alpha forms are rejected.
#[must_use]
pub fn hex_to_rgb8(hex: &str) -> Option<(u8, u8, u8)> {
    let caps = HEX_PATTERN.captures(hex)?;
    let channel = |i: usize| u8::from_str_radix(&caps[i], 16).ok();
    Some((channel(1)?, channel(2)?, channel(3)?))
}

/// Convert a 6-digit hex color to an `"R, G, B"` triplet string.
///
/// Returns `None` when the input is not exactly three hex byte pairs.
///
/// ```
/// use byteform_color::hex_to_rgb;
///
/// assert_eq!(hex_to_rgb("#106EC1").as_deref(), Some("16, 110, 193"));
/// assert_eq!(hex_to_rgb("#fff"), None);
/// ```
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Option<String> {
    let (r, g, b) = hex_to_rgb8(hex)?;
    Some(format!("{r}, {g}, {b}"))
}

/// Encode 8-bit channels as a lowercase `#rrggbb` string.
#[must_use]
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Format a CSS `rgba(...)` value from a base color and an opacity.
///
/// `#`-prefixed 6-digit hex input is expanded to its RGB triplet. Anything
/// else, including `#`-prefixed strings that are not 6-digit hex, is placed
/// into the template unchanged. `opacity` is written as given, without
/// clamping.
///
/// ```
/// use byteform_color::rgba;
///
/// assert_eq!(rgba("#ff0000", 0.5), "rgba(255, 0, 0, 0.5)");
/// assert_eq!(rgba("var(--accent)", 0.5), "rgba(var(--accent), 0.5)");
/// ```
#[must_use]
pub fn rgba(color: &str, opacity: f64) -> String {
    let channels = if color.starts_with('#') {
        hex_to_rgb(color)
    } else {
        None
    };

    match channels {
        Some(rgb) => format!("rgba({rgb}, {opacity})"),
        None => format!("rgba({color}, {opacity})"),
    }
}
