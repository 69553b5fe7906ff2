// SPDX-License-Identifier: MIT
//
// byteform color type: HSL-native, parsed from any CSS color syntax.
//
// Single-character variable names (r, g, b, h, s, l, p, q, t) are the
// standard convention in color-space math and match the published
// conversion formulas line for line.
#![allow(clippy::many_single_char_names)]
//
// Shade ramps are defined in terms of HSL lightness and saturation, so the
// color is stored in HSL and every tonal operation (set lightness,
// saturate, desaturate) is a single field update. sRGB only appears at the
// edges: on parse and on hex output.
//
// Conversion pipeline:
//
//   CSS text → csscolorparser → 8-bit sRGB → HSL  …  HSL → sRGB → #rrggbb

use std::fmt;

use crate::error::ColorParseError;

// ─── Color ───────────────────────────────────────────────────────────────────

/// A color stored in HSL space with alpha transparency.
///
/// # Examples
///
/// ```
/// use byteform_color::Color;
///
/// let blue = Color::parse("#2b9aff").unwrap();
/// assert!(blue.l > 0.58 && blue.l < 0.59);
///
/// // Tonal operations keep the hue.
/// let pale = blue.set_lightness(0.97).desaturate(0.5);
/// assert_eq!(pale.h, blue.h);
/// ```
#[derive(Clone, Copy)]
pub struct Color {
    /// Hue angle in degrees: 0.0 to 360.0.
    pub h: f64,

    /// Saturation: 0.0 (gray) to 1.0 (fully saturated).
    pub s: f64,

    /// Lightness: 0.0 (black) to 1.0 (white).
    pub l: f64,

    /// Alpha (opacity): 0.0 (fully transparent) to 1.0 (fully opaque).
    pub alpha: f64,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from HSL values.
    ///
    /// - `h`: Hue angle in degrees, 0.0 to 360.0
    /// - `s`: Saturation, 0.0 to 1.0
    /// - `l`: Lightness, 0.0 to 1.0
    #[inline]
    #[must_use]
    pub const fn hsl(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l, alpha: 1.0 }
    }

    /// Create a color from HSL values with alpha.
    #[inline]
    #[must_use]
    pub const fn hsla(h: f64, s: f64, l: f64, alpha: f64) -> Self {
        Self { h, s, l, alpha }
    }

    /// Create a color from sRGB values (0.0 to 1.0 range).
    #[must_use]
    pub fn srgb(r: f64, g: f64, b: f64) -> Self {
        let (h, s, l) = srgb_to_hsl(r, g, b);
        Self { h, s, l, alpha: 1.0 }
    }

    /// Create a color from 8-bit sRGB values (0 to 255).
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::srgb(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    /// Create a color from 8-bit sRGB values with alpha.
    #[must_use]
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let (h, s, l) = srgb_to_hsl(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        );
        Self::hsla(h, s, l, f64::from(a) / 255.0)
    }

    /// Parse any CSS color: hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`),
    /// named colors, `rgb()`/`rgba()`, `hsl()`/`hsla()` and friends.
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] if no CSS color syntax accepts `input`.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let parsed: csscolorparser::Color = input
            .parse()
            .map_err(|err| ColorParseError::new(input, err))?;
        let [r, g, b, a] = parsed.to_rgba8();
        Ok(Self::rgba8(r, g, b, a))
    }

    /// Pure black.
    pub const BLACK: Self = Self::hsl(0.0, 0.0, 0.0);

    /// Pure white.
    pub const WHITE: Self = Self::hsl(0.0, 0.0, 1.0);

    // ─── Alpha ───────────────────────────────────────────────────────────

    /// Return a copy with the given alpha value.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Whether this color is fully opaque (alpha >= 1.0).
    #[inline]
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.alpha >= 1.0
    }

    /// Whether this color has no visible saturation.
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.s.abs() < 1e-9
    }

    // ─── Tonal Operations ────────────────────────────────────────────────

    /// Set lightness to an absolute value (clamped to 0.0–1.0).
    #[inline]
    #[must_use]
    pub const fn set_lightness(self, l: f64) -> Self {
        Self {
            l: l.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Increase saturation by `ratio` of its current value.
    ///
    /// `saturate(0.5)` turns `s = 0.4` into `s = 0.6`. The result is
    /// clamped to 1.0.
    #[inline]
    #[must_use]
    pub fn saturate(self, ratio: f64) -> Self {
        Self {
            s: self.s.mul_add(ratio, self.s).clamp(0.0, 1.0),
            ..self
        }
    }

    /// Decrease saturation by `ratio` of its current value (clamped to 0.0).
    #[inline]
    #[must_use]
    pub fn desaturate(self, ratio: f64) -> Self {
        Self {
            s: (-self.s).mul_add(ratio, self.s).clamp(0.0, 1.0),
            ..self
        }
    }

    // ─── Conversions to sRGB ─────────────────────────────────────────────

    /// Convert to sRGB (each channel 0.0–1.0).
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        let (r, g, b) = hsl_to_srgb(self.h, self.s.clamp(0.0, 1.0), self.l.clamp(0.0, 1.0));
        (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
    }

    /// Convert to 8-bit sRGB.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let (r, g, b) = self.to_srgb();
        (to_u8(r), to_u8(g), to_u8(b))
    }

    /// Convert to a lowercase hex string (`#rrggbb`, or `#rrggbbaa` if
    /// alpha < 1.0).
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        if self.is_opaque() {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            let a = to_u8(self.alpha.clamp(0.0, 1.0));
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "Color::hsl({:.1}, {:.4}, {:.4})", self.h, self.s, self.l)
        } else {
            write!(
                f,
                "Color::hsla({:.1}, {:.4}, {:.4}, {:.2})",
                self.h, self.s, self.l, self.alpha
            )
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        const EPS: f64 = 1e-6;
        (self.s - other.s).abs() < EPS
            && (self.l - other.l).abs() < EPS
            && (self.alpha - other.alpha).abs() < EPS
            && (self.is_achromatic()
                || other.is_achromatic()
                || hue_diff(self.h, other.h) < EPS)
    }
}

impl Default for Color {
    /// Default is fully opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── Conversion Math ─────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
#[inline]
fn normalize_hue(h: f64) -> f64 {
    h.rem_euclid(360.0)
}

/// Absolute hue difference (shortest arc on the color wheel).
#[inline]
fn hue_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

/// Convert sRGB (0.0–1.0) → HSL.
fn srgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) * 0.5;

    // Gray: hue is undefined, default to 0.
    if delta < f64::EPSILON {
        return (0.0, 0.0, l);
    }

    let s = if l <= 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    let sector = if (max - r).abs() < f64::EPSILON {
        (g - b) / delta
    } else if (max - g).abs() < f64::EPSILON {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    (normalize_hue(sector * 60.0), s, l)
}

/// Convert HSL → sRGB (0.0–1.0).
fn hsl_to_srgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if s <= 0.0 {
        return (l, l, l);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l.mul_add(-s, l + s) };
    let p = 2.0f64.mul_add(l, -q);
    let t = normalize_hue(h) / 360.0;

    (
        hue_to_channel(p, q, t + 1.0 / 3.0),
        hue_to_channel(p, q, t),
        hue_to_channel(p, q, t - 1.0 / 3.0),
    )
}

/// One sRGB channel from the HSL helper values `p`, `q` and hue fraction `t`.
#[inline]
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        ((q - p) * 6.0).mul_add(t, p)
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        ((q - p) * 6.0).mul_add(2.0 / 3.0 - t, p)
    } else {
        p
    }
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with round-half-up.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    // ── Parsing ──────────────────────────────────────────────────────────

    #[test]
    fn parse_hex_seed() {
        let color = Color::parse("#2b9aff").unwrap();
        assert_eq!(color.to_rgb8(), (43, 154, 255));
        assert!(approx_eq(color.l, 0.5843, 0.001), "L: {}", color.l);
        assert!(approx_eq(color.s, 1.0, 0.001), "S: {}", color.s);
        assert!(approx_eq(color.h, 208.6, 0.1), "H: {}", color.h);
    }

    #[test]
    fn parse_short_hex() {
        let color = Color::parse("#f80").unwrap();
        assert_eq!(color.to_rgb8(), (255, 136, 0));
    }

    #[test]
    fn parse_named() {
        let color = Color::parse("red").unwrap();
        assert_eq!(color.to_hex(), "#ff0000");
        assert!(approx_eq(color.h, 0.0, 1e-9));
        assert!(approx_eq(color.l, 0.5, 1e-9));
    }

    #[test]
    fn parse_functional_notations() {
        let rgb = Color::parse("rgb(16, 110, 193)").unwrap();
        assert_eq!(rgb.to_hex(), "#106ec1");

        let hsl = Color::parse("hsl(120, 100%, 25%)").unwrap();
        assert_eq!(hsl.to_hex(), "#008000");
    }

    #[test]
    fn parse_keeps_alpha() {
        let color = Color::parse("#ff000080").unwrap();
        assert!(approx_eq(color.alpha, 128.0 / 255.0, 0.001));
        assert!(!color.is_opaque());
    }

    #[test]
    fn parse_invalid_reports_input() {
        let err = Color::parse("not-a-color").unwrap_err();
        assert_eq!(err.input, "not-a-color");
        assert!(err.to_string().contains("not-a-color"));
    }

    #[test]
    fn parse_empty_fails() {
        assert!(Color::parse("").is_err());
    }

    // ── Conversions ──────────────────────────────────────────────────────

    #[test]
    fn srgb_to_hsl_roundtrip() {
        let samples: [(u8, u8, u8); 8] = [
            (255, 0, 0),
            (0, 255, 0),
            (0, 0, 255),
            (255, 255, 0),
            (0, 255, 255),
            (255, 0, 255),
            (200, 100, 50),
            (16, 110, 193),
        ];

        for (r, g, b) in samples {
            let color = Color::rgb8(r, g, b);
            assert_eq!(color.to_rgb8(), (r, g, b), "roundtrip of ({r}, {g}, {b})");
        }
    }

    #[test]
    fn gray_is_achromatic() {
        let gray = Color::rgb8(128, 128, 128);
        assert!(gray.is_achromatic());
        assert!(approx_eq(gray.h, 0.0, 1e-9));
    }

    #[test]
    fn black_and_white_constants() {
        assert_eq!(Color::BLACK.to_hex(), "#000000");
        assert_eq!(Color::WHITE.to_hex(), "#ffffff");
        assert_eq!(Color::default(), Color::BLACK);
    }

    #[test]
    fn hex_is_lowercase() {
        let color = Color::parse("#C86432").unwrap();
        assert_eq!(color.to_hex(), "#c86432");
        assert_eq!(color.to_string(), "#c86432");
    }

    #[test]
    fn translucent_hex_has_alpha_byte() {
        let color = Color::rgb8(255, 0, 0).with_alpha(0.5);
        assert_eq!(color.to_hex(), "#ff000080");
    }

    // ── Tonal operations ─────────────────────────────────────────────────

    #[test]
    fn set_lightness_keeps_hue_and_saturation() {
        let base = Color::hsl(210.0, 0.6, 0.5);
        let light = base.set_lightness(0.92);
        assert!(approx_eq(light.l, 0.92, 1e-12));
        assert!(approx_eq(light.h, 210.0, 1e-12));
        assert!(approx_eq(light.s, 0.6, 1e-12));
    }

    #[test]
    fn set_lightness_clamps() {
        assert!(approx_eq(Color::hsl(0.0, 0.5, 0.5).set_lightness(1.4).l, 1.0, 1e-12));
        assert!(approx_eq(Color::hsl(0.0, 0.5, 0.5).set_lightness(-0.2).l, 0.0, 1e-12));
    }

    #[test]
    fn saturate_is_relative() {
        let c = Color::hsl(30.0, 0.4, 0.5).saturate(0.5);
        assert!(approx_eq(c.s, 0.6, 1e-12), "S: {}", c.s);
    }

    #[test]
    fn desaturate_is_relative() {
        let c = Color::hsl(30.0, 0.4, 0.5).desaturate(0.25);
        assert!(approx_eq(c.s, 0.3, 1e-12), "S: {}", c.s);
    }

    #[test]
    fn saturation_clamps() {
        assert!(approx_eq(Color::hsl(30.0, 0.9, 0.5).saturate(0.5).s, 1.0, 1e-12));
        assert!(approx_eq(Color::hsl(30.0, 0.9, 0.5).desaturate(1.5).s, 0.0, 1e-12));
    }

    #[test]
    fn equality_ignores_hue_when_gray() {
        assert_eq!(Color::hsl(0.0, 0.0, 0.5), Color::hsl(200.0, 0.0, 0.5));
        assert_ne!(Color::hsl(0.0, 0.5, 0.5), Color::hsl(200.0, 0.5, 0.5));
    }

    #[test]
    fn debug_shows_hsl() {
        let dbg = format!("{:?}", Color::hsl(120.0, 0.5, 0.25));
        assert_eq!(dbg, "Color::hsl(120.0, 0.5000, 0.2500)");
    }
}
