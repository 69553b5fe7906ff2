// SPDX-License-Identifier: MIT
//
// Shade ramp generation: one seed color in, ten tonal steps out.
//
// The ramp is anchored on two fixed tables. LIGHTNESS_STEPS fixes the HSL
// lightness of every step, from near-white (0) to near-black (9).
// SATURATION_STEPS is a V-shaped curve with its zero at index 5; the seed
// is snapped to its nearest lightness step and the curve is shifted so the
// seed's own step gets a zero saturation delta. Steps further from the
// seed drift further from its saturation.
//
//   seed ──parse──▶ HSL ──nearest L──▶ base_index
//                    │
//                    └─▶ for i in 0..10:  L = LIGHTNESS_STEPS[i]
//                                         S *= 1 ± |Δsat(i, base)|
//                                         colors[base] = seed

use crate::color::Color;
use crate::error::ColorParseError;

/// Number of steps in every shade ramp.
pub const STEP_COUNT: usize = 10;

/// Target HSL lightness per step, strictly decreasing.
pub const LIGHTNESS_STEPS: [f64; STEP_COUNT] =
    [0.97, 0.92, 0.84, 0.74, 0.62, 0.50, 0.42, 0.34, 0.24, 0.16];

/// Saturation curve aligned with [`LIGHTNESS_STEPS`]; index 5 is the anchor.
pub const SATURATION_STEPS: [f64; STEP_COUNT] =
    [0.35, 0.30, 0.20, 0.12, 0.06, 0.00, 0.06, 0.12, 0.20, 0.30];

// ---------------------------------------------------------------------------
// Nearest step lookup
// ---------------------------------------------------------------------------

/// Index of the lightness step closest to `color`'s HSL lightness.
///
/// Ties resolve to the lower index (first minimum in a left-to-right scan).
#[must_use]
pub fn closest_step_index(color: &Color) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, step) in LIGHTNESS_STEPS.iter().enumerate() {
        let dist = (color.l - step).abs();
        if dist < best_dist {
            best = i;
            best_dist = dist;
        }
    }
    best
}

/// The lightness step value closest to `color`'s HSL lightness.
#[must_use]
pub fn closest_lightness(color: &Color) -> f64 {
    LIGHTNESS_STEPS[closest_step_index(color)]
}

// ---------------------------------------------------------------------------
// ShadeRamp
// ---------------------------------------------------------------------------

/// A 10-step tonal ramp derived from one seed color.
///
/// `colors[base_index]` is the seed exactly as parsed, and
/// [`to_hex_strings`](Self::to_hex_strings) reproduces the seed string
/// byte-for-byte at that position.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadeRamp {
    /// Step the seed was snapped to.
    pub base_index: usize,
    /// Ramp colors, lightest first.
    pub colors: [Color; STEP_COUNT],
    seed: String,
}

impl ShadeRamp {
    /// The seed string this ramp was generated from.
    #[must_use]
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// The seed color (the entry at `base_index`).
    #[must_use]
    pub const fn base(&self) -> Color {
        self.colors[self.base_index]
    }

    /// Hex strings for every step. The `base_index` slot holds the seed
    /// string verbatim; all others are lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex_strings(&self) -> [String; STEP_COUNT] {
        std::array::from_fn(|i| {
            if i == self.base_index {
                self.seed.clone()
            } else {
                self.colors[i].to_hex()
            }
        })
    }
}

/// Generate the shade ramp for `seed`.
///
/// # Errors
///
/// Returns [`ColorParseError`] if `seed` is not a CSS color.
///
/// ```
/// use byteform_color::generate_color_map;
///
/// let ramp = generate_color_map("#2b9aff").unwrap();
/// assert_eq!(ramp.base_index, 4);
/// assert_eq!(ramp.to_hex_strings()[4], "#2b9aff");
/// ```
pub fn generate_color_map(seed: &str) -> Result<ShadeRamp, ColorParseError> {
    let base = Color::parse(seed)?;
    let base_index = closest_step_index(&base);
    let anchor = SATURATION_STEPS[base_index];

    let mut colors: [Color; STEP_COUNT] = std::array::from_fn(|i| {
        let shade = base.set_lightness(LIGHTNESS_STEPS[i]);
        let delta = SATURATION_STEPS[i] - anchor;
        let shade = if delta >= 0.0 {
            shade.saturate(delta)
        } else {
            shade.desaturate(-delta)
        };
        tracing::trace!(step = i, delta, shade = %shade, "derived shade");
        shade
    });
    colors[base_index] = base;

    tracing::debug!(seed, base_index, lightness = base.l, "generated shade ramp");

    Ok(ShadeRamp {
        base_index,
        colors,
        seed: seed.to_owned(),
    })
}

/// Generate the shade ramp for `seed` as hex strings.
///
/// # Errors
///
/// Returns [`ColorParseError`] if `seed` is not a CSS color.
pub fn generate_colors(seed: &str) -> Result<[String; STEP_COUNT], ColorParseError> {
    generate_color_map(seed).map(|ramp| ramp.to_hex_strings())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Tables ──────────────────────────────────────────────────────

    #[test]
    fn lightness_steps_strictly_decrease() {
        for pair in LIGHTNESS_STEPS.windows(2) {
            assert!(pair[0] > pair[1], "{} !> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn saturation_anchor_is_zero() {
        assert_eq!(SATURATION_STEPS[5], 0.0);
        assert_eq!(SATURATION_STEPS.len(), LIGHTNESS_STEPS.len());
    }

    // ── Nearest step ────────────────────────────────────────────────

    #[test]
    fn closest_exact_match() {
        for (i, l) in LIGHTNESS_STEPS.iter().enumerate() {
            let c = Color::hsl(10.0, 0.5, *l);
            assert_eq!(closest_step_index(&c), i);
            assert_eq!(closest_lightness(&c), *l);
        }
    }

    #[test]
    fn closest_snaps_extremes() {
        assert_eq!(closest_step_index(&Color::WHITE), 0);
        assert_eq!(closest_step_index(&Color::BLACK), 9);
    }

    #[test]
    fn closest_tie_goes_to_lower_index() {
        // Both distances are bit-equal in f64 at these lightnesses.
        for (l, expected) in [(0.88, 1), (0.38, 6)] {
            let left = (l - LIGHTNESS_STEPS[expected]).abs();
            let right = (l - LIGHTNESS_STEPS[expected + 1]).abs();
            assert_eq!(left.to_bits(), right.to_bits(), "{l} is not an exact tie");
            assert_eq!(closest_step_index(&Color::hsl(0.0, 0.5, l)), expected);
        }
    }

    #[test]
    fn closest_near_midpoint() {
        assert_eq!(closest_step_index(&Color::hsl(0.0, 0.5, 0.56)), 4);
        assert_eq!(closest_step_index(&Color::hsl(0.0, 0.5, 0.5599)), 5);
        assert_eq!(closest_step_index(&Color::hsl(0.0, 0.5, 0.5601)), 4);
    }

    // ── Ramp generation ─────────────────────────────────────────────

    #[test]
    fn blue_seed_lands_on_step_four() {
        let ramp = generate_color_map("#2b9aff").unwrap();
        assert_eq!(ramp.base_index, 4);
        assert_eq!(ramp.seed(), "#2b9aff");
        assert_eq!(ramp.to_hex_strings()[4], "#2b9aff");
        assert_eq!(ramp.base().to_hex(), "#2b9aff");
    }

    #[test]
    fn derived_steps_use_table_lightness() {
        let ramp = generate_color_map("#2b9aff").unwrap();
        for (i, color) in ramp.colors.iter().enumerate() {
            if i != ramp.base_index {
                assert!((color.l - LIGHTNESS_STEPS[i]).abs() < 1e-12, "step {i}: {}", color.l);
            }
        }
    }

    #[test]
    fn derived_steps_keep_hue() {
        let ramp = generate_color_map("#2b9aff").unwrap();
        let hue = ramp.base().h;
        for color in &ramp.colors {
            assert!((color.h - hue).abs() < 1e-12);
        }
    }

    #[test]
    fn first_step_is_near_white() {
        let ramp = generate_color_map("#2b9aff").unwrap();
        let (r, g, b) = ramp.colors[0].to_rgb8();
        assert!(r > 230 && g > 230 && b > 240, "not near-white: ({r}, {g}, {b})");
        assert!(b >= r, "hue lost: ({r}, {g}, {b})");
    }

    #[test]
    fn saturation_recenters_on_seed() {
        let seed = Color::hsl(120.0, 0.5, 0.34);
        let ramp = generate_color_map(&seed.to_hex()).unwrap();
        assert_eq!(ramp.base_index, 7);

        // Step 3 shares the seed's saturation delta (0.12), so it keeps S.
        assert!((ramp.colors[3].s - ramp.base().s).abs() < 1e-12);
        // Step 5 sits below the anchor and loses 12% of S.
        let expected = ramp.base().s * (1.0 - 0.12);
        assert!((ramp.colors[5].s - expected).abs() < 1e-12);
        // Step 0 sits above it and gains 23%.
        let expected = (ramp.base().s * (1.0 + 0.23)).min(1.0);
        assert!((ramp.colors[0].s - expected).abs() < 1e-12);
    }

    #[test]
    fn seed_reproduced_verbatim_for_any_syntax() {
        for seed in ["#2B9AFF", "teal", "rgb(200, 40, 80)", "hsl(30, 80%, 40%)"] {
            let colors = generate_colors(seed).unwrap();
            let ramp = generate_color_map(seed).unwrap();
            assert_eq!(colors[ramp.base_index], seed);
        }
    }

    #[test]
    fn generate_colors_returns_hex() {
        let colors = generate_colors("#2b9aff").unwrap();
        assert_eq!(colors.len(), STEP_COUNT);
        for (i, hex) in colors.iter().enumerate() {
            assert!(hex.starts_with('#') && hex.len() == 7, "step {i}: {hex}");
        }
    }

    #[test]
    fn invalid_seed_fails() {
        let err = generate_color_map("#zzzzzz").unwrap_err();
        assert_eq!(err.input, "#zzzzzz");
        assert!(generate_colors("").is_err());
    }

    #[test]
    fn deterministic() {
        let a = generate_colors("#e03131").unwrap();
        let b = generate_colors("#e03131").unwrap();
        assert_eq!(a, b);
    }
}
