// SPDX-License-Identifier: MIT
//
// byteform-color: the color engine behind byteform's design tokens.
//
// Two layers live here. The primitives (`hex`) turn 6-digit hex strings
// into RGB triplets and `rgba(...)` CSS values. The ramp generator (`ramp`)
// takes one seed color in any CSS syntax and derives a 10-step tonal ramp
// by snapping the seed onto a fixed lightness table and re-centering the
// saturation curve around it.
//
// Everything is pure. No global state, no I/O, no caching: every call
// recomputes from its inputs and can run from any thread.

pub mod color;
pub mod error;
pub mod hex;
pub mod ramp;

pub use color::Color;
pub use error::ColorParseError;
pub use hex::{hex_to_rgb, hex_to_rgb8, rgb_to_hex, rgba};
pub use ramp::{
    LIGHTNESS_STEPS, SATURATION_STEPS, STEP_COUNT, ShadeRamp, closest_lightness,
    closest_step_index, generate_color_map, generate_colors,
};
