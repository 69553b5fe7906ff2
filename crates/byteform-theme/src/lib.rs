//! # byteform-theme: palette tables and design tokens
//!
//! Turns byteform's named color palettes into the flat set of CSS custom
//! properties the component layer styles itself with. One number, the
//! light-variant opacity, parameterizes the whole expansion.
//!
//! # Architecture
//!
//! ```text
//! builtin.rs:  compile-time palette table (blue, red, dark, …, white, black)
//!     │
//!     ▼
//! config.rs:   ThemeConfig { mode, opacity, prefix, palette overrides }
//!     │        merged + validated at load time
//!     ▼
//! tokens.rs:   per-shade tokens, rgba light variants, semantic aliases
//!     │
//!     ▼
//! css.rs:      `selector { --byteform-blue-6: #106ec1; … }`
//! ```
//!
//! # Token names
//!
//! | Source | Tokens |
//! |---|---|
//! | 10-shade palette `blue` | `byteform-blue-0` … `byteform-blue-9`, `byteform-blue-light-0` … `byteform-blue-light-9` |
//! | single color `white` | `byteform-white` |
//! | semantic alias | `byteform-primary`, `byteform-error`, `byteform-dark-background`, … |
//!
//! There is no global theme state: callers hold a [`ThemeConfig`] and pass
//! it to [`theme_to_vars`] wherever tokens are needed.

pub mod builtin;
pub mod config;
pub mod css;
pub mod palette;
pub mod tokens;

pub use builtin::builtin_palette;
pub use config::{ConfigError, ThemeConfig, ThemeMode};
pub use palette::{PaletteEntry, PaletteError, PaletteTable, get_color};
pub use tokens::{ThemeTokenMap, expand_palette, generate_theme_vars, theme_to_vars};
