//! Palette tables: named colors and 10-shade scales.
//!
//! A [`PaletteTable`] is an ordered mapping from palette name to either a
//! full shade scale or a single color. Order is preserved so generated
//! tokens (and the CSS built from them) come out in declaration order.

use std::collections::HashMap;

use byteform_color::{STEP_COUNT, hex_to_rgb8};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::builtin::builtin_palette;
use crate::tokens::{MODE_ALIASES, SEMANTIC_TOKENS};

/// Shade picked when a token names a scale without an index (`"blue"`).
pub const DEFAULT_SHADE: usize = 5;

// ---------------------------------------------------------------------------
// PaletteEntry
// ---------------------------------------------------------------------------

/// One palette: a full shade scale or a single color.
///
/// Deserializes from either a list (`blue = ["#e7f4ff", …]`) or a string
/// (`brand = "#ff5500"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaletteEntry {
    /// Ten shades, lightest first.
    Scale(Vec<String>),
    /// A single color with no shades.
    Single(String),
}

impl PaletteEntry {
    /// Build a scale from any list of color strings.
    #[must_use]
    pub fn scale<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Scale(colors.into_iter().map(Into::into).collect())
    }

    /// Build a single-color entry.
    #[must_use]
    pub fn single(color: impl Into<String>) -> Self {
        Self::Single(color.into())
    }

    /// The shade at `index` of a scale. `None` for single colors.
    #[must_use]
    pub fn shade(&self, index: usize) -> Option<&str> {
        match self {
            Self::Scale(colors) => colors.get(index).map(String::as_str),
            Self::Single(_) => None,
        }
    }

    /// Token keys this entry expands to under `name`, without the prefix.
    ///
    /// A scale yields `<name>-<i>` and `<name>-light-<i>` per shade; a
    /// single color yields `<name>`.
    #[must_use]
    pub fn token_keys(&self, name: &str) -> Vec<String> {
        match self {
            Self::Scale(colors) => (0..colors.len())
                .flat_map(|i| [format!("{name}-{i}"), format!("{name}-light-{i}")])
                .collect(),
            Self::Single(_) => vec![name.to_owned()],
        }
    }

    /// The color of a single-color entry. `None` for scales.
    #[must_use]
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(color) => Some(color),
            Self::Scale(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// PaletteError
// ---------------------------------------------------------------------------

/// A palette table that would produce broken tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("palette name `{name}` must be non-empty and use only `a-z`, `0-9` and `-`")]
    InvalidName { name: String },

    #[error("palette `{name}` emits token `{token}`, which palette `{owner}` already emits")]
    TokenCollision {
        name: String,
        token: String,
        owner: String,
    },

    #[error("palette `{name}` emits token `{token}`, which is reserved for a theme alias")]
    ReservedToken { name: String, token: String },

    #[error("palette `{name}` has {len} shades, expected 10")]
    WrongLength { name: String, len: usize },

    #[error("palette `{name}` shade {index} is `{value}`, expected a 6-digit hex color")]
    InvalidShade {
        name: String,
        index: usize,
        value: String,
    },

    #[error("palette `{name}` is `{value}`, expected a 6-digit hex color")]
    InvalidColor { name: String, value: String },

    #[error("semantic token `{token}` reads palette `{palette}`, which is missing or the wrong shape")]
    MissingSource { token: String, palette: String },
}

// ---------------------------------------------------------------------------
// PaletteTable
// ---------------------------------------------------------------------------

/// Ordered palette name → entry mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteTable {
    entries: IndexMap<String, PaletteEntry>,
}

impl PaletteTable {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a palette. Replacing keeps the original position.
    pub fn insert(&mut self, name: impl Into<String>, entry: PaletteEntry) -> Option<PaletteEntry> {
        self.entries.insert(name.into(), entry)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PaletteEntry> {
        self.entries.get(name)
    }

    /// Shade `index` of scale `name`.
    #[must_use]
    pub fn shade(&self, name: &str, index: usize) -> Option<&str> {
        self.get(name)?.shade(index)
    }

    /// Palettes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PaletteEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a color token id against this table.
    ///
    /// - `"blue.6"` → shade 6 of `blue`
    /// - `"blue"` → shade [`DEFAULT_SHADE`] of `blue`
    /// - `"white"` → the single color `white`
    ///
    /// Unknown names, non-numeric or out-of-range indices, and indices on
    /// single colors resolve to `None`.
    #[must_use]
    pub fn resolve(&self, token: &str) -> Option<&str> {
        let (name, index) = match token.split_once('.') {
            Some((name, index)) => (name, Some(parse_index(index)?)),
            None => (token, None),
        };

        match (self.get(name)?, index) {
            (PaletteEntry::Scale(colors), index) => {
                colors.get(index.unwrap_or(DEFAULT_SHADE)).map(String::as_str)
            }
            (PaletteEntry::Single(color), None) => Some(color),
            (PaletteEntry::Single(_), Some(_)) => None,
        }
    }

    /// Check every entry and every semantic alias source.
    ///
    /// Names must be `[a-z0-9-]+`. Scales must hold exactly ten 6-digit hex
    /// shades and single colors must be 6-digit hex. No two palettes may
    /// emit the same token key, and no palette may emit a semantic or mode
    /// alias key (`primary`, `dark-background`, `text`, …). Every palette a
    /// semantic alias reads must exist with the shape it expects.
    ///
    /// # Errors
    ///
    /// Returns the first [`PaletteError`] found, in table order.
    pub fn validate(&self) -> Result<(), PaletteError> {
        let mut owners: HashMap<String, &str> = HashMap::new();

        for (name, entry) in self.iter() {
            if !is_valid_name(name) {
                return Err(PaletteError::InvalidName {
                    name: name.to_owned(),
                });
            }

            match entry {
                PaletteEntry::Scale(colors) => {
                    if colors.len() != STEP_COUNT {
                        return Err(PaletteError::WrongLength {
                            name: name.to_owned(),
                            len: colors.len(),
                        });
                    }
                    if let Some((index, value)) =
                        colors.iter().enumerate().find(|(_, c)| hex_to_rgb8(c).is_none())
                    {
                        return Err(PaletteError::InvalidShade {
                            name: name.to_owned(),
                            index,
                            value: value.clone(),
                        });
                    }
                }
                PaletteEntry::Single(color) => {
                    if hex_to_rgb8(color).is_none() {
                        return Err(PaletteError::InvalidColor {
                            name: name.to_owned(),
                            value: color.clone(),
                        });
                    }
                }
            }

            for token in entry.token_keys(name) {
                if is_reserved(&token) {
                    return Err(PaletteError::ReservedToken {
                        name: name.to_owned(),
                        token,
                    });
                }
                if let Some(owner) = owners.get(&token) {
                    return Err(PaletteError::TokenCollision {
                        name: name.to_owned(),
                        token,
                        owner: (*owner).to_owned(),
                    });
                }
                owners.insert(token, name);
            }
        }

        for (token, source) in SEMANTIC_TOKENS {
            if source.resolve(self).is_none() {
                return Err(PaletteError::MissingSource {
                    token: (*token).to_owned(),
                    palette: source.palette().to_owned(),
                });
            }
        }

        Ok(())
    }
}

/// Lowercase ASCII letters, digits and `-`, at least one character.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// Keys the expander writes itself, after the palette tokens.
fn is_reserved(token: &str) -> bool {
    SEMANTIC_TOKENS.iter().any(|(alias, _)| *alias == token) || MODE_ALIASES.contains(&token)
}

/// Strict decimal shade index: digits only, no sign, no whitespace.
fn parse_index(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

// ---------------------------------------------------------------------------
// get_color
// ---------------------------------------------------------------------------

/// Resolve a token id like `"blue.5"` against the builtin palette.
///
/// A bare scale name picks shade 5. Anything that does not resolve is
/// returned unchanged, so raw CSS colors pass straight through.
///
/// ```
/// use byteform_theme::get_color;
///
/// assert_eq!(get_color("blue.6"), "#106ec1");
/// assert_eq!(get_color("#123456"), "#123456");
/// ```
#[must_use]
pub fn get_color(token: &str) -> String {
    builtin_palette()
        .resolve(token)
        .map_or_else(|| token.to_owned(), str::to_owned)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
