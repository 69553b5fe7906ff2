//! Token expansion: palette table in, flat CSS custom properties out.
//!
//! Three passes, in this order:
//!
//! 1. every 10-shade scale emits `<prefix>-<name>-<i>` and the
//!    semi-transparent `<prefix>-<name>-light-<i>` for each shade;
//! 2. every single color emits `<prefix>-<name>`;
//! 3. the semantic aliases in [`SEMANTIC_TOKENS`] are read out of fixed
//!    palette positions and inserted last.
//!
//! Tables are validated before expansion, so a palette can never emit an
//! alias key or another palette's key.

use std::ops::Index;

use byteform_color::rgba;
use indexmap::IndexMap;
use serde::Serialize;

use crate::builtin::builtin_palette;
use crate::config::{ConfigError, ThemeConfig, ThemeMode};
use crate::palette::{PaletteEntry, PaletteError, PaletteTable};

/// Token name prefix used by [`generate_theme_vars`].
pub const DEFAULT_PREFIX: &str = "byteform";

/// Opacity of `primary-light`, independent of the light-variant opacity.
pub const PRIMARY_LIGHT_OPACITY: f64 = 0.6;

/// Aliases re-exported without their mode prefix by [`theme_to_vars`].
pub const MODE_ALIASES: [&str; 4] = ["background", "border", "text", "hint"];

// ---------------------------------------------------------------------------
// Semantic aliases
// ---------------------------------------------------------------------------

/// Where a semantic alias takes its value from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SemanticSource {
    /// One shade of a scale, verbatim.
    Shade(&'static str, usize),
    /// A single-color palette, verbatim.
    Single(&'static str),
    /// One shade of a scale as `rgba(…, opacity)`.
    Alpha(&'static str, usize, f64),
}

impl SemanticSource {
    /// Name of the palette this source reads.
    #[must_use]
    pub const fn palette(self) -> &'static str {
        match self {
            Self::Shade(name, _) | Self::Single(name) | Self::Alpha(name, _, _) => name,
        }
    }

    /// Read the value out of `table`. `None` when the palette is missing or
    /// has the wrong shape.
    #[must_use]
    pub fn resolve(self, table: &PaletteTable) -> Option<String> {
        match self {
            Self::Shade(name, index) => table.shade(name, index).map(str::to_owned),
            Self::Single(name) => table.get(name)?.as_single().map(str::to_owned),
            Self::Alpha(name, index, opacity) => {
                table.shade(name, index).map(|color| rgba(color, opacity))
            }
        }
    }
}

/// The fixed semantic alias table (token suffix → source).
pub const SEMANTIC_TOKENS: &[(&str, SemanticSource)] = &[
    ("primary", SemanticSource::Shade("blue", 6)),
    ("primary-hover", SemanticSource::Shade("blue", 5)),
    ("primary-light", SemanticSource::Alpha("blue", 6, PRIMARY_LIGHT_OPACITY)),
    ("secondary", SemanticSource::Shade("violet", 6)),
    ("secondary-hover", SemanticSource::Shade("violet", 5)),
    ("error", SemanticSource::Shade("red", 6)),
    ("success", SemanticSource::Shade("green", 6)),
    // Light mode
    ("light-background", SemanticSource::Single("white")),
    ("light-border", SemanticSource::Shade("gray", 3)),
    ("light-text", SemanticSource::Single("black")),
    ("light-hint", SemanticSource::Shade("gray", 6)),
    // Dark mode
    ("dark-background", SemanticSource::Shade("dark", 6)),
    ("dark-border", SemanticSource::Shade("dark", 4)),
    ("dark-text", SemanticSource::Shade("dark", 0)),
    ("dark-hint", SemanticSource::Shade("dark", 2)),
];

// ---------------------------------------------------------------------------
// ThemeTokenMap
// ---------------------------------------------------------------------------

/// Insertion-ordered token name → CSS color value.
///
/// Names carry no leading `--`; [`crate::css`] adds it when rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ThemeTokenMap(IndexMap<String, String>);

impl ThemeTokenMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a token, overwriting in place if the name already exists.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tokens in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copy `<prefix>-<mode>-<alias>` to `<prefix>-<alias>` for every
    /// [`MODE_ALIASES`] entry present in the map.
    pub fn apply_mode(&mut self, prefix: &str, mode: ThemeMode) {
        for alias in MODE_ALIASES {
            let source = format!("{prefix}-{}-{alias}", mode.as_str());
            if let Some(value) = self.0.get(&source).cloned() {
                self.0.insert(format!("{prefix}-{alias}"), value);
            }
        }
    }
}

impl Index<&str> for ThemeTokenMap {
    type Output = str;

    /// # Panics
    ///
    /// Panics if the token is not present.
    fn index(&self, name: &str) -> &str {
        self.get(name)
            .unwrap_or_else(|| panic!("no theme token named `{name}`"))
    }
}

impl IntoIterator for ThemeTokenMap {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

// ---------------------------------------------------------------------------
// Expansion
// ---------------------------------------------------------------------------

/// Validate `table`, then expand it into tokens named `<prefix>-…`.
///
/// Light variants use `light_opacity` unclamped.
///
/// # Errors
///
/// Returns the [`PaletteError`] from [`PaletteTable::validate`]; nothing is
/// expanded from a table that fails it.
pub fn expand_palette(
    table: &PaletteTable,
    prefix: &str,
    light_opacity: f64,
) -> Result<ThemeTokenMap, PaletteError> {
    table.validate()?;
    Ok(expand_validated(table, prefix, light_opacity))
}

/// Expansion proper. `table` has already passed [`PaletteTable::validate`],
/// so every scale has ten shades and every semantic source resolves.
fn expand_validated(table: &PaletteTable, prefix: &str, light_opacity: f64) -> ThemeTokenMap {
    let mut tokens = ThemeTokenMap::new();

    for (name, entry) in table.iter() {
        match entry {
            PaletteEntry::Scale(colors) => {
                for (i, color) in colors.iter().enumerate() {
                    tokens.insert(format!("{prefix}-{name}-{i}"), color.as_str());
                    tokens.insert(format!("{prefix}-{name}-light-{i}"), rgba(color, light_opacity));
                }
            }
            PaletteEntry::Single(color) => {
                tokens.insert(format!("{prefix}-{name}"), color.as_str());
            }
        }
    }

    for (token, source) in SEMANTIC_TOKENS {
        if let Some(value) = source.resolve(table) {
            tokens.insert(format!("{prefix}-{token}"), value);
        }
    }

    tracing::debug!(
        prefix,
        light_opacity,
        palettes = table.len(),
        tokens = tokens.len(),
        "expanded palette"
    );
    tokens
}

/// Expand the builtin palette with the `byteform` prefix.
///
/// ```
/// use byteform_theme::generate_theme_vars;
///
/// let vars = generate_theme_vars(0.6);
/// assert_eq!(&vars["byteform-primary"], "#106ec1");
/// assert_eq!(&vars["byteform-blue-light-6"], "rgba(16, 110, 193, 0.6)");
/// ```
#[must_use]
pub fn generate_theme_vars(light_opacity: f64) -> ThemeTokenMap {
    // The builtin table is covered by `builtin_validates`.
    expand_validated(builtin_palette(), DEFAULT_PREFIX, light_opacity)
}

/// Expand the palette described by `config`: builtin palettes plus its
/// overrides, its prefix and its light-variant opacity. Also emits the
/// mode-resolved `<prefix>-background|border|text|hint` aliases for
/// `config.mode`.
///
/// # Errors
///
/// Returns [`ConfigError`] if the configured palettes fail validation.
pub fn theme_to_vars(config: &ThemeConfig) -> Result<ThemeTokenMap, ConfigError> {
    let table = config.palette_table()?;
    let mut tokens = expand_validated(&table, &config.prefix, config.opacity);
    tokens.apply_mode(&config.prefix, config.mode);
    Ok(tokens)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
