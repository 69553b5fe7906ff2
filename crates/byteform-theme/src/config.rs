//! Theme configuration: the explicit replacement for ambient theme state.
//!
//! A [`ThemeConfig`] is loaded once at startup, validated, and then passed
//! by reference to whatever renders tokens. Nothing here is global.
//!
//! ```toml
//! mode = "dark"
//! opacity = 0.1
//! prefix = "byteform"
//!
//! [palettes]
//! brand = "#ff5500"
//! blue = ["#e7f4ff", "#cbe6ff", "#99ceff", "#62b3ff", "#2b9aff",
//!         "#1a86e8", "#106ec1", "#0c5a9e", "#08477d", "#05345c"]
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::builtin::builtin_palette;
use crate::palette::{PaletteEntry, PaletteError, PaletteTable};
use crate::tokens::DEFAULT_PREFIX;

/// Default opacity of the `-light-<i>` token variants.
pub const DEFAULT_LIGHT_OPACITY: f64 = 0.1;

// ---------------------------------------------------------------------------
// ThemeMode
// ---------------------------------------------------------------------------

/// Light or dark color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(format!("unknown theme mode `{s}` (expected `light` or `dark`)")),
        }
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read theme config {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid theme config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("token prefix must not be empty")]
    EmptyPrefix,

    #[error(transparent)]
    Palette(#[from] PaletteError),
}

// ---------------------------------------------------------------------------
// ThemeConfig
// ---------------------------------------------------------------------------

/// Everything token generation reads besides the palette itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Active color scheme.
    pub mode: ThemeMode,
    /// Opacity of the `-light-<i>` variants. Not clamped.
    pub opacity: f64,
    /// Token name prefix.
    pub prefix: String,
    /// Palettes added to, or replacing, the builtin table.
    pub palettes: IndexMap<String, PaletteEntry>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: ThemeMode::default(),
            opacity: DEFAULT_LIGHT_OPACITY,
            prefix: DEFAULT_PREFIX.to_owned(),
            palettes: IndexMap::new(),
        }
    }
}

impl ThemeConfig {
    /// Parse and validate a TOML config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys,
    /// and [`ConfigError::Palette`] / [`ConfigError::EmptyPrefix`] if the
    /// result would produce broken tokens.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&input)?;
        tracing::debug!(
            path = %path.display(),
            mode = %config.mode,
            opacity = config.opacity,
            overrides = config.palettes.len(),
            "loaded theme config"
        );
        Ok(config)
    }

    /// Check the config without expanding it.
    ///
    /// Out-of-range opacity is accepted and only logged.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPrefix`] or [`ConfigError::Palette`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            tracing::warn!(
                opacity = self.opacity,
                "light variant opacity outside [0, 1]; rgba() values will be out of range"
            );
        }
        self.palette_table().map(drop)
    }

    /// The builtin palette table with this config's overrides applied.
    ///
    /// Overrides replace builtin palettes of the same name in place; new
    /// names are appended.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Palette`] if the merged table is invalid.
    pub fn palette_table(&self) -> Result<PaletteTable, ConfigError> {
        let mut table = builtin_palette().clone();
        for (name, entry) in &self.palettes {
            if table.insert(name.clone(), entry.clone()).is_some() {
                tracing::debug!(palette = %name, "palette override replaces builtin");
            }
        }
        table.validate()?;
        Ok(table)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
