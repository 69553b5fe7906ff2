// SPDX-License-Identifier: MIT
//
// byteform: command-line front end for the byteform color engine.
//
// This binary wires the two library crates to stdout:
//
//   byteform-color → `ramp`  seed color → 10-step shade ramp
//   byteform-theme → `vars`  palette table → CSS custom properties
//                    `get`   token id (`blue.6`) → hex
//
// Configuration is explicit: `--config theme.toml` is loaded, validated and
// handed down; nothing is read from global state. Logs go to stderr via
// tracing-subscriber (`RUST_LOG=debug` shows base-step selection and token
// counts), so stdout stays clean for piping into a stylesheet.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use byteform_color::{ShadeRamp, generate_color_map};
use byteform_theme::css::{ROOT_SELECTOR, to_css_block};
use byteform_theme::{ThemeConfig, ThemeMode, get_color, theme_to_vars};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Shade ramps and design tokens for the byteform component library
#[derive(Parser, Debug)]
#[command(name = "byteform")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Derive a 10-step shade ramp from one seed color
    Ramp {
        /// Seed color in any CSS syntax (`#2b9aff`, `teal`, `hsl(210 100% 58%)`)
        seed: String,

        /// Print `{"baseIndex": …, "colors": […]}` instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print every theme token
    Vars {
        /// Theme config file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Light-variant opacity, overriding the config
        #[arg(long)]
        opacity: Option<f64>,

        /// Color scheme for the unprefixed background/border/text/hint aliases
        #[arg(long)]
        mode: Option<ThemeMode>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Css)]
        format: Format,

        /// Selector wrapping the CSS declarations
        #[arg(long, default_value_t = String::from(ROOT_SELECTOR))]
        selector: String,
    },

    /// Resolve a palette token like `blue.6` (unresolved input is echoed)
    Get {
        token: String,

        /// Theme config file (TOML) with palette overrides
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Css,
    Json,
}

// ─── Rendering ──────────────────────────────────────────────────────────────

/// One line per step: index, hex, and a marker on the seed's step.
fn render_ramp(ramp: &ShadeRamp) -> String {
    ramp.to_hex_strings()
        .iter()
        .enumerate()
        .map(|(i, hex)| {
            if i == ramp.base_index {
                format!("{i}  {hex}  <- seed\n")
            } else {
                format!("{i}  {hex}\n")
            }
        })
        .collect()
}

fn ramp_json(ramp: &ShadeRamp) -> serde_json::Value {
    serde_json::json!({
        "baseIndex": ramp.base_index,
        "colors": ramp.to_hex_strings(),
    })
}

// ─── Commands ───────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<ThemeConfig> {
    match path {
        Some(path) => ThemeConfig::load(path)
            .with_context(|| format!("loading theme config {}", path.display())),
        None => Ok(ThemeConfig::default()),
    }
}

fn run(command: Command) -> Result<String> {
    match command {
        Command::Ramp { seed, json } => {
            let ramp = generate_color_map(&seed)
                .with_context(|| format!("cannot build a shade ramp from `{seed}`"))?;
            if json {
                Ok(format!("{:#}\n", ramp_json(&ramp)))
            } else {
                Ok(render_ramp(&ramp))
            }
        }
        Command::Vars {
            config,
            opacity,
            mode,
            format,
            selector,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(opacity) = opacity {
                config.opacity = opacity;
            }
            if let Some(mode) = mode {
                config.mode = mode;
            }
            config.validate()?;

            let tokens = theme_to_vars(&config)?;
            tracing::info!(tokens = tokens.len(), mode = %config.mode, "generated theme tokens");
            match format {
                Format::Css => Ok(to_css_block(&tokens, &selector)),
                Format::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&tokens)?)),
            }
        }
        Command::Get { token, config } => {
            let resolved = match config {
                Some(path) => {
                    let table = load_config(Some(&path))?.palette_table()?;
                    table.resolve(&token).unwrap_or(&token).to_owned()
                }
                None => get_color(&token),
            };
            Ok(format!("{resolved}\n"))
        }
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = run(cli.command)?;
    print!("{output}");
    Ok(())
}

// ─── Tests ──────────────────────────────────────────────────────────────────
