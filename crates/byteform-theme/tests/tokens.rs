use std::io::Write as _;

use byteform_theme::builtin::{BLUE, builtin_names};
use byteform_theme::tokens::{MODE_ALIASES, SEMANTIC_TOKENS};
use byteform_theme::{
    ConfigError, PaletteEntry, ThemeConfig, ThemeMode, builtin_palette, generate_theme_vars,
    get_color, theme_to_vars,
};

#[test]
fn builtin_token_count_matches_palette_shapes() {
    let vars = generate_theme_vars(0.6);

    let mut expected = 0;
    for (name, entry) in builtin_palette().iter() {
        match entry {
            PaletteEntry::Scale(_) => {
                for i in 0..10 {
                    assert!(vars.contains(&format!("byteform-{name}-{i}")), "{name}-{i}");
                    assert!(vars.contains(&format!("byteform-{name}-light-{i}")), "{name}-light-{i}");
                }
                assert!(!vars.contains(&format!("byteform-{name}-10")));
                expected += 20;
            }
            PaletteEntry::Single(_) => {
                assert!(vars.contains(&format!("byteform-{name}")), "palette {name}");
                expected += 1;
            }
        }
    }

    assert_eq!(vars.len(), expected + SEMANTIC_TOKENS.len());
}

#[test]
fn primary_is_blue_six() {
    let vars = generate_theme_vars(0.6);
    assert_eq!(BLUE[6], "#106ec1");
    assert_eq!(&vars["byteform-primary"], "#106ec1");
    assert_eq!(get_color("blue.6"), vars["byteform-primary"]);
}

#[test]
fn every_semantic_alias_is_present() {
    let vars = generate_theme_vars(0.6);
    for (token, _) in SEMANTIC_TOKENS {
        assert!(vars.contains(&format!("byteform-{token}")), "missing {token}");
    }
}

#[test]
fn every_builtin_name_resolves_through_get_color() {
    for name in builtin_names() {
        assert_ne!(get_color(name), name, "{name} did not resolve");
    }
}

#[test]
fn default_config_matches_generate_theme_vars_plus_mode_aliases() {
    let config = ThemeConfig::default();
    let vars = theme_to_vars(&config).unwrap();
    let plain = generate_theme_vars(config.opacity);

    assert_eq!(vars.len(), plain.len() + MODE_ALIASES.len());
    for (name, value) in plain.iter() {
        assert_eq!(vars.get(name), Some(value), "{name}");
    }
    assert_eq!(vars.get("byteform-background"), Some("#ffffff"));
    assert_eq!(vars.get("byteform-text"), Some("#000000"));
}

#[test]
fn config_file_drives_expansion() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r##"
mode = "dark"
opacity = 0.3
prefix = "bf"

[palettes]
brand = "#ff5500"
"##
    )
    .unwrap();

    let config = ThemeConfig::load(file.path()).unwrap();
    assert_eq!(config.mode, ThemeMode::Dark);

    let vars = theme_to_vars(&config).unwrap();
    assert_eq!(vars.get("bf-brand"), Some("#ff5500"));
    assert_eq!(vars.get("bf-blue-light-6"), Some("rgba(16, 110, 193, 0.3)"));
    assert_eq!(vars.get("bf-background"), Some("#25262b"));
    assert!(!vars.contains("byteform-primary"));
}

#[test]
fn invalid_palette_in_file_fails_fast() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[palettes]\nwhite = \"ivory\"").unwrap();

    let err = ThemeConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Palette(_)), "{err}");
    assert!(err.to_string().contains("ivory"));
}
