//! CSS custom property rendering for token maps.

use crate::tokens::ThemeTokenMap;

/// Selector token blocks are attached to when the caller has no preference.
pub const ROOT_SELECTOR: &str = ":root";

/// `--name` for a token name.
#[must_use]
pub fn custom_property(name: &str) -> String {
    format!("--{name}")
}

/// Render `tokens` as one rule block, one declaration per line, in map
/// order.
///
/// ```
/// use byteform_theme::{ThemeTokenMap, css::to_css_block};
///
/// let mut tokens = ThemeTokenMap::new();
/// tokens.insert("byteform-primary", "#106ec1");
/// assert_eq!(
///     to_css_block(&tokens, ":root"),
///     ":root {\n  --byteform-primary: #106ec1;\n}\n"
/// );
/// ```
#[must_use]
pub fn to_css_block(tokens: &ThemeTokenMap, selector: &str) -> String {
    let body: String = tokens
        .iter()
        .map(|(name, value)| format!("  {}: {value};\n", custom_property(name)))
        .collect();
    format!("{selector} {{\n{body}}}\n")
}
