//! Emitter configuration.
//!
//! Options can be built in code or loaded from a TOML file:
//!
//! ```toml
//! variant = "mask"
//! scope = "data-icon-theme"
//! layout = "per-theme"
//! format = "css"
//! icon-pattern = "*.svg"
//! include-themes = ["light", "dark"]
//! debug = false
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use std::path::Path;

use iconsheet_core::file::read_text;
use iconsheet_core::icon_map::ICON_PATTERN;
use serde::Deserialize;

use crate::rules::OutputFormat;
use crate::selector::ThemeScope;
use crate::{Error, Result};

/// Which CSS property carries the icon image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleVariant {
    /// `background` shorthand with `background-size: cover`.
    #[default]
    Background,
    /// `mask-image` with `mask-size: cover`, for icons tinted by
    /// `background-color`.
    Mask,
}

impl StyleVariant {
    /// Name used in configuration files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Mask => "mask",
        }
    }

    /// Parse a variant from its configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "background" => Some(Self::Background),
            "mask" => Some(Self::Mask),
            _ => None,
        }
    }
}

/// How themes are split across output files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputLayout {
    /// One file per theme plus an index importing all of them.
    #[default]
    PerTheme,
    /// A single file holding every theme's block.
    Combined,
}

impl OutputLayout {
    /// Name used in configuration files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PerTheme => "per-theme",
            Self::Combined => "combined",
        }
    }

    /// Parse a layout from its configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "per-theme" => Some(Self::PerTheme),
            "combined" => Some(Self::Combined),
            _ => None,
        }
    }
}

/// Options controlling discovery and emission.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct EmitOptions {
    /// Property scheme for icon rules.
    pub variant: StyleVariant,
    /// Selector scheme scoping rules to a theme.
    pub scope: ThemeScope,
    /// File layout.
    pub layout: OutputLayout,
    /// Stylesheet syntax.
    pub format: OutputFormat,
    /// Glob matched against icon file names.
    pub icon_pattern: String,
    /// Restrict output to these themes.
    pub include_themes: Option<Vec<String>>,
    /// Also write the intermediate maps as JSON.
    pub debug: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            variant: StyleVariant::default(),
            scope: ThemeScope::default(),
            layout: OutputLayout::default(),
            format: OutputFormat::default(),
            icon_pattern: ICON_PATTERN.to_string(),
            include_themes: None,
            debug: false,
        }
    }
}

impl EmitOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from TOML text. `origin` names the source in errors.
    pub fn from_toml_str(toml_text: &str, origin: impl AsRef<Path>) -> Result<Self> {
        toml::from_str(toml_text).map_err(|e| Error::config(origin.as_ref(), e.to_string()))
    }

    /// Load options from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = read_text(path)?;
        Self::from_toml_str(&text, path)
    }

    /// Set the style variant.
    pub fn variant(mut self, variant: StyleVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the theme scope scheme.
    pub fn scope(mut self, scope: ThemeScope) -> Self {
        self.scope = scope;
        self
    }

    /// Set the output layout.
    pub fn layout(mut self, layout: OutputLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the output format.
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the icon file glob.
    pub fn icon_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.icon_pattern = pattern.into();
        self
    }

    /// Restrict output to the listed themes.
    pub fn include_themes<I, S>(mut self, themes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_themes = Some(themes.into_iter().map(Into::into).collect());
        self
    }

    /// Enable or disable the JSON map dumps.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Split a comma-separated theme list, dropping blank entries.
pub fn parse_theme_list(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|theme| !theme.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_classic_build() {
        let options = EmitOptions::default();
        assert_eq!(options.variant, StyleVariant::Background);
        assert_eq!(options.scope, ThemeScope::BodyDataTheme);
        assert_eq!(options.layout, OutputLayout::PerTheme);
        assert_eq!(options.format, OutputFormat::Scss);
        assert_eq!(options.icon_pattern, "*.svg");
        assert!(options.include_themes.is_none());
        assert!(!options.debug);
    }

    #[test]
    fn parses_full_toml() {
        let options = EmitOptions::from_toml_str(
            r#"
            variant = "mask"
            scope = "data-icon-theme"
            layout = "combined"
            format = "css"
            icon-pattern = "*.svg"
            include-themes = ["light", "dark"]
            debug = true
            "#,
            "iconsheet.toml",
        )
        .unwrap();

        assert_eq!(
            options,
            EmitOptions::new()
                .variant(StyleVariant::Mask)
                .scope(ThemeScope::DataIconTheme)
                .layout(OutputLayout::Combined)
                .format(OutputFormat::Css)
                .include_themes(["light", "dark"])
                .debug(true)
        );
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let options = EmitOptions::from_toml_str("variant = \"mask\"", "iconsheet.toml").unwrap();
        assert_eq!(options, EmitOptions::new().variant(StyleVariant::Mask));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = EmitOptions::from_toml_str("colour = \"red\"", "iconsheet.toml").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().starts_with("Invalid configuration 'iconsheet.toml'"));
    }

    #[test]
    fn loads_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("iconsheet.toml");
        std::fs::write(&path, "layout = \"combined\"\n").unwrap();

        let options = EmitOptions::from_file(&path).unwrap();
        assert_eq!(options.layout, OutputLayout::Combined);
    }

    #[test]
    fn missing_file_is_a_file_error() {
        let temp_dir = TempDir::new().unwrap();

        let err = EmitOptions::from_file(temp_dir.path().join("none.toml")).unwrap_err();
        assert!(matches!(err, Error::File(ref e) if e.is_not_found()));
    }

    #[test]
    fn theme_list_parsing() {
        assert_eq!(parse_theme_list("light, dark,,  "), vec!["light", "dark"]);
        assert!(parse_theme_list("").is_empty());
    }

    #[test]
    fn variant_and_layout_names() {
        assert_eq!(StyleVariant::from_name("mask"), Some(StyleVariant::Mask));
        assert_eq!(StyleVariant::from_name(StyleVariant::Background.as_str()), Some(StyleVariant::Background));
        assert_eq!(OutputLayout::from_name("combined"), Some(OutputLayout::Combined));
        assert_eq!(OutputLayout::from_name("split"), None);
    }
}
