//! Per-theme stylesheet and its rendering.

use serde::Deserialize;

use crate::rules::StyleRule;

/// Syntax of the emitted stylesheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// SCSS partials with icon rules nested inside the theme scope.
    #[default]
    Scss,
    /// Plain CSS with descendant selectors.
    Css,
}

impl OutputFormat {
    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Scss => "scss",
            Self::Css => "css",
        }
    }

    /// File stem used for a theme's stylesheet.
    pub fn theme_file_stem(&self, theme: &str) -> String {
        match self {
            Self::Scss => format!("_theme-{theme}"),
            Self::Css => format!("theme-{theme}"),
        }
    }

    /// File name used for a theme's stylesheet.
    pub fn theme_file_name(&self, theme: &str) -> String {
        format!("{}.{}", self.theme_file_stem(theme), self.extension())
    }

    /// Index line importing a theme's stylesheet.
    pub fn import_line(&self, theme: &str) -> String {
        match self {
            Self::Scss => format!("@import \"{}\";\n", self.theme_file_stem(theme)),
            Self::Css => format!("@import \"{}\";\n", self.theme_file_name(theme)),
        }
    }

    /// Name used in configuration files and on the command line.
    pub fn as_str(&self) -> &'static str {
        self.extension()
    }

    /// Parse a format from its configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "scss" => Some(Self::Scss),
            "css" => Some(Self::Css),
            _ => None,
        }
    }
}

/// The icon rules of one theme, under that theme's scope selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSheet {
    /// Theme name.
    pub theme: String,
    /// Selector scoping every rule to the theme.
    pub scope: String,
    /// Icon rules, unscoped.
    pub rules: Vec<StyleRule>,
}

impl ThemeSheet {
    /// Create an empty sheet.
    pub fn new(theme: impl Into<String>, scope: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
            scope: scope.into(),
            rules: Vec::new(),
        }
    }

    /// Add a rule.
    pub fn add_rule(&mut self, rule: StyleRule) {
        self.rules.push(rule);
    }

    /// Get the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the sheet has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Render the sheet.
    ///
    /// SCSS nests every rule one tab deep inside a block for the scope.
    /// CSS writes one flat rule per icon with the scope as ancestor.
    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Scss => {
                let mut scss = format!("{} {{\n", self.scope);
                for rule in &self.rules {
                    scss.push_str(&rule.to_css(1));
                }
                scss.push_str("}\n");
                scss
            }
            OutputFormat::Css => self
                .rules
                .iter()
                .map(|rule| rule.scoped(&self.scope).to_css(0))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> ThemeSheet {
        let mut sheet = ThemeSheet::new("dark", ".theme-dark");
        sheet.add_rule(StyleRule::new(".ico-home").declare("mask-size", "cover"));
        sheet.add_rule(StyleRule::new(".ico-gear").declare("mask-size", "cover"));
        sheet
    }

    #[test]
    fn renders_nested_scss() {
        assert_eq!(
            sheet().render(OutputFormat::Scss),
            ".theme-dark {\n\
             \t.ico-home {\n\t  mask-size: cover;\n\t}\n\
             \t.ico-gear {\n\t  mask-size: cover;\n\t}\n\
             }\n"
        );
    }

    #[test]
    fn renders_flat_css() {
        assert_eq!(
            sheet().render(OutputFormat::Css),
            ".theme-dark .ico-home {\n  mask-size: cover;\n}\n\
             .theme-dark .ico-gear {\n  mask-size: cover;\n}\n"
        );
    }

    #[test]
    fn empty_scss_sheet_keeps_scope_block() {
        let sheet = ThemeSheet::new("dark", ".theme-dark");
        assert!(sheet.is_empty());
        assert_eq!(sheet.render(OutputFormat::Scss), ".theme-dark {\n}\n");
        assert_eq!(sheet.render(OutputFormat::Css), "");
    }

    #[test]
    fn file_naming() {
        assert_eq!(OutputFormat::Scss.theme_file_name("dark"), "_theme-dark.scss");
        assert_eq!(OutputFormat::Css.theme_file_name("dark"), "theme-dark.css");
        assert_eq!(OutputFormat::Scss.import_line("dark"), "@import \"_theme-dark\";\n");
        assert_eq!(OutputFormat::Css.import_line("dark"), "@import \"theme-dark.css\";\n");
    }
}
