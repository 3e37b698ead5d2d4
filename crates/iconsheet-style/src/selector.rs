//! Selectors scoping icon rules to a theme.

use std::fmt;

use serde::Deserialize;

/// How a theme is selected in the page markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeScope {
    /// `.body[data-theme="<theme>"]`
    #[default]
    BodyDataTheme,
    /// `[data-icon-theme="<theme>"]`
    DataIconTheme,
    /// `.theme-<theme>` on any ancestor.
    AncestorClass,
}

impl ThemeScope {
    /// Every scheme, in declaration order.
    pub const ALL: [ThemeScope; 3] = [
        ThemeScope::BodyDataTheme,
        ThemeScope::DataIconTheme,
        ThemeScope::AncestorClass,
    ];

    /// Name used in configuration files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BodyDataTheme => "body-data-theme",
            Self::DataIconTheme => "data-icon-theme",
            Self::AncestorClass => "ancestor-class",
        }
    }

    /// Parse a scheme from its configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scope| scope.as_str() == name)
    }

    /// Selector matching the element that carries `theme`.
    pub fn selector(&self, theme: &str) -> String {
        match self {
            Self::BodyDataTheme => format!(".body[data-theme=\"{}\"]", escape_string(theme)),
            Self::DataIconTheme => format!("[data-icon-theme=\"{}\"]", escape_string(theme)),
            Self::AncestorClass => format!(".theme-{}", escape_ident(theme)),
        }
    }
}

impl fmt::Display for ThemeScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Class selector for an icon: `.ico-` plus the file name without its
/// extension.
pub fn icon_class(icon_name: &str) -> String {
    format!(".ico-{}", escape_ident(icon_stem(icon_name)))
}

/// File name without its final extension.
pub fn icon_stem(icon_name: &str) -> &str {
    match icon_name.rfind('.') {
        Some(dot) if dot > 0 => &icon_name[..dot],
        _ => icon_name,
    }
}

/// Escape a value for use inside a double-quoted CSS string.
fn escape_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Escape a value for use as (the tail of) a CSS identifier.
fn escape_ident(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii() {
            out.push(c);
        } else {
            out.push('\\');
            out.push(c);
        }
    }
    out
}
