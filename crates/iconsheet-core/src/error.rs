//! Error types for icon discovery and mapping.

use crate::file::FileError;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while discovering, mapping or renaming icons.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required argument was missing or empty.
    #[error("Argument '{name}' is empty.")]
    EmptyArgument { name: String },

    /// Filesystem failure.
    #[error(transparent)]
    File(#[from] FileError),

    /// A theme was looked up in a map that does not contain it.
    #[error("Theme '{theme}' is not present in the icon map")]
    UnknownTheme { theme: String },
}

impl Error {
    /// Create an empty-argument error.
    pub fn empty_argument(name: impl Into<String>) -> Self {
        Self::EmptyArgument { name: name.into() }
    }

    /// Create an unknown-theme error.
    pub fn unknown_theme(theme: impl Into<String>) -> Self {
        Self::UnknownTheme {
            theme: theme.into(),
        }
    }
}

/// Returns `value` unchanged, or an [`Error::EmptyArgument`] naming `name`
/// when it is blank.
pub fn require_argument<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(Error::empty_argument(name));
    }
    Ok(value)
}
