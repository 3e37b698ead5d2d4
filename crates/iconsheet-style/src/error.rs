//! Error types for style emission.

use std::path::PathBuf;

use iconsheet_core::file::FileError;

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or emitting stylesheets.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Discovery, mapping or resolution error.
    #[error(transparent)]
    Core(#[from] iconsheet_core::Error),

    /// Filesystem failure while reading icons or writing output.
    #[error(transparent)]
    File(#[from] FileError),

    /// Configuration file could not be parsed.
    #[error("Invalid configuration '{path}': {message}")]
    Config { path: PathBuf, message: String },

    /// Unrecognized option value.
    #[error("Invalid value '{value}' for option '{option}'")]
    InvalidOption { option: String, value: String },
}

impl Error {
    /// Create a configuration error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an option error.
    pub fn invalid_option(option: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidOption {
            option: option.into(),
            value: value.into(),
        }
    }
}
