//! Error types for file operations.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// A specialized Result type for file operations.
pub type FileResult<T> = Result<T, FileError>;

/// A failed filesystem operation, with the path it was applied to.
#[derive(Debug, thiserror::Error)]
#[error("{kind}{}", detail(.path, .source))]
pub struct FileError {
    kind: FileErrorKind,
    path: Option<PathBuf>,
    source: Option<io::Error>,
}

/// Coarse classification of a [`FileError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileErrorKind {
    NotFound,
    PermissionDenied,
    AlreadyExists,
    /// The path is a directory where a file was expected.
    IsDirectory,
    /// The path exists but is not a directory.
    NotDirectory,
    /// Malformed input such as a bad glob, invalid UTF-8 or unserializable
    /// data.
    InvalidData,
    Other,
}

impl FileErrorKind {
    /// Short lowercase description used in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "file not found",
            Self::PermissionDenied => "permission denied",
            Self::AlreadyExists => "file already exists",
            Self::IsDirectory => "is a directory",
            Self::NotDirectory => "not a directory",
            Self::InvalidData => "invalid data",
            Self::Other => "file error",
        }
    }
}

impl From<io::ErrorKind> for FileErrorKind {
    fn from(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            io::ErrorKind::AlreadyExists => Self::AlreadyExists,
            io::ErrorKind::IsADirectory => Self::IsDirectory,
            io::ErrorKind::NotADirectory => Self::NotDirectory,
            io::ErrorKind::InvalidData => Self::InvalidData,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for FileErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FileError {
    /// Wrap an I/O error raised while operating on `path`.
    pub fn from_io(err: io::Error, path: impl AsRef<Path>) -> Self {
        Self {
            kind: err.kind().into(),
            path: Some(path.as_ref().to_path_buf()),
            source: Some(err),
        }
    }

    /// `path` exists but is not a directory.
    pub fn not_directory(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: FileErrorKind::NotDirectory,
            path: Some(path.into()),
            source: None,
        }
    }

    /// Malformed input not tied to a path.
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self {
            kind: FileErrorKind::InvalidData,
            path: None,
            source: Some(io::Error::new(io::ErrorKind::InvalidData, message.into())),
        }
    }

    pub fn kind(&self) -> FileErrorKind {
        self.kind
    }

    /// The path the failed operation was applied to.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The underlying I/O error, if any.
    pub fn io_error(&self) -> Option<&io::Error> {
        self.source.as_ref()
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == FileErrorKind::NotFound
    }
}

impl From<io::Error> for FileError {
    fn from(err: io::Error) -> Self {
        Self {
            kind: err.kind().into(),
            path: None,
            source: Some(err),
        }
    }
}

fn detail(path: &Option<PathBuf>, source: &Option<io::Error>) -> String {
    match (path, source) {
        (Some(path), _) => format!(": {}", path.display()),
        (None, Some(source)) => format!(": {source}"),
        (None, None) => String::new(),
    }
}
