//! Convenience functions for one-shot file operations.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use super::error::{FileError, FileResult};

// ============================================================================
// Reading Functions
// ============================================================================

/// Reads the entire contents of a file as a string.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist
/// - The file cannot be read
/// - The file is not valid UTF-8
pub fn read_text(path: impl AsRef<Path>) -> FileResult<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| FileError::from_io(e, path))
}

// ============================================================================
// Writing Functions
// ============================================================================

/// Writes a string to a file, replacing any existing contents.
pub fn write_text(path: impl AsRef<Path>, contents: impl AsRef<str>) -> FileResult<()> {
    let path = path.as_ref();
    fs::write(path, contents.as_ref()).map_err(|e| FileError::from_io(e, path))
}

/// Appends a string to a file, creating it if it doesn't exist.
///
/// # Example
///
/// ```ignore
/// append_text("dist/css/icons.scss", "@import \"_theme-dark\";\n")?;
/// ```
pub fn append_text(path: impl AsRef<Path>, contents: impl AsRef<str>) -> FileResult<()> {
    let path = path.as_ref();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| FileError::from_io(e, path))?;
    file.write_all(contents.as_ref().as_bytes())
        .map_err(|e| FileError::from_io(e, path))
}

/// Writes a value to a JSON file, pretty-printed with two-space indentation.
pub fn write_json_pretty<T: Serialize>(path: impl AsRef<Path>, value: &T) -> FileResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(json_error)?;
    write_text(path, json)
}

// ============================================================================
// File Operations
// ============================================================================

/// Renames or moves a file.
///
/// An existing file at `to` is replaced on platforms where `std::fs::rename`
/// does so.
///
/// # Errors
///
/// Returns an error if:
/// - The source file does not exist
/// - The rename operation fails (e.g., cross-filesystem move)
pub fn rename_file(from: impl AsRef<Path>, to: impl AsRef<Path>) -> FileResult<()> {
    let from = from.as_ref();
    let to = to.as_ref();
    fs::rename(from, to).map_err(|e| {
        if !from.exists() {
            FileError::from_io(e, from)
        } else {
            FileError::from_io(e, to)
        }
    })
}

fn json_error(e: serde_json::Error) -> FileError {
    FileError::invalid_data(format!("cannot serialize JSON: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.svg");

        let err = read_text(&missing).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.path(), Some(missing.as_path()));
    }

    #[test]
    fn test_append_text_accumulates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("icons.scss");

        append_text(&path, "@import \"_theme-dark\";\n").unwrap();
        append_text(&path, "@import \"_theme-light\";\n").unwrap();

        assert_eq!(
            read_text(&path).unwrap(),
            "@import \"_theme-dark\";\n@import \"_theme-light\";\n"
        );
    }

    #[test]
    fn test_write_json_pretty_uses_two_spaces() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("iconMap.json");

        let mut map = BTreeMap::new();
        map.insert("dark", vec!["home.svg"]);
        write_json_pretty(&path, &map).unwrap();

        assert_eq!(
            read_text(&path).unwrap(),
            "{\n  \"dark\": [\n    \"home.svg\"\n  ]\n}"
        );
    }

    #[test]
    fn test_rename_file() {
        let temp_dir = TempDir::new().unwrap();
        let from = temp_dir.path().join("icons8-home.svg");
        let to = temp_dir.path().join("home.svg");
        fs::write(&from, "<svg/>").unwrap();

        rename_file(&from, &to).unwrap();

        assert!(!from.exists());
        assert_eq!(read_text(&to).unwrap(), "<svg/>");
    }

    #[test]
    fn test_rename_missing_reports_source() {
        let temp_dir = TempDir::new().unwrap();
        let from = temp_dir.path().join("gone.svg");

        let err = rename_file(&from, temp_dir.path().join("other.svg")).unwrap_err();
        assert_eq!(err.path(), Some(from.as_path()));
    }
}
