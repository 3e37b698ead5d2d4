//! In-place renaming of icon files.
//!
//! Icon packs often ship with a vendor prefix baked into every file name
//! (`icons8-home.svg`). The renamer strips a substring from each discovered
//! icon's name and tidies the stem by trimming leading underscores and
//! trailing hyphens.

use std::path::{Path, PathBuf};

use crate::file::{find_files, rename_file};
use crate::icon_map::ICON_PATTERN;
use crate::logging::targets;
use crate::{Error, Result};

/// A rename that was performed (or planned, in a dry run).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    /// Original path.
    pub from: PathBuf,
    /// New path, in the same directory.
    pub to: PathBuf,
}

/// Compute the cleaned-up name for `file_name`.
///
/// Removes the first occurrence of `substring`, then trims leading `_` and
/// trailing `-` from the stem. The extension is kept as is. Returns `None`
/// when nothing of the stem would remain.
///
/// ```
/// use iconsheet_core::rename::clean_name;
///
/// assert_eq!(clean_name("icons8-home.svg", "icons8-").as_deref(), Some("home.svg"));
/// assert_eq!(clean_name("_icons8-home-.svg", "icons8-").as_deref(), Some("home.svg"));
/// ```
pub fn clean_name(file_name: &str, substring: &str) -> Option<String> {
    let stripped = if substring.is_empty() {
        file_name.to_string()
    } else {
        file_name.replacen(substring, "", 1)
    };

    let (stem, extension) = match stripped.rfind('.') {
        Some(dot) => stripped.split_at(dot),
        None => (stripped.as_str(), ""),
    };

    let stem = stem.trim_start_matches('_').trim_end_matches('-');
    if stem.is_empty() {
        return None;
    }

    Some(format!("{stem}{extension}"))
}

/// Builder for a renaming pass over an icon directory.
#[derive(Debug, Clone)]
pub struct IconRenamer {
    substring: String,
    pattern: String,
    dry_run: bool,
}

impl IconRenamer {
    /// Create a renamer that strips `substring` from `*.svg` file names.
    pub fn new(substring: impl Into<String>) -> Self {
        Self {
            substring: substring.into(),
            pattern: ICON_PATTERN.to_string(),
            dry_run: false,
        }
    }

    /// Set the glob matched against file names.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// When set, compute renames without touching the filesystem.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Rename every matching file below `directory` and return what was
    /// renamed.
    ///
    /// Files are processed in path order. When two files collapse to the
    /// same new name, the platform's rename semantics decide the outcome.
    pub fn run(&self, directory: impl AsRef<Path>) -> Result<Vec<Rename>> {
        let mut renames = Vec::new();
        self.run_with(directory, |rename| renames.push(rename.clone()))?;
        Ok(renames)
    }

    /// Like [`run`](Self::run), but hands each rename to `on_rename` as
    /// soon as it has happened, so renames done before a failure are still
    /// seen. Returns the number of renames.
    pub fn run_with(
        &self,
        directory: impl AsRef<Path>,
        mut on_rename: impl FnMut(&Rename),
    ) -> Result<usize> {
        let directory = directory.as_ref();
        if directory.as_os_str().is_empty() {
            return Err(Error::empty_argument("directory"));
        }

        let mut count = 0;
        for path in find_files(directory, &self.pattern)? {
            let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
                tracing::warn!(target: targets::RENAME, path = %path.display(), "skipping file name that is not valid UTF-8");
                continue;
            };

            let Some(new_name) = clean_name(file_name, &self.substring) else {
                tracing::warn!(target: targets::RENAME, path = %path.display(), "skipping rename that would leave an empty name");
                continue;
            };

            if new_name == file_name {
                continue;
            }

            let rename = Rename {
                to: path.with_file_name(&new_name),
                from: path,
            };
            if !self.dry_run {
                rename_file(&rename.from, &rename.to)?;
            }
            tracing::debug!(target: targets::RENAME, from = %rename.from.display(), to = %rename.to.display(), dry_run = self.dry_run, "renamed icon");
            on_rename(&rename);
            count += 1;
        }

        tracing::info!(target: targets::RENAME, count, "rename pass finished");
        Ok(count)
    }
}

/// Strip `substring` from every icon file name below `directory`.
pub fn rename_icons(directory: impl AsRef<Path>, substring: &str) -> Result<Vec<Rename>> {
    IconRenamer::new(substring).run(directory)
}
