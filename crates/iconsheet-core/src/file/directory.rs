//! Directory traversal and directory lifecycle helpers.
//!
//! # Recursive discovery
//!
//! ```ignore
//! use iconsheet_core::file::{WalkDir, WalkDirOptions, find_files};
//!
//! // Every SVG below a root, sorted by path
//! let icons = find_files("icons-src", "*.svg")?;
//!
//! // Or drive the walker directly
//! let options = WalkDirOptions::new().files_only().glob("*.svg").skip_hidden(true);
//! for entry in WalkDir::with_options("icons-src", options)? {
//!     let entry = entry?;
//!     println!("{} (depth {})", entry.path().display(), entry.depth());
//! }
//! ```
//!
//! # Output directories
//!
//! ```ignore
//! use iconsheet_core::file::recreate_dir;
//!
//! // Wipe `dist` and recreate it together with `dist/css`
//! recreate_dir("dist", &["css"])?;
//! ```

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use super::error::{FileError, FileResult};
use crate::logging::targets;

/// Kind of a walked entry. Symbolic links are reported as what they point
/// to, except that linked directories are never descended into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// A regular file.
    File,
    /// A directory.
    Directory,
    /// A link to a directory, a dangling link or a special file.
    Other,
}

// ============================================================================
// WalkDir - Recursive directory iterator
// ============================================================================

/// Options for [`WalkDir`].
#[derive(Debug, Clone, Default)]
pub struct WalkDirOptions {
    max_depth: Option<usize>,
    files_only: bool,
    glob: Option<String>,
    skip_hidden: bool,
}

impl WalkDirOptions {
    /// Every entry at any depth.
    pub fn new() -> Self {
        Self::default()
    }

    /// Do not yield entries deeper than `depth` (entries in the root are at
    /// depth 1).
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Yield files only. Directories are still descended into.
    pub fn files_only(mut self) -> Self {
        self.files_only = true;
        self
    }

    /// Yield only entries whose name matches a glob.
    pub fn glob(mut self, pattern: impl Into<String>) -> Self {
        self.glob = Some(pattern.into());
        self
    }

    /// Ignore dot-prefixed entries, and everything below dot-prefixed
    /// directories.
    pub fn skip_hidden(mut self, skip: bool) -> Self {
        self.skip_hidden = skip;
        self
    }
}

/// Entry yielded by [`WalkDir`].
#[derive(Debug, Clone)]
pub struct WalkEntry {
    path: PathBuf,
    depth: usize,
    file_type: FileType,
}

impl WalkEntry {
    /// Full path of the entry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Final path component, lossily converted.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Depth below the walk root.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// What the entry is.
    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    pub fn is_file(&self) -> bool {
        self.file_type == FileType::File
    }

    pub fn is_dir(&self) -> bool {
        self.file_type == FileType::Directory
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

/// Breadth-first recursive directory iterator.
///
/// Each directory is read in full and its entries are yielded in file name
/// order, so a walk over an unchanged tree always produces the same
/// sequence.
pub struct WalkDir {
    options: WalkDirOptions,
    matcher: Option<Regex>,
    pending: VecDeque<(PathBuf, usize)>,
    ready: VecDeque<WalkEntry>,
}

impl WalkDir {
    /// Walk everything below `path`.
    pub fn new(path: impl AsRef<Path>) -> FileResult<Self> {
        Self::with_options(path, WalkDirOptions::default())
    }

    /// Walk below `path` with the given options.
    ///
    /// # Errors
    ///
    /// Fails when `path` is missing or not a directory, or the glob is
    /// malformed.
    pub fn with_options(path: impl AsRef<Path>, options: WalkDirOptions) -> FileResult<Self> {
        let root = path.as_ref();
        let metadata = fs::metadata(root).map_err(|e| FileError::from_io(e, root))?;
        if !metadata.is_dir() {
            return Err(FileError::not_directory(root));
        }

        let matcher = options.glob.as_deref().map(glob_to_regex).transpose()?;

        Ok(Self {
            options,
            matcher,
            pending: VecDeque::from([(root.to_path_buf(), 1)]),
            ready: VecDeque::new(),
        })
    }

    /// Collect every yielded path, stopping at the first error.
    pub fn try_collect_paths(self) -> FileResult<Vec<PathBuf>> {
        self.map(|entry| entry.map(WalkEntry::into_path)).collect()
    }

    fn read_level(&mut self, dir: &Path, depth: usize) -> FileResult<()> {
        let mut children = fs::read_dir(dir)
            .map_err(|e| FileError::from_io(e, dir))?
            .map(|entry| {
                let entry = entry.map_err(|e| FileError::from_io(e, dir))?;
                let path = entry.path();
                let file_type = entry
                    .file_type()
                    .map_err(|e| FileError::from_io(e, &path))?;
                let file_type = if file_type.is_dir() {
                    FileType::Directory
                } else if file_type.is_file() || fs::metadata(&path).is_ok_and(|m| m.is_file()) {
                    FileType::File
                } else {
                    FileType::Other
                };
                Ok(WalkEntry { path, depth, file_type })
            })
            .collect::<FileResult<Vec<_>>>()?;
        children.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));

        for child in children {
            if self.options.skip_hidden && child.name().starts_with('.') {
                continue;
            }
            let within_depth = self.options.max_depth.is_none_or(|max| depth < max);
            if child.is_dir() && within_depth {
                self.pending.push_back((child.path.clone(), depth + 1));
            }
            if self.yields(&child) {
                self.ready.push_back(child);
            }
        }
        Ok(())
    }

    fn yields(&self, entry: &WalkEntry) -> bool {
        let kind_ok = match entry.file_type {
            FileType::File => true,
            FileType::Directory => !self.options.files_only,
            FileType::Other => false,
        };
        kind_ok
            && self
                .matcher
                .as_ref()
                .is_none_or(|matcher| matcher.is_match(&entry.name()))
    }
}

impl Iterator for WalkDir {
    type Item = FileResult<WalkEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.ready.pop_front() {
                return Some(Ok(entry));
            }
            let (dir, depth) = self.pending.pop_front()?;
            if let Err(err) = self.read_level(&dir, depth) {
                return Some(Err(err));
            }
        }
    }
}

// ============================================================================
// Glob Pattern Conversion
// ============================================================================

/// Translate a file name glob into an anchored regex.
///
/// `*` and `?` never match a path separator, `**` matches anything, and
/// `[...]` classes accept ranges and `!`/`^` negation. Everything else is
/// literal.
pub(crate) fn glob_to_regex(pattern: &str) -> FileResult<Regex> {
    let mut out = String::from("^");
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '*' if chars.peek() == Some(&'*') => {
                chars.next();
                out.push_str(".*");
            }
            '*' => out.push_str(r"[^/\\]*"),
            '?' => out.push_str(r"[^/\\]"),
            '[' => {
                out.push('[');
                if chars.next_if(|&c| c == '!' || c == '^').is_some() {
                    out.push('^');
                }
                for c in chars.by_ref() {
                    if c == ']' {
                        break;
                    }
                    if matches!(c, '\\' | '[' | '^') {
                        out.push('\\');
                    }
                    out.push(c);
                }
                out.push(']');
            }
            c => out.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }
    out.push('$');

    Regex::new(&out)
        .map_err(|e| FileError::invalid_data(format!("invalid glob pattern '{pattern}': {e}")))
}

// ============================================================================
// Standalone Functions
// ============================================================================

/// Finds every file below `root` whose name matches `pattern`.
///
/// Hidden entries are skipped and the result is sorted by path so that
/// callers see the same order on every platform.
pub fn find_files(root: impl AsRef<Path>, pattern: &str) -> FileResult<Vec<PathBuf>> {
    let root = root.as_ref();
    let options = WalkDirOptions::new()
        .files_only()
        .glob(pattern)
        .skip_hidden(true);

    let mut paths = WalkDir::with_options(root, options)?.try_collect_paths()?;
    paths.sort();

    tracing::debug!(
        target: targets::DISCOVERY,
        root = %root.display(),
        pattern,
        count = paths.len(),
        "discovered files"
    );

    Ok(paths)
}

/// Creates a directory and all parent directories.
///
/// If the directory already exists, this function succeeds silently.
pub fn create_dir_all(path: impl AsRef<Path>) -> FileResult<()> {
    let path = path.as_ref();
    fs::create_dir_all(path).map_err(|e| FileError::from_io(e, path))
}

/// Removes a directory and all its contents.
pub fn remove_dir_all(path: impl AsRef<Path>) -> FileResult<()> {
    let path = path.as_ref();
    fs::remove_dir_all(path).map_err(|e| FileError::from_io(e, path))
}

/// Deletes `path` if it exists, then recreates it empty along with each
/// named subdirectory.
///
/// Removal always completes before creation starts. A regular file sitting
/// at `path` is an error rather than something to delete.
pub fn recreate_dir(path: impl AsRef<Path>, subdirs: &[&str]) -> FileResult<()> {
    let path = path.as_ref();

    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_dir() => {
            tracing::debug!(target: targets::DISCOVERY, path = %path.display(), "removing existing directory");
            remove_dir_all(path)?;
        }
        Ok(_) => return Err(FileError::not_directory(path)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(FileError::from_io(e, path)),
    }

    create_dir_all(path)?;
    for subdir in subdirs {
        create_dir_all(path.join(subdir))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::FileErrorKind;
    use tempfile::TempDir;

    fn setup_test_dir() -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().to_path_buf();

        fs::create_dir_all(root.join("light")).unwrap();
        fs::create_dir_all(root.join("dark/nested")).unwrap();
        fs::create_dir_all(root.join(".cache")).unwrap();

        fs::write(root.join("light/home.svg"), "<svg/>").unwrap();
        fs::write(root.join("light/notes.txt"), "not an icon").unwrap();
        fs::write(root.join("dark/home.svg"), "<svg/>").unwrap();
        fs::write(root.join("dark/nested/gear.svg"), "<svg/>").unwrap();
        fs::write(root.join(".cache/stale.svg"), "<svg/>").unwrap();

        (temp_dir, root)
    }

    #[test]
    fn test_walk_all_entries() {
        let (_temp_dir, root) = setup_test_dir();

        let entries: Vec<_> = WalkDir::new(&root)
            .unwrap()
            .filter_map(Result::ok)
            .collect();

        // light, dark, .cache, dark/nested + 5 files
        assert_eq!(entries.len(), 9);
    }

    #[test]
    fn test_walk_depth_tracking() {
        let (_temp_dir, root) = setup_test_dir();

        let gear = WalkDir::new(&root)
            .unwrap()
            .filter_map(Result::ok)
            .find(|e| e.name() == "gear.svg")
            .unwrap();

        assert_eq!(gear.depth(), 3);
        assert!(gear.is_file());
    }

    #[test]
    fn test_walk_max_depth() {
        let (_temp_dir, root) = setup_test_dir();

        let names: Vec<_> = WalkDir::with_options(&root, WalkDirOptions::new().max_depth(2))
            .unwrap()
            .filter_map(Result::ok)
            .map(|e| e.name())
            .collect();

        assert!(names.contains(&"nested".to_string()));
        assert!(!names.contains(&"gear.svg".to_string()));
    }

    #[test]
    fn test_walk_files_only_in_name_order() {
        let (_temp_dir, root) = setup_test_dir();

        let names: Vec<_> = WalkDir::with_options(&root, WalkDirOptions::new().files_only())
            .unwrap()
            .filter_map(Result::ok)
            .map(|e| e.name())
            .collect();

        assert_eq!(names, ["stale.svg", "home.svg", "home.svg", "notes.txt", "gear.svg"]);
    }

    #[test]
    fn test_walk_skips_hidden_subtrees() {
        let (_temp_dir, root) = setup_test_dir();

        let options = WalkDirOptions::new().skip_hidden(true);
        let paths = WalkDir::with_options(&root, options)
            .unwrap()
            .try_collect_paths()
            .unwrap();

        assert_eq!(paths.len(), 7);
        assert!(paths.iter().all(|p| !p.starts_with(root.join(".cache"))));
    }

    #[test]
    fn test_walk_rejects_file_root() {
        let (_temp_dir, root) = setup_test_dir();

        let err = WalkDir::new(root.join("light/home.svg")).err().unwrap();
        assert_eq!(err.kind(), FileErrorKind::NotDirectory);
    }

    #[test]
    fn test_walk_missing_root() {
        let temp_dir = TempDir::new().unwrap();

        let err = WalkDir::new(temp_dir.path().join("missing")).err().unwrap();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_find_files_sorted_and_filtered() {
        let (_temp_dir, root) = setup_test_dir();

        let found = find_files(&root, "*.svg").unwrap();
        let relative: Vec<_> = found
            .iter()
            .map(|p| p.strip_prefix(&root).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            relative,
            vec![
                PathBuf::from("dark/home.svg"),
                PathBuf::from("dark/nested/gear.svg"),
                PathBuf::from("light/home.svg"),
            ]
        );
    }

    #[test]
    fn test_glob_to_regex() {
        let regex = glob_to_regex("*.svg").unwrap();
        assert!(regex.is_match("home.svg"));
        assert!(regex.is_match(".svg"));
        assert!(!regex.is_match("home.svg.bak"));
        assert!(!regex.is_match("homesvg"));

        let regex = glob_to_regex("icon-?.svg").unwrap();
        assert!(regex.is_match("icon-a.svg"));
        assert!(!regex.is_match("icon-ab.svg"));

        let regex = glob_to_regex("[!_]*.svg").unwrap();
        assert!(regex.is_match("home.svg"));
        assert!(!regex.is_match("_home.svg"));

        let regex = glob_to_regex("[a-c].svg").unwrap();
        assert!(regex.is_match("b.svg"));
        assert!(!regex.is_match("d.svg"));
    }

    #[test]
    fn test_recreate_dir_clears_contents() {
        let temp_dir = TempDir::new().unwrap();
        let dest = temp_dir.path().join("dist");
        fs::create_dir_all(dest.join("old")).unwrap();
        fs::write(dest.join("old/leftover.css"), "a{}").unwrap();

        recreate_dir(&dest, &["css"]).unwrap();

        assert!(dest.join("css").is_dir());
        assert!(!dest.join("old").exists());
        assert_eq!(fs::read_dir(&dest).unwrap().count(), 1);
    }

    #[test]
    fn test_recreate_dir_when_missing() {
        let temp_dir = TempDir::new().unwrap();
        let dest = temp_dir.path().join("fresh");

        recreate_dir(&dest, &[]).unwrap();
        recreate_dir(&dest, &[]).unwrap();

        assert!(dest.is_dir());
    }

    #[test]
    fn test_recreate_dir_refuses_file() {
        let temp_dir = TempDir::new().unwrap();
        let dest = temp_dir.path().join("dist");
        fs::write(&dest, "not a dir").unwrap();

        let err = recreate_dir(&dest, &["css"]).unwrap_err();
        assert_eq!(err.kind(), FileErrorKind::NotDirectory);
        assert!(dest.is_file());
    }
}
