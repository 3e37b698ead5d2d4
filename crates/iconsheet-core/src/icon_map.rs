//! Grouping of icon files by theme.
//!
//! The theme of an icon is the name of the directory that directly contains
//! it, so a source tree laid out as
//!
//! ```text
//! icons-src/
//!   light/home.svg
//!   light/gear.svg
//!   dark/home.svg
//! ```
//!
//! maps to `{ "dark": ["home.svg"], "light": ["gear.svg", "home.svg"] }`.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Serialize;

use crate::file::find_files;
use crate::logging::targets;
use crate::{Error, Result};

/// Name of a theme, taken from a directory basename.
pub type ThemeName = String;

/// Name of an icon: the file basename including its extension.
pub type IconName = String;

/// Glob matched against file names when discovering icons.
pub const ICON_PATTERN: &str = "*.svg";

/// Mapping from theme to the icons found for it, in discovery order.
///
/// Themes iterate in name order. Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IconMap {
    themes: BTreeMap<ThemeName, Vec<IconName>>,
}

impl IconMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `icon` to the list of `theme`, creating the list on first use.
    pub fn insert(&mut self, theme: impl Into<ThemeName>, icon: impl Into<IconName>) {
        self.themes
            .entry(theme.into())
            .or_default()
            .push(icon.into());
    }

    /// Icons recorded for a theme.
    pub fn icons(&self, theme: &str) -> Option<&[IconName]> {
        self.themes.get(theme).map(Vec::as_slice)
    }

    /// Theme names in order.
    pub fn themes(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    /// Iterate over `(theme, icons)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[IconName])> {
        self.themes
            .iter()
            .map(|(theme, icons)| (theme.as_str(), icons.as_slice()))
    }

    /// Check if a theme is present.
    pub fn contains_theme(&self, theme: &str) -> bool {
        self.themes.contains_key(theme)
    }

    /// Number of themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Check if no theme was mapped.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Total number of icons across all themes.
    pub fn icon_count(&self) -> usize {
        self.themes.values().map(Vec::len).sum()
    }
}

impl<T: Into<ThemeName>, I: Into<IconName>> FromIterator<(T, I)> for IconMap {
    fn from_iter<It: IntoIterator<Item = (T, I)>>(iter: It) -> Self {
        iter.into_iter()
            .fold(IconMap::new(), |mut map, (theme, icon)| {
                map.insert(theme, icon);
                map
            })
    }
}

/// Builder that discovers icons under a root directory and groups them.
#[derive(Debug, Clone)]
pub struct IconMapper {
    pattern: String,
    include_themes: Option<BTreeSet<ThemeName>>,
}

impl Default for IconMapper {
    fn default() -> Self {
        Self {
            pattern: ICON_PATTERN.to_string(),
            include_themes: None,
        }
    }
}

impl IconMapper {
    /// Create a mapper for `*.svg` files with no theme restriction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the glob matched against icon file names.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Restrict mapping to the listed themes.
    pub fn include_themes<I, S>(mut self, themes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ThemeName>,
    {
        self.include_themes = Some(themes.into_iter().map(Into::into).collect());
        self
    }

    /// Discover and group icons below `root`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyArgument`] for an empty root, or a file error
    /// when the root cannot be walked.
    pub fn map(&self, root: impl AsRef<Path>) -> Result<IconMap> {
        let root = root.as_ref();
        if root.as_os_str().is_empty() {
            return Err(Error::empty_argument("directory"));
        }

        let paths = find_files(root, &self.pattern)?;
        let map: IconMap = paths
            .iter()
            .filter_map(|path| theme_and_icon(path))
            .filter(|(theme, _)| self.is_included(theme))
            .collect();

        if let Some(ref include) = self.include_themes {
            for missing in include.iter().filter(|t| !map.contains_theme(t)) {
                tracing::warn!(target: targets::ICON_MAP, theme = %missing, "no icons found for requested theme");
            }
        }

        tracing::info!(
            target: targets::ICON_MAP,
            themes = map.len(),
            icons = map.icon_count(),
            "mapped icons"
        );

        Ok(map)
    }

    fn is_included(&self, theme: &str) -> bool {
        self.include_themes
            .as_ref()
            .is_none_or(|include| include.contains(theme))
    }
}

/// Map every `*.svg` below `root` by theme, optionally restricted to an
/// allow-list of theme names.
pub fn map_icons(root: impl AsRef<Path>, include_themes: Option<&[String]>) -> Result<IconMap> {
    let mapper = match include_themes {
        Some(themes) => IconMapper::new().include_themes(themes.iter().cloned()),
        None => IconMapper::new(),
    };
    mapper.map(root)
}

fn theme_and_icon(path: &Path) -> Option<(ThemeName, IconName)> {
    let parent = path.parent()?;
    let names = (
        parent.file_name().unwrap_or(parent.as_os_str()).to_str(),
        path.file_name()?.to_str(),
    );
    match names {
        (Some(theme), Some(icon)) => Some((theme.to_string(), icon.to_string())),
        _ => {
            tracing::warn!(target: targets::ICON_MAP, path = %path.display(), "skipping icon whose path is not valid UTF-8");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn icon_tree(files: &[&str]) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        for file in files {
            let path = temp_dir.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "<svg/>").unwrap();
        }
        temp_dir
    }

    #[test]
    fn groups_by_parent_directory() {
        let tree = icon_tree(&["light/home.svg", "light/gear.svg", "dark/home.svg"]);

        let map = map_icons(tree.path(), None).unwrap();

        assert_eq!(map.themes().collect::<Vec<_>>(), vec!["dark", "light"]);
        assert_eq!(map.icons("dark").unwrap(), ["home.svg"]);
        assert_eq!(map.icons("light").unwrap(), ["gear.svg", "home.svg"]);
        assert_eq!(map.icon_count(), 3);
    }

    #[test]
    fn nested_directories_become_their_own_theme() {
        let tree = icon_tree(&["light/home.svg", "light/outline/home.svg"]);

        let map = map_icons(tree.path(), None).unwrap();

        assert_eq!(map.icons("light").unwrap(), ["home.svg"]);
        assert_eq!(map.icons("outline").unwrap(), ["home.svg"]);
    }

    #[test]
    fn ignores_other_extensions() {
        let tree = icon_tree(&["light/home.svg", "light/home.png", "light/README.md"]);

        let map = map_icons(tree.path(), None).unwrap();

        assert_eq!(map.icon_count(), 1);
    }

    #[test]
    fn allow_list_restricts_themes() {
        let tree = icon_tree(&["light/home.svg", "dark/home.svg", "contrast/home.svg"]);
        let include = vec!["dark".to_string(), "light".to_string(), "sepia".to_string()];

        let map = map_icons(tree.path(), Some(&include)).unwrap();

        assert_eq!(map.themes().collect::<Vec<_>>(), vec!["dark", "light"]);
        assert!(!map.contains_theme("contrast"));
    }

    #[test]
    fn custom_pattern() {
        let tree = icon_tree(&["light/home.svg", "light/home.png"]);

        let map = IconMapper::new().pattern("*.png").map(tree.path()).unwrap();

        assert_eq!(map.icons("light").unwrap(), ["home.png"]);
    }

    #[test]
    fn empty_root_is_rejected() {
        let err = map_icons("", None).unwrap_err();
        assert!(matches!(err, Error::EmptyArgument { .. }));
    }

    #[test]
    fn missing_root_is_a_file_error() {
        let temp_dir = TempDir::new().unwrap();

        let err = map_icons(temp_dir.path().join("nope"), None).unwrap_err();
        assert!(matches!(err, Error::File(ref e) if e.is_not_found()));
    }

    #[test]
    fn empty_tree_maps_to_empty() {
        let temp_dir = TempDir::new().unwrap();

        let map = map_icons(temp_dir.path(), None).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn serializes_as_object() {
        let map: IconMap = [("dark", "home.svg"), ("dark", "gear.svg")]
            .into_iter()
            .collect();

        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"dark":["home.svg","gear.svg"]}"#
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_names_are_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tree = icon_tree(&["light/home.svg", "dark/home.svg"]);
        fs::write(tree.path().join("light").join(OsStr::from_bytes(b"\xFFgear.svg")), "<svg/>").unwrap();
        let odd_theme = tree.path().join(OsStr::from_bytes(b"n\xFFght"));
        fs::create_dir_all(&odd_theme).unwrap();
        fs::write(odd_theme.join("home.svg"), "<svg/>").unwrap();

        let map = map_icons(tree.path(), None).unwrap();

        assert_eq!(map.themes().collect::<Vec<_>>(), vec!["dark", "light"]);
        assert_eq!(map.icons("light").unwrap(), ["home.svg"]);
        assert_eq!(map.icon_count(), 2);
    }
}
