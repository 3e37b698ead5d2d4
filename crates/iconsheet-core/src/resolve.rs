//! Shared and theme-unique icon resolution.
//!
//! An icon is *shared* by a theme when at least one other theme has an icon
//! of the same name. This is the union of the pairwise overlaps with every
//! other theme, not an n-way intersection: with themes `a`, `b` and `c`, a
//! name present in `a` and `b` only is shared by both `a` and `b`.
//!
//! Everything a theme has that is not shared is *unique* to it. For every
//! theme the two sets partition the theme's icon names.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::icon_map::{IconMap, IconName, ThemeName};
use crate::logging::targets;
use crate::{Error, Result};

/// Mapping from theme to a set of icon names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ThemeSets {
    sets: BTreeMap<ThemeName, BTreeSet<IconName>>,
}

/// Theme to the icon names it shares with at least one other theme.
pub type IntersectionMap = ThemeSets;

/// Theme to the icon names no other theme has.
pub type UniqueMap = ThemeSets;

impl ThemeSets {
    /// Icon names recorded for a theme.
    pub fn get(&self, theme: &str) -> Option<&BTreeSet<IconName>> {
        self.sets.get(theme)
    }

    /// Theme names in order.
    pub fn themes(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    /// Iterate over `(theme, names)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<IconName>)> {
        self.sets.iter().map(|(theme, names)| (theme.as_str(), names))
    }

    /// Number of themes.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Check if there are no themes.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Total number of names across all themes.
    pub fn name_count(&self) -> usize {
        self.sets.values().map(BTreeSet::len).sum()
    }
}

impl FromIterator<(ThemeName, BTreeSet<IconName>)> for ThemeSets {
    fn from_iter<I: IntoIterator<Item = (ThemeName, BTreeSet<IconName>)>>(iter: I) -> Self {
        Self {
            sets: iter.into_iter().collect(),
        }
    }
}

/// Compute, for every theme, the icon names it shares with any other theme.
///
/// Duplicate names in the input lists collapse to one entry.
pub fn intersect(map: &IconMap) -> IntersectionMap {
    let names: BTreeMap<&str, BTreeSet<&IconName>> = map
        .iter()
        .map(|(theme, icons)| (theme, icons.iter().collect()))
        .collect();

    let intersection: IntersectionMap = names
        .iter()
        .map(|(&theme, own)| {
            let shared = names
                .iter()
                .filter(|&(&other, _)| other != theme)
                .fold(BTreeSet::new(), |mut shared, (_, theirs)| {
                    shared.extend(own.intersection(theirs).map(|name| (*name).clone()));
                    shared
                });
            (theme.to_string(), shared)
        })
        .collect();

    tracing::debug!(
        target: targets::RESOLVE,
        themes = intersection.len(),
        shared = intersection.name_count(),
        "computed shared icons"
    );

    intersection
}

/// Compute, for every theme, the icon names absent from its shared set.
///
/// # Errors
///
/// Returns [`Error::UnknownTheme`] when `intersection` lacks a theme of
/// `map`, which means the two were not derived from each other.
pub fn unique(map: &IconMap, intersection: &IntersectionMap) -> Result<UniqueMap> {
    let unique = map
        .iter()
        .map(|(theme, icons)| {
            let shared = intersection
                .get(theme)
                .ok_or_else(|| Error::unknown_theme(theme))?;
            let names: BTreeSet<IconName> = icons
                .iter()
                .filter(|icon| !shared.contains(*icon))
                .cloned()
                .collect();
            Ok::<_, Error>((theme.to_string(), names))
        })
        .collect::<Result<UniqueMap>>()?;

    tracing::debug!(
        target: targets::RESOLVE,
        themes = unique.len(),
        unique = unique.name_count(),
        "computed theme-unique icons"
    );

    Ok(unique)
}
