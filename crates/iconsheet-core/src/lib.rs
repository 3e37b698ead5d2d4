//! Core of iconsheet: icon discovery, theme mapping and set resolution.
//!
//! Icons live in a source tree grouped by theme directories
//! (`<root>/<theme>/<icon>.svg`). This crate:
//!
//! - **Discovers** icon files recursively ([`file::find_files`])
//! - **Maps** them by theme ([`icon_map::map_icons`])
//! - **Resolves** which names each theme shares with another theme and which
//!   are unique to it ([`resolve::intersect`], [`resolve::unique`])
//! - **Renames** icon files by stripping a vendor substring
//!   ([`rename::rename_icons`])
//!
//! # Example
//!
//! ```ignore
//! use iconsheet_core::prelude::*;
//!
//! let map = map_icons("icons-src", None)?;
//! let shared = intersect(&map);
//! let only = unique(&map, &shared)?;
//! ```

pub mod file;
pub mod icon_map;
pub mod logging;
pub mod rename;
pub mod resolve;

mod error;

pub use error::{Error, Result, require_argument};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::icon_map::{ICON_PATTERN, IconMap, IconMapper, IconName, ThemeName, map_icons};
    pub use crate::rename::{IconRenamer, Rename, clean_name, rename_icons};
    pub use crate::resolve::{IntersectionMap, ThemeSets, UniqueMap, intersect, unique};
    pub use crate::{Error, Result};
}
