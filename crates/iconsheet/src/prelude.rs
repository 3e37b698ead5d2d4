//! Prelude module for iconsheet.
//!
//! ```ignore
//! use iconsheet::prelude::*;
//! ```
//!
//! This provides access to:
//! - Discovery and mapping (`IconMapper`, `IconMap`)
//! - Set resolution (`intersect`, `unique`)
//! - Renaming (`IconRenamer`, `clean_name`)
//! - Emission (`StyleEmitter`, `EmitOptions`)

// ============================================================================
// Mapping and Resolution
// ============================================================================

pub use iconsheet_core::icon_map::{ICON_PATTERN, IconMap, IconMapper, IconName, ThemeName, map_icons};
pub use iconsheet_core::resolve::{IntersectionMap, ThemeSets, UniqueMap, intersect, unique};

// ============================================================================
// Renaming
// ============================================================================

pub use iconsheet_core::rename::{IconRenamer, Rename, clean_name, rename_icons};

// ============================================================================
// Emission
// ============================================================================

pub use iconsheet_style::emitter::{BuildReport, StyleEmitter, build_icon_style};
pub use iconsheet_style::encode::svg_data_url;
pub use iconsheet_style::options::{EmitOptions, OutputLayout, StyleVariant, parse_theme_list};
pub use iconsheet_style::rules::OutputFormat;
pub use iconsheet_style::selector::ThemeScope;
