//! Themed icon stylesheets for iconsheet.
//!
//! This crate turns a theme-grouped SVG tree into stylesheets, featuring:
//!
//! - **Encoding**: SVG markup inlined as readable `data:` URLs
//! - **Rules**: one `.ico-<name>` rule per icon, as a background or a mask
//! - **Scopes**: theme selection by body data attribute, icon data attribute
//!   or ancestor class
//! - **Output**: SCSS partials or plain CSS, per theme with an index or
//!   combined into one file
//! - **Configuration**: options loadable from TOML
//!
//! # Example
//!
//! ```ignore
//! use iconsheet_style::prelude::*;
//!
//! let options = EmitOptions::from_file("iconsheet.toml")?.debug(true);
//! let report = StyleEmitter::new(options).build("icons-src", "dist")?;
//! println!("{} rules for {} themes", report.rules, report.themes.len());
//! ```

pub mod emitter;
pub mod encode;
pub mod options;
pub mod rules;
pub mod selector;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::emitter::{BuildReport, StyleEmitter, build_icon_style};
    pub use crate::encode::{encode_svg, svg_data_url};
    pub use crate::options::{EmitOptions, OutputLayout, StyleVariant, parse_theme_list};
    pub use crate::rules::{OutputFormat, StyleRule, ThemeSheet};
    pub use crate::selector::{ThemeScope, icon_class};
    pub use crate::{Error, Result};
}
