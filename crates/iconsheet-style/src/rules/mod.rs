//! Style rules and per-theme stylesheets.

mod rule;
mod stylesheet;

pub use rule::{Declaration, StyleRule};
pub use stylesheet::{OutputFormat, ThemeSheet};
