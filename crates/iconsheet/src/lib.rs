//! iconsheet - themed SVG icon stylesheets.
//!
//! This is the umbrella crate that re-exports the public APIs of
//! `iconsheet-core` and `iconsheet-style`, and hosts the `build-icon-style`
//! and `fix-icon-names` command-line tools.
//!
//! # Example
//!
//! ```no_run
//! use iconsheet::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = StyleEmitter::new(EmitOptions::new()).build("icons-src", "dist")?;
//!     println!("{} rules written", report.rules);
//!     Ok(())
//! }
//! ```

pub use iconsheet_core::*;

/// Stylesheet emission module.
pub mod style {
    pub use iconsheet_style::*;
}

pub mod cli;
pub mod prelude;
