//! Logging facilities.
//!
//! iconsheet instruments with the `tracing` crate. Libraries never install a
//! subscriber; the binaries do, and honour `RUST_LOG`:
//!
//! ```ignore
//! RUST_LOG=iconsheet_core::resolve=debug build-icon-style ./icons ./dist
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "iconsheet_core";
    /// File discovery and directory setup.
    pub const DISCOVERY: &str = "iconsheet_core::discovery";
    /// Theme/icon mapping.
    pub const ICON_MAP: &str = "iconsheet_core::icon_map";
    /// Intersection and uniqueness resolution.
    pub const RESOLVE: &str = "iconsheet_core::resolve";
    /// File renaming.
    pub const RENAME: &str = "iconsheet_core::rename";
    /// Stylesheet emission.
    pub const EMIT: &str = "iconsheet_style::emit";
    /// Phase timing spans.
    pub const PERF: &str = "iconsheet::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Wrap each build phase in one to get timing from a subscriber configured
/// with span close events.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
