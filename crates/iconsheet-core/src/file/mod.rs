//! File I/O helpers used by icon discovery and style emission.
//!
//! Thin wrappers over `std::fs` that attach the offending path to every
//! error, plus a recursive walker with glob filtering.
//!
//! ```ignore
//! use iconsheet_core::file::{find_files, read_text, recreate_dir};
//!
//! recreate_dir("dist", &["css"])?;
//! for path in find_files("icons-src", "*.svg")? {
//!     let svg = read_text(&path)?;
//!     // ...
//! }
//! ```

mod directory;
mod error;
mod operations;

pub use directory::{
    FileType, WalkDir, WalkDirOptions, WalkEntry, create_dir_all, find_files, recreate_dir,
    remove_dir_all,
};
pub use error::{FileError, FileErrorKind, FileResult};
pub use operations::{append_text, read_text, rename_file, write_json_pretty, write_text};
