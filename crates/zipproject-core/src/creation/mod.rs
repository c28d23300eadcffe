//! Archive creation module.
//!
//! Loading the ignore list, walking the root, filtering entries and writing
//! the ZIP archive each live in their own submodule.

pub mod filters;
pub mod ignore;
pub mod walker;

pub mod config;
pub mod report;
pub mod zip;

// Re-exports for public API
pub use config::ProjectConfig;
pub use ignore::IgnoreList;
pub use ignore::IgnorePattern;
pub use ignore::PatternKind;
pub use report::ZipReport;
pub use walker::Entry;
