//! Packages a directory tree into a ZIP archive, skipping entries matched by
//! a `.zipignore` file.
//!
//! The pipeline is strictly sequential: load the ignore list, walk the root,
//! filter the walked entries, then write the survivors with DEFLATE
//! compression under root-relative names.
//!
//! # Examples
//!
//! ```no_run
//! use zipproject_core::creation::ProjectConfig;
//! use zipproject_core::zip_project;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ProjectConfig::default().with_root("my-project");
//! let report = zip_project(&config)?;
//! println!("Zipped {} files", report.files_added);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod creation;
pub mod error;

// Re-export main API types
pub use api::Plan;
pub use api::plan;
pub use api::zip_project;
pub use creation::ProjectConfig;
pub use creation::ZipReport;
pub use error::Result;
pub use error::ZipProjectError;
