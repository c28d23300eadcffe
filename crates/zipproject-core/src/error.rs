//! Error types for project archiving operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ZipProjectError`.
pub type Result<T> = std::result::Result<T, ZipProjectError>;

/// Errors that can occur while loading, walking, filtering or zipping.
///
/// Every variant is an I/O failure of some kind. Ignore patterns are never
/// validated, so there is no separate validation error.
#[derive(Error, Debug)]
pub enum ZipProjectError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal failed at a specific path.
    #[error("cannot walk {path}: {source}")]
    Walk {
        /// Path at which traversal failed (the root if unknown).
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The archive writer rejected an entry or could not finish the archive.
    #[error("cannot write archive entry {name}: {source}")]
    Archive {
        /// Stored name of the entry being written.
        name: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl ZipProjectError {
    /// Returns `true` for every error, since all failures are I/O failures.
    ///
    /// Kept as a method so callers can match on intent rather than variants.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipproject_core::ZipProjectError;
    ///
    /// let err = ZipProjectError::from(std::io::Error::other("boom"));
    /// assert!(err.is_io());
    /// ```
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Walk { .. } | Self::Archive { .. })
    }

    /// Returns the underlying `std::io::ErrorKind`.
    #[must_use]
    pub fn io_kind(&self) -> std::io::ErrorKind {
        match self {
            Self::Io(e) | Self::Walk { source: e, .. } | Self::Archive { source: e, .. } => {
                e.kind()
            }
        }
    }

    /// Builds a `Walk` error from a `walkdir` failure.
    pub(crate) fn from_walkdir(err: walkdir::Error, root: &std::path::Path) -> Self {
        let path = err
            .path()
            .map_or_else(|| root.to_path_buf(), std::path::Path::to_path_buf);
        let source = err
            .into_io_error()
            .unwrap_or_else(|| std::io::Error::other("file system loop detected"));
        Self::Walk { path, source }
    }
}
