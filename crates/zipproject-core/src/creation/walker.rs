//! Directory tree enumeration.
//!
//! The walker lists every entry under a root path, the root included, in
//! depth-first order with children sorted by file name. Nothing is filtered
//! here; see [`crate::creation::filters`] for that.

use crate::Result;
use crate::ZipProjectError;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// One filesystem object discovered while walking the root.
///
/// `path` is the root path joined with the entry's relative components, so
/// it always starts with the root path string exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Path of the entry as produced by the walk.
    pub path: PathBuf,

    /// Whether the walk saw a directory (symlinks are not followed).
    pub is_dir: bool,
}

impl Entry {
    /// Creates an entry from a path and its directory flag.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, is_dir: bool) -> Self {
        Self {
            path: path.into(),
            is_dir,
        }
    }

    /// Returns the final path component, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipproject_core::creation::walker::Entry;
    ///
    /// let entry = Entry::new("src/main.rs", false);
    /// assert_eq!(entry.name().as_deref(), Some("main.rs"));
    /// ```
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }
}

/// Walks `root` and returns every entry beneath it, root first.
///
/// Traversal stops at the first error.
///
/// # Examples
///
/// ```no_run
/// use zipproject_core::creation::walker::enumerate_entries;
///
/// let entries = enumerate_entries("./project")?;
/// for entry in &entries {
///     println!("{}", entry.path.display());
/// }
/// # Ok::<(), zipproject_core::ZipProjectError>(())
/// ```
///
/// # Errors
///
/// Returns an error if the root does not exist, a directory cannot be read,
/// or an entry's type cannot be determined.
pub fn enumerate_entries<P: AsRef<Path>>(root: P) -> Result<Vec<Entry>> {
    let root = root.as_ref();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    let mut entries = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| ZipProjectError::from_walkdir(e, root))?;
        entries.push(Entry::new(entry.path(), entry.file_type().is_dir()));
    }

    log::debug!("enumerated {} entries under {}", entries.len(), root.display());
    Ok(entries)
}
