//! Configuration for one archiving run.

use crate::creation::ignore::DEFAULT_IGNORE_FILE;
use std::path::PathBuf;

/// Default root directory to archive.
pub const DEFAULT_ROOT: &str = "./";

/// Default output archive file name.
pub const DEFAULT_OUTPUT: &str = "project.zip";

/// Inputs for one archiving run.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use zipproject_core::creation::ProjectConfig;
///
/// let config = ProjectConfig::default()
///     .with_root("proj")
///     .with_output("proj.zip");
///
/// assert_eq!(config.ignore_file_path(), Path::new("proj/.zipignore"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Explicit ignore file.
    ///
    /// `None` means `<root>/.zipignore`.
    pub ignore_file: Option<PathBuf>,

    /// Directory to archive. Its path string is also the prefix stripped
    /// from stored entry names.
    ///
    /// Default: `./`.
    pub root: PathBuf,

    /// Archive file to create or truncate.
    ///
    /// Default: `project.zip`.
    pub output: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            ignore_file: None,
            root: PathBuf::from(DEFAULT_ROOT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl ProjectConfig {
    /// Creates a `ProjectConfig` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit ignore file.
    #[must_use]
    pub fn with_ignore_file(mut self, path: Option<PathBuf>) -> Self {
        self.ignore_file = path;
        self
    }

    /// Sets the root directory.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Sets the output archive path.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Resolves the ignore file location.
    #[must_use]
    pub fn ignore_file_path(&self) -> PathBuf {
        self.ignore_file
            .clone()
            .unwrap_or_else(|| self.root.join(DEFAULT_IGNORE_FILE))
    }
}
