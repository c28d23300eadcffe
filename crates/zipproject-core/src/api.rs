//! High-level public API for zipping a project directory.

use std::path::PathBuf;

use crate::Result;
use crate::creation::ProjectConfig;
use crate::creation::ZipReport;
use crate::creation::filters::filter_entries;
use crate::creation::ignore::IgnoreList;
use crate::creation::ignore::load_ignore_list;
use crate::creation::walker::Entry;
use crate::creation::walker::enumerate_entries;
use crate::creation::zip::write_archive;

/// Entries selected for archiving, computed before anything is written.
#[derive(Debug, Clone)]
pub struct Plan {
    /// Ignore patterns that were applied, in file order.
    pub ignore: IgnoreList,

    /// Entries that survived filtering, in walk order.
    pub entries: Vec<Entry>,
}

impl Plan {
    /// Returns the selected entry paths.
    #[must_use]
    pub fn paths(&self) -> Vec<PathBuf> {
        self.entries.iter().map(|e| e.path.clone()).collect()
    }

    /// Writes the planned entries into `config.output`.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be created or any entry cannot
    /// be copied into the archive.
    pub fn write(&self, config: &ProjectConfig) -> Result<ZipReport> {
        let report = write_archive(&config.output, &self.entries, &config.root)?;
        log::info!(
            "wrote {} file(s), {} bytes to {} in {:?}",
            report.files_added,
            report.bytes_written,
            config.output.display(),
            report.duration
        );
        Ok(report)
    }
}

/// Loads the ignore list, walks the root and filters the result.
///
/// The output path is not touched, so a failure here never creates or
/// truncates the archive.
///
/// # Errors
///
/// Returns an error if:
/// - The ignore file is missing or unreadable
/// - The root cannot be walked
/// - An entry's metadata cannot be read during filtering
///
/// # Examples
///
/// ```no_run
/// use zipproject_core::creation::ProjectConfig;
/// use zipproject_core::plan;
///
/// let config = ProjectConfig::default().with_root("project");
/// let plan = plan(&config)?;
/// for path in plan.paths() {
///     println!("{}", path.display());
/// }
/// # Ok::<(), zipproject_core::ZipProjectError>(())
/// ```
pub fn plan(config: &ProjectConfig) -> Result<Plan> {
    let ignore = load_ignore_list(config.ignore_file_path())?;
    let entries = enumerate_entries(&config.root)?;
    let entries = filter_entries(&entries, &ignore)?;

    Ok(Plan { ignore, entries })
}

/// Runs the whole pipeline: load, walk, filter, write.
///
/// # Errors
///
/// Returns the first error from any stage; see [`plan`] and [`Plan::write`].
///
/// # Examples
///
/// ```no_run
/// use zipproject_core::creation::ProjectConfig;
/// use zipproject_core::zip_project;
///
/// let config = ProjectConfig::default()
///     .with_root("project")
///     .with_output("project.zip");
/// let report = zip_project(&config)?;
/// println!("Added {} files", report.files_added);
/// # Ok::<(), zipproject_core::ZipProjectError>(())
/// ```
pub fn zip_project(config: &ProjectConfig) -> Result<ZipReport> {
    plan(config)?.write(config)
}
