//! Archive writing report.

use std::time::Duration;

/// Summary of one archive write.
///
/// # Examples
///
/// ```
/// use zipproject_core::creation::ZipReport;
///
/// let mut report = ZipReport::default();
/// report.files_added = 3;
/// report.bytes_written = 2048;
/// assert_eq!(report.average_file_size(), 682);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZipReport {
    /// Number of files written into the archive.
    pub files_added: usize,

    /// Total uncompressed bytes copied from source files.
    pub bytes_written: u64,

    /// Wall time spent writing the archive.
    pub duration: Duration,
}

impl ZipReport {
    /// Returns the mean uncompressed file size, or 0 for an empty archive.
    #[must_use]
    pub fn average_file_size(&self) -> u64 {
        if self.files_added == 0 {
            return 0;
        }
        self.bytes_written / self.files_added as u64
    }
}
