//! ZIP archive writing.
//!
//! Every selected entry is stored with DEFLATE compression under a name
//! derived by stripping the root path string from the entry path. Names are
//! not normalized to forward slashes.

use crate::Result;
use crate::ZipProjectError;
use crate::creation::report::ZipReport;
use crate::creation::walker::Entry;
use std::fs::File;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Creates (or truncates) `output` and writes every entry into it.
///
/// Entries are written in order. The first failure aborts the run and the
/// partially written file is left on disk.
///
/// # Examples
///
/// ```no_run
/// use zipproject_core::creation::walker::Entry;
/// use zipproject_core::creation::zip::write_archive;
///
/// let entries = vec![Entry::new("project/src/main.rs", false)];
/// let report = write_archive("project.zip", &entries, "project")?;
/// assert_eq!(report.files_added, 1);
/// # Ok::<(), zipproject_core::ZipProjectError>(())
/// ```
///
/// # Errors
///
/// Returns an error if the output cannot be created, a source file cannot be
/// opened or read, or the archive rejects an entry.
pub fn write_archive<P: AsRef<Path>, R: AsRef<Path>>(
    output: P,
    entries: &[Entry],
    root: R,
) -> Result<ZipReport> {
    let file = File::create(output.as_ref())?;
    write_archive_to(file, entries, root.as_ref())
}

/// Writes the archive to any seekable writer.
///
/// # Errors
///
/// Same as [`write_archive`], minus output creation.
pub fn write_archive_to<W: Write + Seek>(
    writer: W,
    entries: &[Entry],
    root: &Path,
) -> Result<ZipReport> {
    let mut zip = ZipWriter::new(writer);
    let mut report = ZipReport::default();
    let start = Instant::now();

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut buffer = vec![0u8; COPY_BUFFER_SIZE];

    for entry in entries {
        let name = stored_name(&entry.path, root);
        let bytes = add_file_to_zip(&mut zip, &entry.path, &name, options, &mut buffer)?;

        log::debug!("added {name} ({bytes} bytes)");
        report.files_added += 1;
        report.bytes_written += bytes;
    }

    zip.finish().map_err(|e| ZipProjectError::Archive {
        name: "<central directory>".to_string(),
        source: std::io::Error::other(format!("failed to finish ZIP archive: {e}")),
    })?;

    report.duration = start.elapsed();
    Ok(report)
}

/// Copies one source file into the archive and returns the bytes copied.
fn add_file_to_zip<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    file_path: &Path,
    name: &str,
    options: SimpleFileOptions,
    buffer: &mut [u8],
) -> Result<u64> {
    let mut file = File::open(file_path)?;
    let metadata = file.metadata()?;

    #[cfg(unix)]
    let options = {
        use std::os::unix::fs::PermissionsExt;
        options.unix_permissions(metadata.permissions().mode())
    };
    #[cfg(not(unix))]
    let _ = &metadata;

    zip.start_file(name, options)
        .map_err(|e| ZipProjectError::Archive {
            name: name.to_string(),
            source: std::io::Error::other(format!("failed to start file in ZIP: {e}")),
        })?;

    let mut bytes_written = 0u64;
    loop {
        let bytes_read = file.read(buffer)?;
        if bytes_read == 0 {
            break;
        }
        zip.write_all(&buffer[..bytes_read])?;
        bytes_written += bytes_read as u64;
    }

    Ok(bytes_written)
}

/// Derives the stored archive name for `path` relative to `root`.
///
/// The root path string is removed from the front of the entry path, once.
/// If that leaves a leading separator (the root had no trailing one), the
/// separator is dropped too so the name stays relative. Paths that do not
/// start with the root string are returned unchanged.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use zipproject_core::creation::zip::stored_name;
///
/// assert_eq!(stored_name(Path::new("./src/main.rs"), Path::new("./")), "src/main.rs");
/// assert_eq!(stored_name(Path::new("proj/src/main.rs"), Path::new("proj")), "src/main.rs");
/// ```
#[must_use]
pub fn stored_name(path: &Path, root: &Path) -> String {
    let path = path.to_string_lossy();
    let root = root.to_string_lossy();

    if root.is_empty() {
        return path.into_owned();
    }

    path.strip_prefix(&*root).map_or_else(
        || path.to_string(),
        |rest| {
            rest.strip_prefix(std::path::MAIN_SEPARATOR)
                .unwrap_or(rest)
                .to_string()
        },
    )
}
