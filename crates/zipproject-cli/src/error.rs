//! Error conversion utilities for CLI.
//!
//! Converts zipproject-core's typed errors (thiserror) into user-facing
//! contextual errors (anyhow).

use anyhow::anyhow;
use std::io::ErrorKind;
use zipproject_core::ProjectConfig;
use zipproject_core::ZipProjectError;

/// Converts an error from the select stage (load, walk, filter).
pub fn convert_plan_error(err: ZipProjectError, config: &ProjectConfig) -> anyhow::Error {
    let ignore_file = config.ignore_file_path();

    match err {
        ZipProjectError::Io(io_err)
            if io_err.kind() == ErrorKind::NotFound && !ignore_file.exists() =>
        {
            anyhow!(
                "Ignore file not found: {}\n\
                 HINT: Create a .zipignore in the directory being zipped or pass -file <PATH>.",
                ignore_file.display()
            )
        }
        ZipProjectError::Walk { path, source } => {
            anyhow!(
                "Cannot read '{}' while walking '{}': {}",
                path.display(),
                config.root.display(),
                source
            )
        }
        _ => anyhow::Error::from(err).context(format!(
            "Error selecting files under '{}'",
            config.root.display()
        )),
    }
}

/// Converts an error from the archive writing stage.
pub fn convert_write_error(err: ZipProjectError, config: &ProjectConfig) -> anyhow::Error {
    anyhow::Error::from(err).context(format!(
        "Error writing archive '{}' (partial output may remain)",
        config.output.display()
    ))
}
