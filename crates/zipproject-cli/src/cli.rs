//! CLI argument parsing using clap.
//!
//! Flags follow the single-dash long form (`-dir ./src`), so arguments are
//! rewritten to clap's `--dir` form before parsing.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use zipproject_core::ProjectConfig;
use zipproject_core::creation::config::DEFAULT_OUTPUT;
use zipproject_core::creation::config::DEFAULT_ROOT;

/// Value of `-file` that means "look in the root directory".
pub const DEFAULT_IGNORE_ARG: &str = "./.zipignore";

/// Long flags that may be written with a single dash.
const SINGLE_DASH_FLAGS: &[&str] = &["file", "dir", "out", "verbose", "help", "version"];

#[derive(Parser, Debug)]
#[command(name = "zipproject")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Relative or absolute path to a .zipignore file.
    /// If not provided, zipproject looks in the root directory of the
    /// project being zipped
    #[arg(long = "file", value_name = "PATH", default_value = DEFAULT_IGNORE_ARG)]
    pub file: PathBuf,

    /// Directory to zip
    #[arg(long = "dir", value_name = "DIR", default_value = DEFAULT_ROOT)]
    pub dir: PathBuf,

    /// Filename to output the zip to
    #[arg(long = "out", value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub out: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parses the process arguments, accepting single-dash long flags.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Builds the run configuration.
    ///
    /// A `-file` left at its default is resolved against `-dir` instead.
    pub fn to_config(&self) -> ProjectConfig {
        let ignore_file =
            (self.file.as_os_str() != DEFAULT_IGNORE_ARG).then(|| self.file.clone());

        ProjectConfig::new()
            .with_ignore_file(ignore_file)
            .with_root(self.dir.clone())
            .with_output(self.out.clone())
    }
}

/// Rewrites `-flag` and `-flag=value` to `--flag` forms for known flags.
///
/// Arguments after a bare `--` are passed through untouched.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut passthrough = false;

    args.into_iter()
        .map(|arg| {
            if passthrough {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                passthrough = true;
                return arg;
            }

            let Some(rest) = text.strip_prefix('-') else {
                return arg;
            };
            if rest.starts_with('-') {
                return arg;
            }

            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            if SINGLE_DASH_FLAGS.contains(&name) {
                OsString::from(format!("-{text}"))
            } else {
                arg
            }
        })
        .collect()
}
