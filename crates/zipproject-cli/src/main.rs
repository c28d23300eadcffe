//! zipproject - zips a project directory, skipping entries listed in its
//! `.zipignore` file.

mod cli;
mod error;
mod output;

use anyhow::Result;
use std::process::ExitCode;
use zipproject_core::plan;

fn main() -> ExitCode {
    let cli = cli::Cli::parse_args();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:?}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &cli::Cli) -> Result<()> {
    let config = cli.to_config();
    let printer = output::Printer::new(cli.verbose);

    log::debug!(
        "root={} ignore={} output={}",
        config.root.display(),
        config.ignore_file_path().display(),
        config.output.display()
    );

    let plan = plan(&config).map_err(|e| error::convert_plan_error(e, &config))?;
    printer.print_plan(&plan.paths(), &config.output);

    let report = plan
        .write(&config)
        .map_err(|e| error::convert_write_error(e, &config))?;
    printer.print_success(&config.output, &report);

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
