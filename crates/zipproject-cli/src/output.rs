//! Human-readable output with optional colors.

use console::Term;
use console::style;
use std::path::Path;
use zipproject_core::ZipReport;

pub struct Printer {
    verbose: bool,
    use_colors: bool,
    term: Term,
}

impl Printer {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    /// Lists the entries about to be zipped and where they go.
    pub fn print_plan<P: AsRef<Path>>(&self, items: &[P], output: &Path) {
        let _ = self.term.write_line("");
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{}", style("Items to zip:").bold()));
        } else {
            let _ = self.term.write_line("Items to zip:");
        }
        for item in items {
            let _ = self.term.write_line(&item.as_ref().display().to_string());
        }

        let _ = self.term.write_line("");
        let _ = self
            .term
            .write_line(&format!("Outputting to: {}", output.display()));
    }

    pub fn print_success(&self, output: &Path, report: &ZipReport) {
        if self.use_colors {
            let _ = self.term.write_line(&format!(
                "{} All files successfully written to: {}",
                style("✓").green().bold(),
                output.display()
            ));
        } else {
            let _ = self.term.write_line(&format!(
                "All files successfully written to: {}",
                output.display()
            ));
        }

        if self.verbose {
            let _ = self.term.write_line(&format!(
                "  Files: {}, bytes: {} (avg {} per file), duration: {:?}",
                report.files_added,
                report.bytes_written,
                report.average_file_size(),
                report.duration
            ));
        }
    }
}
