use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, TonesError};
use crate::output::{display_path, Printer};
use crate::theme::ThemeFile;
use crate::validation::{print_diagnostics, validate_theme};

/// Check theme files for problems without building
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Theme files to validate
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let mut failed = 0;

    for file in &args.files {
        printer.status("Checking", &display_path(file));
        let theme = match ThemeFile::load(file) {
            Ok(theme) => theme,
            Err(e) => {
                printer.error("Failed", &e.to_string());
                failed += 1;
                continue;
            }
        };
        let result = validate_theme(&theme);
        print_diagnostics(&result, printer);
        if result.has_errors() {
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(TonesError::Validation {
            message: format!("{} of {} theme(s) failed validation", failed, args.files.len()),
            help: None,
        });
    }

    Ok(())
}
