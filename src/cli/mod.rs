pub mod build;
pub mod completions;
pub mod keys;
pub mod validate;

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::error::{Result, TonesError};
use crate::output::{display_path, Printer};
use crate::theme::ThemeFile;
use crate::validation::{print_diagnostics, validate_theme};

/// tones - Flat colour themes from base colours and tones
#[derive(Parser, Debug)]
#[command(name = "tones")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the flat palette for a theme file
    Build(build::BuildArgs),

    /// List the keys a theme file produces
    Keys(keys::KeysArgs),

    /// Check theme files for problems without building
    Validate(validate::ValidateArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Load a theme and lint it, failing if any check reports an error.
pub(crate) fn load_checked(path: &Path, printer: &Printer) -> Result<ThemeFile> {
    let display = display_path(path);
    let theme = ThemeFile::load(path)?;

    let result = validate_theme(&theme);
    if result.has_errors() {
        print_diagnostics(&result, printer);
        return Err(TonesError::Validation {
            message: format!("{} has errors", display),
            help: Some(format!("Run `tones validate {}` for details", display)),
        });
    }
    for d in result.iter() {
        printer.warning("Warning", &d.message);
    }

    Ok(theme)
}
