//! Validation for theme files.
//!
//! Lints a theme before it is built. The palette builder itself never
//! validates anything; these checks exist for `tones validate` and
//! `tones build`.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::output::{plural, Printer};
use crate::theme::ThemeFile;

/// Run all validation checks against a theme.
pub fn validate_theme(theme: &ThemeFile) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_empty_colors(theme));
    result.merge(checks::check_channel_refs(theme));
    result.merge(checks::check_key_collisions(theme));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let is_error = d.severity == Severity::Error;
        eprintln!(
            "{}[{}]: {}",
            printer.severity(&d.severity.to_string(), is_error),
            printer.dim(&d.code),
            d.message
        );
        if let Some(help) = &d.help {
            eprintln!("  {} {}", printer.cyan("help:"), help);
        }
    }

    let errors = plural(result.error_count(), "error", "errors");
    let warnings = plural(result.warning_count(), "warning", "warnings");

    if result.has_errors() {
        printer.error("Failed", &format!("{}, {}", errors, warnings));
    } else if result.has_warnings() {
        printer.warning("Passed", &format!("with {}", warnings));
    } else {
        printer.success("Passed", "no problems found");
    }
}
