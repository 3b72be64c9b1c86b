//! Build command implementation.
//!
//! Builds the palette for a theme file and writes it as JSON or YAML.

use std::fs;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{Result, TonesError};
use crate::output::{display_path, plural, Printer};
use crate::types::Palette;

/// Serialization format for the built palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Json,
    Yaml,
}

/// Build the flat palette for a theme file
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Theme file to build
    #[arg(required = true)]
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    printer.status("Building", &display_path(&args.file));

    let theme = super::load_checked(&args.file, printer)?;
    let palette = theme.build()?;
    let rendered = render(&palette, args.format)?;

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| TonesError::Io {
                    path: parent.to_path_buf(),
                    message: format!("Failed to create output directory: {}", e),
                })?;
            }
            fs::write(path, &rendered).map_err(|e| TonesError::Io {
                path: path.clone(),
                message: format!("Failed to write palette: {}", e),
            })?;
            printer.success(
                "Wrote",
                &format!("{} to {}", plural(palette.len(), "entry", "entries"), display_path(path)),
            );
        }
        None => {
            print!("{}", rendered);
            printer.success("Finished", &plural(palette.len(), "entry", "entries"));
        }
    }

    Ok(())
}

/// Serialize a palette in the requested format.
pub fn render(palette: &Palette, format: Format) -> Result<String> {
    match format {
        Format::Json => serde_json::to_string_pretty(palette)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| TonesError::Parse {
                message: format!("Failed to serialize palette: {}", e),
                help: None,
            }),
        Format::Yaml => serde_yaml::to_string(palette).map_err(|e| TonesError::Parse {
            message: format!("Failed to serialize palette: {}", e),
            help: None,
        }),
    }
}
