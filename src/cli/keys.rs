//! List palette keys.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};

/// List the keys a theme file produces
#[derive(Args, Debug)]
pub struct KeysArgs {
    /// Theme file to read
    #[arg(required = true)]
    pub file: PathBuf,
}

pub fn run(args: KeysArgs, printer: &Printer) -> Result<()> {
    let theme = super::load_checked(&args.file, printer)?;
    let palette = theme.build()?;

    printer.status(
        "Listing",
        &format!("{} from {}", plural(palette.len(), "key", "keys"), display_path(&args.file)),
    );
    for key in palette.keys() {
        println!("{}", key);
    }

    Ok(())
}
