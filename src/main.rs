use clap::Parser;
use miette::Result;
use tones::cli::{Cli, Commands};
use tones::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => tones::cli::build::run(args, &printer)?,
        Commands::Keys(args) => tones::cli::keys::run(args, &printer)?,
        Commands::Validate(args) => tones::cli::validate::run(args, &printer)?,
        Commands::Completions(args) => tones::cli::completions::run(args)?,
    }

    Ok(())
}
