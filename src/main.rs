use clap::Parser;
use miette::Result;
use pmp::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Export(args) => pmp::cli::export::run(args)?,
        Commands::Check(args) => pmp::cli::check::run(args)?,
        Commands::Info(args) => pmp::cli::info::run(args)?,
        Commands::Completions(args) => pmp::cli::completions::run(args)?,
    }

    Ok(())
}
