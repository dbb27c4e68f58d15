pub mod check;
pub mod completions;
pub mod export;
pub mod info;

use clap::{Parser, Subcommand};

/// pmp - "Pria Menggendong Puma" illustration exporter
#[derive(Parser, Debug)]
#[command(name = "pmp")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the illustration and write SVG/PNG assets
    Export(export::ExportArgs),

    /// Validate that the document decodes cleanly, without writing files
    Check(check::CheckArgs),

    /// Print document metadata
    Info(info::InfoArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
