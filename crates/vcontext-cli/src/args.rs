use clap::{Parser, Subcommand};

use crate::cli::CreatePlanArgs;

/// Command-line tool for assembling vContext plan documents
///
/// Builds a plan document from command-line arguments and prints it as
/// markdown. Nothing is written to disk.
#[derive(Parser)]
#[command(version, about, name = "vctx")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the vctx CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Build a plan document and print it
    #[command(alias = "p")]
    Plan(CreatePlanArgs),
}
