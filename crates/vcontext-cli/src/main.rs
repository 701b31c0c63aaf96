//! vctx CLI Application
//!
//! Command-line interface for assembling vContext plan documents.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;

fn main() -> Result<()> {
    env_logger::init();

    let Args { no_color, command } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);

    info!("vctx started");

    match command {
        Commands::Plan(args) => Cli::new(renderer)
            .create_plan(args)
            .context("Failed to render plan"),
    }
}
