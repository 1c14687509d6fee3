//! npcvoice CLI - NPC Voice Converter
//!
//! Command-line interface for the npcvoice transformer.

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;

use npcvoice::cli::{commands, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    info!("NPC Voice Converter v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Convert {
            input,
            output,
            params,
            seed,
            randomize,
        } => commands::convert(&input, output.as_deref(), &params, seed, randomize)
            .with_context(|| format!("converting {}", input.display())),
        Commands::Info { input } => {
            commands::info(&input).with_context(|| format!("reading {}", input.display()))
        }
    }
}
