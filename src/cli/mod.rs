//! CLI Module
//!
//! Command-line interface for the npcvoice transformer.

pub mod commands;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// NPC Voice Converter - choppy pitch/speed voice transformer
#[derive(Parser, Debug)]
#[command(name = "npcvoice")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert an audio file to an NPC voice
    #[command(name = "convert")]
    Convert {
        /// Input WAV file
        input: PathBuf,

        /// Output file (defaults to `<input>_NPCvoice.wav`)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        params: ParamArgs,

        /// Seed for the per-segment pitch randomization
        #[arg(long)]
        seed: Option<u32>,

        /// Ignore the parameter flags and draw settings at random
        #[arg(long)]
        randomize: bool,
    },

    /// Print facts about a WAV file
    #[command(name = "info")]
    Info {
        /// Input WAV file
        input: PathBuf,
    },
}

/// The four transform parameters as CLI flags
#[derive(Args, Debug)]
pub struct ParamArgs {
    /// Base pitch shift factor (suggested 1.0-3.0)
    #[arg(short, long, default_value_t = 1.8)]
    pub pitch: f32,

    /// Playback speed multiplier (suggested 0.5-2.5)
    #[arg(short, long, default_value_t = 1.4)]
    pub speed: f32,

    /// Segment duration in seconds; shorter is choppier (suggested 0.01-0.15)
    #[arg(short, long, default_value_t = 0.05)]
    pub choppiness: f32,

    /// Random pitch wobble per segment (suggested 0.0-1.0)
    #[arg(long, default_value_t = 0.15)]
    pub variation: f32,
}
