//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::path::Path;

use log::info;

use crate::cli::ParamArgs;
use crate::dsp::{PcgRandom, TransformParams, VoiceTransformer};
use crate::engine::{export_audio, import_audio, npc_output_filename};
use crate::error::Result;

/// Convert an input file to an NPC voice rendition.
pub fn convert(
    input: &Path,
    output: Option<&Path>,
    args: &ParamArgs,
    seed: Option<u32>,
    randomize: bool,
) -> Result<()> {
    let buffer = import_audio(input)?;

    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = PcgRandom::new(seed);

    let params = if randomize {
        let drawn = TransformParams::randomized(&mut rng);
        info!(
            "Randomized settings: pitch {:.2}, speed {:.2}, choppiness {:.3}, variation {:.2}",
            drawn.pitch_shift, drawn.speed, drawn.segment_duration, drawn.pitch_variation
        );
        drawn
    } else {
        TransformParams::new(args.pitch, args.speed, args.choppiness, args.variation)?
    };

    info!("Transforming with seed {}", seed);

    let mut transformer = VoiceTransformer::new(params, rng)?;
    let converted = transformer.transform(&buffer)?;

    let default_output = npc_output_filename(input);
    let output = output.unwrap_or(&default_output);
    export_audio(&converted, output)?;

    println!("Wrote {} (seed {})", output.display(), seed);

    Ok(())
}

/// Print facts about a WAV file.
pub fn info(input: &Path) -> Result<()> {
    let buffer = import_audio(input)?;

    println!("File:        {}", input.display());
    println!("Sample rate: {} Hz", buffer.sample_rate);
    println!("Channels:    {}", buffer.channels());
    println!("Samples:     {} per channel", buffer.len());
    println!("Duration:    {:.3}s", buffer.duration_secs());
    println!("Peak:        {:.4}", buffer.peak());

    Ok(())
}
