//! Audio Engine Module
//!
//! Waveform buffer management and file I/O around the transform core.

pub mod buffer;
pub mod io;

pub use buffer::AudioBuffer;
pub use io::{
    export_audio, generate_test_tone, import_audio, npc_output_filename, OUTPUT_SUFFIX,
};
