//! npcvoice - Choppy NPC-Style Voice Transformer
//!
//! Transforms a recorded voice into the stylized, choppy delivery of a
//! video-game NPC: the waveform is sliced into short segments, each segment
//! is pitch/speed-warped by a randomized rate, segment edges are declicked,
//! and short silent gaps are inserted between segments. The result encodes
//! to a canonical 16-bit PCM WAV container.
//!
//! # Pipeline
//!
//! Decoded waveform -> [`dsp::VoiceTransformer`] -> warped waveform ->
//! [`wav::encode_wav`] -> bytes. Each stage is a pure value-in/value-out
//! step; randomness is injected through [`dsp::RandomSource`] so a seed
//! reproduces the exact output.

pub mod cli;
pub mod dsp;
pub mod engine;
pub mod error;
pub mod wav;

pub use error::{NpcVoiceError, Result};
