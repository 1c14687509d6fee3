//! Canonical PCM WAV encoder
//!
//! Writes 16-bit integer PCM WAV bytes with a fixed 44-byte header and no
//! variable metadata, so the same waveform always encodes to the same bytes.

mod writer;

pub use writer::{encode_wav, samples_to_pcm16, HEADER_SIZE};
