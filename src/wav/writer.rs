//! WAV header and PCM sample serialization.

use crate::engine::buffer::AudioBuffer;

/// Size of the fixed WAV header in bytes
pub const HEADER_SIZE: usize = 44;

/// Bits per encoded sample (always 16)
const BITS_PER_SAMPLE: u16 = 16;

/// Encode a waveform as a complete WAV file in memory
///
/// Pure function: the output is `HEADER_SIZE + frames * channels * 2` bytes,
/// derived entirely from the buffer. Frame count comes from the first
/// channel; the buffer invariant guarantees all channels match. An empty
/// buffer encodes to exactly the 44 header bytes with a zero data size.
pub fn encode_wav(buffer: &AudioBuffer) -> Vec<u8> {
    let pcm = samples_to_pcm16(&buffer.to_interleaved());

    let channels = buffer.channels() as u16;
    let sample_rate = buffer.sample_rate;
    let bytes_per_sample = (BITS_PER_SAMPLE / 8) as u32;
    let block_align = channels as u32 * bytes_per_sample;
    let byte_rate = sample_rate * block_align;
    let data_size = pcm.len() as u32;

    let mut out = Vec::with_capacity(HEADER_SIZE + pcm.len());

    // RIFF header
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_size).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    // fmt chunk
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16_u32.to_le_bytes()); // chunk size (16 for PCM)
    out.extend_from_slice(&1_u16.to_le_bytes()); // format tag (1 = integer PCM)
    out.extend_from_slice(&channels.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&(block_align as u16).to_le_bytes());
    out.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    // data chunk
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_size.to_le_bytes());
    out.extend_from_slice(&pcm);

    out
}

/// Convert float samples to 16-bit little-endian PCM bytes
///
/// Samples are clipped to [-1.0, 1.0], scaled by 32767 and truncated toward
/// zero, not rounded: 1.0 -> 32767, -1.0 -> -32767, 0.5 -> 16383. The same
/// waveform always yields the same bytes.
pub fn samples_to_pcm16(samples: &[f32]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);

    for &sample in samples {
        let clipped = sample.clamp(-1.0, 1.0);
        let value = (clipped * 32767.0) as i16;
        pcm.extend_from_slice(&value.to_le_bytes());
    }

    pcm
}
