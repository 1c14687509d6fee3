//! Audio Buffer Management
//!
//! Core waveform type for the voice transform pipeline. Audio is stored as
//! non-interleaved 32-bit float samples, one `Vec<f32>` per channel, at the
//! sample rate the decoder reported. The transform never resamples to an
//! internal rate; the waveform keeps the rate it arrived with.

use crate::error::{NpcVoiceError, Result};

/// Decoded multi-channel waveform
///
/// Invariant: every channel holds the same number of samples. The checked
/// constructors enforce this; code constructing the fields directly must
/// keep channels in lockstep itself.
///
/// # Example
/// ```
/// use npcvoice::engine::buffer::AudioBuffer;
///
/// let buffer = AudioBuffer::silent(2, 48000, 48000);
/// assert_eq!(buffer.channels(), 2);
/// assert_eq!(buffer.len(), 48000);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    /// Sample data: outer Vec is channels, inner Vec is samples
    pub samples: Vec<Vec<f32>>,
    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl AudioBuffer {
    /// Create a silent buffer with the given channel count and length
    pub fn silent(num_channels: usize, num_samples: usize, sample_rate: u32) -> Self {
        Self {
            samples: vec![vec![0.0_f32; num_samples]; num_channels],
            sample_rate,
        }
    }

    /// Create a buffer from per-channel sample data
    ///
    /// # Errors
    /// `ChannelLengthMismatch` if the channels are not all the same length.
    pub fn from_channels(channels: Vec<Vec<f32>>, sample_rate: u32) -> Result<Self> {
        if let Some(first) = channels.first() {
            let expected = first.len();
            for channel in &channels[1..] {
                if channel.len() != expected {
                    return Err(NpcVoiceError::ChannelLengthMismatch {
                        expected,
                        actual: channel.len(),
                    });
                }
            }
        }
        Ok(Self {
            samples: channels,
            sample_rate,
        })
    }

    /// Create a buffer from interleaved sample data
    ///
    /// # Arguments
    /// * `interleaved` - Samples in frame order (L, R, L, R, ... for stereo)
    /// * `num_channels` - Number of channels (must be > 0)
    /// * `sample_rate` - Sample rate in Hz
    ///
    /// # Errors
    /// `InvalidAudio` if the channel count is zero or the data length is not a
    /// multiple of the channel count.
    pub fn from_interleaved(
        interleaved: &[f32],
        num_channels: usize,
        sample_rate: u32,
    ) -> Result<Self> {
        if num_channels == 0 {
            return Err(NpcVoiceError::InvalidAudio {
                reason: "Channel count must be at least 1".to_string(),
                source: None,
            });
        }
        if interleaved.len() % num_channels != 0 {
            return Err(NpcVoiceError::InvalidAudio {
                reason: format!(
                    "Interleaved data length {} is not divisible by channel count {}",
                    interleaved.len(),
                    num_channels
                ),
                source: None,
            });
        }

        let num_samples = interleaved.len() / num_channels;
        let mut samples = vec![Vec::with_capacity(num_samples); num_channels];

        for frame in interleaved.chunks_exact(num_channels) {
            for (ch, &sample) in frame.iter().enumerate() {
                samples[ch].push(sample);
            }
        }

        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Convert the buffer to interleaved frame order
    ///
    /// Frame count is taken from the first channel; the equal-length invariant
    /// makes this exact for all channels.
    pub fn to_interleaved(&self) -> Vec<f32> {
        let num_samples = self.len();
        let mut interleaved = Vec::with_capacity(self.channels() * num_samples);

        for sample_idx in 0..num_samples {
            for channel in &self.samples {
                interleaved.push(channel[sample_idx]);
            }
        }

        interleaved
    }

    /// Get the number of channels
    #[inline]
    pub fn channels(&self) -> usize {
        self.samples.len()
    }

    /// Get the number of samples per channel
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.first().map(|ch| ch.len()).unwrap_or(0)
    }

    /// Check if the buffer holds no samples
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the duration in seconds
    #[inline]
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.len() as f64 / self.sample_rate as f64
    }

    /// Get immutable access to a channel's samples
    ///
    /// # Panics
    /// Panics if the channel index is out of bounds.
    #[inline]
    pub fn channel(&self, index: usize) -> &[f32] {
        &self.samples[index]
    }

    /// Peak absolute sample value across all channels
    pub fn peak(&self) -> f32 {
        self.samples
            .iter()
            .flat_map(|ch| ch.iter())
            .map(|s| s.abs())
            .fold(0.0_f32, f32::max)
    }

    /// Check if all samples are finite (not NaN or Infinity)
    pub fn is_finite(&self) -> bool {
        self.samples
            .iter()
            .flat_map(|ch| ch.iter())
            .all(|s| s.is_finite())
    }
}
