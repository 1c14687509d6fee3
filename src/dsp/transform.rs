//! Voice Transform Engine
//!
//! Slices each channel into fixed-duration segments, resamples every segment
//! by a randomized pitch/speed rate, and reassembles the channels with short
//! silent gaps between segments. The result is the choppy, warbling delivery
//! of a video-game NPC.

use log::debug;

use crate::dsp::random::{PcgRandom, RandomSource};
use crate::dsp::resample::resample_segment;
use crate::engine::buffer::AudioBuffer;
use crate::error::{NpcVoiceError, Result};

/// Fraction of the segment length inserted as silence after every segment
pub const GAP_RATIO: f64 = 0.05;

/// Rates at or below this floor would blow up the output length
pub const MIN_RATE: f32 = 1e-3;

/// Parameters for one transform invocation
///
/// Immutable for the duration of a call. Defaults are the effect's stock
/// settings; `randomized` draws each parameter from its suggested range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformParams {
    /// Base pitch factor applied to every segment (> 0)
    pub pitch_shift: f32,
    /// Playback speed multiplier (> 0)
    pub speed: f32,
    /// Segment duration in seconds (> 0); shorter means choppier
    pub segment_duration: f32,
    /// Fraction of random pitch wobble per segment (>= 0)
    pub pitch_variation: f32,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            pitch_shift: 1.8,
            speed: 1.4,
            segment_duration: 0.05,
            pitch_variation: 0.15,
        }
    }
}

impl TransformParams {
    /// Create a validated parameter set
    pub fn new(
        pitch_shift: f32,
        speed: f32,
        segment_duration: f32,
        pitch_variation: f32,
    ) -> Result<Self> {
        let params = Self {
            pitch_shift,
            speed,
            segment_duration,
            pitch_variation,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check every parameter against its allowed range
    pub fn validate(&self) -> Result<()> {
        if !(self.pitch_shift > 0.0) || !self.pitch_shift.is_finite() {
            return Err(NpcVoiceError::invalid_param(
                "pitch_shift",
                format!("must be a positive number, got {}", self.pitch_shift),
            ));
        }
        if !(self.speed > 0.0) || !self.speed.is_finite() {
            return Err(NpcVoiceError::invalid_param(
                "speed",
                format!("must be a positive number, got {}", self.speed),
            ));
        }
        if !(self.segment_duration > 0.0) || !self.segment_duration.is_finite() {
            return Err(NpcVoiceError::invalid_param(
                "segment_duration",
                format!("must be a positive number, got {}", self.segment_duration),
            ));
        }
        if !(self.pitch_variation >= 0.0) || !self.pitch_variation.is_finite() {
            return Err(NpcVoiceError::invalid_param(
                "pitch_variation",
                format!("must be zero or positive, got {}", self.pitch_variation),
            ));
        }
        Ok(())
    }

    /// Draw a parameter set from the stock slider ranges
    ///
    /// Pitch 1.0-3.0, speed 0.5-2.5, segment duration 0.01-0.15 s,
    /// variation 0.0-0.5.
    pub fn randomized(rng: &mut dyn RandomSource) -> Self {
        Self {
            pitch_shift: 1.0 + rng.next_f32() * 2.0,
            speed: 0.5 + rng.next_f32() * 2.0,
            segment_duration: 0.01 + rng.next_f32() * 0.14,
            pitch_variation: rng.next_f32() * 0.5,
        }
    }
}

/// Segment-wise pitch/speed voice transformer
///
/// Owns the parameter set and the random source for one or more transform
/// calls. Each call consumes fresh random draws, so repeated calls on the
/// same transformer produce different (but seed-reproducible) variations.
pub struct VoiceTransformer<R: RandomSource> {
    params: TransformParams,
    rng: R,
}

impl VoiceTransformer<PcgRandom> {
    /// Create a transformer with a seeded PCG32 random source
    pub fn seeded(params: TransformParams, seed: u32) -> Result<Self> {
        Self::new(params, PcgRandom::new(seed))
    }
}

impl<R: RandomSource> VoiceTransformer<R> {
    /// Create a transformer, validating the parameters up front
    pub fn new(params: TransformParams, rng: R) -> Result<Self> {
        params.validate()?;
        Ok(Self { params, rng })
    }

    /// The parameter set this transformer applies
    pub fn params(&self) -> &TransformParams {
        &self.params
    }

    /// Transform a waveform into its choppy NPC rendition
    ///
    /// Segment boundaries are computed once from the input length and sample
    /// rate; one effective rate is drawn per segment and shared across all
    /// channels, so every output channel ends with the same length. An empty
    /// input produces an empty output, not an error.
    ///
    /// # Errors
    /// * `SegmentTooShort` when `segment_duration` floors to zero samples
    /// * `InvalidRate` when a drawn rate lands at or below `MIN_RATE`
    pub fn transform(&mut self, input: &AudioBuffer) -> Result<AudioBuffer> {
        let segment_samples =
            (input.sample_rate as f64 * self.params.segment_duration as f64).floor() as usize;
        if segment_samples == 0 {
            return Err(NpcVoiceError::SegmentTooShort {
                segment_duration: self.params.segment_duration,
                sample_rate: input.sample_rate,
            });
        }

        let channel_len = input.len();
        let total_segments = channel_len.div_ceil(segment_samples);
        let gap_samples = (segment_samples as f64 * GAP_RATIO).floor() as usize;

        debug!(
            "transform: {} segments of {} samples, {} gap samples, {} channels",
            total_segments,
            segment_samples,
            gap_samples,
            input.channels()
        );

        // One rate per segment, shared by every channel, so the channels stay
        // in lockstep regardless of how the draws land.
        let rates = self.draw_segment_rates(total_segments)?;

        let mut channels = Vec::with_capacity(input.channels());
        for channel in &input.samples {
            let mut output = Vec::with_capacity(channel_len + total_segments * gap_samples);

            for (seg_idx, &rate) in rates.iter().enumerate() {
                let start = seg_idx * segment_samples;
                let end = (start + segment_samples).min(channel_len);

                let resampled = resample_segment(&channel[start..end], rate);
                output.extend_from_slice(&resampled);

                // Silent gap after every segment, including the last
                output.resize(output.len() + gap_samples, 0.0);
            }

            channels.push(output);
        }

        AudioBuffer::from_channels(channels, input.sample_rate)
    }

    /// Draw one effective rate per segment, failing fast on degenerate rates
    fn draw_segment_rates(&mut self, total_segments: usize) -> Result<Vec<f32>> {
        let mut rates = Vec::with_capacity(total_segments);
        for _ in 0..total_segments {
            let modulation = 1.0 + (self.rng.next_f32() - 0.5) * self.params.pitch_variation;
            let rate = self.params.pitch_shift * modulation * self.params.speed;
            if !(rate > MIN_RATE) || !rate.is_finite() {
                return Err(NpcVoiceError::InvalidRate { rate });
            }
            rates.push(rate);
        }
        Ok(rates)
    }
}
