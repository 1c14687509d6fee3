//! Voice Transform DSP
//!
//! Segment-wise pitch/speed warping with randomized per-segment rates.
//! All randomness flows through the `RandomSource` trait so the transform
//! is reproducible under a fixed seed.

pub mod random;
pub mod resample;
pub mod transform;

pub use random::{FixedSequence, PcgRandom, RandomSource};
pub use resample::{apply_declick, resample_segment};
pub use transform::{TransformParams, VoiceTransformer, GAP_RATIO, MIN_RATE};
