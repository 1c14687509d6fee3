//! Segment resampling with declick envelope
//!
//! A segment is pitched and stretched in one step by reading the source at a
//! constant rate with linear interpolation. Output length is
//! `floor(len / rate)`, so rates above 1 shorten the segment (higher pitch,
//! faster) and rates below 1 lengthen it.

/// Upper bound on the declick fade window, in samples
pub const MAX_FADE_SAMPLES: usize = 50;

/// Resample one segment by the combined pitch/speed rate
///
/// Output slots whose floored source index would land past the segment end
/// are left at zero. With `out_len = floor(len / rate)` the source index
/// stays in range for exact arithmetic, but the guard keeps float rounding
/// from ever reading out of bounds; an unwritten slot is silence.
///
/// An empty segment or a rate that floors the output to zero length yields
/// an empty vector; the caller still appends its inter-segment gap.
pub fn resample_segment(segment: &[f32], rate: f32) -> Vec<f32> {
    let out_len = (segment.len() as f64 / rate as f64).floor() as usize;
    let mut output = vec![0.0_f32; out_len];

    for (i, slot) in output.iter_mut().enumerate() {
        let src_pos = i as f64 * rate as f64;
        let src_floor = src_pos.floor() as usize;
        if src_floor >= segment.len() {
            continue;
        }
        let src_ceil = (src_floor + 1).min(segment.len() - 1);
        let frac = (src_pos - src_floor as f64) as f32;

        *slot = segment[src_floor] * (1.0 - frac) + segment[src_ceil] * frac;
    }

    apply_declick(&mut output);
    output
}

/// Apply the segment-boundary declick envelope in place
///
/// `fade_len = min(50, floor(len / 10))`. The fade-in pass scales the first
/// `fade_len` samples by `i / fade_len`. The fade-out pass then scales sample
/// `len - 1 - i` by `min((len - 1 - i) / fade_len, 1)`. The fade-out gain is
/// keyed to the absolute index, so it saturates at 1 for every tail sample
/// and only the head is actually attenuated. Pass order matters if the two
/// windows ever meet: fade-in first, then fade-out, compounding in place.
pub fn apply_declick(samples: &mut [f32]) {
    let len = samples.len();
    let fade_len = MAX_FADE_SAMPLES.min(len / 10);
    if fade_len == 0 {
        return;
    }

    for i in 0..fade_len {
        samples[i] *= i as f32 / fade_len as f32;
    }
    for i in 0..fade_len {
        let idx = len - 1 - i;
        samples[idx] *= (idx as f32 / fade_len as f32).min(1.0);
    }
}
