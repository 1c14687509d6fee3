//! Integration Tests
//!
//! End-to-end tests for the NPC voice pipeline: decode -> transform ->
//! encode -> file.

use std::path::Path;

use approx::assert_relative_eq;
use pretty_assertions::assert_eq;

use npcvoice::dsp::{FixedSequence, TransformParams, VoiceTransformer};
use npcvoice::engine::{
    export_audio, generate_test_tone, import_audio, npc_output_filename, AudioBuffer,
};
use npcvoice::wav::{encode_wav, HEADER_SIZE};
use npcvoice::NpcVoiceError;

/// Helper to create a stereo buffer with distinct channel content
fn create_stereo_buffer(num_samples: usize, sample_rate: u32) -> AudioBuffer {
    let left: Vec<f32> = (0..num_samples)
        .map(|i| (i as f32 * 0.01).sin() * 0.8)
        .collect();
    let right: Vec<f32> = (0..num_samples)
        .map(|i| (i as f32 * 0.013).cos() * 0.6)
        .collect();
    AudioBuffer::from_channels(vec![left, right], sample_rate).unwrap()
}

// === Full Pipeline Tests ===

#[test]
fn test_full_pipeline_tone_to_wav_bytes() {
    let input = generate_test_tone(440.0, 0.5, 44_100);

    let mut transformer = VoiceTransformer::seeded(TransformParams::default(), 42).unwrap();
    let converted = transformer.transform(&input).unwrap();

    assert!(!converted.is_empty());
    assert_eq!(converted.sample_rate, 44_100);
    assert_eq!(converted.channels(), 1);

    let bytes = encode_wav(&converted);
    assert_eq!(bytes.len(), HEADER_SIZE + converted.len() * 2);
    assert_eq!(&bytes[0..4], b"RIFF");
}

#[test]
fn test_full_pipeline_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("voice.wav");

    let input = generate_test_tone(220.0, 0.3, 22_050);
    export_audio(&input, &input_path).unwrap();

    let decoded = import_audio(&input_path).unwrap();
    let mut transformer = VoiceTransformer::seeded(TransformParams::default(), 7).unwrap();
    let converted = transformer.transform(&decoded).unwrap();

    let output_path = npc_output_filename(&input_path);
    export_audio(&converted, &output_path).unwrap();

    assert_eq!(
        output_path.file_name().unwrap().to_str().unwrap(),
        "voice_NPCvoice.wav"
    );

    let reloaded = import_audio(&output_path).unwrap();
    assert_eq!(reloaded.sample_rate, 22_050);
    assert_eq!(reloaded.len(), converted.len());
}

#[test]
fn test_pipeline_is_seed_reproducible() {
    let input = create_stereo_buffer(30_000, 44_100);

    let mut a = VoiceTransformer::seeded(TransformParams::default(), 1001).unwrap();
    let mut b = VoiceTransformer::seeded(TransformParams::default(), 1001).unwrap();

    let bytes_a = encode_wav(&a.transform(&input).unwrap());
    let bytes_b = encode_wav(&b.transform(&input).unwrap());

    assert_eq!(bytes_a, bytes_b);
}

// === Length Law ===

#[test]
fn test_length_law_exact() {
    // S = floor(8000 * 0.05) = 400, gap = floor(400 * 0.05) = 20.
    // Channel of 1000 samples -> segments of 400, 400, 200.
    // Draws 0.5, 0.0, 1.0 with variation 0.2 -> rates 2.0, 1.8, 2.2.
    let params = TransformParams::new(2.0, 1.0, 0.05, 0.2).unwrap();
    let rng = FixedSequence::new(vec![0.5, 0.0, 1.0]);
    let mut transformer = VoiceTransformer::new(params, rng).unwrap();

    let input = AudioBuffer::from_channels(vec![vec![0.1; 1000]], 8000).unwrap();
    let output = transformer.transform(&input).unwrap();

    let expected: usize = [(400_f64, 2.0_f64), (400.0, 1.8), (200.0, 2.2)]
        .iter()
        .map(|&(len, rate)| (len / rate).floor() as usize + 20)
        .sum();
    assert_eq!(output.len(), expected);
}

// === Rate=1 Identity ===

#[test]
fn test_unity_rate_is_identity_up_to_fades_and_gaps() {
    let params = TransformParams::new(1.0, 1.0, 0.1, 0.0).unwrap();
    let mut transformer = VoiceTransformer::new(params, FixedSequence::centered()).unwrap();

    // One full segment: S = 100, gap = 5, fade_len = 10
    let source: Vec<f32> = (0..100).map(|i| ((i as f32) * 0.07).sin()).collect();
    let input = AudioBuffer::from_channels(vec![source.clone()], 1000).unwrap();
    let output = transformer.transform(&input).unwrap();

    assert_eq!(output.len(), 105);

    // Between the fade-in window and the gap, samples are bit-exact
    for i in 10..100 {
        assert_relative_eq!(output.channel(0)[i], source[i]);
    }
    // Fade-in scales the head
    assert_relative_eq!(output.channel(0)[0], 0.0);
    assert_relative_eq!(output.channel(0)[5], source[5] * 0.5);
    // Trailing gap is silent
    assert!(output.channel(0)[100..].iter().all(|&s| s == 0.0));
}

// === Envelope Boundedness ===

#[test]
fn test_output_bounded_for_bounded_input() {
    let input = create_stereo_buffer(50_000, 48_000);
    assert!(input.peak() <= 1.0);

    let params = TransformParams::new(2.8, 0.5, 0.02, 0.5).unwrap();
    let mut transformer = VoiceTransformer::seeded(params, 555).unwrap();
    let output = transformer.transform(&input).unwrap();

    assert!(output.is_finite());
    assert!(output.peak() <= 1.0);
}

// === Container Properties ===

#[test]
fn test_container_reference_bytes() {
    let waveform = AudioBuffer::from_channels(vec![vec![0.0, 1.0, -1.0, 0.5]], 44_100).unwrap();
    let bytes = encode_wav(&waveform);

    let riff_size = u32::from_le_bytes(bytes[4..8].try_into().unwrap());
    let data_size = u32::from_le_bytes(bytes[40..44].try_into().unwrap());
    assert_eq!(riff_size, 44);
    assert_eq!(data_size, 8);

    let samples: Vec<i16> = bytes[44..]
        .chunks_exact(2)
        .map(|c| i16::from_le_bytes([c[0], c[1]]))
        .collect();
    assert_eq!(samples, vec![0, 32767, -32767, 16383]);
}

#[test]
fn test_container_roundtrip_through_hound() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ref.wav");

    let waveform = AudioBuffer::from_channels(vec![vec![0.0, 1.0, -1.0, 0.5]], 44_100).unwrap();
    export_audio(&waveform, &path).unwrap();

    let reader = hound::WavReader::open(&path).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 44_100);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);

    let samples: Vec<i16> = reader.into_samples().map(|s| s.unwrap()).collect();
    assert_eq!(samples, vec![0, 32767, -32767, 16383]);
}

#[test]
fn test_zero_length_input_yields_header_only_container() {
    let params = TransformParams::default();
    let mut transformer = VoiceTransformer::seeded(params, 9).unwrap();

    let empty = AudioBuffer::from_channels(vec![vec![]], 44_100).unwrap();
    let output = transformer.transform(&empty).unwrap();
    let bytes = encode_wav(&output);

    assert_eq!(bytes.len(), 44);
    assert_eq!(u32::from_le_bytes(bytes[40..44].try_into().unwrap()), 0);
}

// === Gap Insertion ===

#[test]
fn test_gap_insertion() {
    // S = floor(1000 * 0.05) = 50, so exactly 2 trailing zeros per segment
    let params = TransformParams::new(1.0, 1.0, 0.05, 0.0).unwrap();
    let mut transformer = VoiceTransformer::new(params, FixedSequence::centered()).unwrap();

    let input = AudioBuffer::from_channels(vec![vec![0.5; 50]], 1000).unwrap();
    let output = transformer.transform(&input).unwrap();

    assert_eq!(output.len(), 52);
    assert_eq!(&output.channel(0)[50..], &[0.0, 0.0]);
}

// === Error Paths ===

#[test]
fn test_degenerate_segment_size_errors() {
    let params = TransformParams::new(1.8, 1.4, 0.001, 0.15).unwrap();
    let mut transformer = VoiceTransformer::seeded(params, 1).unwrap();

    let input = AudioBuffer::from_channels(vec![vec![0.1; 500]], 100).unwrap();
    let result = transformer.transform(&input);

    assert!(matches!(
        result,
        Err(NpcVoiceError::SegmentTooShort {
            sample_rate: 100,
            ..
        })
    ));
}

#[test]
fn test_missing_input_never_reaches_the_engine() {
    let result = import_audio(Path::new("/no/such/file.wav"));
    assert!(matches!(result, Err(NpcVoiceError::FileNotFound { .. })));
}

// === Channel Behavior ===

#[test]
fn test_stereo_channels_end_equal_length() {
    let input = create_stereo_buffer(44_100, 44_100);

    let mut transformer = VoiceTransformer::seeded(TransformParams::default(), 2024).unwrap();
    let output = transformer.transform(&input).unwrap();

    assert_eq!(output.channels(), 2);
    assert_eq!(output.samples[0].len(), output.samples[1].len());

    // Both channels were warped, not copied
    assert_ne!(output.samples[0], output.samples[1]);
}
