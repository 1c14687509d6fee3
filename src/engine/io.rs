//! Audio file I/O for npcvoice
//!
//! Imports WAV files into the internal waveform type and writes transformed
//! waveforms back out through the canonical encoder. Import stands in for the
//! external decode step: it normalizes samples to f32 but never resamples or
//! otherwise alters the waveform.

use std::fs;
use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavReader};
use log::info;

use crate::engine::buffer::AudioBuffer;
use crate::error::{NpcVoiceError, Result};
use crate::wav::encode_wav;

/// Suffix appended to the input file stem for the converted output
pub const OUTPUT_SUFFIX: &str = "_NPCvoice";

/// Import a WAV file as a waveform
///
/// Accepts 32-bit float and 8/16/24/32-bit integer PCM sources; every sample
/// is normalized to f32. An empty file imports as an empty waveform, which is
/// valid input for the transform.
///
/// # Errors
/// * `FileNotFound` - if the file does not exist
/// * `InvalidAudio` - if the file is not a readable WAV file
/// * `UnsupportedFormat` - for bit depths hound cannot represent
pub fn import_audio(path: &Path) -> Result<AudioBuffer> {
    if !path.exists() {
        return Err(NpcVoiceError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let reader = WavReader::open(path).map_err(|e| NpcVoiceError::InvalidAudio {
        reason: format!("Failed to open WAV file: {}", e),
        source: Some(Box::new(e)),
    })?;

    let spec = reader.spec();
    let channels = spec.channels as usize;
    let sample_rate = spec.sample_rate;

    let interleaved = read_samples_as_f32(reader, spec.bits_per_sample, spec.sample_format)?;
    let buffer = AudioBuffer::from_interleaved(&interleaved, channels, sample_rate)?;

    info!(
        "Imported {}: {} Hz, {} channel(s), {:.2}s",
        path.display(),
        buffer.sample_rate,
        buffer.channels(),
        buffer.duration_secs()
    );

    Ok(buffer)
}

/// Export a waveform to a WAV file
///
/// Encodes with the canonical 16-bit PCM encoder and writes the bytes in one
/// shot.
pub fn export_audio(buffer: &AudioBuffer, path: &Path) -> Result<()> {
    let bytes = encode_wav(buffer);
    fs::write(path, &bytes)?;

    info!(
        "Exported {}: {} bytes, {:.2}s",
        path.display(),
        bytes.len(),
        buffer.duration_secs()
    );

    Ok(())
}

/// Synthesize the output filename for a converted input
///
/// `voice.wav` becomes `voice_NPCvoice.wav` in the same directory. Inputs
/// without a stem (unlikely in practice) fall back to the suffix alone.
pub fn npc_output_filename(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}{}.wav", stem, OUTPUT_SUFFIX))
}

/// Generate a mono test tone (sine wave)
///
/// Handy for exercising the pipeline without fixture files.
pub fn generate_test_tone(frequency: f32, duration_secs: f32, sample_rate: u32) -> AudioBuffer {
    let num_samples = (duration_secs * sample_rate as f32) as usize;
    let angular_freq = 2.0 * std::f32::consts::PI * frequency / sample_rate as f32;

    let samples: Vec<f32> = (0..num_samples)
        .map(|i| (angular_freq * i as f32).sin())
        .collect();

    AudioBuffer {
        samples: vec![samples],
        sample_rate,
    }
}

/// Read samples from a WAV reader and normalize to f32
fn read_samples_as_f32<R: std::io::Read>(
    mut reader: WavReader<R>,
    bits_per_sample: u16,
    sample_format: SampleFormat,
) -> Result<Vec<f32>> {
    match sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<std::result::Result<Vec<f32>, _>>()
            .map_err(|e| NpcVoiceError::InvalidAudio {
                reason: format!("Failed to read float samples: {}", e),
                source: Some(Box::new(e)),
            }),
        SampleFormat::Int => match bits_per_sample {
            8 => reader
                .samples::<i8>()
                .map(|s| s.map(|v| v as f32 / 128.0))
                .collect::<std::result::Result<Vec<f32>, _>>()
                .map_err(|e| NpcVoiceError::InvalidAudio {
                    reason: format!("Failed to read 8-bit samples: {}", e),
                    source: Some(Box::new(e)),
                }),
            16 => reader
                .samples::<i16>()
                .map(|s| s.map(|v| v as f32 / 32768.0))
                .collect::<std::result::Result<Vec<f32>, _>>()
                .map_err(|e| NpcVoiceError::InvalidAudio {
                    reason: format!("Failed to read 16-bit samples: {}", e),
                    source: Some(Box::new(e)),
                }),
            24 => reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / 8_388_608.0))
                .collect::<std::result::Result<Vec<f32>, _>>()
                .map_err(|e| NpcVoiceError::InvalidAudio {
                    reason: format!("Failed to read 24-bit samples: {}", e),
                    source: Some(Box::new(e)),
                }),
            32 => reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / 2_147_483_648.0))
                .collect::<std::result::Result<Vec<f32>, _>>()
                .map_err(|e| NpcVoiceError::InvalidAudio {
                    reason: format!("Failed to read 32-bit int samples: {}", e),
                    source: Some(Box::new(e)),
                }),
            _ => Err(NpcVoiceError::UnsupportedFormat {
                format: format!("{}-bit integer audio", bits_per_sample),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_generate_test_tone() {
        let buffer = generate_test_tone(440.0, 1.0, 44_100);

        assert_eq!(buffer.len(), 44_100);
        assert_eq!(buffer.channels(), 1);
        assert!(buffer.peak() <= 1.0);

        // The signal should cross zero near the half-cycle point
        let samples_per_cycle = 44_100.0 / 440.0;
        let half_cycle = (samples_per_cycle / 2.0) as usize;
        assert!(buffer.channel(0)[half_cycle].abs() < 0.1);
    }

    #[test]
    fn test_output_filename() {
        assert_eq!(
            npc_output_filename(Path::new("/tmp/recording.mp3")),
            PathBuf::from("/tmp/recording_NPCvoice.wav")
        );
        assert_eq!(
            npc_output_filename(Path::new("voice.wav")),
            PathBuf::from("voice_NPCvoice.wav")
        );
        assert_eq!(
            npc_output_filename(Path::new("archive.tar.gz")),
            PathBuf::from("archive.tar_NPCvoice.wav")
        );
    }

    #[test]
    fn test_import_nonexistent_file() {
        let result = import_audio(Path::new("/nonexistent/path/audio.wav"));
        match result {
            Err(NpcVoiceError::FileNotFound { path }) => assert!(path.contains("nonexistent")),
            other => panic!("Expected FileNotFound, got: {:?}", other),
        }
    }

    #[test]
    fn test_export_import_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tone.wav");

        let original = generate_test_tone(440.0, 0.25, 44_100);
        export_audio(&original, &path).unwrap();

        let imported = import_audio(&path).unwrap();
        assert_eq!(imported.sample_rate, 44_100);
        assert_eq!(imported.channels(), 1);
        assert_eq!(imported.len(), original.len());

        // 16-bit quantization keeps samples within one step of the source
        for (orig, imp) in original.channel(0).iter().zip(imported.channel(0)) {
            assert!(
                (orig - imp).abs() < 0.001,
                "Sample mismatch: {} vs {}",
                orig,
                imp
            );
        }
    }

    #[test]
    fn test_export_empty_waveform() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.wav");

        let empty = AudioBuffer::from_channels(vec![vec![]], 44_100).unwrap();
        export_audio(&empty, &path).unwrap();

        assert_eq!(fs::metadata(&path).unwrap().len(), 44);
    }
}
