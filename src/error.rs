//! Error handling for npcvoice
//!
//! All core failures are value-level: no error leaves partially mutated
//! caller-owned state behind, and nothing is retried internally.

use thiserror::Error;

/// Result type alias for npcvoice operations
pub type Result<T> = std::result::Result<T, NpcVoiceError>;

/// Main error type for npcvoice operations
#[derive(Error, Debug)]
pub enum NpcVoiceError {
    // File Errors
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid audio file: {reason}")]
    InvalidAudio {
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Unsupported audio format: {format}")]
    UnsupportedFormat { format: String },

    // Waveform Errors
    #[error("Channel length mismatch: expected {expected} samples, found {actual}")]
    ChannelLengthMismatch { expected: usize, actual: usize },

    // Transform Errors
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter { name: &'static str, message: String },

    #[error(
        "Segment too short: {segment_duration}s at {sample_rate} Hz yields zero samples per segment"
    )]
    SegmentTooShort {
        segment_duration: f32,
        sample_rate: u32,
    },

    #[error("Invalid rate change: {rate}")]
    InvalidRate { rate: f32 },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NpcVoiceError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            NpcVoiceError::FileNotFound { .. } => "FILE_NOT_FOUND",
            NpcVoiceError::InvalidAudio { .. } => "INVALID_AUDIO",
            NpcVoiceError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            NpcVoiceError::ChannelLengthMismatch { .. } => "CHANNEL_LENGTH_MISMATCH",
            NpcVoiceError::InvalidParameter { .. } => "INVALID_PARAMETER",
            NpcVoiceError::SegmentTooShort { .. } => "SEGMENT_TOO_SHORT",
            NpcVoiceError::InvalidRate { .. } => "INVALID_RATE",
            NpcVoiceError::Io(_) => "IO_ERROR",
        }
    }

    /// Check if this error is recoverable by changing the input or parameters
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, NpcVoiceError::Io(_))
    }

    /// Create an invalid parameter error
    pub fn invalid_param(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }
}
