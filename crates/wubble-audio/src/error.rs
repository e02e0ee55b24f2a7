//! Error types for the audio backend.

use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during synthesis or clip storage.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Unsupported sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The rejected sample rate.
        rate: u32,
    },

    /// Non-positive, non-finite, or excessive duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The rejected duration.
        duration: f64,
    },

    /// Non-positive or non-finite frequency.
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency {
        /// The rejected frequency.
        freq: f64,
    },

    /// I/O error from the clip store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
