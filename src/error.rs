//! Error types for the PCM codec and synthesizer.

use thiserror::Error;

/// Result type for codec and synthesis operations.
pub type Result<T> = std::result::Result<T, PcmError>;

/// Errors that can occur while packing, unpacking or synthesizing samples.
///
/// Every variant is local to a single call and recoverable by the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PcmError {
    /// Bit depth outside `1..=64`.
    #[error("invalid bit depth: {bits} (supported range is 1..=64)")]
    InvalidBitDepth {
        /// The rejected bit depth.
        bits: u32,
    },

    /// Byte buffer length is not a whole number of samples.
    #[error(
        "truncated buffer: {len} bytes is not a multiple of {bytes_per_sample} bytes per sample"
    )]
    TruncatedBuffer {
        /// Length of the offending buffer.
        len: usize,
        /// Bytes each sample occupies at the requested bit depth.
        bytes_per_sample: usize,
    },

    /// Anything other than signed integer PCM was handed to the decoder.
    #[error("unsupported encoding: {encoding} (only signed PCM can be decoded)")]
    UnsupportedEncoding {
        /// Name of the rejected encoding.
        encoding: String,
    },

    /// The fundamental is at or above the Nyquist limit, so no harmonic survives.
    #[error("fundamental {frequency} Hz is not below the Nyquist limit of {nyquist} Hz")]
    NyquistViolation {
        /// Requested fundamental frequency.
        frequency: f64,
        /// Half the sample rate.
        nyquist: f64,
    },

    /// Frequency that is zero, negative or not finite.
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency {
        /// The rejected frequency.
        freq: f64,
    },

    /// Sample rate of zero.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The rejected sample rate.
        rate: u32,
    },

    /// Duration that is infinite or too long to render in memory.
    #[error("invalid duration: {duration} s")]
    InvalidDuration {
        /// The rejected duration in seconds.
        duration: f64,
    },

    /// Sample buffer that could not be allocated.
    #[error("cannot allocate a buffer of {samples} samples")]
    BufferTooLarge {
        /// Requested number of samples.
        samples: usize,
    },
}

impl PcmError {
    /// Creates an unsupported encoding error.
    pub fn unsupported_encoding(encoding: impl Into<String>) -> Self {
        Self::UnsupportedEncoding {
            encoding: encoding.into(),
        }
    }
}
