//! Boundary with container formats.
//!
//! The codec produces and consumes [`EncodedPcm`] values: a packed byte
//! buffer together with everything a container needs to describe it. Reading
//! and writing actual files is left to implementations of
//! [`ContainerWriter`] and [`ContainerReader`].

use crate::codec::{self, BitDepth, PcmFormat};
use crate::error::{PcmError, Result};

/// A packed mono sample buffer with its format metadata.
///
/// The byte length is always a whole number of frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPcm {
    bytes: Vec<u8>,
    sample_rate: u32,
    format: PcmFormat,
}

impl EncodedPcm {
    /// Channel count of every buffer handled by this crate.
    pub const CHANNELS: u16 = 1;

    /// Wraps a byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`PcmError::TruncatedBuffer`] if `bytes` does not hold a whole
    /// number of samples and [`PcmError::InvalidSampleRate`] for a zero rate.
    pub fn new(bytes: Vec<u8>, sample_rate: u32, format: PcmFormat) -> Result<Self> {
        if sample_rate == 0 {
            return Err(PcmError::InvalidSampleRate { rate: sample_rate });
        }
        format.frame_count(bytes.len())?;
        Ok(Self {
            bytes,
            sample_rate,
            format,
        })
    }

    /// Packs signed samples into a new buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use pcmtone::{BitDepth, EncodedPcm, Endianness, PcmFormat};
    ///
    /// let format = PcmFormat::signed(BitDepth::new(24).unwrap(), Endianness::Big);
    /// let pcm = EncodedPcm::from_samples(&[1, -1], 48000, format).unwrap();
    /// assert_eq!(pcm.bytes(), &[0, 0, 1, 0xFF, 0xFF, 0xFF]);
    /// assert_eq!(pcm.frame_count(), 2);
    /// ```
    pub fn from_samples(samples: &[i64], sample_rate: u32, format: PcmFormat) -> Result<Self> {
        format.ensure_signed_pcm()?;
        let bit_depth = format.bit_depth;
        let out_of_range = samples.iter().filter(|&&s| !bit_depth.contains(s)).count();
        if out_of_range > 0 {
            tracing::warn!(
                out_of_range,
                %bit_depth,
                "samples exceed bit depth and will be truncated"
            );
        }
        let bytes = codec::pack(samples, bit_depth, format.endianness);
        Self::new(bytes, sample_rate, format)
    }

    /// Packed sample bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the buffer, returning the packed bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Sample format.
    pub fn format(&self) -> PcmFormat {
        self.format
    }

    /// Number of frames (samples, since the buffer is mono).
    pub fn frame_count(&self) -> usize {
        self.bytes.len() / self.format.bytes_per_sample()
    }

    /// Playback duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.frame_count() as f64 / self.sample_rate as f64
    }
}

/// Sign-correct samples recovered from an [`EncodedPcm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPcm {
    samples: Vec<i64>,
    sample_rate: u32,
    bit_depth: BitDepth,
}

impl DecodedPcm {
    /// Decoded samples in playback order.
    pub fn samples(&self) -> &[i64] {
        &self.samples
    }

    /// Consumes the result, returning the samples.
    pub fn into_samples(self) -> Vec<i64> {
        self.samples
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Bit depth the samples were stored at.
    pub fn bit_depth(&self) -> BitDepth {
        self.bit_depth
    }

    /// Smallest sample, or `None` for an empty buffer.
    pub fn min(&self) -> Option<i64> {
        self.samples.iter().copied().min()
    }

    /// Largest sample, or `None` for an empty buffer.
    pub fn max(&self) -> Option<i64> {
        self.samples.iter().copied().max()
    }

    /// Peak level in dBFS relative to [`BitDepth::full_scale`].
    ///
    /// Returns negative infinity for silent or empty buffers.
    pub fn peak_dbfs(&self) -> f64 {
        let peak = self
            .samples
            .iter()
            .map(|s| s.unsigned_abs())
            .max()
            .unwrap_or(0);
        20.0 * (peak as f64 / self.bit_depth.full_scale()).log10()
    }

    /// Samples divided by full scale, nominally in `[-1.0, 1.0)`.
    pub fn normalized(&self) -> Vec<f64> {
        codec::normalize(&self.samples, self.bit_depth)
    }
}

/// Unpacks and sign-extends an encoded buffer.
///
/// # Errors
///
/// Returns [`PcmError::UnsupportedEncoding`] for anything other than signed
/// PCM.
///
/// # Examples
///
/// ```
/// use pcmtone::{BitDepth, EncodedPcm, Endianness, PcmFormat, decode};
///
/// let format = PcmFormat::signed(BitDepth::new(16).unwrap(), Endianness::Little);
/// let pcm = EncodedPcm::new(vec![0x00, 0x80, 0xFF, 0x7F], 44100, format).unwrap();
/// let decoded = decode(&pcm).unwrap();
/// assert_eq!(decoded.samples(), &[-32768, 32767]);
/// assert_eq!(decoded.min(), Some(-32768));
/// ```
pub fn decode(pcm: &EncodedPcm) -> Result<DecodedPcm> {
    let format = pcm.format();
    format.ensure_signed_pcm()?;

    let mut samples = codec::unpack(pcm.bytes(), format.bit_depth, format.endianness)?;
    codec::extend_in_place(&mut samples, format.bit_depth);

    tracing::debug!(
        frames = samples.len(),
        bit_depth = %format.bit_depth,
        endianness = ?format.endianness,
        "decoded PCM buffer"
    );

    Ok(DecodedPcm {
        samples,
        sample_rate: pcm.sample_rate(),
        bit_depth: format.bit_depth,
    })
}

/// Sink that wraps encoded sample buffers in a container.
pub trait ContainerWriter {
    /// Error type of the container layer.
    type Error: From<PcmError>;

    /// Writes one complete buffer.
    fn write_pcm(&mut self, pcm: &EncodedPcm) -> std::result::Result<(), Self::Error>;
}

/// Source that extracts encoded sample buffers from a container.
pub trait ContainerReader {
    /// Error type of the container layer.
    type Error: From<PcmError>;

    /// Reads one complete buffer with the format found in the container.
    fn read_pcm(&mut self) -> std::result::Result<EncodedPcm, Self::Error>;
}
