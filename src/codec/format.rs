//! Sample format descriptors: bit depth, byte order and encoding.

use std::fmt;

use crate::error::{PcmError, Result};

/// Number of bits used to store each sample, between 1 and 64.
///
/// Samples are carried in an `i64` accumulator, so 64 is the widest depth
/// that can be represented. Each sample occupies `ceil(bits / 8)` bytes.
///
/// # Examples
///
/// ```
/// use pcmtone::BitDepth;
///
/// let depth = BitDepth::new(20).unwrap();
/// assert_eq!(depth.bytes_per_sample(), 3);
/// assert_eq!(depth.max_value(), 524_287);
/// assert!(BitDepth::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitDepth(u8);

impl BitDepth {
    /// Widest supported depth (the accumulator width).
    pub const MAX_BITS: u32 = i64::BITS;

    /// Creates a bit depth, rejecting values outside `1..=64`.
    pub fn new(bits: u32) -> Result<Self> {
        if (1..=Self::MAX_BITS).contains(&bits) {
            Ok(Self(bits as u8))
        } else {
            Err(PcmError::InvalidBitDepth { bits })
        }
    }

    /// Creates a bit depth that has already been validated.
    ///
    /// Used by the `pcm_format!` macro, which checks the range at compile time.
    #[doc(hidden)]
    pub const fn new_unchecked(bits: u8) -> Self {
        Self(bits)
    }

    /// Number of significant bits per sample.
    pub const fn bits(self) -> u32 {
        self.0 as u32
    }

    /// Bytes each sample occupies in a packed buffer.
    pub const fn bytes_per_sample(self) -> usize {
        (self.0 as usize).div_ceil(8)
    }

    /// Number of unused high bits in the `i64` accumulator.
    pub(crate) const fn spare_bits(self) -> u32 {
        Self::MAX_BITS - self.bits()
    }

    /// Most negative value representable at this depth.
    pub const fn min_value(self) -> i64 {
        i64::MIN >> self.spare_bits()
    }

    /// Most positive value representable at this depth.
    pub const fn max_value(self) -> i64 {
        i64::MAX >> self.spare_bits()
    }

    /// Returns true if `sample` fits in this depth without truncation.
    pub const fn contains(self, sample: i64) -> bool {
        sample >= self.min_value() && sample <= self.max_value()
    }

    /// Magnitude scale of this depth, `2^(bits - 1)`.
    pub fn full_scale(self) -> f64 {
        super::scale::full_scale(self)
    }
}

impl TryFrom<u32> for BitDepth {
    type Error = PcmError;

    fn try_from(bits: u32) -> Result<Self> {
        Self::new(bits)
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.0)
    }
}

/// Byte order of the bytes within one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Endianness {
    /// Least significant byte first (RIFF/WAV order)
    #[default]
    Little,
    /// Most significant byte first (AIFF order)
    Big,
}

impl Endianness {
    /// Returns true for big-endian byte order.
    pub fn is_big(self) -> bool {
        matches!(self, Endianness::Big)
    }
}

/// Sample encoding reported by a container.
///
/// Only [`Encoding::PcmSigned`] is decoded; the others exist so that container
/// readers can describe what they found and have it rejected explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    /// Two's-complement linear PCM
    #[default]
    PcmSigned,
    /// Offset-binary linear PCM
    PcmUnsigned,
    /// IEEE floating point samples
    PcmFloat,
    /// G.711 A-law
    ALaw,
    /// G.711 mu-law
    ULaw,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Encoding::PcmSigned => "PCM_SIGNED",
            Encoding::PcmUnsigned => "PCM_UNSIGNED",
            Encoding::PcmFloat => "PCM_FLOAT",
            Encoding::ALaw => "ALAW",
            Encoding::ULaw => "ULAW",
        };
        f.write_str(name)
    }
}

/// Complete description of a packed mono sample buffer.
///
/// # Examples
///
/// ```
/// use pcmtone::{BitDepth, Endianness, PcmFormat};
///
/// let format = PcmFormat::signed(BitDepth::new(24).unwrap(), Endianness::Big);
/// assert_eq!(format.bytes_per_sample(), 3);
/// assert_eq!(format.frame_count(12).unwrap(), 4);
/// assert!(format.frame_count(13).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PcmFormat {
    /// Significant bits per sample
    pub bit_depth: BitDepth,
    /// Byte order within a sample
    pub endianness: Endianness,
    /// Sample encoding
    pub encoding: Encoding,
}

impl PcmFormat {
    /// Creates a signed PCM format.
    pub const fn signed(bit_depth: BitDepth, endianness: Endianness) -> Self {
        Self {
            bit_depth,
            endianness,
            encoding: Encoding::PcmSigned,
        }
    }

    /// Replaces the encoding.
    pub const fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Bytes per sample (and per frame, since only mono is supported).
    pub const fn bytes_per_sample(&self) -> usize {
        self.bit_depth.bytes_per_sample()
    }

    /// Number of whole samples in a buffer of `byte_len` bytes.
    ///
    /// Returns [`PcmError::TruncatedBuffer`] if a partial sample would remain.
    pub fn frame_count(&self, byte_len: usize) -> Result<usize> {
        let bytes_per_sample = self.bytes_per_sample();
        if byte_len % bytes_per_sample != 0 {
            return Err(PcmError::TruncatedBuffer {
                len: byte_len,
                bytes_per_sample,
            });
        }
        Ok(byte_len / bytes_per_sample)
    }

    /// Fails with [`PcmError::UnsupportedEncoding`] unless this is signed PCM.
    pub fn ensure_signed_pcm(&self) -> Result<()> {
        match self.encoding {
            Encoding::PcmSigned => Ok(()),
            other => Err(PcmError::unsupported_encoding(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_depth_range() {
        assert!(BitDepth::new(1).is_ok());
        assert!(BitDepth::new(64).is_ok());
        assert_eq!(
            BitDepth::new(0),
            Err(PcmError::InvalidBitDepth { bits: 0 })
        );
        assert_eq!(
            BitDepth::new(65),
            Err(PcmError::InvalidBitDepth { bits: 65 })
        );
    }

    #[test]
    fn test_bytes_per_sample_rounds_up() {
        let cases = [(1, 1), (8, 1), (9, 2), (16, 2), (20, 3), (24, 3), (33, 5), (48, 6), (64, 8)];
        for (bits, bytes) in cases {
            assert_eq!(BitDepth::new(bits).unwrap().bytes_per_sample(), bytes, "{bits} bits");
        }
    }

    #[test]
    fn test_value_range() {
        let one = BitDepth::new(1).unwrap();
        assert_eq!(one.min_value(), -1);
        assert_eq!(one.max_value(), 0);

        let sixteen = BitDepth::new(16).unwrap();
        assert_eq!(sixteen.min_value(), -32768);
        assert_eq!(sixteen.max_value(), 32767);
        assert!(sixteen.contains(-32768));
        assert!(!sixteen.contains(32768));

        let full = BitDepth::new(64).unwrap();
        assert_eq!(full.min_value(), i64::MIN);
        assert_eq!(full.max_value(), i64::MAX);
    }

    #[test]
    fn test_try_from() {
        let depth: BitDepth = 24u32.try_into().unwrap();
        assert_eq!(depth.bits(), 24);
        assert_eq!(depth.to_string(), "24-bit");
    }

    #[test]
    fn test_ensure_signed_pcm() {
        let format = PcmFormat::signed(BitDepth::new(16).unwrap(), Endianness::Little);
        assert!(format.ensure_signed_pcm().is_ok());

        let float = format.with_encoding(Encoding::PcmFloat);
        assert_eq!(
            float.ensure_signed_pcm(),
            Err(PcmError::unsupported_encoding("PCM_FLOAT"))
        );
    }

    #[test]
    fn test_frame_count_rejects_partial_sample() {
        let format = PcmFormat::signed(BitDepth::new(16).unwrap(), Endianness::Little);
        assert_eq!(format.frame_count(0).unwrap(), 0);
        assert_eq!(format.frame_count(8).unwrap(), 4);
        assert_eq!(
            format.frame_count(7),
            Err(PcmError::TruncatedBuffer {
                len: 7,
                bytes_per_sample: 2
            })
        );
    }
}
