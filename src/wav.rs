//! WAV container adapter backed by `hound`.
//!
//! WAV stores integer samples little-endian in 8, 16, 24 or 32 bits, so
//! buffers are decoded to sign-correct samples and re-encoded by `hound`
//! regardless of their original byte order. Only mono signed PCM is handled.
//!
//! Requires the `wav` feature.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, Write};
use std::path::Path;

use thiserror::Error;

use crate::codec::{self, BitDepth, Encoding, Endianness, PcmFormat};
use crate::container::{ContainerReader, ContainerWriter, EncodedPcm, decode};
use crate::error::PcmError;

/// Errors raised at the WAV container boundary.
#[derive(Debug, Error)]
pub enum WavError {
    /// Codec error for the buffer being written or read.
    #[error(transparent)]
    Pcm(#[from] PcmError),

    /// Error reported by the WAV reader or writer.
    #[error("WAV error: {0}")]
    Hound(#[from] hound::Error),

    /// I/O error opening or creating a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Bit depth that WAV integer PCM cannot store.
    #[error("WAV integer PCM supports 8, 16, 24 or 32 bits, got {bits}")]
    UnsupportedBitDepth {
        /// The rejected bit depth.
        bits: u32,
    },

    /// File with more than one channel.
    #[error("expected a mono WAV file, found {channels} channels")]
    UnsupportedChannels {
        /// Channel count found in the file header.
        channels: u16,
    },
}

/// A WAV stream used as a container writer or reader.
///
/// Writing needs `Write + Seek` because the header is patched with the data
/// length when the stream is finalized; reading needs `Read`.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use pcmtone::{BitDepth, ContainerReader, ContainerWriter, EncodedPcm, Endianness, PcmFormat};
/// use pcmtone::wav::WavContainer;
///
/// let format = PcmFormat::signed(BitDepth::new(16).unwrap(), Endianness::Big);
/// let pcm = EncodedPcm::from_samples(&[1, -2, 3], 22050, format).unwrap();
///
/// let mut container = WavContainer::new(Cursor::new(Vec::new()));
/// container.write_pcm(&pcm).unwrap();
///
/// let mut container = WavContainer::new(Cursor::new(container.into_inner().into_inner()));
/// let read = container.read_pcm().unwrap();
/// assert_eq!(read.format().endianness, Endianness::Little);
/// assert_eq!(pcmtone::decode(&read).unwrap().samples(), &[1, -2, 3]);
/// ```
#[derive(Debug)]
pub struct WavContainer<T> {
    inner: T,
}

impl<T> WavContainer<T> {
    /// Wraps a stream.
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Returns the wrapped stream.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Write + Seek> ContainerWriter for WavContainer<T> {
    type Error = WavError;

    fn write_pcm(&mut self, pcm: &EncodedPcm) -> Result<(), WavError> {
        write_wav(&mut self.inner, pcm)
    }
}

impl<T: Read> ContainerReader for WavContainer<T> {
    type Error = WavError;

    fn read_pcm(&mut self) -> Result<EncodedPcm, WavError> {
        read_wav(&mut self.inner)
    }
}

fn wav_spec(pcm: &EncodedPcm) -> Result<hound::WavSpec, WavError> {
    let bits = pcm.format().bit_depth.bits();
    if !matches!(bits, 8 | 16 | 24 | 32) {
        return Err(WavError::UnsupportedBitDepth { bits });
    }
    Ok(hound::WavSpec {
        channels: EncodedPcm::CHANNELS,
        sample_rate: pcm.sample_rate(),
        bits_per_sample: bits as u16,
        sample_format: hound::SampleFormat::Int,
    })
}

/// Writes a buffer as a complete WAV stream.
pub fn write_wav<W: Write + Seek>(writer: W, pcm: &EncodedPcm) -> Result<(), WavError> {
    let spec = wav_spec(pcm)?;
    let decoded = decode(pcm)?;

    let mut wav = hound::WavWriter::new(writer, spec)?;
    for &sample in decoded.samples() {
        // Sign-extended samples of at most 32 bits always fit
        wav.write_sample(sample as i32)?;
    }
    wav.finalize()?;

    tracing::debug!(
        frames = decoded.samples().len(),
        sample_rate = spec.sample_rate,
        bits = spec.bits_per_sample,
        "wrote WAV stream"
    );
    Ok(())
}

/// Reads a mono integer WAV stream into a little-endian signed buffer.
pub fn read_wav<R: Read>(reader: R) -> Result<EncodedPcm, WavError> {
    let mut wav = hound::WavReader::new(reader)?;
    let spec = wav.spec();

    if spec.sample_format == hound::SampleFormat::Float {
        return Err(PcmError::unsupported_encoding(Encoding::PcmFloat.to_string()).into());
    }
    if spec.channels != EncodedPcm::CHANNELS {
        return Err(WavError::UnsupportedChannels {
            channels: spec.channels,
        });
    }

    let bit_depth = BitDepth::new(u32::from(spec.bits_per_sample))?;
    let samples = wav
        .samples::<i32>()
        .map(|s| s.map(i64::from))
        .collect::<Result<Vec<_>, _>>()?;

    let format = PcmFormat::signed(bit_depth, Endianness::Little);
    let bytes = codec::pack(&samples, bit_depth, format.endianness);

    tracing::debug!(
        frames = samples.len(),
        sample_rate = spec.sample_rate,
        bits = spec.bits_per_sample,
        "read WAV stream"
    );
    Ok(EncodedPcm::new(bytes, spec.sample_rate, format)?)
}

/// Writes a buffer to a WAV file, creating or truncating it.
pub fn write_wav_file<P: AsRef<Path>>(path: P, pcm: &EncodedPcm) -> Result<(), WavError> {
    let file = File::create(path)?;
    write_wav(BufWriter::new(file), pcm)
}

/// Reads a mono integer WAV file.
pub fn read_wav_file<P: AsRef<Path>>(path: P) -> Result<EncodedPcm, WavError> {
    let file = File::open(path)?;
    read_wav(BufReader::new(file))
}
