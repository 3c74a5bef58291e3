//! Packing and unpacking of integer samples to and from raw bytes.
//!
//! A single routine, monomorphized per byte width (1 to 8 bytes), handles
//! every bit depth. Byte `b` of a little-endian sample holds bits
//! `[8b, 8b + 8)` of its two's-complement pattern; big-endian samples store
//! the same bytes in reverse order.

use super::format::{BitDepth, Endianness, PcmFormat};
use crate::error::Result;

/// Runs a width-generic function with the const byte width matching `$width`.
macro_rules! with_width {
    ($width:expr, $f:ident($($arg:expr),* $(,)?)) => {
        match $width {
            1 => $f::<1>($($arg),*),
            2 => $f::<2>($($arg),*),
            3 => $f::<3>($($arg),*),
            4 => $f::<4>($($arg),*),
            5 => $f::<5>($($arg),*),
            6 => $f::<6>($($arg),*),
            7 => $f::<7>($($arg),*),
            8 => $f::<8>($($arg),*),
            width => unreachable!("BitDepth produced a {width}-byte sample width"),
        }
    };
}

/// Packs samples into a new byte buffer.
///
/// Each sample contributes exactly `bit_depth.bytes_per_sample()` bytes; bits
/// above that width are discarded. Samples are expected to fit the bit depth
/// (see [`BitDepth::contains`]), otherwise only their low bits survive.
///
/// # Examples
///
/// ```
/// use pcmtone::{BitDepth, Endianness, pack};
///
/// let depth = BitDepth::new(16).unwrap();
/// assert_eq!(pack(&[0x1234], depth, Endianness::Little), vec![0x34, 0x12]);
/// assert_eq!(pack(&[0x1234], depth, Endianness::Big), vec![0x12, 0x34]);
/// ```
pub fn pack(samples: &[i64], bit_depth: BitDepth, endianness: Endianness) -> Vec<u8> {
    let mut bytes = vec![0u8; samples.len() * bit_depth.bytes_per_sample()];
    pack_into(samples, bit_depth, endianness, &mut bytes);
    bytes
}

/// Packs samples into a caller-provided buffer without allocating.
///
/// # Panics
///
/// Panics if `out.len()` is not `samples.len() * bit_depth.bytes_per_sample()`.
pub fn pack_into(samples: &[i64], bit_depth: BitDepth, endianness: Endianness, out: &mut [u8]) {
    let width = bit_depth.bytes_per_sample();
    assert_eq!(
        out.len(),
        samples.len() * width,
        "output buffer must hold exactly {} samples of {} bytes",
        samples.len(),
        width
    );
    with_width!(width, pack_width(samples, endianness, out));
}

/// Unpacks a byte buffer into raw, not yet sign-extended, samples.
///
/// The returned values hold the packed bits in their low
/// `bytes_per_sample * 8` bits with every higher bit cleared. Run
/// [`extend`](super::extend) before interpreting them numerically.
///
/// A buffer that does not hold a whole number of samples is rejected with
/// [`PcmError::TruncatedBuffer`](crate::PcmError::TruncatedBuffer) rather
/// than having its trailing bytes dropped.
///
/// # Examples
///
/// ```
/// use pcmtone::{BitDepth, Endianness, extend, unpack};
///
/// let depth = BitDepth::new(16).unwrap();
/// let raw = unpack(&[0xFF, 0xFF], depth, Endianness::Little).unwrap();
/// assert_eq!(raw, vec![0xFFFF]);
/// assert_eq!(extend(&raw, depth), vec![-1]);
///
/// assert!(unpack(&[0x00, 0x01, 0x02], depth, Endianness::Little).is_err());
/// ```
pub fn unpack(bytes: &[u8], bit_depth: BitDepth, endianness: Endianness) -> Result<Vec<i64>> {
    let format = PcmFormat::signed(bit_depth, endianness);
    let count = format.frame_count(bytes.len())?;
    let mut samples = vec![0i64; count];
    with_width!(
        bit_depth.bytes_per_sample(),
        unpack_width(bytes, endianness, &mut samples)
    );
    Ok(samples)
}

fn pack_width<const N: usize>(samples: &[i64], endianness: Endianness, out: &mut [u8]) {
    let chunks = out.chunks_exact_mut(N);
    match endianness {
        Endianness::Little => {
            for (sample, chunk) in samples.iter().zip(chunks) {
                chunk.copy_from_slice(&sample.to_le_bytes()[..N]);
            }
        }
        Endianness::Big => {
            for (sample, chunk) in samples.iter().zip(chunks) {
                chunk.copy_from_slice(&sample.to_be_bytes()[8 - N..]);
            }
        }
    }
}

fn unpack_width<const N: usize>(bytes: &[u8], endianness: Endianness, out: &mut [i64]) {
    let chunks = bytes.chunks_exact(N);
    match endianness {
        Endianness::Little => {
            for (chunk, sample) in chunks.zip(out.iter_mut()) {
                let mut word = [0u8; 8];
                word[..N].copy_from_slice(chunk);
                *sample = i64::from_le_bytes(word);
            }
        }
        Endianness::Big => {
            for (chunk, sample) in chunks.zip(out.iter_mut()) {
                let mut word = [0u8; 8];
                word[8 - N..].copy_from_slice(chunk);
                *sample = i64::from_be_bytes(word);
            }
        }
    }
}
