//! Two's-complement sign extension of unpacked samples.

use super::format::BitDepth;

/// Sign-extends raw unpacked samples from `bit_depth` bits to the full `i64`.
///
/// Bit `bit_depth - 1` is treated as the sign bit and replicated into every
/// higher bit, discarding whatever those bits held before. Apply exactly once
/// to the output of [`unpack`](super::unpack); applying it again to an
/// already extended buffer changes nothing.
///
/// # Examples
///
/// ```
/// use pcmtone::{BitDepth, extend};
///
/// let depth = BitDepth::new(12).unwrap();
/// assert_eq!(extend(&[0x800, 0x7FF, 0xFFFF], depth), vec![-2048, 2047, -1]);
/// ```
pub fn extend(samples: &[i64], bit_depth: BitDepth) -> Vec<i64> {
    let mut extended = samples.to_vec();
    extend_in_place(&mut extended, bit_depth);
    extended
}

/// Sign-extends samples in place. See [`extend`].
pub fn extend_in_place(samples: &mut [i64], bit_depth: BitDepth) {
    let shift = bit_depth.spare_bits();
    if shift == 0 {
        return;
    }
    for sample in samples.iter_mut() {
        *sample = (*sample << shift) >> shift;
    }
}
