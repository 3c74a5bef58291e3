//! Full-scale computation and conversion between normalized and integer samples.

use super::format::BitDepth;

/// Returns the largest magnitude representable at `bit_depth`, `2^(bits - 1)`.
///
/// The value is a `f64` because `2^63` does not fit in an `i64`. For two's
/// complement samples the largest positive value is one less than this.
///
/// # Examples
///
/// ```
/// use pcmtone::{BitDepth, full_scale};
///
/// assert_eq!(full_scale(BitDepth::new(16).unwrap()), 32768.0);
/// assert_eq!(full_scale(BitDepth::new(64).unwrap()), 2f64.powi(63));
/// ```
pub fn full_scale(bit_depth: BitDepth) -> f64 {
    2f64.powi(bit_depth.bits() as i32 - 1)
}

/// Converts normalized samples (nominally `[-1.0, 1.0]`) to integers.
///
/// Each sample is multiplied by [`full_scale`] and truncated toward zero.
/// Results outside the depth's range are clamped to it, so a normalized
/// `1.0` becomes the largest positive value instead of wrapping negative.
pub fn quantize(samples: &[f64], bit_depth: BitDepth) -> Vec<i64> {
    let scale = full_scale(bit_depth);
    let lo = bit_depth.min_value() as f64;
    let hi = bit_depth.max_value() as f64;

    let mut clipped = 0usize;
    let quantized = samples
        .iter()
        .map(|&sample| {
            let scaled = sample * scale;
            if scaled < lo || scaled > hi {
                clipped += 1;
            }
            scaled.clamp(lo, hi) as i64
        })
        .collect();

    if clipped > 0 {
        tracing::debug!(clipped, %bit_depth, "clamped samples outside full scale");
    }
    quantized
}

/// Converts sign-extended integer samples back to the normalized range.
pub fn normalize(samples: &[i64], bit_depth: BitDepth) -> Vec<f64> {
    let scale = full_scale(bit_depth);
    samples.iter().map(|&sample| sample as f64 / scale).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depth(bits: u32) -> BitDepth {
        BitDepth::new(bits).unwrap()
    }

    #[test]
    fn test_full_scale_values() {
        assert_eq!(full_scale(depth(1)), 1.0);
        assert_eq!(full_scale(depth(8)), 128.0);
        assert_eq!(full_scale(depth(16)), 32768.0);
        assert_eq!(full_scale(depth(24)), 8_388_608.0);
        assert_eq!(full_scale(depth(64)), 9_223_372_036_854_775_808.0);
    }

    #[test]
    fn test_quantize_truncates_toward_zero() {
        let samples = [0.5, -0.5, 0.25 + 1e-9, -0.25 - 1e-9];
        assert_eq!(quantize(&samples, depth(8)), vec![64, -64, 32, -32]);
    }

    #[test]
    fn test_quantize_clamps_full_scale() {
        assert_eq!(quantize(&[1.0, -1.0, 2.0], depth(16)), vec![32767, -32768, 32767]);
        assert_eq!(quantize(&[1.0, -1.0], depth(64)), vec![i64::MAX, i64::MIN]);
    }

    #[test]
    fn test_normalize() {
        let normalized = normalize(&[16384, -32768, 0], depth(16));
        assert_eq!(normalized, vec![0.5, -1.0, 0.0]);
    }

    #[test]
    fn test_quantize_normalize_close() {
        let samples = [0.1, -0.3, 0.75];
        let restored = normalize(&quantize(&samples, depth(24)), depth(24));
        for (a, b) in samples.iter().zip(restored.iter()) {
            assert!((a - b).abs() < 1e-6);
        }
    }
}
