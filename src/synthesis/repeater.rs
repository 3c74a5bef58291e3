//! Tiling of single-cycle waveforms to a target length.

/// Repeats `cycle` end to end to build a buffer of `total_samples` samples.
///
/// Only whole cycles are copied: `total_samples / cycle.len()` of them. Any
/// slots left after the last whole cycle keep `T::default()` (zero for
/// numeric samples) rather than receiving a partial copy, so a buffer whose
/// length is not a multiple of the cycle ends in a short run of silence.
/// An empty cycle yields an all-default buffer.
///
/// # Examples
///
/// ```
/// use pcmtone::synthesis::tile;
///
/// assert_eq!(tile(&[1, 2, 3], 7), vec![1, 2, 3, 1, 2, 3, 0]);
/// ```
pub fn tile<T: Copy + Default>(cycle: &[T], total_samples: usize) -> Vec<T> {
    let mut samples = vec![T::default(); total_samples];
    tile_into(cycle, &mut samples);
    samples
}

/// Copies whole repetitions of `cycle` into `out`, leaving the tail as is.
///
/// Used with a buffer allocated by the caller; see [`tile`].
pub fn tile_into<T: Copy>(cycle: &[T], out: &mut [T]) {
    if cycle.is_empty() {
        return;
    }

    for chunk in out.chunks_exact_mut(cycle.len()) {
        chunk.copy_from_slice(cycle);
    }

    let leftover = out.len() % cycle.len();
    if leftover > 0 {
        tracing::debug!(
            leftover,
            cycle_len = cycle.len(),
            "partial cycle left unfilled"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_leaves_partial_cycle_default() {
        assert_eq!(tile(&[1i64, 2, 3], 7), vec![1, 2, 3, 1, 2, 3, 0]);
    }

    #[test]
    fn test_tile_exact_multiple() {
        assert_eq!(tile(&[0.5, -0.5], 6), vec![0.5, -0.5, 0.5, -0.5, 0.5, -0.5]);
    }

    #[test]
    fn test_tile_shorter_than_cycle() {
        assert_eq!(tile(&[9u8, 9, 9, 9], 3), vec![0, 0, 0]);
    }

    #[test]
    fn test_tile_empty_inputs() {
        assert!(tile(&[1, 2], 0).is_empty());
        assert_eq!(tile::<i32>(&[], 4), vec![0; 4]);
    }

    #[test]
    fn test_tile_into_keeps_existing_tail() {
        let mut out = [7i64; 5];
        tile_into(&[1, 2], &mut out);
        assert_eq!(out, [1, 2, 1, 2, 7]);
    }
}
