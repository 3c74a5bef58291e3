//! Fallible allocation of sample buffers.

use crate::error::{PcmError, Result};

/// Largest number of `T` a single allocation can hold.
pub(crate) const fn max_len<T>() -> usize {
    let size = std::mem::size_of::<T>();
    if size == 0 {
        usize::MAX
    } else {
        isize::MAX as usize / size
    }
}

/// Allocates `len` default values, reporting failure instead of aborting.
pub(crate) fn filled<T: Clone + Default>(len: usize) -> Result<Vec<T>> {
    let mut samples = Vec::new();
    samples
        .try_reserve_exact(len)
        .map_err(|_| PcmError::BufferTooLarge { samples: len })?;
    samples.resize(len, T::default());
    Ok(samples)
}
