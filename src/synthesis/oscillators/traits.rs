//! Core trait definitions for oscillators.

use crate::core::Pitched;

/// Oscillators are pitched signals with resettable state.
pub trait Oscillator: Pitched {
    /// Resets the oscillator to its initial state.
    ///
    /// The next generated sample is the one at position zero again.
    fn reset(&mut self);
}
