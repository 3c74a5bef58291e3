//! Core signal generation traits.
//!
//! This module provides the `Signal` trait for anything that produces
//! normalized samples one at a time, and the `Pitched` trait for signals with
//! a controllable frequency.

/// Common interface for all signal sources.
///
/// The trait provides two fundamental operations:
/// - Single sample generation via `next_sample()`
/// - Batch processing via `process()`
pub trait Signal {
    /// Generates the next sample from the signal.
    ///
    /// # Returns
    ///
    /// A sample value, typically between -1.0 and 1.0 for audio signals
    fn next_sample(&mut self) -> f64;

    /// Generates multiple samples into a buffer.
    ///
    /// Default implementation calls `next_sample()` for each element.
    /// Implementors may override this for more efficient batch processing.
    ///
    /// # Arguments
    ///
    /// * `buffer` - Mutable slice to fill with samples
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }

    /// Adds the next `buffer.len()` samples onto the existing buffer contents.
    ///
    /// Used to sum several signals into one buffer without a scratch copy.
    fn accumulate(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample += self.next_sample();
        }
    }
}

/// Minimal trait for anything with a controllable pitch.
///
/// # Examples
///
/// ```
/// use pcmtone::{Pitched, SineOscillator};
///
/// let mut osc = SineOscillator::new(440.0, 44100).unwrap();
/// assert_eq!(osc.frequency(), 440.0);
///
/// osc.set_frequency(880.0);
/// assert_eq!(osc.frequency(), 880.0);
/// ```
pub trait Pitched {
    /// Sets the frequency of the signal.
    ///
    /// # Arguments
    ///
    /// * `freq` - New frequency in Hz
    fn set_frequency(&mut self, freq: f64);

    /// Gets the current frequency of the signal.
    ///
    /// # Returns
    ///
    /// Current frequency in Hz
    fn frequency(&self) -> f64;
}
