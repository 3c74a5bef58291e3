//! Audio signal trait for sample-rate-aware signals.

use crate::Signal;

/// A signal generated at a known sample rate.
///
/// The sample rate is carried at runtime so that several independent
/// syntheses at different rates can coexist in one process.
///
/// # Examples
///
/// ```
/// use pcmtone::{AudioSignal, SineOscillator};
///
/// let osc = SineOscillator::new(440.0, 48000).unwrap();
/// assert_eq!(osc.sample_rate(), 48000);
/// assert_eq!(osc.nyquist(), 24000.0);
/// ```
pub trait AudioSignal: Signal {
    /// Sample rate in Hz at which this signal is generated.
    fn sample_rate(&self) -> u32;

    /// Highest representable frequency, half the sample rate.
    fn nyquist(&self) -> f64 {
        self.sample_rate() as f64 / 2.0
    }
}
