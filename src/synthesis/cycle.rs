//! Single-cycle sine generation with fixed headroom.

use super::buffer;
use super::oscillators::SineOscillator;
use crate::Signal;
use crate::error::{PcmError, Result};

/// Peak level of [`sine_cycle`], half of full scale.
pub const CYCLE_HEADROOM: f64 = 0.5;

/// Generates one period of a sine wave at half amplitude.
///
/// The cycle holds `ceil(sample_rate / frequency)` samples, sample `i` being
/// `sin(2π · frequency · i / sample_rate) / 2`. The fixed headroom makes this
/// generator distinct from [`harmonic_sum`](super::harmonic_sum), which scales
/// by an explicit amplitude.
///
/// # Errors
///
/// Returns [`PcmError::InvalidFrequency`] for a frequency that is not
/// positive and finite or so low that one cycle cannot be held in memory.
///
/// # Examples
///
/// ```
/// use pcmtone::synthesis::sine_cycle;
///
/// let cycle = sine_cycle(1000.0, 8000).unwrap();
/// assert_eq!(cycle.len(), 8);
/// assert!((cycle[2] - 0.5).abs() < 1e-12);
/// ```
pub fn sine_cycle(frequency: f64, sample_rate: u32) -> Result<Vec<f64>> {
    if !frequency.is_finite() || frequency <= 0.0 {
        return Err(PcmError::InvalidFrequency { freq: frequency });
    }
    if sample_rate == 0 {
        return Err(PcmError::InvalidSampleRate { rate: sample_rate });
    }

    let nyquist = sample_rate as f64 / 2.0;
    if frequency >= nyquist {
        tracing::warn!(frequency, nyquist, "sine cycle at or above Nyquist will alias");
    }

    let len = (sample_rate as f64 / frequency).ceil();
    if len > buffer::max_len::<f64>() as f64 {
        return Err(PcmError::InvalidFrequency { freq: frequency });
    }
    let mut cycle: Vec<f64> = buffer::filled(len as usize)?;
    SineOscillator::new(frequency, sample_rate)?
        .with_amplitude(CYCLE_HEADROOM)
        .process(&mut cycle);
    Ok(cycle)
}
