//! Sine wave oscillator implementation.

use super::Oscillator;
use crate::core::Pitched;
use crate::error::{PcmError, Result};
use crate::{AudioSignal, Signal};
use std::f64::consts::PI;

/// A sine wave oscillator evaluated at absolute sample positions.
///
/// Every sample is computed directly from its index as
/// `amplitude * sin(2π · frequency · index / sample_rate)` instead of by
/// accumulating a phase increment, so buffers of any length stay phase exact
/// and bit-reproducible.
#[derive(Debug, Clone, PartialEq)]
pub struct SineOscillator {
    frequency: f64,
    amplitude: f64,
    sample_rate: u32,
    /// Index of the next sample to generate
    position: u64,
}

impl SineOscillator {
    /// Creates a new sine oscillator with unit amplitude.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Frequency of the sine wave in Hz (zero gives silence)
    /// * `sample_rate` - Sample rate in Hz
    ///
    /// # Errors
    ///
    /// Returns an error for a negative or non-finite frequency, or a zero
    /// sample rate.
    ///
    /// # Examples
    ///
    /// ```
    /// use pcmtone::{Signal, SineOscillator};
    ///
    /// // 440 Hz (A4) at 44.1 kHz
    /// let mut osc = SineOscillator::new(440.0, 44100).unwrap();
    /// assert_eq!(osc.next_sample(), 0.0);
    /// ```
    pub fn new(frequency: f64, sample_rate: u32) -> Result<Self> {
        if !frequency.is_finite() || frequency < 0.0 {
            return Err(PcmError::InvalidFrequency { freq: frequency });
        }
        if sample_rate == 0 {
            return Err(PcmError::InvalidSampleRate { rate: sample_rate });
        }
        Ok(Self {
            frequency,
            amplitude: 1.0,
            sample_rate,
            position: 0,
        })
    }

    /// Sets the peak amplitude (negative values invert the wave).
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Changes the peak amplitude in place.
    pub fn set_amplitude(&mut self, amplitude: f64) {
        self.amplitude = amplitude;
    }

    /// Peak amplitude of the generated wave.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Value of the wave at an absolute sample index.
    pub fn sample_at(&self, index: u64) -> f64 {
        let angle = 2.0 * PI * self.frequency * index as f64 / self.sample_rate as f64;
        angle.sin() * self.amplitude
    }
}

impl Signal for SineOscillator {
    fn next_sample(&mut self) -> f64 {
        let sample = self.sample_at(self.position);
        self.position += 1;
        sample
    }
}

impl AudioSignal for SineOscillator {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}

impl Pitched for SineOscillator {
    fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }

    fn frequency(&self) -> f64 {
        self.frequency
    }
}

impl Oscillator for SineOscillator {
    fn reset(&mut self) {
        self.position = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oscillator_creation() {
        let osc = SineOscillator::new(440.0, 44100).unwrap();
        assert_eq!(osc.frequency(), 440.0);
        assert_eq!(osc.amplitude(), 1.0);
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert!(matches!(
            SineOscillator::new(-1.0, 44100),
            Err(PcmError::InvalidFrequency { .. })
        ));
        assert!(matches!(
            SineOscillator::new(f64::NAN, 44100),
            Err(PcmError::InvalidFrequency { .. })
        ));
        assert_eq!(
            SineOscillator::new(440.0, 0),
            Err(PcmError::InvalidSampleRate { rate: 0 })
        );
    }

    #[test]
    fn test_quarter_period_peak() {
        // 1 kHz at 4 kHz: one period every 4 samples
        let mut osc = SineOscillator::new(1000.0, 4000).unwrap().with_amplitude(0.5);
        let samples: Vec<f64> = (0..4).map(|_| osc.next_sample()).collect();
        assert!(samples[0].abs() < 1e-12);
        assert!((samples[1] - 0.5).abs() < 1e-12);
        assert!(samples[2].abs() < 1e-12);
        assert!((samples[3] + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_sample_range() {
        let mut osc = SineOscillator::new(440.0, 44100).unwrap();
        for _ in 0..44100 {
            let sample = osc.next_sample();
            assert!((-1.0..=1.0).contains(&sample));
        }
    }

    #[test]
    fn test_matches_absolute_index() {
        let mut osc = SineOscillator::new(997.0, 48000).unwrap();
        for _ in 0..100_000 {
            osc.next_sample();
        }
        assert_eq!(osc.next_sample(), osc.sample_at(100_000));
    }

    #[test]
    fn test_reset() {
        let mut osc = SineOscillator::new(440.0, 44100).unwrap();
        let first = osc.next_sample();
        for _ in 0..100 {
            osc.next_sample();
        }
        osc.reset();
        assert_eq!(osc.next_sample(), first);
    }

    #[test]
    fn test_process_buffer() {
        let mut osc = SineOscillator::new(440.0, 44100).unwrap();
        let mut buffer = vec![0.0; 128];
        osc.process(&mut buffer);
        assert_eq!(buffer[5], osc.sample_at(5));
    }

    #[test]
    fn test_zero_frequency() {
        let mut osc = SineOscillator::new(0.0, 44100).unwrap();
        assert_eq!(osc.next_sample(), 0.0);
        assert_eq!(osc.next_sample(), 0.0);
    }

    #[test]
    fn test_retune_and_reset_matches_fresh() {
        let mut osc = SineOscillator::new(440.0, 44100).unwrap();
        for _ in 0..50 {
            osc.next_sample();
        }
        osc.set_frequency(1320.0);
        osc.set_amplitude(1.0 / 3.0);
        osc.reset();

        let mut fresh = SineOscillator::new(1320.0, 44100)
            .unwrap()
            .with_amplitude(1.0 / 3.0);
        for _ in 0..32 {
            assert_eq!(osc.next_sample(), fresh.next_sample());
        }
    }
}
