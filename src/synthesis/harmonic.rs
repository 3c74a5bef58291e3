//! Band-limited waveform synthesis by harmonic summation.
//!
//! Saw, square and triangle waves are built as sums of sine partials at
//! integer multiples of the fundamental. Partials are added from the
//! fundamental upward and generation stops at the first partial above the
//! Nyquist limit, so the result never contains aliased content. A fundamental
//! at or above the limit produces no partials at all.
//!
//! | Kind     | Multipliers       | Partial amplitude | Sign             |
//! |----------|-------------------|-------------------|------------------|
//! | Sine     | 1                 | `a`               | +                |
//! | Saw      | 1, 2, 3, ...      | `a / m`           | +                |
//! | Square   | 1, 3, 5, ...      | `a / m`           | +                |
//! | Triangle | 1, 3, 5, ...      | `a / m`           | -, +, -, ...     |
//!
//! Every partial is evaluated over the whole output buffer at its own
//! frequency rather than built as one cycle and repeated, which keeps each
//! partial phase continuous for any buffer length.

use super::buffer;
use super::oscillators::{Oscillator, SineOscillator};
use crate::Signal;
use crate::core::Pitched;
use crate::error::{PcmError, Result};

/// Harmonic count used when none is given.
pub const DEFAULT_HARMONIC_COUNT: u32 = 50;

/// Shape of a synthesized waveform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaveKind {
    /// Pure sine, the fundamental only
    Sine,
    /// Sawtooth, every harmonic
    Saw,
    /// Square, odd harmonics
    Square,
    /// Triangle, odd harmonics with alternating sign
    Triangle,
}

impl WaveKind {
    /// Frequency multiplier of the partial at `index` (0 is the fundamental).
    pub fn multiplier(self, index: u32) -> u64 {
        let index = u64::from(index);
        match self {
            WaveKind::Sine | WaveKind::Saw => index + 1,
            WaveKind::Square | WaveKind::Triangle => 2 * index + 1,
        }
    }

    /// Sign of the partial at `index`.
    pub fn sign(self, index: u32) -> f64 {
        match self {
            // (-1)^(index + 1)
            WaveKind::Triangle if index % 2 == 0 => -1.0,
            _ => 1.0,
        }
    }

    /// Number of partials actually attempted for a requested count.
    fn partial_budget(self, harmonic_count: u32) -> u32 {
        match self {
            WaveKind::Sine => 1,
            _ => harmonic_count.max(1),
        }
    }
}

/// Parameters of a harmonic waveform.
///
/// # Examples
///
/// ```
/// use pcmtone::synthesis::{WaveKind, WaveSpec};
///
/// let spec = WaveSpec::new(WaveKind::Square, 20000.0, 41000)
///     .with_harmonic_count(50);
/// // Only the fundamental fits under the 20.5 kHz Nyquist limit
/// assert_eq!(spec.partials().len(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveSpec {
    /// Fundamental frequency in Hz
    pub frequency: f64,
    /// Amplitude of the fundamental before per-harmonic scaling
    pub amplitude: f64,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Maximum number of partials; treated as at least 1, ignored for sines
    pub harmonic_count: u32,
    /// Waveform shape
    pub kind: WaveKind,
}

impl WaveSpec {
    /// Creates a spec with unit amplitude and [`DEFAULT_HARMONIC_COUNT`].
    pub fn new(kind: WaveKind, frequency: f64, sample_rate: u32) -> Self {
        Self {
            frequency,
            amplitude: 1.0,
            sample_rate,
            harmonic_count: DEFAULT_HARMONIC_COUNT,
            kind,
        }
    }

    /// Sets the amplitude.
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Sets the maximum number of partials.
    pub fn with_harmonic_count(mut self, harmonic_count: u32) -> Self {
        self.harmonic_count = harmonic_count;
        self
    }

    /// Half the sample rate.
    pub fn nyquist(&self) -> f64 {
        self.sample_rate as f64 / 2.0
    }

    /// Checks that the frequency is positive and finite and the rate non-zero.
    pub fn validate(&self) -> Result<()> {
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(PcmError::InvalidFrequency {
                freq: self.frequency,
            });
        }
        if self.sample_rate == 0 {
            return Err(PcmError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        Ok(())
    }

    /// Partials up to the Nyquist limit, fundamental first.
    ///
    /// Empty when the spec is invalid or the fundamental is at or above the
    /// limit, since a partial at exactly Nyquist samples as zero.
    pub fn partials(&self) -> Vec<Partial> {
        let nyquist = self.nyquist();
        let mut partials = Vec::new();
        if self.validate().is_err() || self.frequency >= nyquist {
            return partials;
        }

        // Multipliers grow by at least one per index
        let fit = (nyquist / self.frequency).floor().min(u32::MAX as f64) as u32;
        let budget = self
            .kind
            .partial_budget(self.harmonic_count)
            .min(fit.saturating_add(1));

        for index in 0..budget {
            let multiplier = self.kind.multiplier(index);
            let frequency = self.frequency * multiplier as f64;
            if frequency > nyquist {
                tracing::debug!(
                    index,
                    multiplier,
                    frequency,
                    nyquist,
                    "harmonic above Nyquist, stopping"
                );
                break;
            }
            partials.push(Partial {
                index,
                multiplier,
                frequency,
                amplitude: self.kind.sign(index) * (self.amplitude / multiplier as f64),
            });
        }
        partials
    }
}

/// One sine component of a harmonic waveform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partial {
    /// Position in the harmonic series (0 is the fundamental)
    pub index: u32,
    /// Frequency multiplier relative to the fundamental
    pub multiplier: u64,
    /// Frequency in Hz
    pub frequency: f64,
    /// Signed peak amplitude
    pub amplitude: f64,
}

impl Partial {
    /// Sign this partial contributes with, `1.0` or `-1.0`.
    pub fn sign(&self) -> f64 {
        self.amplitude.signum()
    }
}

/// Output of [`harmonic_sum`]: the summed samples and the partials used.
#[derive(Debug, Clone, PartialEq)]
pub struct HarmonicSum {
    samples: Vec<f64>,
    partials: Vec<Partial>,
    frequency: f64,
    nyquist: f64,
}

impl HarmonicSum {
    /// Summed samples.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Consumes the result, returning the samples.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// Partials that were summed, fundamental first.
    pub fn partials(&self) -> &[Partial] {
        &self.partials
    }

    /// Multiplier of the highest partial included, if any.
    pub fn highest_multiplier(&self) -> Option<u64> {
        self.partials.last().map(|p| p.multiplier)
    }

    /// Returns true if no partial fit under the Nyquist limit.
    pub fn is_silent(&self) -> bool {
        self.partials.is_empty()
    }

    /// Converts a silent result into [`PcmError::NyquistViolation`].
    pub fn require_audible(self) -> Result<Self> {
        if self.is_silent() {
            Err(PcmError::NyquistViolation {
                frequency: self.frequency,
                nyquist: self.nyquist,
            })
        } else {
            Ok(self)
        }
    }
}

/// Synthesizes `total_samples` samples of the waveform described by `spec`.
///
/// If the fundamental itself is at or above the Nyquist limit no partial is
/// generated; the result is then all zeros, [`HarmonicSum::is_silent`]
/// returns true and a warning is logged.
///
/// # Errors
///
/// Returns an error for an invalid spec, or
/// [`PcmError::BufferTooLarge`] if `total_samples` cannot be allocated.
///
/// # Examples
///
/// ```
/// use pcmtone::synthesis::{WaveKind, WaveSpec, harmonic_sum};
///
/// let spec = WaveSpec::new(WaveKind::Triangle, 1000.0, 48000).with_harmonic_count(3);
/// let wave = harmonic_sum(&spec, 480).unwrap();
/// let signs: Vec<f64> = wave.partials().iter().map(|p| p.sign()).collect();
/// assert_eq!(signs, vec![-1.0, 1.0, -1.0]);
/// ```
pub fn harmonic_sum(spec: &WaveSpec, total_samples: usize) -> Result<HarmonicSum> {
    spec.validate()?;

    let partials = spec.partials();
    let mut samples: Vec<f64> = buffer::filled(total_samples)?;

    if partials.is_empty() {
        tracing::warn!(
            frequency = spec.frequency,
            nyquist = spec.nyquist(),
            kind = ?spec.kind,
            "fundamental at or above Nyquist, output is silent"
        );
    }

    let mut osc = SineOscillator::new(spec.frequency, spec.sample_rate)?;
    for partial in &partials {
        osc.set_frequency(partial.frequency);
        osc.set_amplitude(partial.amplitude);
        osc.reset();
        osc.accumulate(&mut samples);
    }

    tracing::debug!(
        kind = ?spec.kind,
        partials = partials.len(),
        total_samples,
        "synthesized harmonic waveform"
    );

    Ok(HarmonicSum {
        samples,
        partials,
        frequency: spec.frequency,
        nyquist: spec.nyquist(),
    })
}
