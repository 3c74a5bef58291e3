//! Rendering of synthesized waveforms to packed PCM.

use super::buffer;
use super::{WaveKind, WaveSpec, harmonic_sum, sine_cycle, tile_into};
use crate::codec::{self, BitDepth, Endianness, PcmFormat};
use crate::container::{ContainerWriter, EncodedPcm};
use crate::error::{PcmError, Result};

/// Output settings shared by every waveform rendered with it.
///
/// # Examples
///
/// ```
/// use pcmtone::{BitDepth, Endianness};
/// use pcmtone::synthesis::SynthConfig;
///
/// let config = SynthConfig::new(41000, BitDepth::new(16).unwrap())
///     .unwrap()
///     .with_duration(0.5)
///     .with_endianness(Endianness::Big);
/// assert_eq!(config.total_samples().unwrap(), 20500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthConfig {
    sample_rate: u32,
    bit_depth: BitDepth,
    endianness: Endianness,
    duration_secs: f64,
}

impl SynthConfig {
    /// Creates a config producing one second of little-endian audio.
    pub fn new(sample_rate: u32, bit_depth: BitDepth) -> Result<Self> {
        if sample_rate == 0 {
            return Err(PcmError::InvalidSampleRate { rate: sample_rate });
        }
        Ok(Self {
            sample_rate,
            bit_depth,
            endianness: Endianness::Little,
            duration_secs: 1.0,
        })
    }

    /// Sets the output duration in seconds; negative or NaN means empty.
    pub fn with_duration(mut self, duration_secs: f64) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    /// Sets the byte order of the packed output.
    pub fn with_endianness(mut self, endianness: Endianness) -> Self {
        self.endianness = endianness;
        self
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Output bit depth.
    pub fn bit_depth(&self) -> BitDepth {
        self.bit_depth
    }

    /// Output byte order.
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Output duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    /// Number of samples in the rendered buffer.
    ///
    /// # Errors
    ///
    /// Returns [`PcmError::InvalidDuration`] when the duration is infinite or
    /// too long for the samples to be held in memory.
    pub fn total_samples(&self) -> Result<usize> {
        let total = self.duration_secs * self.sample_rate as f64;
        if total.is_nan() || total <= 0.0 {
            return Ok(0);
        }
        if total > buffer::max_len::<f64>() as f64 {
            return Err(PcmError::InvalidDuration {
                duration: self.duration_secs,
            });
        }
        Ok(total as usize)
    }

    /// Signed PCM format of the rendered buffer.
    pub fn format(&self) -> PcmFormat {
        PcmFormat::signed(self.bit_depth, self.endianness)
    }
}

/// Waveform to render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Waveform {
    /// One half-amplitude sine cycle ([`sine_cycle`]) tiled to the duration.
    SineCycle {
        /// Frequency in Hz
        frequency: f64,
    },
    /// Harmonic sum ([`harmonic_sum`]) generated over the whole duration.
    Harmonic {
        /// Waveform shape
        kind: WaveKind,
        /// Fundamental frequency in Hz
        frequency: f64,
        /// Amplitude of the fundamental
        amplitude: f64,
        /// Maximum number of partials
        harmonic_count: u32,
    },
}

impl Waveform {
    /// Harmonic waveform with unit amplitude and the default harmonic count.
    pub fn harmonic(kind: WaveKind, frequency: f64) -> Self {
        Waveform::Harmonic {
            kind,
            frequency,
            amplitude: 1.0,
            harmonic_count: super::DEFAULT_HARMONIC_COUNT,
        }
    }

    /// Normalized samples for `config`, before quantization.
    pub fn synthesize(&self, config: &SynthConfig) -> Result<Vec<f64>> {
        let total = config.total_samples()?;
        match *self {
            Waveform::SineCycle { frequency } => {
                let cycle = sine_cycle(frequency, config.sample_rate())?;
                let mut samples: Vec<f64> = buffer::filled(total)?;
                tile_into(&cycle, &mut samples);
                Ok(samples)
            }
            Waveform::Harmonic {
                kind,
                frequency,
                amplitude,
                harmonic_count,
            } => {
                let spec = WaveSpec::new(kind, frequency, config.sample_rate())
                    .with_amplitude(amplitude)
                    .with_harmonic_count(harmonic_count);
                Ok(harmonic_sum(&spec, total)?.into_samples())
            }
        }
    }
}

/// Synthesizes, quantizes and packs a waveform.
///
/// # Examples
///
/// ```
/// use pcmtone::{BitDepth, decode};
/// use pcmtone::synthesis::{SynthConfig, Waveform, render};
///
/// let config = SynthConfig::new(8000, BitDepth::new(16).unwrap())
///     .unwrap()
///     .with_duration(0.01);
/// let pcm = render(&config, &Waveform::SineCycle { frequency: 1000.0 }).unwrap();
/// assert_eq!(pcm.frame_count(), 80);
/// assert_eq!(decode(&pcm).unwrap().max(), Some(16384));
/// ```
pub fn render(config: &SynthConfig, waveform: &Waveform) -> Result<EncodedPcm> {
    let normalized = waveform.synthesize(config)?;
    let samples = codec::quantize(&normalized, config.bit_depth());

    tracing::debug!(
        ?waveform,
        sample_rate = config.sample_rate(),
        bit_depth = %config.bit_depth(),
        frames = samples.len(),
        "rendered waveform"
    );

    EncodedPcm::from_samples(&samples, config.sample_rate(), config.format())
}

/// Renders a waveform and hands it to a container writer.
pub fn render_to<W: ContainerWriter>(
    config: &SynthConfig,
    waveform: &Waveform,
    writer: &mut W,
) -> std::result::Result<(), W::Error> {
    let pcm = render(config, waveform)?;
    writer.write_pcm(&pcm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::decode;

    fn config(sample_rate: u32, bits: u32) -> SynthConfig {
        SynthConfig::new(sample_rate, BitDepth::new(bits).unwrap()).unwrap()
    }

    #[test]
    fn test_config_defaults() {
        let config = config(44100, 16);
        assert_eq!(config.duration_secs(), 1.0);
        assert_eq!(config.endianness(), Endianness::Little);
        assert_eq!(config.total_samples(), Ok(44100));
    }

    #[test]
    fn test_config_rejects_zero_rate() {
        let result = SynthConfig::new(0, BitDepth::new(16).unwrap());
        assert_eq!(result, Err(PcmError::InvalidSampleRate { rate: 0 }));
    }

    #[test]
    fn test_negative_duration_is_empty() {
        assert_eq!(config(44100, 16).with_duration(-1.0).total_samples(), Ok(0));
    }

    #[test]
    fn test_infinite_duration_is_rejected() {
        let config = config(44100, 16).with_duration(f64::INFINITY);
        assert_eq!(
            config.total_samples(),
            Err(PcmError::InvalidDuration {
                duration: f64::INFINITY
            })
        );
        assert!(matches!(
            render(&config, &Waveform::SineCycle { frequency: 440.0 }),
            Err(PcmError::InvalidDuration { .. })
        ));
        assert!(matches!(
            render(&config, &Waveform::harmonic(WaveKind::Saw, 440.0)),
            Err(PcmError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn test_sine_cycle_render_tiles_and_leaves_tail() {
        // ceil(8000 / 3000) = 3 samples per cycle, two whole cycles in 8 samples
        let config = config(8000, 16).with_duration(0.001);
        let pcm = render(&config, &Waveform::SineCycle { frequency: 3000.0 }).unwrap();
        let samples = decode(&pcm).unwrap().into_samples();
        assert_eq!(samples.len(), 8);
        assert_eq!(samples[0..3], samples[3..6]);
        assert_eq!(samples[6..], [0, 0]);
    }

    #[test]
    fn test_render_64_bit_big_endian() {
        let config = config(192_000, 64)
            .with_duration(0.001)
            .with_endianness(Endianness::Big);
        let pcm = render(&config, &Waveform::SineCycle { frequency: 1000.0 }).unwrap();
        assert_eq!(pcm.bytes().len(), 192 * 8);

        let decoded = decode(&pcm).unwrap();
        // Peak at a quarter cycle: half of 2^63
        assert_eq!(decoded.samples()[48], 1i64 << 62);
        assert!(decoded.samples()[144] < 0);
    }

    #[test]
    fn test_harmonic_render_matches_synthesis() {
        let config = config(41000, 16).with_duration(0.01);
        let waveform = Waveform::Harmonic {
            kind: WaveKind::Saw,
            frequency: 50.0,
            amplitude: 0.5,
            harmonic_count: 50,
        };
        let normalized = waveform.synthesize(&config).unwrap();
        let pcm = render(&config, &waveform).unwrap();
        let decoded = decode(&pcm).unwrap();
        assert_eq!(
            decoded.samples(),
            codec::quantize(&normalized, config.bit_depth()).as_slice()
        );
    }

    #[test]
    fn test_render_above_nyquist_is_silent() {
        let config = config(8000, 8).with_duration(0.01);
        let pcm = render(&config, &Waveform::harmonic(WaveKind::Square, 5000.0)).unwrap();
        let decoded = decode(&pcm).unwrap();
        assert_eq!(decoded.samples().len(), 80);
        assert!(decoded.samples().iter().all(|&s| s == 0));
    }

    #[test]
    fn test_render_invalid_frequency() {
        let config = config(8000, 16);
        assert!(matches!(
            render(&config, &Waveform::SineCycle { frequency: 0.0 }),
            Err(PcmError::InvalidFrequency { .. })
        ));
    }

    #[test]
    fn test_render_to_writer() {
        struct Collect(Vec<EncodedPcm>);

        impl ContainerWriter for Collect {
            type Error = PcmError;

            fn write_pcm(&mut self, pcm: &EncodedPcm) -> Result<()> {
                self.0.push(pcm.clone());
                Ok(())
            }
        }

        let config = config(8000, 24).with_duration(0.002);
        let mut sink = Collect(Vec::new());
        for kind in [WaveKind::Sine, WaveKind::Saw, WaveKind::Square, WaveKind::Triangle] {
            render_to(&config, &Waveform::harmonic(kind, 500.0), &mut sink).unwrap();
        }
        assert_eq!(sink.0.len(), 4);
        assert!(sink.0.iter().all(|pcm| pcm.frame_count() == 16));
    }
}
