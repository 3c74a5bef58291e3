//! Test signal synthesis.
//!
//! This module builds periodic test signals and renders them to PCM:
//! - `SineOscillator` for phase-exact sine partials
//! - `sine_cycle` for a single half-amplitude sine period
//! - `harmonic_sum` for band-limited sine, saw, square and triangle waves
//! - `tile` for repeating a cycle to a target length
//! - `SynthConfig`, `Waveform` and `render` for the full path to packed bytes
//!
//! All synthesis components require the `synth` feature to be enabled.

mod buffer;
mod cycle;
mod harmonic;
pub mod oscillators;
mod render;
mod repeater;

pub use cycle::{CYCLE_HEADROOM, sine_cycle};
pub use harmonic::{
    DEFAULT_HARMONIC_COUNT, HarmonicSum, Partial, WaveKind, WaveSpec, harmonic_sum,
};
pub use oscillators::{Oscillator, SineOscillator};
pub use render::{SynthConfig, Waveform, render, render_to};
pub use repeater::{tile, tile_into};
