//! pcmtone - PCM sample codec and test tone synthesis for Rust
//!
//! This library converts mono integer samples to and from raw PCM bytes at
//! any bit depth from 1 to 64 in either byte order, and synthesizes
//! band-limited sine, saw, square and triangle test signals to feed it.
//!
//! ```
//! use pcmtone::{BitDepth, Endianness, extend, pack, unpack};
//!
//! let depth = BitDepth::new(20).unwrap();
//! let bytes = pack(&[-300_000, 12], depth, Endianness::Big);
//! let raw = unpack(&bytes, depth, Endianness::Big).unwrap();
//! assert_eq!(extend(&raw, depth), vec![-300_000, 12]);
//! ```

pub mod codec;
pub mod container;
pub mod core;
mod error;
#[cfg(feature = "synth")]
pub mod synthesis;
#[cfg(feature = "wav")]
pub mod wav;

// Re-export commonly used types at the crate root
pub use codec::{
    BitDepth, Encoding, Endianness, PcmFormat, extend, extend_in_place, full_scale, normalize,
    pack, pack_into, quantize, unpack,
};
pub use container::{ContainerReader, ContainerWriter, DecodedPcm, EncodedPcm, decode};
pub use crate::core::{AudioSignal, Pitched, Signal};
pub use error::{PcmError, Result};
#[cfg(feature = "macros")]
pub use pcmtone_macros::pcm_format;
#[cfg(feature = "synth")]
pub use synthesis::{
    HarmonicSum, Oscillator, SineOscillator, SynthConfig, WaveKind, WaveSpec, Waveform,
    harmonic_sum, render, sine_cycle, tile, tile_into,
};
