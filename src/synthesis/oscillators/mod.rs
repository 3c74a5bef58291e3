//! Oscillator implementations for audio synthesis.

mod sine;
mod traits;

pub use sine::SineOscillator;
pub use traits::Oscillator;
