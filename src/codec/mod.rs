//! PCM sample codec.
//!
//! This module converts between mono integer sample buffers and raw byte
//! buffers for any bit depth from 1 to 64 in either byte order:
//! - `BitDepth`, `Endianness`, `Encoding` and `PcmFormat` describe a buffer
//! - `pack` / `unpack` move samples to and from bytes
//! - `extend` restores the sign of unpacked samples
//! - `full_scale`, `quantize` and `normalize` map between integer and
//!   normalized sample values

mod format;
mod pack;
mod scale;
mod sign;

pub use format::{BitDepth, Encoding, Endianness, PcmFormat};
pub use pack::{pack, pack_into, unpack};
pub use scale::{full_scale, normalize, quantize};
pub use sign::{extend, extend_in_place};
