//! # Framebuffer Module
//!
//! Packed bilevel pixel storage.
//!
//! ## Modules
//!
//! - `surface`: `Surface`, the fixed-size 1-bit-per-pixel buffer
//! - `tone`: `Tone` and the `Polarity` that maps it to stored bits
//! - `shared`: `SharedSurface`, a spin-locked surface
//!
//! ## Layout
//!
//! - One row is `ceil(width / 8)` bytes
//! - Pixel `(x, y)` lives in byte `y * stride + x / 8` under mask `0x80 >> (x % 8)`
//! - Writes outside the surface are dropped without error
//!
//! The raw buffer is handed to a display sink unchanged.

pub mod shared;
pub mod surface;
pub mod tone;
