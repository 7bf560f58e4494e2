//! Pixel-space points and the transforms applied to vertex lists.
//!
//! Points are the embedded-graphics `Point` type so shapes built here can be
//! handed to embedded-graphics primitives as well.

pub mod transform;

pub use embedded_graphics_core::geometry::Point;
pub use transform::{rotate, scale, translate};
