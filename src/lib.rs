//! Bilevel framebuffer and vector rasterizer for e-paper style panels.
//!
//! A [`Surface`] stores one bit per pixel, MSB-first. Lines, polygons and
//! vector text are rasterized straight into it, and the finished buffer is
//! handed to a [`DisplaySink`] that owns the hardware transfer.
//!
//! ```
//! use inkraster::{Point, Surface, Tone};
//!
//! let mut surface = Surface::new(16, 16, Tone::Background).unwrap();
//! let square = [Point::new(2, 2), Point::new(9, 2), Point::new(9, 9), Point::new(2, 9)];
//! surface.draw_polygon(&square, Tone::Ink, true).unwrap();
//! assert_eq!(surface.count(Tone::Ink), 64);
//! ```
#![no_std]

extern crate alloc;

pub mod config;
pub mod display;
pub mod error;
pub mod framebuffer;
pub mod geometry;
pub mod raster;
pub mod text;

pub use config::PanelConfig;
pub use display::{DisplaySink, Frame, RefreshMode};
pub use error::GfxError;
pub use framebuffer::shared::SharedSurface;
pub use framebuffer::surface::Surface;
pub use framebuffer::tone::{Polarity, Tone};
pub use geometry::Point;
pub use text::{GlyphMap, GlyphTable, TextStyle};
