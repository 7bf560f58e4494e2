//! Drawing operations on [`Surface`](crate::framebuffer::surface::Surface).
//!
//! Both submodules add methods to `Surface` instead of holding state of
//! their own: `line` for Bresenham lines, `polygon` for outlines and
//! even-odd scanline fill.

pub mod line;
pub mod polygon;
