//! # Display Sink Boundary
//!
//! The rasterizer never talks to hardware. A finished [`Surface`] is wrapped
//! in a [`Frame`] and handed to a [`DisplaySink`], which owns the panel
//! protocol: controller setup, window and cursor registers, the busy line,
//! and streaming the bytes. The sink may block for as long as the panel
//! needs and reports only success or failure.
//!
//! ## Refresh modes
//!
//! E-paper controllers offer several update sequences for the same RAM
//! contents. [`RefreshMode`] forwards the caller's choice; the core attaches
//! it to the frame and does not interpret it.
use core::fmt::Debug;

use log::{error, info};

use crate::error::GfxError;
use crate::framebuffer::surface::{stride_for, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RefreshMode {
    /// Full waveform, slowest and cleanest.
    #[default]
    Full,
    /// Shortened full refresh.
    Fast,
    /// Partial update against the previously written base image.
    Partial,
    /// Write the frame to both controller buffers so later partial updates
    /// have a base to diff against.
    BaseImage,
}

/// A finished buffer ready for transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    /// `ceil(width / 8) * height` bytes, MSB-first rows.
    pub bytes: &'a [u8],
    pub width: u32,
    pub height: u32,
    pub mode: RefreshMode,
}

impl Frame<'_> {
    /// Bytes per row, derived from `width` alone.
    pub fn stride(&self) -> usize {
        stride_for(self.width)
    }
}

/// Transport that moves a frame onto a physical panel.
pub trait DisplaySink {
    type Error: Debug;

    /// Send `frame` verbatim and wait for the panel to finish.
    fn transfer(&mut self, frame: &Frame<'_>) -> Result<(), Self::Error>;
}

impl<S: DisplaySink + ?Sized> DisplaySink for &mut S {
    type Error = S::Error;

    fn transfer(&mut self, frame: &Frame<'_>) -> Result<(), Self::Error> {
        (**self).transfer(frame)
    }
}

/// Display output
impl Surface {
    pub fn frame(&self, mode: RefreshMode) -> Frame<'_> {
        Frame {
            bytes: self.raw_bytes(),
            width: self.width(),
            height: self.height(),
            mode,
        }
    }

    /// Hand the raw buffer to `sink`.
    pub fn present<S: DisplaySink + ?Sized>(
        &self,
        sink: &mut S,
        mode: RefreshMode,
    ) -> Result<(), GfxError> {
        let frame = self.frame(mode);
        info!(
            "presenting {}x{} frame ({} bytes, {:?})",
            frame.width,
            frame.height,
            frame.bytes.len(),
            mode
        );
        sink.transfer(&frame).map_err(|e| {
            error!("display transfer failed: {:?}", e);
            GfxError::Transfer
        })
    }
}
