//! Packed 1-bit-per-pixel surface
use alloc::boxed::Box;
use alloc::vec;

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use log::debug;

use crate::error::GfxError;
use crate::framebuffer::tone::{Polarity, Tone};

/// Bytes needed for one row of `width` pixels.
pub const fn stride_for(width: u32) -> usize {
    (width as usize + 7) / 8
}

/// A fixed-size bilevel pixel store.
///
/// Rows are `stride` bytes long and the most significant bit of each byte is
/// the leftmost of its eight pixels, which is the layout e-paper controllers
/// expect on the wire.
#[derive(Clone, PartialEq, Eq)]
pub struct Surface {
    buffer: Box<[u8]>,
    width: u32,
    height: u32,
    stride: usize,
    polarity: Polarity,
}

impl Surface {
    /// Allocate a surface filled with `background`, using the e-paper
    /// polarity (ink stored as `0`).
    pub fn new(width: u32, height: u32, background: Tone) -> Result<Self, GfxError> {
        Self::with_polarity(width, height, background, Polarity::default())
    }

    pub fn with_polarity(
        width: u32,
        height: u32,
        background: Tone,
        polarity: Polarity,
    ) -> Result<Self, GfxError> {
        if width == 0 || height == 0 {
            return Err(GfxError::InvalidDimensions { width, height });
        }
        let stride = stride_for(width);
        let len = stride * height as usize;
        debug!(
            "surface {}x{} stride={} bytes={} polarity={:?}",
            width, height, stride, len, polarity
        );

        Ok(Self {
            buffer: vec![polarity.byte_for(background); len].into_boxed_slice(),
            width,
            height,
            stride,
            polarity,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// The packed buffer, exactly `stride * height` bytes.
    pub fn raw_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        if !self.contains(x, y) {
            return None;
        }
        let index = y as usize * self.stride + (x as usize >> 3);
        let mask = 0x80u8 >> (x & 7);
        Some((index, mask))
    }

    /// Write one pixel. Coordinates outside the surface are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, tone: Tone) {
        let Some((index, mask)) = self.locate(x, y) else {
            return;
        };
        if self.polarity.bit_for(tone) {
            self.buffer[index] |= mask;
        } else {
            self.buffer[index] &= !mask;
        }
    }

    /// Read one pixel, `None` outside the surface.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Tone> {
        let (index, mask) = self.locate(x, y)?;
        Some(self.polarity.tone_for(self.buffer[index] & mask != 0))
    }

    /// Overwrite every pixel, padding bits included.
    pub fn fill(&mut self, tone: Tone) {
        self.buffer.fill(self.polarity.byte_for(tone));
    }

    /// Fill a rectangular region, clipped to the surface.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, tone: Tone) {
        let rect = Rectangle::new(Point::new(x, y), Size::new(width, height));
        rect.into_styled(PrimitiveStyle::with_fill(BinaryColor::from(tone)))
            .draw(self)
            .ok();
    }

    /// Fill `x_start..=x_end` of row `y`, clipped to the surface. Whole
    /// bytes are written at once; the end bytes are masked.
    pub fn fill_span(&mut self, y: i32, x_start: i32, x_end: i32, tone: Tone) {
        if y < 0 || y as u32 >= self.height {
            return;
        }
        let start = x_start.max(0);
        let end = x_end.min(self.width as i32 - 1);
        if start > end {
            return;
        }
        let (start, end) = (start as usize, end as usize);
        let row = y as usize * self.stride;
        let set = self.polarity.bit_for(tone);
        for byte in start / 8..=end / 8 {
            let lo = if byte == start / 8 { start & 7 } else { 0 };
            let hi = if byte == end / 8 { end & 7 } else { 7 };
            let mask = (0xFFu8 >> lo) & (0xFFu8 << (7 - hi));
            if set {
                self.buffer[row + byte] |= mask;
            } else {
                self.buffer[row + byte] &= !mask;
            }
        }
    }

    /// Number of pixels currently holding `tone`, padding bits excluded.
    pub fn count(&self, tone: Tone) -> usize {
        let mut n = 0;
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if self.get_pixel(x, y) == Some(tone) {
                    n += 1;
                }
            }
        }
        n
    }
}

impl core::fmt::Debug for Surface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stride", &self.stride)
            .field("polarity", &self.polarity)
            .finish_non_exhaustive()
    }
}

// Implement DrawTarget for embedded-graphics
impl DrawTarget for Surface {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.set_pixel(x, y, color.into());
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let visible = area.intersection(&self.bounding_box());
        if let Some(bottom_right) = visible.bottom_right() {
            for y in visible.top_left.y..=bottom_right.y {
                self.fill_span(y, visible.top_left.x, bottom_right.x, color.into());
            }
        }
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        let visible = area.intersection(&self.bounding_box());
        let Some(bottom_right) = visible.bottom_right() else {
            return Ok(());
        };
        // colors run row by row over the whole area; skip rows above the surface
        let row_len = area.size.width as usize;
        let rows_above = (visible.top_left.y - area.top_left.y) as usize;
        let mut colors = colors.into_iter().skip(rows_above.saturating_mul(row_len));
        let left = i64::from(area.top_left.x);
        let columns = i64::from(visible.top_left.x)..=i64::from(bottom_right.x);
        for y in visible.top_left.y..=bottom_right.y {
            for (x, color) in (left..).zip(colors.by_ref().take(row_len)) {
                if columns.contains(&x) {
                    self.set_pixel(x as i32, y, color.into());
                }
            }
        }
        Ok(())
    }
}

impl OriginDimensions for Surface {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
