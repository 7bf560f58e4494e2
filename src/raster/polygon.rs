//! Polygon outlines and even-odd scanline fill.

use alloc::vec::Vec;

use log::{trace, warn};

use crate::error::GfxError;
use crate::framebuffer::surface::Surface;
use crate::framebuffer::tone::Tone;
use crate::geometry::Point;

/// Edges of the closed polygon, starting with the closing edge.
fn edges(vertices: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| (vertices[(i + n - 1) % n], vertices[i]))
}

/// X positions where scanline `y` crosses the polygon outline, sorted.
///
/// Horizontal edges never cross. An edge covers `min_y <= y < max_y`, so a
/// vertex shared by two edges is counted once.
pub(crate) fn crossings(vertices: &[Point], y: i32) -> Vec<f64> {
    let mut xs = Vec::new();
    for (p1, p2) in edges(vertices) {
        if p1.y == p2.y {
            continue;
        }
        if p1.y.min(p2.y) <= y && y < p1.y.max(p2.y) {
            let rise = (i64::from(y) - i64::from(p1.y)) as f64;
            let run = (i64::from(p2.x) - i64::from(p1.x)) as f64;
            let height = (i64::from(p2.y) - i64::from(p1.y)) as f64;
            xs.push(f64::from(p1.x) + rise * run / height);
        }
    }
    xs.sort_unstable_by(f64::total_cmp);
    xs
}

/// Polygon drawing
impl Surface {
    /// Draw the outline of a closed polygon and, when `fill` is set, fill
    /// its interior with the same tone.
    ///
    /// Interior spans pair sorted scanline crossings two at a time (even-odd
    /// rule). Self-intersecting outlines are not rejected and fill according
    /// to that pairing.
    pub fn draw_polygon(
        &mut self,
        vertices: &[Point],
        tone: Tone,
        fill: bool,
    ) -> Result<(), GfxError> {
        if vertices.len() < 3 {
            warn!("rejecting polygon with {} vertices", vertices.len());
            return Err(GfxError::InvalidPolygon {
                vertices: vertices.len(),
            });
        }

        for (a, b) in edges(vertices) {
            self.draw_line(a.x, a.y, b.x, b.y, tone);
        }

        if fill {
            self.fill_scanlines(vertices, tone);
        }
        Ok(())
    }

    fn fill_scanlines(&mut self, vertices: &[Point], tone: Tone) {
        let min_y = vertices.iter().map(|p| p.y).min().unwrap_or(0).max(0);
        let max_y = vertices
            .iter()
            .map(|p| p.y)
            .max()
            .unwrap_or(0)
            .min(self.height() as i32 - 1);

        let mut spans = 0usize;
        for y in min_y..=max_y {
            let xs = crossings(vertices, y);
            for pair in xs.chunks_exact(2) {
                // `as` saturates, fill_span clamps to the row
                let start = libm::ceil(pair[0]) as i32;
                let end = libm::floor(pair[1]) as i32;
                self.fill_span(y, start, end, tone);
                spans += 1;
            }
        }
        trace!("filled {} spans over rows {}..={}", spans, min_y, max_y);
    }
}
