//! Bresenham lines, clipped to the surface before stepping.

use crate::framebuffer::surface::Surface;
use crate::framebuffer::tone::Tone;

/// Bresenham state for one segment, widened to `i64` so that any pair of
/// `i32` endpoints can be stepped without overflow.
struct Segment {
    x0: i64,
    y0: i64,
    dx: i64,
    /// Always `<= 0`.
    dy: i64,
    sx: i64,
    sy: i64,
}

impl Segment {
    fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (x0, y0, x1, y1) = (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));
        Self {
            x0,
            y0,
            dx: (x1 - x0).abs(),
            dy: -(y1 - y0).abs(),
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
        }
    }

    fn steps(&self) -> i64 {
        self.dx.max(-self.dy)
    }

    /// Whether x is the axis that advances on every step of the loop.
    fn x_major(&self) -> bool {
        self.dx >= -self.dy
    }

    /// Moves along the minor axis taken before pixel `j`.
    fn minor(&self, j: i64) -> i64 {
        let (rise, run) = if self.x_major() {
            (-self.dy, self.dx)
        } else {
            (self.dx, -self.dy)
        };
        if run == 0 {
            return 0;
        }
        let (rise, run, j) = (i128::from(rise), i128::from(run), i128::from(j));
        ((2 * rise * j + run) / (2 * run)) as i64
    }

    /// Pixel `j` of the segment, `0 <= j <= steps()`.
    fn pixel(&self, j: i64) -> (i64, i64) {
        let m = self.minor(j);
        if self.x_major() {
            (self.x0 + self.sx * j, self.y0 + self.sy * m)
        } else {
            (self.x0 + self.sx * m, self.y0 + self.sy * j)
        }
    }

    /// Error term the loop carries into pixel `j`.
    fn error_at(&self, j: i64) -> i64 {
        let (x, y) = self.pixel(j);
        let nx = i128::from((x - self.x0).abs());
        let ny = i128::from((y - self.y0).abs());
        (i128::from(self.dx) * (ny + 1) + i128::from(self.dy) * (nx + 1)) as i64
    }

    /// First step whose minor move count is at least `target`, searching
    /// `lo..=hi`. Returns `hi + 1` when there is none.
    fn first_reaching(&self, lo: i64, hi: i64, target: i64) -> i64 {
        let (mut lo, mut hi) = (lo, hi + 1);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.minor(mid) >= target {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        lo
    }

    /// First and last step that land inside a `width` x `height` surface.
    fn visible(&self, width: i64, height: i64) -> Option<(i64, i64)> {
        let (major, minor) = if self.x_major() {
            (axis_range(self.x0, self.sx, width), axis_range(self.y0, self.sy, height))
        } else {
            (axis_range(self.y0, self.sy, height), axis_range(self.x0, self.sx, width))
        };
        let lo = major.0.max(0);
        let hi = major.1.min(self.steps());
        if lo > hi {
            return None;
        }
        let first = self.first_reaching(lo, hi, minor.0);
        let last = self.first_reaching(lo, hi, minor.1 + 1) - 1;
        (first <= last).then_some((first, last))
    }
}

/// Move counts `k` for which `origin + sign * k` falls in `0..len`.
fn axis_range(origin: i64, sign: i64, len: i64) -> (i64, i64) {
    if sign > 0 {
        (-origin, len - 1 - origin)
    } else {
        (origin - (len - 1), origin)
    }
}

/// Line drawing
impl Surface {
    /// Draw a line from (x0, y0) to (x1, y1) using Bresenham's algorithm.
    /// Both endpoints are plotted; pixels off the surface are clipped.
    ///
    /// The segment is clipped first and stepping resumes at the first
    /// visible pixel, so the cost is bounded by the surface size while the
    /// visible pixels match those of the unclipped walk.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, tone: Tone) {
        let seg = Segment::new(x0, y0, x1, y1);
        let Some((first, last)) = seg.visible(i64::from(self.width()), i64::from(self.height()))
        else {
            return;
        };

        let (mut x, mut y) = seg.pixel(first);
        let mut err = seg.error_at(first);
        for step in first..=last {
            self.set_pixel(x as i32, y as i32, tone);
            if step == last {
                break;
            }
            let e2 = 2 * err;
            if e2 >= seg.dy {
                err += seg.dy;
                x += seg.sx;
            }
            if e2 <= seg.dx {
                err += seg.dx;
                y += seg.sy;
            }
        }
    }

    /// Draw `thickness` copies of a line, shifted one column apart and
    /// starting `thickness / 2` columns to the left.
    ///
    /// The copies are always offset along x, so a horizontal line gets
    /// longer rather than thicker.
    pub fn draw_thick_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        tone: Tone,
        thickness: u32,
    ) {
        let start = -i64::from(thickness / 2);
        for i in 0..i64::from(thickness) {
            // |start + i| <= thickness / 2, which fits in i32
            let off = (start + i) as i32;
            self.draw_line(x0.saturating_add(off), y0, x1.saturating_add(off), y1, tone);
        }
    }
}
