//! Affine helpers over vertex lists.
//!
//! Each function returns a new list and leaves its input untouched. Scaling
//! and rotation pivot on the origin, so placing a shape means applying
//! [`scale`], then [`rotate`], then [`translate`].
use alloc::vec::Vec;

use crate::geometry::Point;

/// Round to the nearest integer, halves away from zero.
pub(crate) fn round_i32(v: f32) -> i32 {
    libm::roundf(v) as i32
}

pub(crate) fn radians(degrees: f32) -> f32 {
    degrees * (core::f32::consts::PI / 180.0)
}

/// Multiply every coordinate by `factor`. A factor of exactly 1 copies the
/// input without touching it.
pub fn scale(vertices: &[Point], factor: f32) -> Vec<Point> {
    if factor == 1.0 {
        return vertices.to_vec();
    }
    vertices
        .iter()
        .map(|p| Point::new(round_i32(p.x as f32 * factor), round_i32(p.y as f32 * factor)))
        .collect()
}

/// Offset every vertex by `(dx, dy)`, saturating at the `i32` limits.
pub fn translate(vertices: &[Point], dx: i32, dy: i32) -> Vec<Point> {
    vertices
        .iter()
        .map(|p| Point::new(p.x.saturating_add(dx), p.y.saturating_add(dy)))
        .collect()
}

/// Rotate about `(0, 0)` by `degrees`. Zero copies the input untouched.
pub fn rotate(vertices: &[Point], degrees: f32) -> Vec<Point> {
    if degrees == 0.0 {
        return vertices.to_vec();
    }
    let theta = radians(degrees);
    let (sin, cos) = (libm::sinf(theta), libm::cosf(theta));
    vertices
        .iter()
        .map(|p| {
            let (x, y) = (p.x as f32, p.y as f32);
            Point::new(round_i32(x * cos - y * sin), round_i32(x * sin + y * cos))
        })
        .collect()
}
