//! Property tests for pixel addressing, clipping and the transforms.

use inkraster::geometry::{rotate, scale};
use inkraster::{Point, Polarity, Surface, Tone};
use proptest::prelude::*;

fn polarity() -> impl Strategy<Value = Polarity> {
    prop_oneof![Just(Polarity::InkLow), Just(Polarity::InkHigh)]
}

fn tone() -> impl Strategy<Value = Tone> {
    prop_oneof![Just(Tone::Ink), Just(Tone::Background)]
}

/// Every point of the unclipped Bresenham walk from one end to the other.
fn walk(x0: i64, y0: i64, x1: i64, y1: i64) -> Vec<(i64, i64)> {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let (mut x, mut y, mut err) = (x0, y0, dx + dy);
    let mut out = vec![(x, y)];
    while (x, y) != (x1, y1) {
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
        out.push((x, y));
    }
    out
}

proptest! {
    /// Whatever was written in bounds reads back.
    #[test]
    fn set_then_get_round_trips(
        w in 1u32..40, h in 1u32..40, fx in 0.0f64..1.0, fy in 0.0f64..1.0,
        pol in polarity(), bg in tone(), t in tone()
    ) {
        let mut surface = Surface::with_polarity(w, h, bg, pol).unwrap();
        let x = (fx * w as f64) as i32;
        let y = (fy * h as f64) as i32;
        surface.set_pixel(x, y, t);
        prop_assert_eq!(surface.get_pixel(x, y), Some(t));
        surface.set_pixel(x, y, t.inverted());
        prop_assert_eq!(surface.get_pixel(x, y), Some(t.inverted()));
    }

    /// A single write changes at most one bit of one byte.
    #[test]
    fn set_pixel_touches_one_bit(w in 1u32..40, h in 1u32..40, x in 0i32..40, y in 0i32..40) {
        let mut surface = Surface::new(w, h, Tone::Background).unwrap();
        let before = surface.raw_bytes().to_vec();
        surface.set_pixel(x, y, Tone::Ink);
        let flipped: u32 = before
            .iter()
            .zip(surface.raw_bytes())
            .map(|(a, b)| (a ^ b).count_ones())
            .sum();
        let expect = if (x as u32) < w && (y as u32) < h { 1 } else { 0 };
        prop_assert_eq!(flipped, expect);
    }

    /// Writes outside the surface leave the buffer untouched.
    #[test]
    fn out_of_bounds_writes_are_dropped(
        w in 1u32..40, h in 1u32..40,
        x in prop_oneof![-1000i32..0, 40i32..1000],
        y in -1000i32..1000,
        t in tone()
    ) {
        let mut surface = Surface::new(w, h, Tone::Background).unwrap();
        surface.set_pixel(3 % w as i32, 2 % h as i32, Tone::Ink);
        let before = surface.clone();
        surface.set_pixel(x, y, t);
        surface.set_pixel(y, x, t);
        prop_assert_eq!(surface, before);
    }

    /// Lines always include both endpoints when they are on the surface.
    #[test]
    fn lines_hit_both_endpoints(x0 in 0i32..32, y0 in 0i32..32, x1 in 0i32..32, y1 in 0i32..32) {
        let mut surface = Surface::new(32, 32, Tone::Background).unwrap();
        surface.draw_line(x0, y0, x1, y1, Tone::Ink);
        prop_assert_eq!(surface.get_pixel(x0, y0), Some(Tone::Ink));
        prop_assert_eq!(surface.get_pixel(x1, y1), Some(Tone::Ink));
        let len = (x1 - x0).abs().max((y1 - y0).abs()) as usize + 1;
        prop_assert_eq!(surface.count(Tone::Ink), len);
    }

    /// Clipping keeps exactly the on-surface points of the full walk.
    #[test]
    fn clipped_lines_match_the_full_walk(
        x0 in -3000i32..3000, y0 in -3000i32..3000,
        x1 in -3000i32..3000, y1 in -3000i32..3000
    ) {
        let (w, h) = (24, 16);
        let mut surface = Surface::new(w as u32, h as u32, Tone::Background).unwrap();
        surface.draw_line(x0, y0, x1, y1, Tone::Ink);
        let visible: Vec<(i64, i64)> = walk(x0.into(), y0.into(), x1.into(), y1.into())
            .into_iter()
            .filter(|&(x, y)| (0..w).contains(&x) && (0..h).contains(&y))
            .collect();
        prop_assert_eq!(surface.count(Tone::Ink), visible.len());
        for (x, y) in visible {
            prop_assert_eq!(surface.get_pixel(x as i32, y as i32), Some(Tone::Ink));
        }
    }

    /// A full turn comes back within rounding.
    #[test]
    fn full_turn_is_identity_within_one(coords in prop::collection::vec((-500i32..500, -500i32..500), 3..12)) {
        let poly: Vec<Point> = coords.iter().map(|&(x, y)| Point::new(x, y)).collect();
        for (got, want) in rotate(&poly, 360.0).iter().zip(&poly) {
            prop_assert!((got.x - want.x).abs() <= 1 && (got.y - want.y).abs() <= 1,
                "{:?} drifted to {:?}", want, got);
        }
        prop_assert_eq!(rotate(&poly, 0.0), poly.clone());
        prop_assert_eq!(scale(&poly, 1.0), poly);
    }
}
