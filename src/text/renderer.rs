//! Vector text: glyph placement along an advancing cursor.

use alloc::vec::Vec;

use log::{debug, trace, warn};

use crate::error::GfxError;
use crate::framebuffer::surface::Surface;
use crate::framebuffer::tone::Tone;
use crate::geometry::transform::{radians, round_i32};
use crate::geometry::{rotate, scale, translate, Point};
use crate::text::glyph_table::GlyphTable;

/// Cursor advance per character, in glyph units before scaling.
pub const ADVANCE_UNITS: f32 = 7.0;

/// How glyph outlines are sized, oriented and painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub tone: Tone,
    pub fill: bool,
    /// Degrees, applied to both the glyphs and the baseline.
    pub rotation: f32,
}

impl TextStyle {
    pub const fn new(size: f32, tone: Tone) -> Self {
        Self {
            size,
            tone,
            fill: false,
            rotation: 0.0,
        }
    }

    pub const fn filled(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    pub const fn rotated(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    /// Cursor displacement after each character.
    pub fn advance(&self) -> (f32, f32) {
        let step = ADVANCE_UNITS * self.size;
        if self.rotation == 0.0 {
            return (step, 0.0);
        }
        let theta = radians(self.rotation);
        (step * libm::cosf(theta), step * libm::sinf(theta))
    }
}

/// One glyph outline in surface coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedGlyph {
    pub ch: char,
    pub outline: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    pub glyphs: Vec<PlacedGlyph>,
    /// Cursor position after the last character.
    pub cursor: (f32, f32),
}

/// Place every glyph of `text` starting at `(x, y)` without drawing.
///
/// Each outline is scaled by `style.size`, rotated about its own origin and
/// moved to the rounded cursor. Spaces only move the cursor. The whole
/// string is resolved before anything is returned, so a missing glyph
/// anywhere yields an error and no layout.
pub fn layout_text<G: GlyphTable + ?Sized>(
    glyphs: &G,
    x: i32,
    y: i32,
    text: &str,
    style: &TextStyle,
) -> Result<TextLayout, GfxError> {
    let (ax, ay) = style.advance();
    let mut cursor = (x as f32, y as f32);
    let mut placed = Vec::new();

    for ch in text.chars() {
        if ch != ' ' {
            let Some(outline) = glyphs.lookup(ch) else {
                warn!("no glyph for {:?} in {:?}", ch, text);
                return Err(GfxError::MissingGlyph(ch));
            };
            let outline = translate(
                &rotate(&scale(outline, style.size), style.rotation),
                round_i32(cursor.0),
                round_i32(cursor.1),
            );
            trace!("glyph {:?} at ({:.2}, {:.2})", ch, cursor.0, cursor.1);
            placed.push(PlacedGlyph { ch, outline });
        }
        cursor.0 += ax;
        cursor.1 += ay;
    }

    Ok(TextLayout {
        glyphs: placed,
        cursor,
    })
}

/// Text drawing
impl Surface {
    /// Draw `text` with its first glyph at `(x, y)` and return where the
    /// cursor ended up.
    ///
    /// Nothing is drawn when any character lacks a glyph or any glyph has
    /// fewer than three vertices.
    pub fn draw_text<G: GlyphTable + ?Sized>(
        &mut self,
        glyphs: &G,
        x: i32,
        y: i32,
        text: &str,
        style: &TextStyle,
    ) -> Result<(f32, f32), GfxError> {
        let layout = layout_text(glyphs, x, y, text, style)?;
        if let Some(bad) = layout.glyphs.iter().find(|g| g.outline.len() < 3) {
            warn!("glyph {:?} is not a polygon", bad.ch);
            return Err(GfxError::InvalidPolygon {
                vertices: bad.outline.len(),
            });
        }

        debug!(
            "text {:?} at ({}, {}): {} glyphs, size {}, rotation {}",
            text,
            x,
            y,
            layout.glyphs.len(),
            style.size,
            style.rotation
        );
        for glyph in &layout.glyphs {
            self.draw_polygon(&glyph.outline, style.tone, style.fill)?;
        }
        Ok(layout.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::glyph_table::GlyphMap;
    use alloc::vec;

    const WEDGE: [Point; 3] = [Point::new(0, 0), Point::new(3, 6), Point::new(6, 0)];
    const BOX: [Point; 4] = [
        Point::new(0, 0),
        Point::new(4, 0),
        Point::new(4, 5),
        Point::new(0, 5),
    ];

    fn table() -> &'static [(char, &'static [Point])] {
        &[('A', &WEDGE), ('o', &BOX)]
    }

    fn blank() -> Surface {
        Surface::new(40, 40, Tone::Background).unwrap()
    }

    #[test]
    fn single_glyph_lands_on_the_cursor() {
        let mut surface = blank();
        let style = TextStyle::new(1.0, Tone::Ink);
        let cursor = surface.draw_text(table(), 2, 1, "A", &style).unwrap();
        assert_eq!(cursor, (9.0, 1.0));

        let mut expected = blank();
        expected
            .draw_polygon(&translate(&WEDGE, 2, 1), Tone::Ink, false)
            .unwrap();
        assert_eq!(surface, expected);
    }

    #[test]
    fn space_only_advances() {
        let mut surface = blank();
        let style = TextStyle::new(2.0, Tone::Ink);
        let cursor = surface.draw_text(table(), 0, 0, "  ", &style).unwrap();
        assert_eq!(cursor, (28.0, 0.0));
        assert_eq!(surface.count(Tone::Ink), 0);
    }

    #[test]
    fn consecutive_glyphs_step_by_seven_units() {
        let layout = layout_text(table(), 0, 0, "A A", &TextStyle::new(1.0, Tone::Ink)).unwrap();
        assert_eq!(layout.glyphs.len(), 2);
        assert_eq!(layout.glyphs[0].outline, WEDGE.to_vec());
        assert_eq!(
            layout.glyphs[1].outline,
            vec![Point::new(14, 0), Point::new(17, 6), Point::new(20, 0)]
        );
        assert_eq!(layout.cursor, (21.0, 0.0));
    }

    #[test]
    fn glyphs_are_scaled_before_placement() {
        let layout = layout_text(table(), 5, 5, "o", &TextStyle::new(2.0, Tone::Ink)).unwrap();
        assert_eq!(
            layout.glyphs[0].outline,
            vec![
                Point::new(5, 5),
                Point::new(13, 5),
                Point::new(13, 15),
                Point::new(5, 15)
            ]
        );
    }

    #[test]
    fn rotation_turns_glyphs_and_baseline() {
        let style = TextStyle::new(1.0, Tone::Ink).rotated(90.0);
        let layout = layout_text(table(), 10, 10, "AA", &style).unwrap();
        assert_eq!(
            layout.glyphs[0].outline,
            vec![Point::new(10, 10), Point::new(4, 13), Point::new(10, 16)]
        );
        assert_eq!(layout.glyphs[1].outline[0], Point::new(10, 17));
        assert!((layout.cursor.0 - 10.0).abs() < 1e-4);
        assert!((layout.cursor.1 - 24.0).abs() < 1e-4);
    }

    #[test]
    fn fractional_cursor_is_rounded_per_glyph() {
        let style = TextStyle::new(1.0, Tone::Ink).rotated(20.0);
        let layout = layout_text(table(), 0, 0, " o", &style).unwrap();
        // 7 * (cos 20, sin 20) = (6.58, 2.39)
        assert_eq!(layout.glyphs[0].outline[0], Point::new(7, 2));
    }

    #[test]
    fn missing_glyph_fails_without_drawing() {
        let mut surface = blank();
        let before = surface.clone();
        let err = surface
            .draw_text(table(), 0, 0, "Ao?A", &TextStyle::new(1.0, Tone::Ink))
            .unwrap_err();
        assert_eq!(err, GfxError::MissingGlyph('?'));
        assert_eq!(surface, before);
    }

    #[test]
    fn filled_text_paints_interiors() {
        let mut outline = blank();
        let mut filled = blank();
        let style = TextStyle::new(1.0, Tone::Ink);
        outline.draw_text(table(), 1, 1, "o", &style).unwrap();
        filled.draw_text(table(), 1, 1, "o", &style.filled(true)).unwrap();
        assert_eq!(outline.count(Tone::Ink), 18);
        assert_eq!(filled.count(Tone::Ink), 30);
    }

    #[test]
    fn enormous_sizes_clip_instead_of_overflowing() {
        let mut surface = blank();
        let style = TextStyle::new(1.0e9, Tone::Ink);
        let cursor = surface.draw_text(table(), 10, 0, "A", &style).unwrap();
        assert!(cursor.0 > 1.0e9);
        // the base edge runs along row 0 from x = 10 to the right border
        assert_eq!(surface.get_pixel(39, 0), Some(Tone::Ink));
        assert_eq!(surface.get_pixel(9, 0), Some(Tone::Background));

        let mut filled = blank();
        filled
            .draw_text(table(), 10, 0, "A", &style.filled(true))
            .unwrap();
        assert!(filled.count(Tone::Ink) > surface.count(Tone::Ink));
    }

    #[test]
    fn owned_maps_work_as_tables() {
        let mut map = GlyphMap::new();
        map.insert('A', WEDGE.to_vec()).unwrap();
        let mut surface = blank();
        let cursor = surface
            .draw_text(&map, 0, 0, "A", &TextStyle::new(1.0, Tone::Ink))
            .unwrap();
        assert_eq!(cursor, (7.0, 0.0));
        assert!(surface.count(Tone::Ink) > 0);
    }
}
