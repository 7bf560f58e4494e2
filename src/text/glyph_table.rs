//! Character to glyph-outline lookup.
use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::error::GfxError;
use crate::geometry::Point;

/// Read-only source of glyph outlines.
///
/// Outlines are closed polygons in the table's own unit grid. Lookup is by
/// exact character; the space character never needs an entry.
pub trait GlyphTable {
    fn lookup(&self, ch: char) -> Option<&[Point]>;
}

impl<T: GlyphTable + ?Sized> GlyphTable for &T {
    fn lookup(&self, ch: char) -> Option<&[Point]> {
        (**self).lookup(ch)
    }
}

/// Static tables written as `&[('A', &A_OUTLINE), ...]`.
impl<'a> GlyphTable for [(char, &'a [Point])] {
    fn lookup(&self, ch: char) -> Option<&[Point]> {
        self.iter().find(|(c, _)| *c == ch).map(|(_, outline)| *outline)
    }
}

/// Owned glyph table, typically loaded from a configuration resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphMap {
    glyphs: BTreeMap<char, Vec<Point>>,
}

impl GlyphMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the outline for `ch`.
    pub fn insert(&mut self, ch: char, outline: Vec<Point>) -> Result<(), GfxError> {
        if outline.len() < 3 {
            return Err(GfxError::InvalidPolygon {
                vertices: outline.len(),
            });
        }
        self.glyphs.insert(ch, outline);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.glyphs.keys().copied()
    }
}

impl GlyphTable for GlyphMap {
    fn lookup(&self, ch: char) -> Option<&[Point]> {
        self.glyphs.get(&ch).map(Vec::as_slice)
    }
}

/// Deserializes from a map of single-character keys to `[[x, y], ...]`.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for GlyphMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use alloc::string::String;
        use serde::de::Error;

        let raw = BTreeMap::<String, Vec<[i32; 2]>>::deserialize(deserializer)?;
        let mut map = GlyphMap::new();
        for (key, coords) in raw {
            let mut chars = key.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                return Err(D::Error::custom(GfxError::InvalidGlyphTable(
                    "glyph key must be exactly one character",
                )));
            };
            let outline = coords.iter().map(|&[x, y]| Point::new(x, y)).collect();
            map.insert(ch, outline).map_err(|_| {
                D::Error::custom(GfxError::InvalidGlyphTable(
                    "glyph outline needs at least 3 vertices",
                ))
            })?;
        }
        Ok(map)
    }
}
