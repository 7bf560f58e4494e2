//! Vector text: glyph tables and the layout that turns characters into
//! placed polygon outlines.

pub mod glyph_table;
pub mod renderer;

pub use glyph_table::{GlyphMap, GlyphTable};
pub use renderer::{layout_text, PlacedGlyph, TextLayout, TextStyle, ADVANCE_UNITS};
