//! Error type shared by every fallible drawing operation.
use core::fmt;

/// Failures surfaced to the caller.
///
/// Out-of-bounds pixel writes are not represented here: they are clipped
/// silently at the moment of the write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GfxError {
    /// A surface was requested with a zero width or height.
    InvalidDimensions { width: u32, height: u32 },
    /// A polygon operation received fewer than three vertices.
    InvalidPolygon { vertices: usize },
    /// A text character has no entry in the glyph table.
    MissingGlyph(char),
    /// A glyph resource could not be turned into a glyph table.
    InvalidGlyphTable(&'static str),
    /// The display sink reported a failed transfer.
    Transfer,
}

impl fmt::Display for GfxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GfxError::InvalidDimensions { width, height } => {
                write!(f, "invalid surface dimensions {}x{}", width, height)
            }
            GfxError::InvalidPolygon { vertices } => {
                write!(f, "polygon needs at least 3 vertices, got {}", vertices)
            }
            GfxError::MissingGlyph(ch) => write!(f, "no glyph for character {:?}", ch),
            GfxError::InvalidGlyphTable(reason) => write!(f, "invalid glyph table: {}", reason),
            GfxError::Transfer => write!(f, "display transfer failed"),
        }
    }
}
