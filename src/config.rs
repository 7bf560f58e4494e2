use crate::error::GfxError;
use crate::framebuffer::surface::Surface;
use crate::framebuffer::tone::{Polarity, Tone};

/// Panel geometry and pixel convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct PanelConfig {
    pub width: u32,
    pub height: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub polarity: Polarity,
    #[cfg_attr(feature = "serde", serde(default = "default_background"))]
    pub background: Tone,
}

#[cfg(feature = "serde")]
fn default_background() -> Tone {
    Tone::Background
}

impl PanelConfig {
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            polarity: Polarity::InkLow,
            background: Tone::Background,
        }
    }

    /// 2.13" black/white e-paper panel, 122x250
    pub const fn epd_2in13() -> Self {
        Self::new(122, 250)
    }

    /// 2.9" black/white e-paper panel, 128x296
    pub const fn epd_2in9() -> Self {
        Self::new(128, 296)
    }

    pub const fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    pub const fn with_background(mut self, background: Tone) -> Self {
        self.background = background;
        self
    }

    /// Allocate a blank surface for this panel.
    pub fn surface(&self) -> Result<Surface, GfxError> {
        Surface::with_polarity(self.width, self.height, self.background, self.polarity)
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::epd_2in13()
    }
}
