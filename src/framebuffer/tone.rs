//! Two-tone pixel values and their bit encoding
use embedded_graphics_core::pixelcolor::BinaryColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Tone {
    /// Foreground.
    Ink,
    Background,
}

impl Tone {
    pub const fn inverted(self) -> Tone {
        match self {
            Tone::Ink => Tone::Background,
            Tone::Background => Tone::Ink,
        }
    }

    pub const fn is_ink(self) -> bool {
        matches!(self, Tone::Ink)
    }
}

impl From<BinaryColor> for Tone {
    fn from(color: BinaryColor) -> Self {
        match color {
            BinaryColor::On => Tone::Ink,
            BinaryColor::Off => Tone::Background,
        }
    }
}

impl From<Tone> for BinaryColor {
    fn from(tone: Tone) -> Self {
        match tone {
            Tone::Ink => BinaryColor::On,
            Tone::Background => BinaryColor::Off,
        }
    }
}

/// How a tone is stored in the packed buffer.
///
/// E-paper controllers read a `1` bit as white, so the default stores ink as
/// `0` and a blank surface is all `0xFF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Polarity {
    #[default]
    InkLow,
    InkHigh,
}

impl Polarity {
    /// Bit value stored for `tone`.
    pub const fn bit_for(self, tone: Tone) -> bool {
        match self {
            Polarity::InkLow => !tone.is_ink(),
            Polarity::InkHigh => tone.is_ink(),
        }
    }

    /// Byte value of eight pixels all holding `tone`.
    pub const fn byte_for(self, tone: Tone) -> u8 {
        if self.bit_for(tone) {
            0xFF
        } else {
            0x00
        }
    }

    pub const fn tone_for(self, bit: bool) -> Tone {
        if bit == self.bit_for(Tone::Ink) {
            Tone::Ink
        } else {
            Tone::Background
        }
    }
}
