//! Sign color palette
//!
//! The sign only ever uses four colors. Keeping them symbolic lets the
//! scene data stay independent of the panel's color format.

/// One of the four palette entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PaletteColor {
    /// Unlit pixel
    Black,
    /// "ON AIR" red
    Red,
    /// Frame and idle text
    DimWhite,
    /// Accent
    Gold,
}

impl PaletteColor {
    /// 24-bit `0xRRGGBB` value
    pub const fn rgb(self) -> u32 {
        match self {
            PaletteColor::Black => 0x000000,
            PaletteColor::Red => 0xFF0000,
            PaletteColor::DimWhite => 0x444444,
            PaletteColor::Gold => 0xDD8000,
        }
    }

    /// Split into (red, green, blue) channel values
    pub const fn components(self) -> (u8, u8, u8) {
        let rgb = self.rgb();
        ((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }
}
