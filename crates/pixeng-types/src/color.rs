//! RGB color value used by the pixel buffer.

use serde::{Deserialize, Serialize};

/// A 24-bit RGB color (0-255 per channel).
///
/// The layout matches a packed RGB24 pixel so a row of colors can be handed
/// to a streaming texture byte for byte.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed `0xRRGGBB` value. Bits above 24 are ignored.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex & 0xFF_0000) >> 16) as u8,
            g: ((hex & 0x00_FF00) >> 8) as u8,
            b: (hex & 0x00_00FF) as u8,
        }
    }

    /// Pack back into `0xRRGGBB`.
    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_splits_channels() {
        assert_eq!(Color::from_hex(0x12_34_56), Color::rgb(0x12, 0x34, 0x56));
    }

    #[test]
    fn from_hex_ignores_upper_byte() {
        assert_eq!(Color::from_hex(0xFF_FF_00_00), Color::RED);
    }

    #[test]
    fn named_constants() {
        assert_eq!(Color::from_hex(0x000000), Color::BLACK);
        assert_eq!(Color::from_hex(0xFFFFFF), Color::WHITE);
        assert_eq!(Color::from_hex(0x00FF00), Color::GREEN);
        assert_eq!(Color::from_hex(0x0000FF), Color::BLUE);
    }

    #[test]
    fn default_is_black() {
        assert_eq!(Color::default(), Color::BLACK);
    }

    #[test]
    fn to_hex_inverts_from_hex() {
        assert_eq!(Color::rgb(1, 2, 3).to_hex(), 0x010203);
        assert_eq!(Color::from(0xABCDEFu32).to_hex(), 0xABCDEF);
    }

    #[test]
    fn layout_is_packed_rgb() {
        assert_eq!(std::mem::size_of::<Color>(), 3);
    }

    #[test]
    fn deserializes_from_toml_table() {
        let c: Color = toml::from_str("r = 10\ng = 20\nb = 30").unwrap();
        assert_eq!(c, Color::rgb(10, 20, 30));
    }

    mod proptests {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn hex_round_trips(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
                let c = Color::rgb(r, g, b);
                prop_assert_eq!(Color::from_hex(c.to_hex()), c);
                prop_assert!(c.to_hex() <= 0x00FF_FFFF);
            }

            #[test]
            fn from_hex_drops_upper_byte(hex in any::<u32>()) {
                prop_assert_eq!(Color::from_hex(hex), Color::from_hex(hex & 0x00FF_FFFF));
            }
        }
    }
}
