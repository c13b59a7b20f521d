//! Model a color as red, green and blue channels.

use std::fmt;

colorpick_macros::gen_model! {
    /// A color specified with 8-bit red, green and blue channels.
    #[derive(Eq, Hash)]
    pub struct Rgb {
        /// The red channel.
        red: u8,
        /// The green channel.
        green: u8,
        /// The blue channel.
        blue: u8,
    }
}

impl Rgb {
    /// Build a color from a packed `0xRRGGBB` value. Bits above the lowest 24
    /// are ignored.
    pub const fn from_u32(packed: u32) -> Self {
        Self::new(
            ((packed >> 16) & 0xFF) as u8,
            ((packed >> 8) & 0xFF) as u8,
            (packed & 0xFF) as u8,
        )
    }
}

/// Formats as `"r, g, b"`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.red, self.green, self.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Components;

    #[test]
    fn from_packed_value() {
        let rgb = Rgb::from_u32(0xFF00CC);
        assert_eq!(rgb, Rgb::new(255, 0, 204));
        assert_eq!(Rgb::from_u32(0x12_345678), Rgb::new(0x34, 0x56, 0x78));
    }

    #[test]
    fn components_are_channel_values() {
        let rgb = Rgb::new(10, 20, 30);
        assert_eq!(rgb.to_components(), Components(10.0, 20.0, 30.0));
        assert_eq!(<(u8, u8, u8)>::from(rgb), (10, 20, 30));
    }

    #[test]
    fn display_lists_channels() {
        assert_eq!(Rgb::new(59, 130, 246).to_string(), "59, 130, 246");
    }
}
