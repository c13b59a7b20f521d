//! The hexadecimal form of a color, e.g. `#3B82F6`.
//!
//! Input is case-insensitive and accepts the 3-digit shorthand, with or
//! without a leading `#`. Output is always `#` followed by 6 uppercase digits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FormatIssue, InvalidColorFormat};
use crate::models::Rgb;

/// A color in its canonical hexadecimal form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hex(Rgb);

impl Hex {
    /// Create a hex color from its RGB channels.
    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self(rgb)
    }

    /// Create a hex color from a packed `0xRRGGBB` value.
    pub const fn from_u32(packed: u32) -> Self {
        Self(Rgb::from_u32(packed))
    }

    /// The RGB channels of this color.
    pub const fn to_rgb(&self) -> Rgb {
        self.0
    }
}

impl From<Rgb> for Hex {
    fn from(value: Rgb) -> Self {
        Self(value)
    }
}

impl From<Hex> for Rgb {
    fn from(value: Hex) -> Self {
        value.0
    }
}

impl FromStr for Hex {
    type Err = InvalidColorFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);

        let len = digits.chars().count();
        if len != 3 && len != 6 {
            return Err(InvalidColorFormat::new(s, FormatIssue::Length(len)));
        }

        let mut values = [0_u8; 6];
        for (value, c) in values.iter_mut().zip(digits.chars()) {
            *value = c
                .to_digit(16)
                .ok_or_else(|| InvalidColorFormat::new(s, FormatIssue::Digit(c)))?
                as u8;
        }

        let channel = |high: u8, low: u8| (high << 4) | low;
        let rgb = if len == 3 {
            // Each shorthand digit is doubled: "f0c" is "ff00cc".
            let [r, g, b, ..] = values;
            Rgb::new(channel(r, r), channel(g, g), channel(b, b))
        } else {
            let [r1, r0, g1, g0, b1, b0] = values;
            Rgb::new(channel(r1, r0), channel(g1, g0), channel(b1, b0))
        };

        Ok(Self(rgb))
    }
}

impl TryFrom<String> for Hex {
    type Error = InvalidColorFormat;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Hex> for String {
    fn from(value: Hex) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { red, green, blue } = self.0;
        write!(f, "#{red:02X}{green:02X}{blue:02X}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_long_and_short_forms() {
        assert_eq!("#FF0000".parse::<Hex>().unwrap().to_rgb(), Rgb::new(255, 0, 0));
        assert_eq!("3b82f6".parse::<Hex>().unwrap().to_rgb(), Rgb::new(59, 130, 246));
        assert_eq!("f0c".parse::<Hex>().unwrap().to_rgb(), Rgb::new(255, 0, 204));
        assert_eq!("#FFF".parse::<Hex>().unwrap().to_rgb(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn display_is_uppercase_and_zero_padded() {
        assert_eq!(Hex::from_rgb(Rgb::new(1, 2, 3)).to_string(), "#010203");
        assert_eq!("#abcdef".parse::<Hex>().unwrap().to_string(), "#ABCDEF");
        assert_eq!("0a0".parse::<Hex>().unwrap().to_string(), "#00AA00");
    }

    #[test]
    fn wrong_length_is_rejected() {
        for input in ["", "#", "#12", "1234", "#12345", "1234567", "#ff0000ff"] {
            let err = input.parse::<Hex>().unwrap_err();
            assert!(matches!(err.issue, FormatIssue::Length(_)), "{input}");
            assert_eq!(err.input, input);
        }
    }

    #[test]
    fn non_hex_digits_are_rejected() {
        let err = "#12345g".parse::<Hex>().unwrap_err();
        assert_eq!(err.issue, FormatIssue::Digit('g'));

        let err = "xyz".parse::<Hex>().unwrap_err();
        assert_eq!(err.issue, FormatIssue::Digit('x'));

        let err = "##ff".parse::<Hex>().unwrap_err();
        assert_eq!(err.issue, FormatIssue::Digit('#'));

        let err = "-12345".parse::<Hex>().unwrap_err();
        assert_eq!(err.issue, FormatIssue::Digit('-'));
    }

    #[test]
    fn serializes_as_a_string() {
        let hex = Hex::from_u32(0x3B82F6);
        assert_eq!(serde_json::to_string(&hex).unwrap(), "\"#3B82F6\"");
        assert_eq!(serde_json::from_str::<Hex>("\"#3b82f6\"").unwrap(), hex);
        assert!(serde_json::from_str::<Hex>("\"blue\"").is_err());
    }
}
