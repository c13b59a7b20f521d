//! Conversions between the hex, RGB and HSL forms of a color.
//!
//! The formulas work on normalized [`Components`] (channels, saturation and
//! lightness in `[0, 1]`, hue in degrees). The models scale in and out of that
//! range: RGB channels are `0..=255` and HSL saturation and lightness are
//! percentages.
//!
//! ```rust
//! use colorpick::{hex_to_rgb, hsl_to_hex, rgb_to_hsl, Rgb};
//! let rgb = hex_to_rgb("#FF0000").unwrap();
//! assert_eq!(rgb, Rgb::new(255, 0, 0));
//! let hsl = rgb_to_hsl(rgb.red, rgb.green, rgb.blue);
//! assert_eq!(hsl_to_hex(hsl.hue, hsl.saturation, hsl.lightness).to_string(), "#FF0000");
//! ```

use crate::{
    color::{Component, Components},
    error::InvalidColorFormat,
    hex::Hex,
    models::{Hsl, Rgb},
};

const CHANNEL_MAX: Component = 255.0;
const PERCENT: Component = 100.0;

/// Round a channel to the nearest integer and clamp it into `0..=255`.
fn to_channel(value: Component) -> u8 {
    value.round().clamp(0.0, CHANNEL_MAX) as u8
}

impl Rgb {
    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        let Components(hue, saturation, lightness) =
            util::rgb_to_hsl(&self.to_components().map(|c| c / CHANNEL_MAX));
        Hsl::new(hue, saturation * PERCENT, lightness * PERCENT)
    }

    /// Convert this color to its hex form.
    pub fn to_hex(&self) -> Hex {
        Hex::from_rgb(*self)
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to RGB channels. The hue is
    /// wrapped and saturation and lightness are clamped first.
    pub fn to_rgb(&self) -> Rgb {
        let from = Components(
            self.hue,
            self.saturation / PERCENT,
            self.lightness / PERCENT,
        );
        let Components(red, green, blue) = util::hsl_to_rgb(&from);
        Rgb::new(
            to_channel(red * CHANNEL_MAX),
            to_channel(green * CHANNEL_MAX),
            to_channel(blue * CHANNEL_MAX),
        )
    }

    /// Convert this color from the HSL notation to its hex form.
    pub fn to_hex(&self) -> Hex {
        self.to_rgb().to_hex()
    }
}

impl Hex {
    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        self.to_rgb().to_hsl()
    }
}

/// Parse a 3 or 6 digit hex color, with or without a leading `#`.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, InvalidColorFormat> {
    Ok(hex.parse::<Hex>()?.to_rgb())
}

/// Parse a hex color and convert it to the HSL notation.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, InvalidColorFormat> {
    Ok(hex.parse::<Hex>()?.to_hsl())
}

/// Build a hex color from channel values, rounding each to the nearest integer
/// and clamping it into `0..=255`.
pub fn rgb_to_hex(red: Component, green: Component, blue: Component) -> Hex {
    Hex::from_rgb(Rgb::new(
        to_channel(red),
        to_channel(green),
        to_channel(blue),
    ))
}

/// Convert RGB channels to the HSL notation.
pub fn rgb_to_hsl(red: u8, green: u8, blue: u8) -> Hsl {
    Rgb::new(red, green, blue).to_hsl()
}

/// Convert an HSL color (hue in degrees, saturation and lightness as
/// percentages) to RGB channels.
pub fn hsl_to_rgb(hue: Component, saturation: Component, lightness: Component) -> Rgb {
    Hsl::new(hue, saturation, lightness).to_rgb()
}

/// Convert an HSL color to its hex form.
pub fn hsl_to_hex(hue: Component, saturation: Component, lightness: Component) -> Hex {
    Hsl::new(hue, saturation, lightness).to_hex()
}

mod util {
    use crate::{
        color::{Component, Components},
        math::{clamp_unit, normalize_hue},
    };

    /// Convert from RGB notation to HSL notation. Gray colors have a hue and
    /// saturation of 0.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let Components(red, green, blue) = from.map(clamp_unit);

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let lightness = (max + min) / 2.0;

        if max == min {
            return Components(0.0, 0.0, lightness);
        }

        let delta = max - min;

        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let hue = 60.0
            * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            };

        Components(normalize_hue(hue), saturation, lightness)
    }

    /// Convert from HSL notation to RGB notation by interpolating between
    /// two anchors, sampled a third of a turn apart for each channel.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let hue = normalize_hue(from.0) / 360.0;
        let saturation = clamp_unit(from.1);
        let lightness = clamp_unit(from.2);

        if saturation <= 0.0 {
            return Components(lightness, lightness, lightness);
        }

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        Components(
            hue_to_channel(p, q, hue + 1.0 / 3.0),
            hue_to_channel(p, q, hue),
            hue_to_channel(p, q, hue - 1.0 / 3.0),
        )
    }

    fn hue_to_channel(p: Component, q: Component, t: Component) -> Component {
        let t = if t < 0.0 {
            t + 1.0
        } else if t > 1.0 {
            t - 1.0
        } else {
            t
        };

        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }
}
