//! Model a color with the HSL notation.

use std::fmt;

use crate::math::{clamp_percent, normalize_hue};
use crate::Component;

colorpick_macros::gen_model! {
    /// A color specified with the HSL (hue, saturation, lightness) notation.
    pub struct Hsl {
        /// The hue in degrees.
        hue: Component,
        /// The saturation as a percentage.
        saturation: Component,
        /// The lightness as a percentage.
        lightness: Component,
    }
}

impl Hsl {
    /// Return a copy with the hue wrapped into `[0, 360)` and saturation and
    /// lightness clamped into `[0, 100]`.
    pub fn normalized(&self) -> Self {
        Self::new(
            normalize_hue(self.hue),
            clamp_percent(self.saturation),
            clamp_percent(self.lightness),
        )
    }

    /// Return a copy with a different hue.
    pub fn with_hue(&self, hue: Component) -> Self {
        Self::new(hue, self.saturation, self.lightness)
    }

    /// Return a copy with a different saturation.
    pub fn with_saturation(&self, saturation: Component) -> Self {
        Self::new(self.hue, saturation, self.lightness)
    }

    /// Return a copy with a different lightness.
    pub fn with_lightness(&self, lightness: Component) -> Self {
        Self::new(self.hue, self.saturation, lightness)
    }
}

/// Formats as `"h, s%, l%"` with each value rounded.
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Adding zero turns a rounded `-0` into `0`.
        write!(
            f,
            "{}, {}%, {}%",
            self.hue.round() + 0.0,
            self.saturation.round() + 0.0,
            self.lightness.round() + 0.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_wraps_and_clamps() {
        let hsl = Hsl::new(-30.0, 150.0, -2.0).normalized();
        assert_eq!(hsl, Hsl::new(330.0, 100.0, 0.0));

        let hsl = Hsl::new(720.0, 50.0, 50.0).normalized();
        assert_eq!(hsl, Hsl::new(0.0, 50.0, 50.0));
    }

    #[test]
    fn with_replaces_a_single_component() {
        let hsl = Hsl::new(10.0, 20.0, 30.0);
        assert_eq!(hsl.with_hue(40.0), Hsl::new(40.0, 20.0, 30.0));
        assert_eq!(hsl.with_saturation(40.0), Hsl::new(10.0, 40.0, 30.0));
        assert_eq!(hsl.with_lightness(40.0), Hsl::new(10.0, 20.0, 40.0));
    }

    #[test]
    fn display_rounds() {
        assert_eq!(Hsl::new(217.2, 91.4, 59.8).to_string(), "217, 91%, 60%");
    }
}
