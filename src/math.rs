//! Math utility functions.

use euclid::default::{Point2D, Size2D, Vector2D};
use num_traits::Float;

use crate::Component;

/// A position on an interactive surface, relative to its top-left corner.
pub type Point = Point2D<Component>;

/// An offset between two positions, e.g. from the center of a wheel.
pub type Offset = Vector2D<Component>;

/// The width and height of an interactive surface.
pub type Size = Size2D<Component>;

/// Wrap a hue in degrees into `[0, 360)`.
pub fn normalize_hue<T: Float + From<u16>>(hue: T) -> T {
    let turn = <T as From<u16>>::from(360);
    let hue = hue % turn;
    let hue = if hue < T::zero() { hue + turn } else { hue };
    // Adding a full turn to a tiny negative value can round up to 360.
    if hue >= turn {
        hue - turn
    } else {
        hue
    }
}

/// Clamp a percentage into `[0, 100]`.
pub fn clamp_percent<T: Float + From<u16>>(value: T) -> T {
    num_traits::clamp(value, T::zero(), <T as From<u16>>::from(100))
}

/// Clamp a value into `[0, 1]`.
pub fn clamp_unit<T: Float>(value: T) -> T {
    num_traits::clamp(value, T::zero(), T::one())
}
