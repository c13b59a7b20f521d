//! The RGB and HSL color models.
//!
//! Both are plain `Copy` values; conversions between them live in the
//! `convert` module.

pub mod hsl;
pub mod rgb;

pub use hsl::Hsl;
pub use rgb::Rgb;
