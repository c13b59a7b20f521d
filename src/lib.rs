//! colorpick provides the color model and pointer geometry behind a color
//! picker widget, along with the small pieces of state such a widget keeps:
//! recent colors, a light/dark theme and form field validation.

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod hex;
mod interaction;
mod math;
mod models;
mod palette;
mod picker;
mod pointer;
mod recent;
mod store;
mod theme;
pub mod validate;

#[cfg(test)]
mod test;

pub use color::{Component, Components};
pub use convert::{hex_to_hsl, hex_to_rgb, hsl_to_hex, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};
pub use error::{Error, FormatIssue, InvalidColorFormat, Result};
pub use hex::Hex;
pub use interaction::{DragState, DragTracker, Surface};
pub use math::{Offset, Point, Size};
pub use models::{Hsl, Rgb};
pub use palette::PRESETS;
pub use picker::{
    ChangeSource, ColorChange, ColorInfo, ColorPicker, PickerMode, PickerOptions, Sections,
};
pub use pointer::{
    hue_saturation_to_wheel_point, plate_point_to_saturation_lightness,
    saturation_lightness_to_plate_point, wheel_point_to_hue_saturation, Plate, Wheel,
};
pub use recent::{RecentColors, RecentOptions};
pub use store::{MemoryStore, Store};
pub use theme::{Theme, ThemeSettings, THEME_KEY};
