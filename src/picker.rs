//! A color picker instance.
//!
//! [`ColorPicker`] owns everything one picker needs: its options, the current
//! color, its recent colors and the drag state of its wheel and plate. Host
//! code forwards input to it and redraws from what it reports; nothing is
//! looked up globally.

use bitflags::bitflags;
use serde::Deserialize;

use crate::error::InvalidColorFormat;
use crate::hex::Hex;
use crate::interaction::{DragTracker, Surface};
use crate::math::{Point, Size};
use crate::models::Hsl;
use crate::palette::PRESETS;
use crate::pointer::{Plate, Wheel};
use crate::recent::{RecentColors, RecentOptions};
use crate::store::Store;
use crate::Component;

bitflags! {
    /// The panels a picker shows.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Sections : u8 {
        /// Recently used colors.
        const RECENT = 1 << 0;
        /// Preset swatches.
        const PALETTE = 1 << 1;
        /// A text input for typing a hex color.
        const CUSTOM = 1 << 2;
        /// The hue/saturation wheel.
        const WHEEL = 1 << 3;
        /// The saturation/lightness plate.
        const PLATE = 1 << 4;
        /// Hue, saturation and lightness sliders.
        const SLIDERS = 1 << 5;
        /// Hex, RGB and HSL readouts.
        const INFO = 1 << 6;
    }
}

/// How much of the picker is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickerMode {
    /// Preset swatches only.
    #[default]
    Simple,
    /// Every panel.
    Professional,
}

impl PickerMode {
    /// The panels shown in this mode.
    pub fn sections(self) -> Sections {
        match self {
            PickerMode::Simple => Sections::PALETTE | Sections::INFO,
            PickerMode::Professional => Sections::all(),
        }
    }
}

/// Configuration for a [`ColorPicker`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PickerOptions {
    /// The color selected when the picker is created.
    pub default_color: Hex,
    /// Which panels are shown.
    pub mode: PickerMode,
    /// Width and height of the square canvas holding the wheel.
    pub wheel_size: Component,
    /// Gap between the wheel's rim and the canvas edge.
    pub wheel_inset: Component,
    /// Width of the plate.
    pub plate_width: Component,
    /// Height of the plate.
    pub plate_height: Component,
    /// Where recent colors are kept.
    pub recent: RecentOptions,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            default_color: Hex::from_u32(0x3B82F6),
            mode: PickerMode::default(),
            wheel_size: 200.0,
            wheel_inset: 5.0,
            plate_width: 150.0,
            plate_height: 150.0,
            recent: RecentOptions::default(),
        }
    }
}

/// What caused the color to change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeSource {
    /// A preset or recent swatch was clicked.
    Swatch,
    /// The host set the color.
    Api,
    /// Text was typed into the custom input.
    Input,
    /// The wheel was pressed or dragged.
    Wheel,
    /// The plate was pressed or dragged.
    Plate,
    /// A slider moved.
    Sliders,
}

impl ChangeSource {
    /// Whether the user composed the color rather than choosing an existing
    /// one.
    pub fn is_custom(&self) -> bool {
        !matches!(self, ChangeSource::Swatch | ChangeSource::Api)
    }
}

/// Reported whenever the selected color changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorChange {
    /// The new color.
    pub color: Hex,
    /// The new color in the HSL notation, as precise as the input allowed.
    pub hsl: Hsl,
    /// What caused the change.
    pub source: ChangeSource,
}

/// Text readouts of the current color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorInfo {
    /// `#RRGGBB`.
    pub hex: String,
    /// `r, g, b`.
    pub rgb: String,
    /// `h, s%, l%`, rounded.
    pub hsl: String,
}

/// A single color picker.
#[derive(Debug)]
pub struct ColorPicker<S> {
    options: PickerOptions,
    color: Hex,
    hsl: Hsl,
    recent: RecentColors<S>,
    wheel: DragTracker<Wheel>,
    plate: DragTracker<Plate>,
}

impl<S: Store> ColorPicker<S> {
    /// Create a picker showing `options.default_color`, with recent colors
    /// loaded from `store`.
    pub fn new(options: PickerOptions, store: S) -> Self {
        let wheel = Wheel::new(
            Size::new(options.wheel_size, options.wheel_size),
            options.wheel_inset,
        );
        let plate = Plate::new(Size::new(options.plate_width, options.plate_height));
        let recent = RecentColors::load(store, options.recent.clone());

        Self {
            color: options.default_color,
            hsl: options.default_color.to_hsl(),
            options,
            recent,
            wheel: DragTracker::new(wheel),
            plate: DragTracker::new(plate),
        }
    }

    /// The options the picker was created with.
    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    /// The panels to show.
    pub fn sections(&self) -> Sections {
        self.options.mode.sections()
    }

    /// The selected color.
    pub fn color(&self) -> Hex {
        self.color
    }

    /// The selected color in the HSL notation. Colors picked on the wheel,
    /// plate or sliders keep their exact components, so the hue survives a
    /// trip through gray.
    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// The preset swatches.
    pub fn presets(&self) -> &'static [Hex] {
        &PRESETS
    }

    /// The recent colors.
    pub fn recent(&self) -> &RecentColors<S> {
        &self.recent
    }

    /// Whether `swatch` should be highlighted as the selection.
    pub fn is_selected(&self, swatch: Hex) -> bool {
        self.color == swatch
    }

    /// Readouts for the info panel.
    pub fn info(&self) -> ColorInfo {
        ColorInfo {
            hex: self.color.to_string(),
            rgb: self.color.to_rgb().to_string(),
            hsl: self.hsl.to_string(),
        }
    }

    /// Where the wheel marker is drawn, relative to the wheel canvas.
    pub fn wheel_marker(&self) -> Point {
        self.wheel.surface().marker(&self.hsl)
    }

    /// Where the plate marker is drawn, relative to the plate.
    pub fn plate_marker(&self) -> Point {
        self.plate.surface().marker(&self.hsl)
    }

    /// The wheel being tracked.
    pub fn wheel(&self) -> &DragTracker<Wheel> {
        &self.wheel
    }

    /// The plate being tracked.
    pub fn plate(&self) -> &DragTracker<Plate> {
        &self.plate
    }

    /// Select a color given as hex text on behalf of the host.
    pub fn set_color(&mut self, color: &str) -> Result<ColorChange, InvalidColorFormat> {
        let color = color.parse()?;
        Ok(self.select_hex(color, ChangeSource::Api))
    }

    /// Select a preset or recent swatch.
    pub fn pick_swatch(&mut self, swatch: Hex) -> ColorChange {
        self.select_hex(swatch, ChangeSource::Swatch)
    }

    /// Select the color typed into the custom input. Text that is not a hex
    /// color leaves the selection alone.
    pub fn input(&mut self, text: &str) -> Result<ColorChange, InvalidColorFormat> {
        let color = text.trim().parse()?;
        Ok(self.select_hex(color, ChangeSource::Input))
    }

    /// Select a color from the slider values.
    pub fn set_sliders(
        &mut self,
        hue: Component,
        saturation: Component,
        lightness: Component,
    ) -> ColorChange {
        self.select_hsl(Hsl::new(hue, saturation, lightness), ChangeSource::Sliders)
    }

    /// The pointer was pressed on the wheel.
    pub fn wheel_down(&mut self, position: Point) -> ColorChange {
        let hsl = self.wheel.pointer_down(position, &self.hsl);
        self.select_hsl(hsl, ChangeSource::Wheel)
    }

    /// The pointer moved; only reports a change while dragging the wheel.
    pub fn wheel_move(&mut self, position: Point) -> Option<ColorChange> {
        let hsl = self.wheel.pointer_move(position, &self.hsl)?;
        Some(self.select_hsl(hsl, ChangeSource::Wheel))
    }

    /// The pointer was released after pressing the wheel.
    pub fn wheel_up(&mut self) {
        self.wheel.pointer_up();
    }

    /// The pointer was pressed on the plate.
    pub fn plate_down(&mut self, position: Point) -> ColorChange {
        let hsl = self.plate.pointer_down(position, &self.hsl);
        self.select_hsl(hsl, ChangeSource::Plate)
    }

    /// The pointer moved; only reports a change while dragging the plate.
    pub fn plate_move(&mut self, position: Point) -> Option<ColorChange> {
        let hsl = self.plate.pointer_move(position, &self.hsl)?;
        Some(self.select_hsl(hsl, ChangeSource::Plate))
    }

    /// The pointer was released after pressing the plate.
    pub fn plate_up(&mut self) {
        self.plate.pointer_up();
    }

    fn select_hex(&mut self, color: Hex, source: ChangeSource) -> ColorChange {
        self.select(color, color.to_hsl(), source)
    }

    fn select_hsl(&mut self, hsl: Hsl, source: ChangeSource) -> ColorChange {
        let hsl = hsl.normalized();
        self.select(hsl.to_hex(), hsl, source)
    }

    fn select(&mut self, color: Hex, hsl: Hsl, source: ChangeSource) -> ColorChange {
        log::debug!("Selected {color} ({source:?})");

        self.color = color;
        self.hsl = hsl;
        self.recent.add(color);

        ColorChange { color, hsl, source }
    }
}
