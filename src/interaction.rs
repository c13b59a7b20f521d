//! Pointer interaction with a wheel or plate.
//!
//! A drag is modeled as two states. Pressing on a surface captures it and
//! picks a color; moving while captured keeps picking; releasing anywhere
//! ends the drag. Moves while idle are ignored.

use crate::math::Point;
use crate::models::Hsl;
use crate::pointer::{Plate, Wheel};

/// An interactive surface that turns pointer positions into colors.
pub trait Surface {
    /// The color under `position`, taking whatever component the surface does
    /// not control from `current`. Positions off the surface pick the color at
    /// the nearest point on its edge.
    fn pick(&self, position: Point, current: &Hsl) -> Hsl;

    /// Where the marker for `color` is drawn on the surface.
    fn marker(&self, color: &Hsl) -> Point;
}

impl Surface for Wheel {
    fn pick(&self, position: Point, current: &Hsl) -> Hsl {
        let (hue, saturation) = self.hue_saturation_at(self.clamp_to_rim(position));
        Hsl::new(hue, saturation, current.lightness)
    }

    fn marker(&self, color: &Hsl) -> Point {
        self.position_of(color.hue, color.saturation)
    }
}

impl Surface for Plate {
    fn pick(&self, position: Point, current: &Hsl) -> Hsl {
        let (saturation, lightness) = self.saturation_lightness_at(self.clamp(position));
        Hsl::new(current.hue, saturation, lightness)
    }

    fn marker(&self, color: &Hsl) -> Point {
        self.position_of(color.saturation, color.lightness)
    }
}

/// Whether a surface is currently captured by the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    /// No button is held on the surface.
    #[default]
    Idle,
    /// The pointer was pressed on the surface and not yet released.
    Dragging,
}

/// Tracks a drag on a single surface.
#[derive(Clone, Debug)]
pub struct DragTracker<S> {
    surface: S,
    state: DragState,
}

impl<S: Surface> DragTracker<S> {
    /// Start tracking `surface` in the idle state.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            state: DragState::Idle,
        }
    }

    /// The surface being tracked.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The current state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Capture the surface and pick the color under the pointer.
    pub fn pointer_down(&mut self, position: Point, current: &Hsl) -> Hsl {
        self.state = DragState::Dragging;
        self.surface.pick(position, current)
    }

    /// Pick the color under the pointer if the surface is captured.
    pub fn pointer_move(&mut self, position: Point, current: &Hsl) -> Option<Hsl> {
        match self.state {
            DragState::Dragging => Some(self.surface.pick(position, current)),
            DragState::Idle => None,
        }
    }

    /// Release the surface.
    pub fn pointer_up(&mut self) {
        self.state = DragState::Idle;
    }
}
