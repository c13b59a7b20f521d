//! Mapping between pointer positions and color components.
//!
//! A wheel selects hue (the angle) and saturation (the distance from the
//! center) at a fixed lightness. Hue 0 points straight up and increases
//! clockwise in screen coordinates, where y grows downwards. A plate selects
//! saturation (left to right) and lightness (bottom to top) at a fixed hue.
//!
//! Every mapping is total: pointers outside a surface are clamped to its edge.
//! A surface with no extent maps everything to the origin of its axes.

use euclid::Angle;

use crate::math::{clamp_percent, normalize_hue, Offset, Point, Size};
use crate::Component;

const PERCENT: Component = 100.0;

fn hue_of(offset: Offset) -> Component {
    // atan2 measures from the positive x axis; a quarter turn moves 0 to the top.
    // The center has atan2(0, 0) == 0, so it reads as hue 90.
    let angle = Angle::radians(offset.y.atan2(offset.x));
    normalize_hue((angle + Angle::frac_pi_2()).to_degrees())
}

fn wheel_offset(hue: Component, saturation: Component, radius: Component) -> Offset {
    let angle = Angle::degrees(normalize_hue(hue)) - Angle::frac_pi_2();
    let distance = radius.max(0.0) * clamp_percent(saturation) / PERCENT;
    Offset::new(angle.radians.cos(), angle.radians.sin()) * distance
}

/// Map an offset from the center of a wheel with the given radius to a hue in
/// degrees and a saturation percentage. Offsets beyond the rim saturate at 100.
pub fn wheel_point_to_hue_saturation(
    dx: Component,
    dy: Component,
    radius: Component,
) -> (Component, Component) {
    let offset = Offset::new(dx, dy);
    let saturation = if radius > 0.0 {
        (offset.length() / radius).min(1.0) * PERCENT
    } else {
        0.0
    };
    (hue_of(offset), saturation)
}

/// Map a hue and saturation to an offset from the center of a wheel with the
/// given radius.
pub fn hue_saturation_to_wheel_point(
    hue: Component,
    saturation: Component,
    radius: Component,
) -> (Component, Component) {
    let offset = wheel_offset(hue, saturation, radius);
    (offset.x, offset.y)
}

/// Map a position on a plate to a saturation and lightness percentage. The
/// position is clamped to the plate first.
pub fn plate_point_to_saturation_lightness(
    x: Component,
    y: Component,
    width: Component,
    height: Component,
) -> (Component, Component) {
    let saturation = if width > 0.0 {
        x.max(0.0).min(width) / width * PERCENT
    } else {
        0.0
    };
    let lightness = if height > 0.0 {
        PERCENT - y.max(0.0).min(height) / height * PERCENT
    } else {
        PERCENT
    };
    (saturation, lightness)
}

/// Map a saturation and lightness percentage to a position on a plate.
pub fn saturation_lightness_to_plate_point(
    saturation: Component,
    lightness: Component,
    width: Component,
    height: Component,
) -> (Component, Component) {
    let x = clamp_percent(saturation) / PERCENT * width.max(0.0);
    let y = (1.0 - clamp_percent(lightness) / PERCENT) * height.max(0.0);
    (x, y)
}

/// A circular hue/saturation surface drawn inside a rectangular canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wheel {
    size: Size,
    inset: Component,
}

impl Wheel {
    /// Create a wheel centered in a canvas of the given size, with its rim
    /// `inset` units inside the nearest canvas edge.
    pub fn new(size: Size, inset: Component) -> Self {
        Self { size, inset }
    }

    /// The size of the canvas the wheel is drawn in.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The center of the wheel relative to the canvas origin.
    pub fn center(&self) -> Point {
        Point::new(self.size.width / 2.0, self.size.height / 2.0)
    }

    /// The radius of the wheel.
    pub fn radius(&self) -> Component {
        let center = self.center();
        (center.x.min(center.y) - self.inset).max(0.0)
    }

    /// The hue and saturation under a position relative to the canvas origin.
    pub fn hue_saturation_at(&self, position: Point) -> (Component, Component) {
        let offset = position - self.center();
        wheel_point_to_hue_saturation(offset.x, offset.y, self.radius())
    }

    /// The position of a hue and saturation relative to the canvas origin.
    pub fn position_of(&self, hue: Component, saturation: Component) -> Point {
        self.center() + wheel_offset(hue, saturation, self.radius())
    }

    /// Pull a position outside the wheel back onto its rim.
    pub fn clamp_to_rim(&self, position: Point) -> Point {
        let center = self.center();
        let offset = position - center;
        let length = offset.length();
        let radius = self.radius();
        if length > radius {
            center + offset * (radius / length)
        } else {
            position
        }
    }
}

impl Default for Wheel {
    fn default() -> Self {
        Self::new(Size::new(200.0, 200.0), 5.0)
    }
}

/// A rectangular saturation/lightness surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plate {
    size: Size,
}

impl Plate {
    /// Create a plate with the given size.
    pub fn new(size: Size) -> Self {
        Self { size }
    }

    /// The size of the plate.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Clamp a position to the nearest point on the plate.
    pub fn clamp(&self, position: Point) -> Point {
        Point::new(
            position.x.max(0.0).min(self.size.width.max(0.0)),
            position.y.max(0.0).min(self.size.height.max(0.0)),
        )
    }

    /// The saturation and lightness under a position on the plate.
    pub fn saturation_lightness_at(&self, position: Point) -> (Component, Component) {
        plate_point_to_saturation_lightness(
            position.x,
            position.y,
            self.size.width,
            self.size.height,
        )
    }

    /// The position of a saturation and lightness on the plate.
    pub fn position_of(&self, saturation: Component, lightness: Component) -> Point {
        let (x, y) = saturation_lightness_to_plate_point(
            saturation,
            lightness,
            self.size.width,
            self.size.height,
        );
        Point::new(x, y)
    }
}

impl Default for Plate {
    fn default() -> Self {
        Self::new(Size::new(150.0, 150.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn wheel_hue_starts_at_the_top_and_turns_clockwise() {
        let r = 95.0;
        let cases = [
            ((0.0, -r), 0.0),
            ((r, 0.0), 90.0),
            ((0.0, r), 180.0),
            ((-r, 0.0), 270.0),
        ];
        for ((dx, dy), hue) in cases {
            let (h, s) = wheel_point_to_hue_saturation(dx, dy, r);
            assert_component_eq!(h, hue);
            assert_component_eq!(s, 100.0);
        }
    }

    #[test]
    fn wheel_saturation_clamps_at_the_rim() {
        let (_, s) = wheel_point_to_hue_saturation(30.0, 40.0, 100.0);
        assert_component_eq!(s, 50.0);

        let (h, s) = wheel_point_to_hue_saturation(500.0, 0.0, 100.0);
        assert_component_eq!(h, 90.0);
        assert_eq!(s, 100.0);

        let (_, s) = wheel_point_to_hue_saturation(0.0, 0.0, 100.0);
        assert_eq!(s, 0.0);
    }

    #[test]
    fn wheel_center_reads_as_hue_90() {
        for radius in [95.0, 1.0, 0.0] {
            let (h, s) = wheel_point_to_hue_saturation(0.0, 0.0, radius);
            assert_component_eq!(h, 90.0);
            assert_eq!(s, 0.0);
        }

        let (h, s) = Wheel::default().hue_saturation_at(Point::new(100.0, 100.0));
        assert_component_eq!(h, 90.0);
        assert_eq!(s, 0.0);
    }

    #[test]
    fn wheel_diagonals_are_exact() {
        let r = 95.0;
        for hue in [45.0, 135.0, 225.0, 315.0] {
            let (dx, dy) = hue_saturation_to_wheel_point(hue, 100.0, r);
            let (h, s) = wheel_point_to_hue_saturation(dx, dy, r);
            assert_component_eq!(h, hue);
            assert_component_eq!(s, 100.0);
        }
    }

    #[test]
    fn degenerate_wheel_has_no_saturation() {
        let (_, s) = wheel_point_to_hue_saturation(3.0, 4.0, 0.0);
        assert_eq!(s, 0.0);
        assert_eq!(hue_saturation_to_wheel_point(90.0, 100.0, -1.0), (0.0, 0.0));
    }

    #[test]
    fn wheel_inverse_places_markers() {
        let (dx, dy) = hue_saturation_to_wheel_point(0.0, 100.0, 50.0);
        assert_component_eq!(dx, 0.0);
        assert_component_eq!(dy, -50.0);

        let (dx, dy) = hue_saturation_to_wheel_point(90.0, 50.0, 50.0);
        assert_component_eq!(dx, 25.0);
        assert_component_eq!(dy, 0.0);

        // Saturation beyond 100 stays on the rim.
        let (dx, dy) = hue_saturation_to_wheel_point(180.0, 150.0, 50.0);
        assert_component_eq!(dx, 0.0);
        assert_component_eq!(dy, 50.0);
    }

    #[test]
    fn plate_maps_axes_independently() {
        let (s, l) = plate_point_to_saturation_lightness(75.0, 75.0, 150.0, 150.0);
        assert_component_eq!(s, 50.0);
        assert_component_eq!(l, 50.0);

        let (s, l) = plate_point_to_saturation_lightness(0.0, 150.0, 150.0, 150.0);
        assert_eq!((s, l), (0.0, 0.0));

        let (x, y) = saturation_lightness_to_plate_point(20.0, 75.0, 200.0, 100.0);
        assert_component_eq!(x, 40.0);
        assert_component_eq!(y, 25.0);
    }

    #[test]
    fn plate_clamps_overshoot() {
        for overshoot in [1.0, 50.0, 10_000.0] {
            let (s, l) =
                plate_point_to_saturation_lightness(150.0 + overshoot, -overshoot, 150.0, 150.0);
            assert_eq!((s, l), (100.0, 100.0));
        }
        let (s, l) = plate_point_to_saturation_lightness(-5.0, 500.0, 150.0, 150.0);
        assert_eq!((s, l), (0.0, 0.0));
    }

    #[test]
    fn degenerate_plate_maps_to_axis_origin() {
        let (s, l) = plate_point_to_saturation_lightness(10.0, 10.0, 0.0, 0.0);
        assert_eq!((s, l), (0.0, 100.0));
    }

    #[test]
    fn default_surfaces() {
        let wheel = Wheel::default();
        assert_eq!(wheel.center(), Point::new(100.0, 100.0));
        assert_eq!(wheel.radius(), 95.0);

        let (h, s) = wheel.hue_saturation_at(Point::new(100.0, 5.0));
        assert_component_eq!(h, 0.0);
        assert_component_eq!(s, 100.0);

        let marker = wheel.position_of(270.0, 100.0);
        assert_component_eq!(marker.x, 5.0);
        assert_component_eq!(marker.y, 100.0);

        let plate = Plate::default();
        assert_eq!(plate.position_of(100.0, 100.0), Point::new(150.0, 0.0));
        assert_eq!(plate.clamp(Point::new(-3.0, 400.0)), Point::new(0.0, 150.0));
    }

    #[test]
    fn rim_clamp_keeps_direction() {
        let wheel = Wheel::default();
        let clamped = wheel.clamp_to_rim(Point::new(100.0 + 190.0, 100.0));
        assert_component_eq!(clamped.x, 195.0);
        assert_component_eq!(clamped.y, 100.0);

        let inside = Point::new(110.0, 120.0);
        assert_eq!(wheel.clamp_to_rim(inside), inside);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn hue_distance(a: Component, b: Component) -> Component {
            let d = (a - b).abs();
            d.min(360.0 - d)
        }

        proptest! {
            #[test]
            fn wheel_round_trip(
                hue in 0.0 as Component..360.0,
                saturation in 1.0 as Component..=100.0,
                radius in 1.0 as Component..1000.0,
            ) {
                let (dx, dy) = hue_saturation_to_wheel_point(hue, saturation, radius);
                let (h, s) = wheel_point_to_hue_saturation(dx, dy, radius);
                prop_assert!(hue_distance(h, hue) < 1.0e-3, "hue {} vs {}", h, hue);
                prop_assert!((s - saturation).abs() < 1.0e-3, "saturation {} vs {}", s, saturation);
            }

            #[test]
            fn wheel_round_trip_near_center(
                hue in 0.0 as Component..360.0,
                saturation in 1.0e-3 as Component..=1.0,
                radius in 1.0 as Component..1000.0,
            ) {
                let (dx, dy) = hue_saturation_to_wheel_point(hue, saturation, radius);
                let (h, s) = wheel_point_to_hue_saturation(dx, dy, radius);
                // The closer to the center, the less a rounded offset says about direction.
                let tolerance = 1.0e-3 * (1.0 + 1.0 / saturation);
                prop_assert!(hue_distance(h, hue) < tolerance, "hue {} vs {}", h, hue);
                prop_assert!((s - saturation).abs() < 1.0e-3, "saturation {} vs {}", s, saturation);
            }

            #[test]
            fn wheel_hue_is_normalized(
                dx in -1000.0 as Component..1000.0,
                dy in -1000.0 as Component..1000.0,
                radius in 0.0 as Component..1000.0,
            ) {
                let (h, s) = wheel_point_to_hue_saturation(dx, dy, radius);
                prop_assert!((0.0..360.0).contains(&h), "hue {}", h);
                prop_assert!((0.0..=100.0).contains(&s), "saturation {}", s);
            }

            #[test]
            fn plate_round_trip(
                saturation in 0.0 as Component..=100.0,
                lightness in 0.0 as Component..=100.0,
                width in 1.0 as Component..1000.0,
                height in 1.0 as Component..1000.0,
            ) {
                let (x, y) = saturation_lightness_to_plate_point(saturation, lightness, width, height);
                let (s, l) = plate_point_to_saturation_lightness(x, y, width, height);
                prop_assert!((s - saturation).abs() < 1.0e-2);
                prop_assert!((l - lightness).abs() < 1.0e-2);
            }
        }
    }
}
