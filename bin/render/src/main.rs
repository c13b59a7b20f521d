//! Render the wheel and plate of a picker for a color, with markers where the
//! picker would draw them.
//!
//! Usage: `colorpick-render [COLOR]`, writing `wheel.png` and `plate.png`.

use colorpick::{Component, Hex, Hsl, Plate, Point, Surface, Wheel};
use image::{Rgba, RgbaImage};

const MARKER_RADIUS: i32 = 6;
const WHEEL_LIGHTNESS: Component = 50.0;

fn to_pixel(hsl: Hsl) -> Rgba<u8> {
    let rgb = hsl.to_rgb();
    Rgba([rgb.red, rgb.green, rgb.blue, 255])
}

fn pixel_center(x: u32, y: u32) -> Point {
    Point::new(x as Component + 0.5, y as Component + 0.5)
}

fn draw_marker(img: &mut RgbaImage, at: Point) {
    let center = (at.x.round() as i32, at.y.round() as i32);
    imageproc::drawing::draw_hollow_circle_mut(
        img,
        center,
        MARKER_RADIUS,
        Rgba([255, 255, 255, 255]),
    );
    imageproc::drawing::draw_hollow_circle_mut(
        img,
        center,
        MARKER_RADIUS + 1,
        Rgba([0, 0, 0, 255]),
    );
}

fn render_wheel(wheel: &Wheel, color: &Hsl) -> RgbaImage {
    let size = wheel.size();
    let mut img = RgbaImage::new(size.width as u32, size.height as u32);

    let radius = wheel.radius();
    let fixed = color.with_lightness(WHEEL_LIGHTNESS);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let position = pixel_center(x, y);
        if (position - wheel.center()).length() <= radius {
            *pixel = to_pixel(wheel.pick(position, &fixed));
        }
    }

    draw_marker(&mut img, wheel.marker(color));
    img
}

fn render_plate(plate: &Plate, color: &Hsl) -> RgbaImage {
    let size = plate.size();
    let mut img = RgbaImage::new(size.width as u32, size.height as u32);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = to_pixel(plate.pick(pixel_center(x, y), color));
    }

    draw_marker(&mut img, plate.marker(color));
    img
}

fn main() {
    let input = std::env::args().nth(1).unwrap_or_else(|| "#3B82F6".to_owned());
    let color: Hex = input.parse().unwrap_or_else(|err| {
        eprintln!("{err}");
        std::process::exit(2);
    });
    let hsl = color.to_hsl();
    println!("Rendering {color} (hsl {hsl})");

    render_wheel(&Wheel::default(), &hsl)
        .save("wheel.png")
        .expect("could not write image to wheel.png");
    render_plate(&Plate::default(), &hsl)
        .save("plate.png")
        .expect("could not write image to plate.png");
}
