//! RGB painting surface addressed in 1280x720 design coordinates.
//!
//! Scenes are written once against the design size; the canvas scales every
//! coordinate to its real pixel size, so the same scene renders at any
//! resolution.

use std::ops::Range;

use image::{Rgb, RgbImage};
use rand::Rng;

/// Design width every scene is drawn against.
pub const BASE_W: f32 = 1280.0;
/// Design height every scene is drawn against.
pub const BASE_H: f32 = 720.0;

/// An RGB color.
pub type Color = [u8; 3];

/// A neutral gray.
pub const fn gray(v: u8) -> Color {
    [v, v, v]
}

fn mix(a: u8, b: u8, t: f32) -> u8 {
    (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round().clamp(0.0, 255.0) as u8
}

/// Pixel indices covered by the design interval `lo..hi`.
fn span(lo: f32, hi: f32, scale: f32, limit: u32) -> Range<u32> {
    let start = (lo * scale).floor().max(0.0) as u32;
    let end = ((hi * scale).ceil().max(0.0) as u32).min(limit);
    start.min(end)..end
}

/// A mutable RGB image with design-space drawing primitives.
#[derive(Debug, Clone)]
pub struct Canvas {
    img: RgbImage,
    sx: f32,
    sy: f32,
}

impl Canvas {
    /// A canvas of `width` x `height` pixels filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            img: RgbImage::from_pixel(width, height, Rgb(background)),
            sx: width as f32 / BASE_W,
            sy: height as f32 / BASE_H,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.img.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.img.height()
    }

    /// Color at a pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.img.get_pixel(x, y).0
    }

    /// The finished image.
    pub fn into_image(self) -> RgbImage {
        self.img
    }

    fn blend_pixel(&mut self, x: u32, y: u32, color: Color, alpha: f32) {
        let px = self.img.get_pixel_mut(x, y);
        for (c, &target) in px.0.iter_mut().zip(&color) {
            *c = mix(*c, target, alpha);
        }
    }

    /// Paint the whole canvas.
    pub fn fill(&mut self, color: Color) {
        self.fill_rect(0.0, 0.0, BASE_W, BASE_H, color);
    }

    /// Fill the rectangle `(x0, y0)..(x1, y1)`.
    pub fn fill_rect(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color) {
        self.blend_rect(x0, y0, x1, y1, color, 1.0);
    }

    /// Blend `color` over a rectangle with opacity `alpha` (0..=1).
    pub fn blend_rect(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color, alpha: f32) {
        let xs = span(x0, x1, self.sx, self.width());
        for y in span(y0, y1, self.sy, self.height()) {
            for x in xs.clone() {
                self.blend_pixel(x, y, color, alpha);
            }
        }
    }

    /// Frame a rectangle with a border `width` design units thick, inside its bounds.
    pub fn outline_rect(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, width: f32, color: Color) {
        self.fill_rect(x0, y0, x1, y0 + width, color);
        self.fill_rect(x0, y1 - width, x1, y1, color);
        self.fill_rect(x0, y0, x0 + width, y1, color);
        self.fill_rect(x1 - width, y0, x1, y1, color);
    }

    /// Fill rows `y0..y1` with a top-to-bottom gradient.
    pub fn vertical_gradient(&mut self, y0: f32, y1: f32, top: Color, bottom: Color) {
        let rows = span(y0, y1, self.sy, self.height());
        let len = (rows.end - rows.start).max(1) as f32;
        for y in rows.clone() {
            let t = (y - rows.start) as f32 / len;
            let color = [
                mix(top[0], bottom[0], t),
                mix(top[1], bottom[1], t),
                mix(top[2], bottom[2], t),
            ];
            for x in 0..self.width() {
                self.blend_pixel(x, y, color, 1.0);
            }
        }
    }

    /// Blend an axis-aligned ellipse centered on `(cx, cy)` with radii `rx`, `ry`.
    pub fn ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, color: Color, alpha: f32) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let xs = span(cx - rx, cx + rx, self.sx, self.width());
        for y in span(cy - ry, cy + ry, self.sy, self.height()) {
            let dy = ((y as f32 + 0.5) / self.sy - cy) / ry;
            for x in xs.clone() {
                let dx = ((x as f32 + 0.5) / self.sx - cx) / rx;
                if dx * dx + dy * dy <= 1.0 {
                    self.blend_pixel(x, y, color, alpha);
                }
            }
        }
    }

    /// Draw a straight stroke `width` design units wide.
    pub fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, width: f32, color: Color) {
        let pixels = ((x1 - x0) * self.sx).abs().max(((y1 - y0) * self.sy).abs());
        let steps = pixels.ceil().max(1.0) as u32;
        let half = width / 2.0;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let x = x0 + (x1 - x0) * t;
            let y = y0 + (y1 - y0) * t;
            self.fill_rect(x - half, y - half, x + half, y + half, color);
        }
    }

    /// Pull each pixel of a rectangle toward a random mid gray by `amount`.
    pub fn grain(&mut self, rng: &mut impl Rng, x0: f32, y0: f32, x1: f32, y1: f32, amount: f32) {
        let xs = span(x0, x1, self.sx, self.width());
        for y in span(y0, y1, self.sy, self.height()) {
            for x in xs.clone() {
                let noise: u8 = rng.random_range(96..=160);
                self.blend_pixel(x, y, gray(noise), amount);
            }
        }
    }

    /// Scale every channel by `factor`.
    pub fn brightness(&mut self, factor: f32) {
        for px in self.img.pixels_mut() {
            for c in px.0.iter_mut() {
                *c = (f32::from(*c) * factor).round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    /// Darken toward the corners; `strength` is the darkening at the very corner.
    pub fn vignette(&mut self, strength: f32) {
        let (w, h) = (self.width() as f32, self.height() as f32);
        for (x, y, px) in self.img.enumerate_pixels_mut() {
            let dx = (x as f32 + 0.5) / w * 2.0 - 1.0;
            let dy = (y as f32 + 0.5) / h * 2.0 - 1.0;
            let d = ((dx * dx + dy * dy) / 2.0).min(1.0);
            let factor = 1.0 - strength * d;
            for c in px.0.iter_mut() {
                *c = (f32::from(*c) * factor).round().clamp(0.0, 255.0) as u8;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn rect_scales_to_pixels() {
        // 128x72 is a tenth of the design size.
        let mut c = Canvas::new(128, 72, gray(0));
        c.fill_rect(100.0, 100.0, 200.0, 200.0, [255, 0, 0]);
        assert_eq!(c.pixel(10, 10), [255, 0, 0]);
        assert_eq!(c.pixel(19, 19), [255, 0, 0]);
        assert_eq!(c.pixel(20, 20), [0, 0, 0]);
        assert_eq!(c.pixel(9, 10), [0, 0, 0]);
    }

    #[test]
    fn drawing_off_canvas_is_clipped() {
        let mut c = Canvas::new(64, 36, gray(5));
        c.fill_rect(-500.0, -500.0, 5000.0, 5000.0, gray(9));
        c.ellipse(2000.0, 2000.0, 50.0, 50.0, gray(200), 1.0);
        c.line(-100.0, 360.0, 1400.0, 360.0, 4.0, gray(30));
        assert_eq!(c.pixel(0, 0), gray(9));
        assert_eq!(c.pixel(63, 35), gray(9));
    }

    #[test]
    fn blend_mixes_colors() {
        let mut c = Canvas::new(16, 9, gray(0));
        c.blend_rect(0.0, 0.0, BASE_W, BASE_H, gray(200), 0.5);
        assert_eq!(c.pixel(3, 3), gray(100));
    }

    #[test]
    fn ellipse_covers_center_not_corners() {
        let mut c = Canvas::new(128, 72, gray(0));
        c.ellipse(640.0, 360.0, 200.0, 100.0, gray(255), 1.0);
        assert_eq!(c.pixel(64, 36), gray(255));
        assert_eq!(c.pixel(45, 27), gray(0));
    }

    #[test]
    fn gradient_runs_top_to_bottom() {
        let mut c = Canvas::new(8, 72, gray(0));
        c.vertical_gradient(0.0, BASE_H, gray(0), gray(200));
        assert_eq!(c.pixel(0, 0), gray(0));
        assert!(c.pixel(0, 71)[0] > 190);
        assert!(c.pixel(0, 36)[0] > 90 && c.pixel(0, 36)[0] < 110);
    }

    #[test]
    fn brightness_and_vignette_darken() {
        let mut c = Canvas::new(32, 18, gray(100));
        c.brightness(0.5);
        assert_eq!(c.pixel(5, 5), gray(50));
        c.vignette(0.5);
        assert!(c.pixel(0, 0)[0] < c.pixel(16, 9)[0]);
    }

    #[test]
    fn grain_is_seeded() {
        let paint = |seed| {
            let mut c = Canvas::new(32, 18, gray(10));
            c.grain(&mut StdRng::seed_from_u64(seed), 0.0, 0.0, BASE_W, BASE_H, 0.3);
            c.into_image()
        };
        assert_eq!(paint(7), paint(7));
        assert_ne!(paint(7), paint(8));
    }
}
