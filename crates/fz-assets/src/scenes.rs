//! One painter per room. All coordinates are in design units.

use fz_core::RoomId;
use image::RgbImage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::canvas::{BASE_H, BASE_W, Canvas, Color, gray};

const EMERGENCY_RED: Color = [30, 0, 0];
const GLOW_RED: Color = [60, 0, 0];

/// Render one room's background at `width` x `height`.
///
/// Output depends only on the arguments; every room draws from its own
/// random stream derived from `seed`.
pub fn render(room: RoomId, width: u32, height: u32, seed: u64) -> RgbImage {
    let index = RoomId::ALL.iter().position(|&r| r == room).unwrap_or_default() as u64;
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(index));
    let mut canvas = Canvas::new(width, height, gray(0));
    let brightness = match room {
        RoomId::Exterior => exterior(&mut canvas, &mut rng),
        RoomId::Lobby => lobby(&mut canvas, &mut rng),
        RoomId::Corridor => corridor(&mut canvas, &mut rng),
        RoomId::Security => security(&mut canvas, &mut rng),
        RoomId::Ward => ward(&mut canvas, &mut rng),
        RoomId::Operating => operating(&mut canvas, &mut rng),
        RoomId::Stairs => stairs(&mut canvas, &mut rng),
        RoomId::Morgue => morgue(&mut canvas, &mut rng),
    };
    canvas.vignette(0.35);
    canvas.brightness(brightness);
    canvas.into_image()
}

fn fog(c: &mut Canvas, rng: &mut StdRng, count: usize, ys: (f32, f32), size: (f32, f32), color: Color, flat: f32) {
    for _ in 0..count {
        let x = rng.random_range(0.0..BASE_W);
        let y = rng.random_range(ys.0..ys.1);
        let s = rng.random_range(size.0..size.1);
        let alpha = rng.random_range(10.0..40.0) / 255.0;
        c.ellipse(x, y, s / 2.0, s / flat, color, alpha);
    }
}

fn emergency_light(c: &mut Canvas, x: f32, y: f32, half: f32) {
    c.fill_rect(x - half, y - 10.0, x + half, y + 10.0, EMERGENCY_RED);
    c.ellipse(x, y + 10.0, half + 2.0, 10.0, GLOW_RED, 1.0);
}

fn tiles(c: &mut Canvas, top: f32, size: f32, light: Color, dark: Color) {
    let cols = (BASE_W / size).ceil() as usize;
    let rows = ((BASE_H - top) / size).ceil() as usize;
    for row in 0..rows {
        for col in 0..cols {
            let color = if (row + col) % 2 == 0 { light } else { dark };
            let (x, y) = (col as f32 * size, top + row as f32 * size);
            c.fill_rect(x, y, x + size, y + size, color);
        }
    }
}

fn exterior(c: &mut Canvas, rng: &mut StdRng) -> f32 {
    c.vertical_gradient(0.0, 360.0, [10, 10, 15], [5, 5, 8]);
    c.fill_rect(0.0, 360.0, BASE_W, BASE_H, gray(8));

    for floor in 0..5u8 {
        let y = 360.0 + f32::from(floor) * 72.0;
        let shade = 8 + floor * 2;
        c.fill_rect(200.0, y, 1080.0, y + 72.0, gray(shade));
        for window in 0..8u8 {
            let x = 250.0 + f32::from(window) * 100.0;
            c.fill_rect(x, y + 16.0, x + 60.0, y + 56.0, gray(shade + 5));
            let glass = if rng.random_bool(0.3) { [40, 35, 20] } else { gray(shade + 2) };
            c.fill_rect(x + 5.0, y + 21.0, x + 55.0, y + 51.0, glass);
        }
    }

    for step in 0..5u8 {
        let y = 680.0 + f32::from(step) * 8.0;
        let half = 100.0 + f32::from(step) * 10.0;
        c.fill_rect(640.0 - half, y, 640.0 + half, y + 8.0, gray(3));
    }
    c.fill_rect(590.0, 560.0, 690.0, 680.0, gray(2));

    fog(c, rng, 30, (570.0, BASE_H), (50.0, 150.0), gray(100), 4.0);
    0.7
}

fn lobby(c: &mut Canvas, rng: &mut StdRng) -> f32 {
    c.fill(gray(5));
    c.fill_rect(0.0, 0.0, BASE_W, 520.0, gray(8));
    c.grain(rng, 0.0, 0.0, BASE_W, 520.0, 0.15);
    tiles(c, 520.0, 40.0, gray(12), gray(8));

    for i in 0..4u8 {
        let x = 150.0 + f32::from(i) * 250.0;
        c.fill_rect(x - 15.0, 70.0, x + 15.0, 90.0, EMERGENCY_RED);
        for ring in 1..8u8 {
            let r = f32::from(ring) * 15.0;
            let alpha = f32::from(50 - ring * 5) / 255.0;
            c.ellipse(x, 80.0, r, r, [80, 0, 0], alpha);
        }
    }

    c.fill_rect(440.0, 440.0, 840.0, 500.0, gray(15));
    c.fill_rect(440.0, 440.0, 840.0, 450.0, gray(25));
    for leg in 0..4u8 {
        let x = 490.0 + f32::from(leg) * 100.0;
        c.fill_rect(x, 500.0, x + 20.0, 540.0, gray(12));
    }

    for _ in 0..200 {
        let x = rng.random_range(0.0..BASE_W);
        let y = rng.random_range(0.0..BASE_H);
        let r = rng.random_range(1.0..3.0);
        let shade: u8 = rng.random_range(80..=120);
        c.ellipse(x, y, r, r, gray(shade), 1.0);
    }
    0.6
}

fn corridor(c: &mut Canvas, rng: &mut StdRng) -> f32 {
    c.fill(gray(20));
    for panel in 0..11u8 {
        let x = f32::from(panel) * 120.0;
        c.fill_rect(x, 0.0, x + 118.0, 80.0, gray(15));
        c.fill_rect(x + 10.0, 10.0, x + 110.0, 30.0, gray(25));
    }
    c.fill_rect(0.0, 80.0, BASE_W, 570.0, gray(25));
    c.grain(rng, 0.0, 80.0, BASE_W, 570.0, 0.1);
    tiles(c, 570.0, 60.0, gray(22), gray(18));

    for door in 0..4u8 {
        let x = 150.0 + f32::from(door) * 250.0;
        c.fill_rect(x, 400.0, x + 100.0, 570.0, gray(20));
        c.fill_rect(x + 5.0, 405.0, x + 95.0, 565.0, gray(15));
        c.fill_rect(x + 80.0, 480.0, x + 90.0, 490.0, gray(40));
    }

    // Abandoned wheelchair.
    for wx in [620.0, 680.0] {
        c.ellipse(wx, 520.0, 25.0, 25.0, gray(35), 1.0);
        c.ellipse(wx, 520.0, 18.0, 18.0, gray(22), 1.0);
        for spoke in 0..8u8 {
            let angle = f32::from(spoke) * std::f32::consts::FRAC_PI_4;
            let (sin, cos) = angle.sin_cos();
            c.line(wx, 520.0, wx + 18.0 * cos, 520.0 + 18.0 * sin, 2.0, gray(30));
        }
    }
    c.fill_rect(610.0, 470.0, 690.0, 500.0, gray(30));
    c.fill_rect(610.0, 420.0, 622.0, 500.0, gray(25));

    for x in [100.0, 1180.0] {
        emergency_light(c, x, 45.0, 8.0);
    }
    0.7
}

fn security(c: &mut Canvas, rng: &mut StdRng) -> f32 {
    c.fill(gray(8));
    c.fill_rect(0.0, 0.0, BASE_W, 620.0, gray(6));
    c.grain(rng, 0.0, 0.0, BASE_W, 620.0, 0.05);
    c.fill_rect(0.0, 620.0, BASE_W, BASE_H, gray(12));
    c.grain(rng, 0.0, 620.0, BASE_W, BASE_H, 0.2);

    for col in 0..3u8 {
        for row in 0..2u8 {
            let x = 190.0 + f32::from(col) * 320.0;
            let y = 60.0 + f32::from(row) * 190.0;
            c.fill_rect(x + 80.0, y + 140.0, x + 120.0, y + 160.0, gray(20));
            c.fill_rect(x, y, x + 200.0, y + 140.0, gray(15));
            c.fill_rect(x + 10.0, y + 10.0, x + 190.0, y + 130.0, gray(3));
            c.grain(rng, x + 10.0, y + 10.0, x + 190.0, y + 130.0, 0.12);
            c.outline_rect(x, y, x + 200.0, y + 140.0, 3.0, gray(25));
        }
    }

    c.fill_rect(520.0, 460.0, 760.0, 580.0, gray(20));
    c.fill_rect(530.0, 470.0, 750.0, 570.0, gray(15));
    c.fill_rect(540.0, 490.0, 620.0, 550.0, gray(5));
    for button in 0..5u8 {
        let x = 640.0 + f32::from(button) * 22.0;
        c.ellipse(x, 520.0, 8.0, 8.0, gray(30), 1.0);
    }

    for cable in 0..6u8 {
        let x = 80.0 + f32::from(cable) * 220.0;
        c.line(x, 0.0, x, 600.0, 4.0, gray(25));
        c.ellipse(x, 600.0, 5.0, 5.0, gray(35), 1.0);
    }
    0.5
}

fn ward(c: &mut Canvas, rng: &mut StdRng) -> f32 {
    c.fill(gray(12));
    c.fill_rect(0.0, 0.0, BASE_W, 620.0, gray(10));
    c.grain(rng, 0.0, 0.0, BASE_W, 620.0, 0.08);
    tiles(c, 620.0, 50.0, gray(15), gray(10));

    for bed in 0..3u8 {
        let x = 100.0 + f32::from(bed) * 300.0;
        let y = 440.0;
        c.fill_rect(x, y, x + 220.0, y + 100.0, gray(18));
        c.fill_rect(x + 10.0, y + 10.0, x + 210.0, y + 90.0, gray(25));
        for wrinkle in 0..5u8 {
            let wy = y + 25.0 + f32::from(wrinkle) * 13.0;
            let sag = rng.random_range(-3.0..3.0);
            c.line(x + 90.0, wy, x + 205.0, wy + sag, 1.5, gray(22));
        }
        c.fill_rect(x + 20.0, y + 20.0, x + 80.0, y + 50.0, gray(20));
        c.fill_rect(x, y + 100.0, x + 10.0, y + 160.0, gray(15));
        c.fill_rect(x + 210.0, y + 100.0, x + 220.0, y + 160.0, gray(15));

        // Curtain hung from a rail beside each bed.
        let cx = x + 230.0;
        c.fill_rect(cx, 50.0, cx + 6.0, 440.0, gray(35));
        for fold in 0..6u8 {
            let fx = cx + 8.0 + f32::from(fold) * 9.0;
            c.fill_rect(fx, 60.0, fx + 8.0, 430.0, gray(30));
            c.fill_rect(fx + 1.0, 60.0, fx + 4.0, 430.0, gray(25));
        }
    }

    c.fill_rect(1080.0, 100.0, 1260.0, 420.0, gray(3));
    c.outline_rect(1080.0, 100.0, 1260.0, 420.0, 3.0, gray(20));
    c.fill_rect(1168.0, 100.0, 1172.0, 420.0, gray(20));

    for (i, x) in [20.0, 1150.0].into_iter().enumerate() {
        let y = 560.0 + i as f32 * 10.0;
        c.fill_rect(x, y, x + 100.0, y + 60.0, gray(18));
        c.fill_rect(x + 5.0, y + 5.0, x + 95.0, y + 55.0, gray(12));
        for b in 0..3u8 {
            c.ellipse(x + 25.0 + f32::from(b) * 25.0, y + 30.0, 3.0, 3.0, gray(25), 1.0);
        }
    }
    0.6
}

fn operating(c: &mut Canvas, rng: &mut StdRng) -> f32 {
    c.fill(gray(5));
    c.fill_rect(0.0, 0.0, BASE_W, 620.0, gray(4));
    c.grain(rng, 0.0, 0.0, BASE_W, 620.0, 0.05);
    c.fill_rect(0.0, 620.0, BASE_W, BASE_H, gray(12));
    c.grain(rng, 0.0, 620.0, BASE_W, BASE_H, 0.15);

    c.fill_rect(460.0, 400.0, 820.0, 500.0, gray(20));
    c.fill_rect(470.0, 400.0, 810.0, 490.0, gray(25));
    for leg in 0..4u8 {
        let x = 490.0 + f32::from(leg) * 100.0;
        c.fill_rect(x, 500.0, x + 20.0, 600.0, gray(15));
    }

    for lamp in 0..3u8 {
        let x = 340.0 + f32::from(lamp) * 300.0;
        c.line(x, 0.0, x, 80.0, 4.0, gray(25));
        for ring in 1..6u8 {
            let r = f32::from(ring) * 24.0;
            let alpha = f32::from(60 - ring * 10) / 255.0;
            c.ellipse(x, 140.0, r, r * 0.8, [60, 60, 20], alpha);
        }
        c.ellipse(x, 100.0, 40.0, 22.0, gray(20), 1.0);
    }

    c.fill_rect(900.0, 500.0, 1100.0, 580.0, gray(18));
    c.fill_rect(910.0, 505.0, 1090.0, 575.0, gray(15));
    for tool in 0..7u8 {
        let x = 925.0 + f32::from(tool) * 25.0;
        c.fill_rect(x, 470.0, x + 3.0, 510.0, gray(30));
    }

    for stain in 0..4u8 {
        let x = 300.0 + f32::from(stain) * 200.0 + rng.random_range(-20.0..20.0);
        let y = 650.0 + rng.random_range(-10.0..10.0);
        c.ellipse(x, y, 30.0, 14.0, [15, 5, 5], 1.0);
        c.ellipse(x, y, 22.0, 10.0, [25, 8, 8], 1.0);
    }

    for x in [60.0, 1080.0] {
        c.fill_rect(x + 60.0, 230.0, x + 80.0, 250.0, gray(20));
        c.fill_rect(x, 150.0, x + 140.0, 230.0, gray(8));
        c.fill_rect(x + 5.0, 155.0, x + 135.0, 225.0, gray(3));
    }
    0.4
}

fn stairs(c: &mut Canvas, rng: &mut StdRng) -> f32 {
    c.fill(gray(12));
    c.grain(rng, 0.0, 0.0, BASE_W, BASE_H, 0.05);

    // Steps widen as they descend toward the viewer.
    for step in 0..10u8 {
        let i = f32::from(step);
        let y = 80.0 + i * 45.0;
        let half = 200.0 + i * 25.0;
        c.fill_rect(640.0 - half, y, 640.0 + half, y + 45.0, gray(20));
        c.fill_rect(640.0 - half, y, 640.0 + half, y + 8.0, gray(30));
        c.fill_rect(640.0 - half, y + 45.0, 640.0 + half, y + 55.0, gray(18));
    }

    c.fill_rect(60.0, 120.0, 310.0, 240.0, gray(25));
    c.fill_rect(70.0, 130.0, 300.0, 230.0, gray(20));
    for _ in 0..6 {
        let y = rng.random_range(145.0..215.0);
        let x = rng.random_range(85.0..160.0);
        let color = if rng.random_bool(0.5) { gray(80) } else { [100, 50, 50] };
        c.line(x, y, x + rng.random_range(60.0..130.0), y + rng.random_range(-8.0..8.0), 3.0, color);
    }

    for x in [100.0, 1180.0] {
        emergency_light(c, x, 50.0, 10.0);
    }

    for band in 0..8u8 {
        let y = 520.0 + f32::from(band) * 25.0;
        let alpha = f32::from(30 + band * 8) / 255.0;
        c.blend_rect(0.0, y, BASE_W, y + 25.0, gray(0), alpha);
    }
    0.6
}

fn morgue(c: &mut Canvas, rng: &mut StdRng) -> f32 {
    c.fill(gray(3));
    c.fill_rect(0.0, 0.0, BASE_W, 620.0, gray(2));
    c.grain(rng, 0.0, 0.0, BASE_W, 620.0, 0.03);
    c.fill_rect(0.0, 620.0, BASE_W, BASE_H, gray(8));
    c.grain(rng, 0.0, 620.0, BASE_W, BASE_H, 0.2);

    for drawer in 0..4u8 {
        let x = 200.0 + f32::from(drawer) * 220.0;
        let y = 400.0;
        c.fill_rect(x, y, x + 180.0, y + 220.0, gray(15));
        if drawer == 1 {
            c.fill_rect(x + 10.0, y + 10.0, x + 170.0, y + 210.0, gray(8));
            c.fill_rect(x + 10.0, y + 10.0, x + 90.0, y + 210.0, gray(5));
        } else {
            c.fill_rect(x + 10.0, y + 10.0, x + 170.0, y + 210.0, gray(12));
        }
        c.ellipse(x + 160.0, y + 110.0, 8.0, 8.0, gray(25), 1.0);

        c.fill_rect(x + 60.0, 380.0, x + 120.0, 405.0, gray(20));
        c.fill_rect(x + 62.0, 382.0, x + 118.0, 403.0, gray(15));
        let offset = rng.random_range(-4.0..4.0);
        c.fill_rect(x + 70.0 + offset, 391.0, x + 110.0 + offset, 394.0, gray(60));
    }

    fog(c, rng, 20, (100.0, 520.0), (80.0, 200.0), gray(150), 4.0);
    c.blend_rect(0.0, 0.0, BASE_W, BASE_H, gray(0), 120.0 / 255.0);
    0.3
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mean_luma(img: &RgbImage) -> f64 {
        let total: u64 = img.pixels().map(|p| p.0.iter().map(|&c| u64::from(c)).sum::<u64>()).sum();
        total as f64 / (img.width() * img.height() * 3) as f64
    }

    #[test]
    fn same_seed_same_picture() {
        for room in RoomId::ALL {
            assert_eq!(render(room, 64, 36, 9), render(room, 64, 36, 9), "{room:?}");
        }
    }

    #[test]
    fn rooms_differ_from_each_other() {
        let lobby = render(RoomId::Lobby, 64, 36, 1);
        let ward = render(RoomId::Ward, 64, 36, 1);
        assert_ne!(lobby, ward);
    }

    #[test]
    fn every_room_is_dark() {
        for room in RoomId::ALL {
            let img = render(room, 128, 72, 3);
            assert_eq!((img.width(), img.height()), (128, 72));
            assert!(mean_luma(&img) < 60.0, "{room:?} too bright");
        }
    }

    #[test]
    fn morgue_is_darkest_room() {
        let morgue = mean_luma(&render(RoomId::Morgue, 128, 72, 3));
        let corridor = mean_luma(&render(RoomId::Corridor, 128, 72, 3));
        assert!(morgue < corridor);
    }
}
