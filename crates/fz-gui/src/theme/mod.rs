//! Visual theme: color palette, per-room fallback colors, and virtual canvas scaling.

pub mod backgrounds;
pub mod font;

use macroquad::prelude::*;

use fz_core::RoomId;

/// Virtual canvas width in pixels. The window scales this up.
pub const CANVAS_W: f32 = 1280.0;
/// Virtual canvas height in pixels. The window scales this up.
pub const CANVAS_H: f32 = 720.0;

/// Large heading size (room names, title).
pub const TEXT_LARGE: u16 = 48;
/// Body text size (descriptions, menu).
pub const TEXT_MEDIUM: u16 = 32;
/// Button and message text size.
pub const TEXT_SMALL: u16 = 24;
/// Footnote size.
pub const TEXT_TINY: u16 = 18;

/// Dark hospital palette.
pub mod palette {
    use macroquad::prelude::Color;

    /// Black background.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Primary text.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    /// Title and hover borders.
    pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    /// Hover fill for action buttons.
    pub const DARK_RED: Color = Color::new(0.545, 0.0, 0.0, 1.0);
    /// Idle action buttons and secondary text.
    pub const GRAY: Color = Color::new(0.251, 0.251, 0.251, 1.0);
    /// Idle pickup and exit buttons.
    pub const DARK_GRAY: Color = Color::new(0.125, 0.125, 0.125, 1.0);
    /// Exits and success.
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);
    /// Section headers and hints.
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);
    /// Darkening layer drawn over indoor rooms.
    pub const SHADE: Color = Color::new(0.0, 0.0, 0.0, 100.0 / 255.0);
    /// Dimming layer behind the ending text.
    pub const OVERLAY: Color = Color::new(0.0, 0.0, 0.0, 0.7);
}

/// Flat color drawn when a room has no background image.
pub fn room_fallback_color(room: RoomId) -> Color {
    match room {
        RoomId::Exterior | RoomId::Corridor | RoomId::Security | RoomId::Stairs => {
            palette::DARK_GRAY
        }
        RoomId::Lobby | RoomId::Ward | RoomId::Operating | RoomId::Morgue => palette::BLACK,
    }
}

/// Scale factor and letterbox offset that fit the canvas into the window.
fn canvas_fit() -> (f32, f32, f32) {
    let scale = (screen_width() / CANVAS_W).min(screen_height() / CANVAS_H);
    let offset_x = (screen_width() - CANVAS_W * scale) / 2.0;
    let offset_y = (screen_height() - CANVAS_H * scale) / 2.0;
    (scale, offset_x, offset_y)
}

/// Set up a `Camera2D` that maps the virtual canvas to the current window.
pub fn setup_virtual_canvas() {
    let (scale, offset_x, offset_y) = canvas_fit();
    set_camera(&Camera2D {
        zoom: vec2(2.0 / CANVAS_W, 2.0 / CANVAS_H),
        target: vec2(CANVAS_W / 2.0, CANVAS_H / 2.0),
        viewport: Some((
            offset_x as i32,
            offset_y as i32,
            (CANVAS_W * scale) as i32,
            (CANVAS_H * scale) as i32,
        )),
        ..Default::default()
    });
}

/// Convert screen-space mouse position to virtual canvas coordinates.
pub fn mouse_canvas_position() -> (f32, f32) {
    let (mx, my) = mouse_position();
    let (scale, offset_x, offset_y) = canvas_fit();
    ((mx - offset_x) / scale, (my - offset_y) / scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_room_has_a_fallback() {
        for room in RoomId::ALL {
            let color = room_fallback_color(room);
            assert_eq!(color.a, 1.0);
        }
        assert_eq!(room_fallback_color(RoomId::Exterior), palette::DARK_GRAY);
        assert_eq!(room_fallback_color(RoomId::Morgue), palette::BLACK);
    }
}
