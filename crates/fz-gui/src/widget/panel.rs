//! Framed panels for the inventory, messages, and overlays.

use macroquad::prelude::*;

use super::{Rect2, bordered_rect};
use crate::theme::{CANVAS_H, CANVAS_W, palette};

/// Black box with a white 2px frame.
pub fn draw_panel(area: &Rect2) {
    bordered_rect(area, palette::BLACK, palette::WHITE, 2.0);
}

/// Dim the whole canvas.
pub fn draw_overlay() {
    draw_rectangle(0.0, 0.0, CANVAS_W, CANVAS_H, palette::OVERLAY);
}
