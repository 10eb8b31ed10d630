//! Button widget with idle, hover, and hint looks.

use macroquad::prelude::*;

use super::{Rect2, bordered_rect};
use crate::theme::font::UiFont;
use crate::theme::{TEXT_SMALL, palette};

/// What the button does, which decides its colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Room interactions and menu entries.
    Action,
    /// Collectible items and exits.
    Pickup,
}

/// Colors for one button state: fill, border, text.
pub fn button_colors(kind: ButtonKind, hovered: bool) -> (Color, Color, Color) {
    match (kind, hovered) {
        (ButtonKind::Action, true) => (palette::DARK_RED, palette::RED, palette::WHITE),
        (ButtonKind::Action, false) => (palette::GRAY, palette::WHITE, palette::WHITE),
        (ButtonKind::Pickup, true) => (palette::GREEN, palette::WHITE, palette::BLACK),
        (ButtonKind::Pickup, false) => (palette::DARK_GRAY, palette::WHITE, palette::WHITE),
    }
}

/// Draw a button with a centered label.
///
/// `hint` swaps the idle border for yellow to mark an action that would
/// currently succeed.
pub fn draw_button(font: &UiFont, label: &str, area: &Rect2, kind: ButtonKind, hovered: bool, hint: bool) {
    let (fill, mut border, text) = button_colors(kind, hovered);
    if hint && !hovered {
        border = palette::YELLOW;
    }
    bordered_rect(area, fill, border, 2.0);
    let (cx, cy) = area.center();
    font.draw_centered(label, cx, cy, TEXT_SMALL, text);
}
