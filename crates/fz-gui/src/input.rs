//! Input abstraction for keyboard and mouse events.

use macroquad::prelude::*;

/// Check if the Enter key was pressed this frame.
pub fn enter_pressed() -> bool {
    is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter)
}

/// Check if the Escape key was pressed this frame.
pub fn escape_pressed() -> bool {
    is_key_pressed(KeyCode::Escape)
}

/// Check if a navigation key was pressed (arrow up).
pub fn up_pressed() -> bool {
    is_key_pressed(KeyCode::Up)
}

/// Check if a navigation key was pressed (arrow down).
pub fn down_pressed() -> bool {
    is_key_pressed(KeyCode::Down)
}

/// Check if the left mouse button went down this frame.
pub fn clicked() -> bool {
    is_mouse_button_pressed(MouseButton::Left)
}
