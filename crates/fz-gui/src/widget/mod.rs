//! Widget toolkit for the client: layout rects, bordered boxes, buttons,
//! panels, and wrapped text.

pub mod button;
pub mod panel;
pub mod text;

use macroquad::prelude::*;

/// Draw a filled rectangle with a border of `thickness` inside its bounds.
pub fn bordered_rect(area: &Rect2, fill: Color, border: Color, thickness: f32) {
    draw_rectangle(area.x, area.y, area.w, area.h, fill);
    draw_rectangle_lines(area.x, area.y, area.w, area.h, thickness, border);
}

/// A simple rectangular area for layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect2 {
    /// X position.
    pub x: f32,
    /// Y position.
    pub y: f32,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

impl Rect2 {
    /// Create a new rect.
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// A rect of the given size centered on a point.
    pub fn centered(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self::new(cx - w / 2.0, cy - h / 2.0, w, h)
    }

    /// Check if a point is inside this rect.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }

    /// Inset the rect by a margin on all sides.
    pub fn inset(&self, margin: f32) -> Self {
        Self {
            x: self.x + margin,
            y: self.y + margin,
            w: (self.w - margin * 2.0).max(0.0),
            h: (self.h - margin * 2.0).max(0.0),
        }
    }

    /// Center point.
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// The `index`-th rect of a vertical stack starting here, `step` apart.
    pub fn stacked(&self, index: usize, step: f32) -> Self {
        Self::new(self.x, self.y + index as f32 * step, self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let r = Rect2::new(10.0, 10.0, 20.0, 10.0);
        assert!(r.contains(10.0, 10.0));
        assert!(r.contains(29.9, 19.9));
        assert!(!r.contains(30.0, 15.0));
        assert!(!r.contains(15.0, 20.0));
    }

    #[test]
    fn inset_never_negative() {
        let r = Rect2::new(0.0, 0.0, 4.0, 4.0).inset(5.0);
        assert_eq!((r.w, r.h), (0.0, 0.0));
    }

    #[test]
    fn stacked_and_centered() {
        let r = Rect2::new(50.0, 520.0, 200.0, 35.0);
        assert_eq!(r.stacked(2, 40.0), Rect2::new(50.0, 600.0, 200.0, 35.0));
        let c = Rect2::centered(640.0, 360.0, 300.0, 56.0);
        assert_eq!(c.center(), (640.0, 360.0));
    }
}
