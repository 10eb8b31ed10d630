//! Play-screen geometry and click resolution.
//!
//! Kept free of drawing so hit-testing can be checked without a window.
//! When rects overlap, interactions win over items, items over exits, and
//! exits over the inventory.

use fz_core::GameSession;

use crate::theme::{CANVAS_H, CANVAS_W};
use crate::widget::Rect2;

/// Button width.
pub const BUTTON_W: f32 = 200.0;
/// Button height.
pub const BUTTON_H: f32 = 35.0;
/// Vertical distance between stacked buttons.
pub const BUTTON_STEP: f32 = 40.0;
/// Height of one inventory row.
pub const INVENTORY_ROW_H: f32 = 25.0;

/// Top-left of the first interaction button.
const INTERACTIONS: Rect2 = Rect2::new(50.0, CANVAS_H - 200.0, BUTTON_W, BUTTON_H);
/// Top-left of the first collectible item button.
const ITEMS: Rect2 = Rect2::new(50.0, CANVAS_H - 320.0, BUTTON_W, BUTTON_H);
/// Top-left of the first exit button.
const EXITS: Rect2 = Rect2::new(300.0, CANVAS_H - 170.0, BUTTON_W, BUTTON_H);

/// What a click landed on, by index into the session's lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// An interaction button.
    Interaction(usize),
    /// A collectible item button.
    Item(usize),
    /// An exit button.
    Exit(usize),
    /// An inventory row.
    InventorySlot(usize),
}

/// Every clickable rect of the play screen for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayLayout {
    /// Interaction buttons in room order.
    pub interactions: Vec<Rect2>,
    /// Item buttons in room order.
    pub items: Vec<Rect2>,
    /// Exit buttons in room order.
    pub exits: Vec<Rect2>,
    /// The inventory frame.
    pub inventory_panel: Rect2,
    /// One row per held item.
    pub inventory_rows: Vec<Rect2>,
    /// The message box.
    pub message_box: Rect2,
}

impl PlayLayout {
    /// Lay out buttons for the given list lengths.
    pub fn new(interactions: usize, items: usize, exits: usize, held: usize) -> Self {
        let inventory_panel = Rect2::new(CANVAS_W - 300.0, 50.0, 250.0, 400.0);
        let first_row = Rect2::new(inventory_panel.x, 100.0, inventory_panel.w, INVENTORY_ROW_H);
        let max_rows = ((inventory_panel.y + inventory_panel.h - first_row.y) / INVENTORY_ROW_H) as usize;
        Self {
            interactions: (0..interactions).map(|i| INTERACTIONS.stacked(i, BUTTON_STEP)).collect(),
            items: (0..items).map(|i| ITEMS.stacked(i, BUTTON_STEP)).collect(),
            exits: (0..exits).map(|i| EXITS.stacked(i, BUTTON_STEP)).collect(),
            inventory_panel,
            inventory_rows: (0..held.min(max_rows))
                .map(|i| first_row.stacked(i, INVENTORY_ROW_H))
                .collect(),
            message_box: Rect2::new(50.0, CANVAS_H - 100.0, CANVAS_W - 100.0, 40.0),
        }
    }

    /// Layout for the session's current room and inventory.
    pub fn for_session(session: &GameSession) -> Self {
        Self::new(
            session.available_interactions().len(),
            session.available_items().len(),
            session.available_exits().len(),
            session.inventory().len(),
        )
    }

    /// Resolve a click.
    pub fn hit(&self, x: f32, y: f32) -> Option<Hit> {
        let find = |rects: &[Rect2]| rects.iter().position(|r| r.contains(x, y));
        find(&self.interactions)
            .map(Hit::Interaction)
            .or_else(|| find(&self.items).map(Hit::Item))
            .or_else(|| find(&self.exits).map(Hit::Exit))
            .or_else(|| find(&self.inventory_rows).map(Hit::InventorySlot))
    }
}
