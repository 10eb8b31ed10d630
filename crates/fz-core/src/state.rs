//! Mutable world state of one playthrough.

use tracing::{debug, warn};

use crate::error::Refusal;
use crate::inventory::{Inventory, InventoryError};
use crate::item::{Item, ItemId};
use crate::puzzle::PuzzleState;
use crate::room::{Room, RoomGraph, RoomId};
use crate::rules::Effect;

/// What an applied effect has to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectNote {
    /// Nothing worth showing.
    Silent,
    /// A message that replaces the rule's own.
    Say(String),
    /// The player got out.
    Escape,
}

/// Everything a session mutates: where the player stands, the rooms with
/// whatever is still lying in them, the inventory, and the puzzle flags.
///
/// Items are only ever relocated. At any time each catalog item is in at
/// most one of a room, the inventory, or `spent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Room the player is in.
    pub location: RoomId,
    /// This playthrough's own copy of the room graph.
    pub rooms: RoomGraph,
    /// Held items.
    pub inventory: Inventory,
    /// Raised puzzle flags.
    pub puzzles: PuzzleState,
    /// Items consumed by interactions, flagged used.
    pub spent: Vec<Item>,
}

impl SessionState {
    /// Fresh state at `start` with an empty inventory of `capacity`.
    pub fn new(rooms: RoomGraph, start: RoomId, capacity: usize) -> Self {
        Self {
            location: start,
            rooms,
            inventory: Inventory::with_capacity(capacity),
            puzzles: PuzzleState::new(),
            spent: Vec::new(),
        }
    }

    /// The room the player is in.
    pub fn current_room(&self) -> Option<&Room> {
        self.rooms.room(self.location)
    }

    /// Enter `room` if its requirements are met. Does not consult exits.
    pub fn enter(&mut self, room: RoomId) -> Result<(), Refusal> {
        self.rooms.can_enter(room, &self.inventory)?;
        debug!(from = %self.location, to = %room, "entering room");
        self.location = room;
        Ok(())
    }

    /// Move an item lying in the current room into the inventory.
    ///
    /// The item stays in the room when the inventory refuses it.
    pub fn pick_up(&mut self, item: ItemId) -> Result<(), Refusal> {
        let here = self.current_room().is_some_and(|room| room.has_item(item));
        if !here {
            return Err(Refusal::NoSuchItem);
        }
        match self.inventory.add(Item::new(item)) {
            Ok(()) => {
                self.rooms.take_item(self.location, item);
                Ok(())
            }
            Err(InventoryError::Full(_)) => Err(Refusal::InventoryFull),
            Err(InventoryError::Duplicate(_)) => Err(Refusal::NoSuchItem),
        }
    }

    /// Spend a held item. Returns false if it was not held.
    pub fn consume(&mut self, item: ItemId) -> bool {
        self.inventory.mark_used(item);
        match self.inventory.remove(item) {
            Some(spent) => {
                self.spent.push(spent);
                true
            }
            None => false,
        }
    }

    /// Apply one rule effect.
    ///
    /// `MoveTo` and `TakeFromRoom` refuse without mutating; every other effect
    /// always goes through.
    pub fn apply(&mut self, effect: &Effect) -> Result<EffectNote, Refusal> {
        match *effect {
            Effect::SetFlag(flag) => {
                if !self.puzzles.prerequisites_met(flag) {
                    warn!(?flag, "raising flag ahead of its prerequisites");
                }
                self.puzzles.set(flag);
                Ok(EffectNote::Silent)
            }
            Effect::Consume(item) => {
                self.consume(item);
                Ok(EffectNote::Silent)
            }
            Effect::Give(item) => match self.inventory.add(Item::new(item)) {
                Ok(()) => Ok(EffectNote::Say(acquired(item))),
                Err(InventoryError::Full(_)) => Ok(EffectNote::Say(Refusal::InventoryFull.to_string())),
                Err(InventoryError::Duplicate(_)) => Ok(EffectNote::Silent),
            },
            Effect::TakeFromRoom(item) => {
                self.pick_up(item)?;
                Ok(EffectNote::Say(acquired(item)))
            }
            Effect::MoveTo(room) => {
                self.enter(room)?;
                Ok(EffectNote::Say(arrived(self.rooms.name_of(room))))
            }
            Effect::SetExits(room, exits) => {
                self.rooms.set_exits(room, exits).map_err(|err| {
                    warn!(%err, "rule rewired exits to an unknown room");
                    Refusal::NoSuchExit
                })?;
                Ok(EffectNote::Silent)
            }
            Effect::Escape => Ok(EffectNote::Escape),
        }
    }

    /// Every place an item currently sits. Empty until it has been handed out.
    pub fn locate(&self, item: ItemId) -> Vec<Place> {
        let mut places: Vec<Place> = self
            .rooms
            .rooms()
            .filter(|room| room.has_item(item))
            .map(|room| Place::Room(room.id))
            .collect();
        if self.inventory.has(item) {
            places.push(Place::Inventory);
        }
        if self.spent.iter().any(|spent| spent.id == item) {
            places.push(Place::Spent);
        }
        places
    }
}

/// Where an item can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Place {
    /// Lying in a room.
    Room(RoomId),
    /// Held by the player.
    Inventory,
    /// Consumed by an interaction.
    Spent,
}

/// Message for picking an item up.
pub fn acquired(item: ItemId) -> String {
    format!("{}을(를) 획득했다!", item.name())
}

/// Message for arriving in a room.
pub fn arrived(room_name: &str) -> String {
    format!("{room_name}에 도착했다.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::PuzzleFlag;

    fn state() -> SessionState {
        SessionState::new(RoomGraph::hospital().unwrap(), RoomId::Exterior, 8)
    }

    #[test]
    fn pick_up_relocates_item() {
        let mut s = state();
        s.pick_up(ItemId::Key).unwrap();
        assert_eq!(s.locate(ItemId::Key), vec![Place::Inventory]);
        assert_eq!(s.pick_up(ItemId::Key), Err(Refusal::NoSuchItem));
    }

    #[test]
    fn full_inventory_leaves_item_in_room() {
        let mut s = SessionState::new(RoomGraph::hospital().unwrap(), RoomId::Exterior, 1);
        s.inventory.add(Item::new(ItemId::Map)).unwrap();
        assert_eq!(s.pick_up(ItemId::Key), Err(Refusal::InventoryFull));
        assert_eq!(s.locate(ItemId::Key), vec![Place::Room(RoomId::Exterior)]);
    }

    #[test]
    fn consume_moves_to_spent() {
        let mut s = state();
        s.pick_up(ItemId::Key).unwrap();
        assert!(s.consume(ItemId::Key));
        assert!(s.inventory.is_empty());
        assert_eq!(s.spent, vec![Item { id: ItemId::Key, used: true }]);
        assert!(!s.consume(ItemId::Key));
    }

    #[test]
    fn move_effect_respects_requirements() {
        let mut s = state();
        s.location = RoomId::Stairs;
        let refused = s.apply(&Effect::MoveTo(RoomId::Morgue)).unwrap_err();
        assert_eq!(refused.to_string(), "어둡다. 손전등이 필요하다.");
        assert_eq!(s.location, RoomId::Stairs);

        s.inventory.add(Item::new(ItemId::Flashlight)).unwrap();
        let note = s.apply(&Effect::MoveTo(RoomId::Morgue)).unwrap();
        assert_eq!(note, EffectNote::Say("시체안치실에 도착했다.".into()));
        assert_eq!(s.location, RoomId::Morgue);
    }

    #[test]
    fn give_into_full_inventory_reports() {
        let mut s = SessionState::new(RoomGraph::hospital().unwrap(), RoomId::Ward, 1);
        s.inventory.add(Item::new(ItemId::Map)).unwrap();
        let note = s.apply(&Effect::Give(ItemId::EscapeKey)).unwrap();
        assert_eq!(note, EffectNote::Say("인벤토리가 가득 찼다.".into()));
        assert!(!s.inventory.has(ItemId::EscapeKey));
    }

    #[test]
    fn set_flag_and_exits() {
        let mut s = state();
        s.apply(&Effect::SetFlag(PuzzleFlag::ExitReady)).unwrap();
        assert!(s.puzzles.is_set(PuzzleFlag::ExitReady));

        s.apply(&Effect::SetExits(RoomId::Exterior, &[RoomId::Lobby])).unwrap();
        assert!(s.current_room().unwrap().leads_to(RoomId::Lobby));
    }
}
