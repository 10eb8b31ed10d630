//! Bounded, ordered inventory.

use thiserror::Error;

use crate::item::{Item, ItemId};

/// Why an item could not be added. The rejected item is handed back.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InventoryError {
    /// The inventory is at capacity.
    #[error("inventory full")]
    Full(Item),
    /// An item with the same name is already held.
    #[error("already holding {}", .0.name())]
    Duplicate(Item),
}

impl InventoryError {
    /// Recover the item that was turned away.
    pub fn into_item(self) -> Item {
        match self {
            InventoryError::Full(item) | InventoryError::Duplicate(item) => item,
        }
    }
}

/// Items the player is carrying, in acquisition order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
    capacity: usize,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    /// Capacity of the inventory in the shipped game.
    pub const DEFAULT_CAPACITY: usize = 8;

    /// An empty inventory with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// An empty inventory holding at most `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an item. Fails without mutation when full or already held.
    pub fn add(&mut self, item: Item) -> Result<(), InventoryError> {
        if self.has(item.id) {
            return Err(InventoryError::Duplicate(item));
        }
        if self.is_full() {
            return Err(InventoryError::Full(item));
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove and return the first item with this id.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let pos = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(pos))
    }

    /// Whether an item with this id is held.
    pub fn has(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Flag a held, unused item as used. Returns false if absent or already used.
    pub fn mark_used(&mut self, id: ItemId) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) if !item.used => {
                item.used = true;
                true
            }
            _ => false,
        }
    }

    /// Held items in acquisition order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The item at a display slot.
    pub fn slot(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Number of held items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is held.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether another item would be rejected for lack of space.
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Maximum number of items.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
