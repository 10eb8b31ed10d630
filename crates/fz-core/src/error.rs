//! Error types for the escape-room engine.
//!
//! Two families live here. [`FzError`] is returned while building a scenario
//! or a session and means the definitions themselves are inconsistent.
//! [`Refusal`] is an ordinary game-flow outcome: its `Display` text is the
//! message shown to the player, and it never escalates past the session.

use thiserror::Error;

use crate::item::ItemId;
use crate::room::RoomId;

/// Result type for scenario and session construction.
pub type FzResult<T> = Result<T, FzError>;

/// Errors raised while assembling rooms, rules, or a session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FzError {
    /// The same room id was defined twice.
    #[error("room defined twice: {0}")]
    DuplicateRoom(RoomId),

    /// A room that the scenario relies on is not defined.
    #[error("room not defined: {0}")]
    MissingRoom(RoomId),

    /// An exit points at a room that is not part of the graph.
    #[error("exit from {from} leads to undefined room {to}")]
    UnknownExit {
        /// Room holding the exit.
        from: RoomId,
        /// Undefined destination.
        to: RoomId,
    },

    /// An item was placed in more than one room.
    #[error("item {item:?} placed in both {first} and {second}")]
    ItemInTwoRooms {
        /// The duplicated item.
        item: ItemId,
        /// First room holding it.
        first: RoomId,
        /// Second room holding it.
        second: RoomId,
    },

    /// Inventory capacity must allow at least one item.
    #[error("invalid inventory capacity: {0}")]
    InvalidCapacity(usize),
}

/// Why a command was turned down. The display text is the player message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Refusal {
    /// Unknown item, or an item that is not where the command expects it.
    #[error("그런 아이템은 없다.")]
    NoSuchItem,

    /// Unknown interaction label, or one not offered in this room.
    #[error("그런 상호작용은 없다.")]
    NoSuchInteraction,

    /// Unknown room key, or a room not listed among the current exits.
    #[error("그곳으로는 갈 수 없다.")]
    NoSuchExit,

    /// The inventory is at capacity.
    #[error("인벤토리가 가득 찼다.")]
    InventoryFull,

    /// The item has no effect in the current room.
    #[error("{}을(를) 여기서 사용할 수 없다.", .0.name())]
    CannotUseHere(ItemId),

    /// A guard or entry requirement failed with its own message.
    #[error("{0}")]
    Blocked(String),
}

impl Refusal {
    /// Build a [`Refusal::Blocked`] from any message.
    pub fn blocked(message: impl Into<String>) -> Self {
        Refusal::Blocked(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refusal_text_is_player_message() {
        assert_eq!(Refusal::NoSuchItem.to_string(), "그런 아이템은 없다.");
        assert_eq!(Refusal::InventoryFull.to_string(), "인벤토리가 가득 찼다.");
        assert_eq!(
            Refusal::blocked("카드키가 필요하다.").to_string(),
            "카드키가 필요하다."
        );
    }

    #[test]
    fn cannot_use_here_names_item() {
        let text = Refusal::CannotUseHere(ItemId::Battery).to_string();
        assert_eq!(text, "전지을(를) 여기서 사용할 수 없다.");
    }

    #[test]
    fn scenario_error_messages() {
        let err = FzError::UnknownExit {
            from: RoomId::Lobby,
            to: RoomId::Morgue,
        };
        assert_eq!(err.to_string(), "exit from lobby leads to undefined room morgue");
        assert_eq!(
            FzError::InvalidCapacity(0).to_string(),
            "invalid inventory capacity: 0"
        );
    }
}
