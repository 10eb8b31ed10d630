//! Escape-room engine for Forbidden Zone, an abandoned-hospital horror game.
//!
//! Owns the whole game progression: the item catalog, a bounded inventory,
//! the room graph with entry requirements, puzzle flags, and the rule table
//! that resolves item use and interactions. The crate never draws anything;
//! a presentation layer issues commands to a [`GameSession`] and re-reads its
//! state every frame.

/// Error types for scenario construction and game-flow refusals.
pub mod error;
/// Inventory of held items.
pub mod inventory;
/// The static item catalog.
pub mod item;
/// Puzzle flags and their dependency graph.
pub mod puzzle;
/// Rooms, interactions, and the room graph.
pub mod room;
/// The declarative use/interact rule table.
pub mod rules;
/// The game controller.
pub mod session;
/// Mutable world state a session plays against.
pub mod state;

pub use error::{FzError, FzResult, Refusal};
pub use inventory::{Inventory, InventoryError};
pub use item::{Item, ItemId};
pub use puzzle::{PASSCODE, PuzzleFlag, PuzzleState};
pub use room::{Interaction, Requirement, Room, RoomGraph, RoomId};
pub use rules::{Condition, Effect, Guard, Rule, Trigger};
pub use session::{Command, GamePhase, GameSession, Message, Outcome, SessionConfig};
pub use state::SessionState;
