//! The game controller.
//!
//! A [`GameSession`] owns one playthrough. The presentation layer feeds it
//! commands and reads back the current room, inventory, and message every
//! frame; nothing is pushed out.

use tracing::{debug, info};

use crate::error::{FzError, FzResult, Refusal};
use crate::inventory::Inventory;
use crate::item::{Item, ItemId};
use crate::puzzle::PuzzleState;
use crate::room::{Interaction, Room, RoomGraph, RoomId};
use crate::rules::{self, Trigger};
use crate::state::{self, EffectNote, SessionState};

/// Tunables for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Room the player starts in.
    pub start: RoomId,
    /// Maximum number of held items.
    pub capacity: usize,
    /// Frames an ordinary message stays up.
    pub message_ticks: u32,
    /// Frames the escape message stays up.
    pub win_message_ticks: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start: RoomId::Exterior,
            capacity: Inventory::DEFAULT_CAPACITY,
            message_ticks: 120,
            win_message_ticks: 300,
        }
    }
}

impl SessionConfig {
    /// Set the starting room.
    pub fn with_start(mut self, start: RoomId) -> Self {
        self.start = start;
        self
    }

    /// Set the inventory capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set how long ordinary messages stay up.
    pub fn with_message_ticks(mut self, ticks: u32) -> Self {
        self.message_ticks = ticks;
        self
    }

    /// Set how long the escape message stays up.
    pub fn with_win_message_ticks(mut self, ticks: u32) -> Self {
        self.win_message_ticks = ticks;
        self
    }

    /// Reject configurations no session can run with.
    pub fn validate(&self) -> FzResult<()> {
        if self.capacity == 0 {
            return Err(FzError::InvalidCapacity(self.capacity));
        }
        Ok(())
    }
}

/// Whether the game is still going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Exploring the hospital.
    Playing,
    /// Out through the emergency exit.
    Escaped,
}

/// Text on screen and how many more frames it stays there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// What to show.
    pub text: String,
    /// Remaining frames.
    pub ticks: u32,
}

/// A typed player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Walk through an exit.
    Move(RoomId),
    /// Pick up an item lying in the room.
    Collect(ItemId),
    /// Use a held item.
    UseItem(ItemId),
    /// Press an interaction button.
    Interact(Interaction),
}

/// How a command turned out. The message is always available from
/// [`GameSession::message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The command changed or reported something.
    Applied,
    /// A guard turned it down; nothing changed.
    Refused(Refusal),
    /// The command ended the game.
    Escaped,
    /// The game is over and the command was ignored.
    Inert,
}

/// One playthrough of the hospital.
#[derive(Debug, Clone)]
pub struct GameSession {
    state: SessionState,
    phase: GamePhase,
    message: Option<Message>,
    config: SessionConfig,
    finished: bool,
}

impl GameSession {
    /// A session over the shipped hospital.
    pub fn new(config: SessionConfig) -> FzResult<Self> {
        Self::with_rooms(RoomGraph::hospital()?, config)
    }

    /// A session with the default configuration.
    pub fn hospital() -> FzResult<Self> {
        Self::new(SessionConfig::default())
    }

    /// A session over a custom room graph.
    pub fn with_rooms(rooms: RoomGraph, config: SessionConfig) -> FzResult<Self> {
        config.validate()?;
        if !rooms.contains(config.start) {
            return Err(FzError::MissingRoom(config.start));
        }
        debug!(start = %config.start, capacity = config.capacity, "new session");
        Ok(Self {
            state: SessionState::new(rooms, config.start, config.capacity),
            phase: GamePhase::Playing,
            message: None,
            config,
            finished: false,
        })
    }

    // Commands

    /// Move through the exit with this room key.
    pub fn move_to(&mut self, room_key: &str) -> Outcome {
        match RoomId::from_key(room_key) {
            Some(room) => self.execute(Command::Move(room)),
            None => self.refuse(Refusal::NoSuchExit),
        }
    }

    /// Pick up the item with this name.
    pub fn collect(&mut self, item_name: &str) -> Outcome {
        match ItemId::from_name(item_name) {
            Some(item) => self.execute(Command::Collect(item)),
            None => self.refuse(Refusal::NoSuchItem),
        }
    }

    /// Use the held item with this name.
    pub fn use_item(&mut self, item_name: &str) -> Outcome {
        match ItemId::from_name(item_name) {
            Some(item) => self.execute(Command::UseItem(item)),
            None => self.refuse(Refusal::NoSuchItem),
        }
    }

    /// Press the interaction with this label.
    pub fn interact(&mut self, label: &str) -> Outcome {
        match Interaction::from_label(label) {
            Some(interaction) => self.execute(Command::Interact(interaction)),
            None => self.refuse(Refusal::NoSuchInteraction),
        }
    }

    /// Run a typed command to completion.
    pub fn execute(&mut self, command: Command) -> Outcome {
        if self.phase == GamePhase::Escaped {
            debug!(?command, "ignoring command after escape");
            return Outcome::Inert;
        }
        debug!(?command, room = %self.state.location, "command");
        match command {
            Command::Move(room) => self.do_move(room),
            Command::Collect(item) => self.do_collect(item),
            Command::UseItem(item) => self.do_use(item),
            Command::Interact(interaction) => self.do_interact(interaction),
        }
    }

    fn do_move(&mut self, room: RoomId) -> Outcome {
        let listed = self
            .state
            .current_room()
            .is_some_and(|here| here.leads_to(room));
        if !listed {
            return self.refuse(Refusal::NoSuchExit);
        }
        if let Err(refusal) = self.state.enter(room) {
            return self.refuse(refusal);
        }
        info!(room = %room, "arrived");
        let text = state::arrived(self.state.rooms.name_of(room));
        self.say(text);
        Outcome::Applied
    }

    fn do_collect(&mut self, item: ItemId) -> Outcome {
        match self.state.pick_up(item) {
            Ok(()) => {
                self.say(state::acquired(item));
                Outcome::Applied
            }
            Err(refusal) => self.refuse(refusal),
        }
    }

    fn do_use(&mut self, item: ItemId) -> Outcome {
        if !self.state.inventory.has(item) {
            return self.refuse(Refusal::NoSuchItem);
        }
        self.fire(Trigger::Use(item), Refusal::CannotUseHere(item))
    }

    fn do_interact(&mut self, interaction: Interaction) -> Outcome {
        let offered = self
            .state
            .current_room()
            .is_some_and(|here| here.offers(interaction));
        if !offered {
            return self.refuse(Refusal::NoSuchInteraction);
        }
        self.fire(Trigger::Interact(interaction), Refusal::NoSuchInteraction)
    }

    /// Resolve a trigger through the rule table.
    fn fire(&mut self, trigger: Trigger, unmatched: Refusal) -> Outcome {
        let Some(rule) = rules::find(self.state.location, trigger) else {
            return self.refuse(unmatched);
        };
        if let Err(refusal) = rule.check(&self.state) {
            return self.refuse(refusal);
        }

        let mut text = rule.message.to_string();
        let mut escaped = false;
        for effect in rule.effects {
            match self.state.apply(effect) {
                Ok(EffectNote::Silent) => {}
                Ok(EffectNote::Say(note)) => text = note,
                Ok(EffectNote::Escape) => escaped = true,
                Err(refusal) => return self.refuse(refusal),
            }
        }

        if escaped {
            info!("escaped the hospital");
            self.phase = GamePhase::Escaped;
        }
        let ticks = if rule.long_message {
            self.config.win_message_ticks
        } else {
            self.config.message_ticks
        };
        self.show(text, ticks);
        if escaped { Outcome::Escaped } else { Outcome::Applied }
    }

    fn refuse(&mut self, refusal: Refusal) -> Outcome {
        debug!(%refusal, "refused");
        self.say(refusal.to_string());
        Outcome::Refused(refusal)
    }

    fn say(&mut self, text: String) {
        let ticks = self.config.message_ticks;
        self.show(text, ticks);
    }

    fn show(&mut self, text: String, ticks: u32) {
        self.message = Some(Message { text, ticks });
    }

    // Presentation hooks

    /// Count the message down by one frame, clearing it at zero.
    pub fn tick_message(&mut self) {
        if let Some(message) = &mut self.message {
            message.ticks = message.ticks.saturating_sub(1);
            if message.ticks == 0 {
                self.message = None;
            }
        }
    }

    /// Acknowledge the ending. Has no effect while still playing.
    pub fn acknowledge(&mut self) -> bool {
        if self.phase == GamePhase::Escaped {
            self.finished = true;
        }
        self.finished
    }

    /// Whether the player has escaped and acknowledged it.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    // Queries

    /// The room the player is in.
    pub fn current_room(&self) -> Option<&Room> {
        self.state.current_room()
    }

    /// Key of the room the player is in.
    pub fn location(&self) -> RoomId {
        self.state.location
    }

    /// Look up any room in this playthrough.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.state.rooms.room(id)
    }

    /// Held items.
    pub fn inventory(&self) -> &Inventory {
        &self.state.inventory
    }

    /// Interactions offered in the current room.
    pub fn available_interactions(&self) -> &[Interaction] {
        self.current_room()
            .map(|room| room.interactions.as_slice())
            .unwrap_or_default()
    }

    /// Items still lying in the current room.
    pub fn available_items(&self) -> &[ItemId] {
        self.current_room()
            .map(|room| room.items.as_slice())
            .unwrap_or_default()
    }

    /// Exits of the current room.
    pub fn available_exits(&self) -> &[RoomId] {
        self.current_room()
            .map(|room| room.exits.as_slice())
            .unwrap_or_default()
    }

    /// Offered interactions whose guards currently all hold.
    pub fn satisfiable_interactions(&self) -> Vec<Interaction> {
        self.available_interactions()
            .iter()
            .copied()
            .filter(|&interaction| {
                rules::find(self.state.location, Trigger::Interact(interaction))
                    .is_some_and(|rule| rule.check(&self.state).is_ok())
            })
            .collect()
    }

    /// Items consumed so far, in the order they were spent.
    pub fn spent_items(&self) -> &[Item] {
        &self.state.spent
    }

    /// The message on screen, if any.
    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Puzzle flags.
    pub fn puzzles(&self) -> &PuzzleState {
        &self.state.puzzles
    }

    /// The whole mutable state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }
}
