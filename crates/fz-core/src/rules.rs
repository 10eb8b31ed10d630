//! Declarative rule table for item use and room interactions.
//!
//! Each [`Rule`] is keyed by a room (or any room) and a [`Trigger`], and
//! carries its preconditions as an ordered list of [`Guard`]s followed by the
//! [`Effect`]s it applies. Guards can be checked without running the rule,
//! which is what hint queries use.

use crate::error::Refusal;
use crate::item::ItemId;
use crate::puzzle::{PuzzleFlag, passcode};
use crate::room::{Interaction, RoomId};
use crate::state::SessionState;

/// What the player did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Clicked an inventory item.
    Use(ItemId),
    /// Pressed an interaction button.
    Interact(Interaction),
}

/// A read-only check against the session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// The item is in the inventory.
    HasItem(ItemId),
    /// The flag is raised.
    Flag(PuzzleFlag),
    /// The flag is not raised yet.
    NotFlag(PuzzleFlag),
    /// The item still lies in the current room.
    RoomHasItem(ItemId),
    /// The room's entry requirements are met.
    CanEnter(RoomId),
    /// The inventory has a free slot.
    HasRoom,
}

impl Condition {
    /// Evaluate the condition.
    pub fn evaluate(&self, state: &SessionState) -> bool {
        match *self {
            Condition::HasItem(item) => state.inventory.has(item),
            Condition::Flag(flag) => state.puzzles.is_set(flag),
            Condition::NotFlag(flag) => !state.puzzles.is_set(flag),
            Condition::RoomHasItem(item) => state
                .rooms
                .room(state.location)
                .is_some_and(|room| room.has_item(item)),
            Condition::CanEnter(room) => state.rooms.can_enter(room, &state.inventory).is_ok(),
            Condition::HasRoom => !state.inventory.is_full(),
        }
    }

    /// The refusal a failed condition reports on its own.
    fn refusal(&self, state: &SessionState) -> Refusal {
        match *self {
            Condition::CanEnter(room) => state
                .rooms
                .can_enter(room, &state.inventory)
                .err()
                .unwrap_or(Refusal::NoSuchExit),
            Condition::HasRoom => Refusal::InventoryFull,
            _ => Refusal::NoSuchInteraction,
        }
    }
}

/// A precondition together with the message shown when it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guard {
    /// What must hold.
    pub condition: Condition,
    /// Shown when it does not. `None` reports the condition's own refusal,
    /// such as a room's entry requirement.
    pub refusal: Option<&'static str>,
}

impl Guard {
    /// Check the condition, refusing with this guard's message.
    pub fn check(&self, state: &SessionState) -> Result<(), Refusal> {
        if self.condition.evaluate(state) {
            return Ok(());
        }
        Err(match self.refusal {
            Some(text) => Refusal::blocked(text),
            None => self.condition.refusal(state),
        })
    }
}

macro_rules! guard {
    ($condition:expr) => {
        Guard {
            condition: $condition,
            refusal: None,
        }
    };
    ($condition:expr, $refusal:expr) => {
        Guard {
            condition: $condition,
            refusal: Some($refusal),
        }
    };
}

/// A state change applied when a rule fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Raise a puzzle flag.
    SetFlag(PuzzleFlag),
    /// Spend a held item: mark it used and move it out of the inventory.
    Consume(ItemId),
    /// Put a new item into the inventory, reporting when it does not fit.
    Give(ItemId),
    /// Move an item from the current room into the inventory, capacity permitting.
    TakeFromRoom(ItemId),
    /// Walk to a room through its entry requirements. Aborts the rule on refusal.
    MoveTo(RoomId),
    /// Replace a room's exits.
    SetExits(RoomId, &'static [RoomId]),
    /// End the game as escaped.
    Escape,
}

/// One entry of the dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Room the rule is bound to; `None` applies anywhere.
    pub room: Option<RoomId>,
    /// What fires it.
    pub trigger: Trigger,
    /// Checked in order; the first failure refuses the rule.
    pub guards: &'static [Guard],
    /// Applied in order once every guard holds.
    pub effects: &'static [Effect],
    /// Message shown on success unless an effect reports something later.
    pub message: &'static str,
    /// Whether the message stays up for the long duration.
    pub long_message: bool,
}

impl Rule {
    const fn new(room: Option<RoomId>, trigger: Trigger, message: &'static str) -> Self {
        Self {
            room,
            trigger,
            guards: &[],
            effects: &[],
            message,
            long_message: false,
        }
    }

    const fn guarded(mut self, guards: &'static [Guard]) -> Self {
        self.guards = guards;
        self
    }

    const fn effects(mut self, effects: &'static [Effect]) -> Self {
        self.effects = effects;
        self
    }

    const fn long(mut self) -> Self {
        self.long_message = true;
        self
    }

    /// Check every guard without applying anything.
    pub fn check(&self, state: &SessionState) -> Result<(), Refusal> {
        self.guards.iter().try_for_each(|guard| guard.check(state))
    }

    /// Flags this rule raises.
    pub fn raises(&self) -> impl Iterator<Item = PuzzleFlag> + '_ {
        self.effects.iter().filter_map(|e| match e {
            Effect::SetFlag(flag) => Some(*flag),
            _ => None,
        })
    }
}

use Condition::{CanEnter, Flag, HasItem, HasRoom, NotFlag, RoomHasItem};
use Interaction as I;
use ItemId as It;
use PuzzleFlag as P;
use RoomId as R;

const MONITOR_GUARDS: &[Guard] = &[
    guard!(NotFlag(P::SecurityMonitor), "모니터가 이미 켜져 있다."),
    guard!(HasItem(It::Battery), "전지가 필요하다."),
];
const MONITOR_EFFECTS: &[Effect] = &[Effect::SetFlag(P::SecurityMonitor), Effect::Consume(It::Battery)];
const MONITOR_ON: &str = "모니터가 켜졌다!";

const TAPE_GUARDS: &[Guard] = &[
    guard!(NotFlag(P::TapePlayed), "테이프를 이미 재생했다."),
    guard!(Flag(P::SecurityMonitor), "먼저 모니터를 켜야 한다."),
    guard!(HasItem(It::Tape), "테이프가 필요하다."),
];
const TAPE_EFFECTS: &[Effect] = &[
    Effect::SetFlag(P::TapePlayed),
    Effect::SetFlag(P::PasswordRevealed),
    Effect::Consume(It::Tape),
];
const TAPE_PLAYED: &str = concat!("테이프에서 비밀번호를 발견했다: ", passcode!());

const NEED_LIGHT_AND_KEY: &str = "비상등과 탈출열쇠가 필요하다.";

/// The whole use/interact table of the hospital.
pub static RULES: &[Rule] = &[
    // Item use
    Rule::new(Some(R::Exterior), Trigger::Use(It::Key), "정문을 열고 안으로 들어갔다.")
        .guarded(&[guard!(CanEnter(R::Lobby))])
        .effects(&[Effect::MoveTo(R::Lobby), Effect::Consume(It::Key)]),
    Rule::new(Some(R::Security), Trigger::Use(It::Battery), MONITOR_ON)
        .guarded(MONITOR_GUARDS)
        .effects(MONITOR_EFFECTS),
    Rule::new(Some(R::Security), Trigger::Use(It::Tape), TAPE_PLAYED)
        .guarded(TAPE_GUARDS)
        .effects(TAPE_EFFECTS),
    Rule::new(
        None,
        Trigger::Use(It::Flashlight),
        "손전등은 시체안치실에 들어가기 위해 필요하다.",
    ),
    Rule::new(
        Some(R::Morgue),
        Trigger::Use(It::EmergencyLight),
        "비상등을 설치하려면 '비상등 설치' 버튼을 클릭하세요.",
    ),
    Rule::new(
        Some(R::Morgue),
        Trigger::Use(It::EscapeKey),
        "탈출열쇠를 사용하려면 '열쇠 사용' 버튼을 클릭하세요.",
    ),
    Rule::new(Some(R::Lobby), Trigger::Use(It::CardKey), "카드키로 보안실 문을 열 수 있다."),
    Rule::new(Some(R::Security), Trigger::Use(It::CardKey), "보안실에 이미 들어왔다."),
    Rule::new(None, Trigger::Use(It::CardKey), "카드키는 보안실에서 사용할 수 있다."),
    Rule::new(
        None,
        Trigger::Use(It::Map),
        "병원 지도: 외부 → 로비 → 복도 → 보안실/병동/수술실/계단 → 시체안치실",
    ),
    Rule::new(
        None,
        Trigger::Use(It::MedicalRecord),
        "의료기록에는 '환자 관찰 중'이라는 기록이 있다.",
    ),
    // Exterior
    Rule::new(
        Some(R::Exterior),
        Trigger::Interact(I::OpenGate),
        "정문이 열렸다! 로비로 들어갈 수 있다.",
    )
    .guarded(&[guard!(HasItem(It::Key), "열쇠가 필요하다.")])
    .effects(&[Effect::SetExits(R::Exterior, &[R::Lobby])]),
    // Lobby and corridor
    Rule::new(
        Some(R::Lobby),
        Trigger::Interact(I::CheckEmergencyLight),
        "비상등이 깜빡인다. 무언가를 알려주는 것 같다.",
    ),
    Rule::new(
        Some(R::Corridor),
        Trigger::Interact(I::CheckWheelchair),
        "휠체어는 아직 따뜻하다. 누군가 최근에 사용한 것 같다.",
    ),
    // Security
    Rule::new(Some(R::Security), Trigger::Interact(I::TurnOnMonitor), MONITOR_ON)
        .guarded(MONITOR_GUARDS)
        .effects(MONITOR_EFFECTS),
    Rule::new(Some(R::Security), Trigger::Interact(I::PlayTape), TAPE_PLAYED)
        .guarded(TAPE_GUARDS)
        .effects(TAPE_EFFECTS),
    // Ward
    Rule::new(Some(R::Ward), Trigger::Interact(I::CheckCurtain), "커튼 뒤에는 아무것도 없다."),
    Rule::new(Some(R::Ward), Trigger::Interact(I::CheckBed), "병상에는 오래된 시트만 깔려있다."),
    Rule::new(
        Some(R::Ward),
        Trigger::Interact(I::OpenDrawer),
        "서랍이 열렸다! 탈출열쇠를 발견했다!",
    )
    .guarded(&[
        guard!(Flag(P::PasswordRevealed), "잠겨있다."),
        guard!(NotFlag(P::DrawerOpened), "서랍은 이미 열려있다."),
        guard!(HasRoom),
    ])
    .effects(&[Effect::SetFlag(P::DrawerOpened), Effect::Give(It::EscapeKey)]),
    // Operating theatre
    Rule::new(
        Some(R::Operating),
        Trigger::Interact(I::CheckOperatingTable),
        "수술대에는 오래된 얼룩이 남아있다.",
    ),
    Rule::new(Some(R::Operating), Trigger::Interact(I::OpenToolbox), "도구함은 비어있다."),
    // Stairs
    Rule::new(Some(R::Stairs), Trigger::Interact(I::GoDown), "지하로 내려갔다.")
        .guarded(&[guard!(CanEnter(R::Morgue))])
        .effects(&[Effect::MoveTo(R::Morgue)]),
    // Morgue
    Rule::new(
        Some(R::Morgue),
        Trigger::Interact(I::CheckDrawer),
        "서랍에서 카드키를 발견했다!",
    )
    .guarded(&[
        guard!(RoomHasItem(It::CardKey), "서랍은 이미 비어있다."),
        guard!(HasRoom),
    ])
    .effects(&[Effect::TakeFromRoom(It::CardKey)]),
    Rule::new(
        Some(R::Morgue),
        Trigger::Interact(I::InstallLight),
        "비상등을 설치했다. 탈출구가 밝혀졌다!",
    )
    .guarded(&[guard!(HasItem(It::EmergencyLight), "비상등이 필요하다.")])
    .effects(&[Effect::SetFlag(P::ExitReady), Effect::Consume(It::EmergencyLight)]),
    Rule::new(
        Some(R::Morgue),
        Trigger::Interact(I::UseEscapeKey),
        "탈출열쇠를 비상 탈출구에 끼웠다!",
    )
    .guarded(&[
        guard!(HasItem(It::EscapeKey), "탈출열쇠가 필요하다."),
        guard!(Flag(P::DrawerOpened), "탈출열쇠가 필요하다."),
        guard!(Flag(P::ExitReady), "먼저 비상등을 설치해야 한다."),
    ])
    .effects(&[Effect::Consume(It::EscapeKey), Effect::SetFlag(P::EscapeKeyInserted)]),
    Rule::new(
        Some(R::Morgue),
        Trigger::Interact(I::OpenEmergencyExit),
        "비상 탈출구를 열고 탈출에 성공했다!",
    )
    .guarded(&[
        guard!(Flag(P::ExitReady), NEED_LIGHT_AND_KEY),
        guard!(Flag(P::EscapeKeyInserted), NEED_LIGHT_AND_KEY),
    ])
    .effects(&[Effect::Escape])
    .long(),
];

/// Find the rule for a trigger in a room. Room-bound rules win over
/// rules that apply anywhere.
pub fn find(room: RoomId, trigger: Trigger) -> Option<&'static Rule> {
    RULES
        .iter()
        .find(|r| r.room == Some(room) && r.trigger == trigger)
        .or_else(|| RULES.iter().find(|r| r.room.is_none() && r.trigger == trigger))
}
