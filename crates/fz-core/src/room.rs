//! Rooms, interactions, and the room graph.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FzError, FzResult, Refusal};
use crate::inventory::Inventory;
use crate::item::ItemId;

/// Identity of a room. The key is stable and names background images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomId {
    /// In front of the locked hospital gate.
    Exterior,
    /// Entrance lobby.
    Lobby,
    /// Central corridor.
    Corridor,
    /// Security office with the monitors.
    Security,
    /// Patient ward.
    Ward,
    /// Operating theatre.
    Operating,
    /// Stairwell down to the basement.
    Stairs,
    /// Basement morgue with the emergency exit.
    Morgue,
}

impl RoomId {
    /// Every room in definition order.
    pub const ALL: [RoomId; 8] = [
        RoomId::Exterior,
        RoomId::Lobby,
        RoomId::Corridor,
        RoomId::Security,
        RoomId::Ward,
        RoomId::Operating,
        RoomId::Stairs,
        RoomId::Morgue,
    ];

    /// Stable lowercase key.
    pub fn key(self) -> &'static str {
        match self {
            RoomId::Exterior => "exterior",
            RoomId::Lobby => "lobby",
            RoomId::Corridor => "corridor",
            RoomId::Security => "security",
            RoomId::Ward => "ward",
            RoomId::Operating => "operating",
            RoomId::Stairs => "stairs",
            RoomId::Morgue => "morgue",
        }
    }

    /// Look up a room by key.
    pub fn from_key(key: &str) -> Option<RoomId> {
        let key = key.trim();
        RoomId::ALL.into_iter().find(|id| id.key() == key)
    }

    /// Whether the room is inside the building.
    pub fn is_indoors(self) -> bool {
        self != RoomId::Exterior
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Something the player can do in a room, identified by its button label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interaction {
    /// Unlock the front gate with the key.
    OpenGate,
    /// Look at the blinking lobby light.
    CheckEmergencyLight,
    /// Inspect the wheelchair in the corridor.
    CheckWheelchair,
    /// Power the security monitors.
    TurnOnMonitor,
    /// Play the tape on the recorder.
    PlayTape,
    /// Look behind the ward curtain.
    CheckCurtain,
    /// Inspect the ward bed.
    CheckBed,
    /// Open the passcode-locked ward drawer.
    OpenDrawer,
    /// Inspect the operating table.
    CheckOperatingTable,
    /// Open the operating-room toolbox.
    OpenToolbox,
    /// Descend the stairs to the morgue.
    GoDown,
    /// Search the morgue drawers.
    CheckDrawer,
    /// Open the emergency exit.
    OpenEmergencyExit,
    /// Mount the emergency light over the hatch.
    InstallLight,
    /// Turn the escape key in the hatch.
    UseEscapeKey,
}

impl Interaction {
    /// Every interaction.
    pub const ALL: [Interaction; 15] = [
        Interaction::OpenGate,
        Interaction::CheckEmergencyLight,
        Interaction::CheckWheelchair,
        Interaction::TurnOnMonitor,
        Interaction::PlayTape,
        Interaction::CheckCurtain,
        Interaction::CheckBed,
        Interaction::OpenDrawer,
        Interaction::CheckOperatingTable,
        Interaction::OpenToolbox,
        Interaction::GoDown,
        Interaction::CheckDrawer,
        Interaction::OpenEmergencyExit,
        Interaction::InstallLight,
        Interaction::UseEscapeKey,
    ];

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            Interaction::OpenGate => "정문 열기",
            Interaction::CheckEmergencyLight => "비상등 확인",
            Interaction::CheckWheelchair => "휠체어 확인",
            Interaction::TurnOnMonitor => "모니터 켜기",
            Interaction::PlayTape => "테이프 재생",
            Interaction::CheckCurtain => "커튼 확인",
            Interaction::CheckBed => "병상 확인",
            Interaction::OpenDrawer => "서랍 열기",
            Interaction::CheckOperatingTable => "수술대 확인",
            Interaction::OpenToolbox => "도구함 열기",
            Interaction::GoDown => "지하 내려가기",
            Interaction::CheckDrawer => "서랍 확인",
            Interaction::OpenEmergencyExit => "비상 탈출구 열기",
            Interaction::InstallLight => "비상등 설치",
            Interaction::UseEscapeKey => "열쇠 사용",
        }
    }

    /// Look up an interaction by label.
    pub fn from_label(label: &str) -> Option<Interaction> {
        let label = label.trim();
        Interaction::ALL.into_iter().find(|i| i.label() == label)
    }
}

/// An item that must be held to enter a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// The item to possess. It is checked, never consumed.
    pub item: ItemId,
    /// Message shown when the item is missing.
    pub message: String,
}

impl Requirement {
    /// Require `item`, refusing entry with `message`.
    pub fn new(item: ItemId, message: impl Into<String>) -> Self {
        Self {
            item,
            message: message.into(),
        }
    }
}

/// A room definition plus its mutable contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Room identity.
    pub id: RoomId,
    /// Display name.
    pub name: String,
    /// Description text.
    pub description: String,
    /// Items lying here, in display order.
    pub items: Vec<ItemId>,
    /// Interactions offered here, in display order.
    pub interactions: Vec<Interaction>,
    /// Rooms reachable from here, in display order.
    pub exits: Vec<RoomId>,
    /// Items that must be held to enter.
    pub requires: Vec<Requirement>,
}

impl Room {
    /// A room with no items, interactions, exits, or requirements.
    pub fn new(id: RoomId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            items: Vec::new(),
            interactions: Vec::new(),
            exits: Vec::new(),
            requires: Vec::new(),
        }
    }

    /// Place items in the room.
    pub fn with_items(mut self, items: impl IntoIterator<Item = ItemId>) -> Self {
        self.items.extend(items);
        self
    }

    /// Offer interactions in the room.
    pub fn with_interactions(mut self, interactions: impl IntoIterator<Item = Interaction>) -> Self {
        self.interactions.extend(interactions);
        self
    }

    /// Connect the room to others.
    pub fn with_exits(mut self, exits: impl IntoIterator<Item = RoomId>) -> Self {
        self.exits.extend(exits);
        self
    }

    /// Gate entry on holding an item.
    pub fn requiring(mut self, item: ItemId, message: impl Into<String>) -> Self {
        self.requires.push(Requirement::new(item, message));
        self
    }

    /// Whether an item is lying here.
    pub fn has_item(&self, item: ItemId) -> bool {
        self.items.contains(&item)
    }

    /// Whether an interaction is offered here.
    pub fn offers(&self, interaction: Interaction) -> bool {
        self.interactions.contains(&interaction)
    }

    /// Whether `room` is one of the exits.
    pub fn leads_to(&self, room: RoomId) -> bool {
        self.exits.contains(&room)
    }
}

/// All rooms of one playthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomGraph {
    rooms: BTreeMap<RoomId, Room>,
}

impl RoomGraph {
    /// Build a graph, rejecting duplicate rooms, dangling exits, and items
    /// placed in more than one room.
    pub fn new(rooms: impl IntoIterator<Item = Room>) -> FzResult<Self> {
        let mut map = BTreeMap::new();
        for room in rooms {
            let id = room.id;
            if map.insert(id, room).is_some() {
                return Err(FzError::DuplicateRoom(id));
            }
        }

        let mut placed: BTreeMap<ItemId, RoomId> = BTreeMap::new();
        for room in map.values() {
            if let Some(&to) = room.exits.iter().find(|to| !map.contains_key(*to)) {
                return Err(FzError::UnknownExit { from: room.id, to });
            }
            for &item in &room.items {
                if let Some(&first) = placed.get(&item) {
                    return Err(FzError::ItemInTwoRooms {
                        item,
                        first,
                        second: room.id,
                    });
                }
                placed.insert(item, room.id);
            }
        }

        Ok(Self { rooms: map })
    }

    /// The abandoned hospital shipped with the game.
    pub fn hospital() -> FzResult<Self> {
        use Interaction as I;
        use ItemId as It;
        use RoomId as R;

        Self::new([
            Room::new(
                R::Exterior,
                "병원 외부",
                "버려진 병원 앞. 차가운 바람이 휘돈다. 정문이 잠겨있다.",
            )
            .with_items([It::Key])
            .with_interactions([I::OpenGate]),
            Room::new(
                R::Lobby,
                "로비",
                "로비에는 먼지 냄새와 곰팡이 냄새가 섞여 있다. 붉은 비상등이 깜빡인다.",
            )
            .with_items([It::Map])
            .with_interactions([I::CheckEmergencyLight])
            .with_exits([R::Corridor, R::Security]),
            Room::new(
                R::Corridor,
                "복도",
                "긴 복도 끝에서 금속이 끄는 소리가 들린다. 휠체어가 혼자 움직이는 듯 흔들린다.",
            )
            .with_interactions([I::CheckWheelchair])
            .with_exits([R::Lobby, R::Ward, R::Operating, R::Stairs]),
            Room::new(
                R::Security,
                "보안실",
                "보안실. 꺼진 모니터가 줄지어 있고, 낡은 영상기록 장치가 덩그러니 놓여 있다.",
            )
            .with_items([It::Tape])
            .with_interactions([I::TurnOnMonitor, I::PlayTape])
            .with_exits([R::Lobby])
            .requiring(It::CardKey, "카드키가 필요하다."),
            Room::new(
                R::Ward,
                "병동",
                "병동 병실. 커튼이 바람도 없는데 가볍게 흔들린다. 금고가 있는 서랍이 있다.",
            )
            .with_items([It::MedicalRecord])
            .with_interactions([I::CheckCurtain, I::CheckBed, I::OpenDrawer])
            .with_exits([R::Corridor]),
            Room::new(
                R::Operating,
                "수술실",
                "수술실. 작업등 몇 개가 아직 살아 있다. 바닥에는 오래된 얼룩이 남아 있다.",
            )
            .with_items([It::Battery])
            .with_interactions([I::CheckOperatingTable, I::OpenToolbox])
            .with_exits([R::Corridor]),
            Room::new(
                R::Stairs,
                "계단",
                "계단실. 아래로 내려갈수록 공기가 차갑고 무거워진다.",
            )
            .with_items([It::Flashlight])
            .with_interactions([I::GoDown])
            .with_exits([R::Corridor, R::Morgue]),
            Room::new(
                R::Morgue,
                "시체안치실",
                "시체안치실. 서랍 몇 개가 반쯤 열려 있다. 이름표가 떨리는 듯 흔들린다. 벽에 비상 탈출구가 있다.",
            )
            .with_items([It::CardKey, It::EmergencyLight])
            .with_interactions([
                I::CheckDrawer,
                I::OpenEmergencyExit,
                I::InstallLight,
                I::UseEscapeKey,
            ])
            .with_exits([R::Stairs])
            .requiring(It::Flashlight, "어둡다. 손전등이 필요하다."),
        ])
    }

    /// Look up a room.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    /// Whether the room is part of the graph.
    pub fn contains(&self, id: RoomId) -> bool {
        self.rooms.contains_key(&id)
    }

    /// Display name of a room, falling back to its key.
    pub fn name_of(&self, id: RoomId) -> &str {
        self.rooms.get(&id).map_or(id.key(), |r| r.name.as_str())
    }

    /// All rooms in key order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Check the entry requirements of `room` against the inventory.
    ///
    /// Fails on the first requirement whose item is not held. Has no side
    /// effects.
    pub fn can_enter(&self, room: RoomId, inventory: &Inventory) -> Result<(), Refusal> {
        let target = self.rooms.get(&room).ok_or(Refusal::NoSuchExit)?;
        match target.requires.iter().find(|req| !inventory.has(req.item)) {
            Some(req) => Err(Refusal::blocked(req.message.clone())),
            None => Ok(()),
        }
    }

    /// Remove an item from a room. Returns false if it was not there.
    pub fn take_item(&mut self, room: RoomId, item: ItemId) -> bool {
        let Some(room) = self.rooms.get_mut(&room) else {
            return false;
        };
        match room.items.iter().position(|&i| i == item) {
            Some(pos) => {
                room.items.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Replace a room's exits.
    pub fn set_exits(&mut self, room: RoomId, exits: &[RoomId]) -> FzResult<()> {
        if let Some(&to) = exits.iter().find(|to| !self.rooms.contains_key(*to)) {
            return Err(FzError::UnknownExit { from: room, to });
        }
        let target = self.rooms.get_mut(&room).ok_or(FzError::MissingRoom(room))?;
        target.exits = exits.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;

    #[test]
    fn hospital_builds() {
        let graph = RoomGraph::hospital().unwrap();
        assert_eq!(graph.rooms().count(), RoomId::ALL.len());
        assert_eq!(graph.name_of(RoomId::Morgue), "시체안치실");
        assert!(graph.room(RoomId::Exterior).unwrap().exits.is_empty());
    }

    #[test]
    fn keys_round_trip() {
        for id in RoomId::ALL {
            assert_eq!(RoomId::from_key(id.key()), Some(id));
            assert_eq!(id.to_string(), id.key());
        }
        assert_eq!(RoomId::from_key("attic"), None);
    }

    #[test]
    fn labels_round_trip() {
        for i in Interaction::ALL {
            assert_eq!(Interaction::from_label(i.label()), Some(i));
        }
        assert_eq!(Interaction::from_label("춤추기"), None);
    }

    #[test]
    fn every_offered_interaction_is_unique_per_room() {
        let graph = RoomGraph::hospital().unwrap();
        for room in graph.rooms() {
            let mut seen = room.interactions.clone();
            seen.dedup();
            assert_eq!(seen.len(), room.interactions.len(), "{}", room.id);
        }
    }

    #[test]
    fn can_enter_checks_possession() {
        let graph = RoomGraph::hospital().unwrap();
        let mut inv = Inventory::new();

        assert_eq!(
            graph.can_enter(RoomId::Security, &inv),
            Err(Refusal::blocked("카드키가 필요하다."))
        );
        // Pure: same answer twice
        assert_eq!(
            graph.can_enter(RoomId::Security, &inv),
            graph.can_enter(RoomId::Security, &inv)
        );

        inv.add(Item::new(ItemId::CardKey)).unwrap();
        assert_eq!(graph.can_enter(RoomId::Security, &inv), Ok(()));
        assert!(inv.has(ItemId::CardKey));
        assert_eq!(graph.can_enter(RoomId::Lobby, &Inventory::new()), Ok(()));
    }

    #[test]
    fn first_unmet_requirement_wins() {
        let room = Room::new(RoomId::Ward, "w", "")
            .requiring(ItemId::Map, "first")
            .requiring(ItemId::Tape, "second");
        let graph = RoomGraph::new([room]).unwrap();
        let mut inv = Inventory::new();
        assert_eq!(graph.can_enter(RoomId::Ward, &inv), Err(Refusal::blocked("first")));
        inv.add(Item::new(ItemId::Map)).unwrap();
        assert_eq!(graph.can_enter(RoomId::Ward, &inv), Err(Refusal::blocked("second")));
    }

    #[test]
    fn rejects_dangling_exit() {
        let lobby = Room::new(RoomId::Lobby, "로비", "").with_exits([RoomId::Morgue]);
        assert_eq!(
            RoomGraph::new([lobby]),
            Err(FzError::UnknownExit {
                from: RoomId::Lobby,
                to: RoomId::Morgue
            })
        );
    }

    #[test]
    fn rejects_duplicate_room_and_shared_item() {
        let a = Room::new(RoomId::Lobby, "a", "");
        let b = Room::new(RoomId::Lobby, "b", "");
        assert_eq!(RoomGraph::new([a, b]), Err(FzError::DuplicateRoom(RoomId::Lobby)));

        let a = Room::new(RoomId::Lobby, "a", "").with_items([ItemId::Map]);
        let b = Room::new(RoomId::Ward, "b", "").with_items([ItemId::Map]);
        assert!(matches!(
            RoomGraph::new([a, b]),
            Err(FzError::ItemInTwoRooms { item: ItemId::Map, .. })
        ));
    }

    #[test]
    fn take_item_once() {
        let mut graph = RoomGraph::hospital().unwrap();
        assert!(graph.take_item(RoomId::Lobby, ItemId::Map));
        assert!(!graph.take_item(RoomId::Lobby, ItemId::Map));
        assert!(!graph.room(RoomId::Lobby).unwrap().has_item(ItemId::Map));
    }

    #[test]
    fn set_exits_validates_targets() {
        let mut graph = RoomGraph::hospital().unwrap();
        graph.set_exits(RoomId::Exterior, &[RoomId::Lobby]).unwrap();
        assert!(graph.room(RoomId::Exterior).unwrap().leads_to(RoomId::Lobby));

        let mut small = RoomGraph::new([Room::new(RoomId::Lobby, "로비", "")]).unwrap();
        assert!(small.set_exits(RoomId::Lobby, &[RoomId::Ward]).is_err());
    }
}
