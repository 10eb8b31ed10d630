//! Static item catalog.
//!
//! Every collectible is a variant of [`ItemId`]; its display name doubles as
//! the unique key the presentation layer passes back in commands.

use serde::{Deserialize, Serialize};

/// Identity of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemId {
    /// Old key that opens the front gate.
    Key,
    /// AA battery that powers the security monitors.
    Battery,
    /// VHS tape holding the drawer passcode.
    Tape,
    /// A patient's medical record.
    MedicalRecord,
    /// Security card key that gates the security room.
    CardKey,
    /// Hospital floor map.
    Map,
    /// Flashlight needed to enter the morgue.
    Flashlight,
    /// Emergency light that lights the escape hatch.
    EmergencyLight,
    /// Key for the emergency exit in the morgue.
    EscapeKey,
}

impl ItemId {
    /// Every catalog item in definition order.
    pub const ALL: [ItemId; 9] = [
        ItemId::Key,
        ItemId::Battery,
        ItemId::Tape,
        ItemId::MedicalRecord,
        ItemId::CardKey,
        ItemId::Map,
        ItemId::Flashlight,
        ItemId::EmergencyLight,
        ItemId::EscapeKey,
    ];

    /// Display name, unique across the catalog.
    pub fn name(self) -> &'static str {
        match self {
            ItemId::Key => "열쇠",
            ItemId::Battery => "전지",
            ItemId::Tape => "테이프",
            ItemId::MedicalRecord => "의료기록",
            ItemId::CardKey => "카드키",
            ItemId::Map => "지도",
            ItemId::Flashlight => "손전등",
            ItemId::EmergencyLight => "비상등",
            ItemId::EscapeKey => "탈출열쇠",
        }
    }

    /// Flavor text shown when the item is inspected.
    pub fn description(self) -> &'static str {
        match self {
            ItemId::Key => "낡은 열쇠. 어딘가의 문을 열 수 있을 것 같다.",
            ItemId::Battery => "AA 전지. 전자기기에 사용할 수 있다.",
            ItemId::Tape => "낡은 VHS 테이프. 녹화된 내용이 있을 것 같다.",
            ItemId::MedicalRecord => "환자의 의료기록. 중요한 정보가 담겨있다.",
            ItemId::CardKey => "보안 카드키. 특정 문을 열 수 있다.",
            ItemId::Map => "병원 지도. 출구를 찾는 데 도움이 될 것이다.",
            ItemId::Flashlight => "휴대용 손전등. 어둠을 밝힐 수 있다.",
            ItemId::EmergencyLight => "비상 탈출구용 등. 탈출할 때 사용한다.",
            ItemId::EscapeKey => "비상 탈출구용 열쇠. 시체안치실에서 사용할 수 있다.",
        }
    }

    /// Look up an item by its display name.
    pub fn from_name(name: &str) -> Option<ItemId> {
        let name = name.trim();
        ItemId::ALL.into_iter().find(|id| id.name() == name)
    }
}

/// A held or placed copy of a catalog item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Which catalog entry this is.
    pub id: ItemId,
    /// Set once the item has been spent in a one-shot interaction.
    pub used: bool,
}

impl Item {
    /// A fresh, unused item.
    pub fn new(id: ItemId) -> Self {
        Self { id, used: false }
    }

    /// Display name of the underlying catalog entry.
    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    /// Description of the underlying catalog entry.
    pub fn description(&self) -> &'static str {
        self.id.description()
    }
}

impl From<ItemId> for Item {
    fn from(id: ItemId) -> Self {
        Item::new(id)
    }
}
