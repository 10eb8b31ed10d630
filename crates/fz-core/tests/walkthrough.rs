//! Scripted playthroughs of the hospital, from the gate to the emergency exit.

use fz_core::{
    GamePhase, GameSession, Interaction, ItemId, Outcome, PuzzleFlag, Refusal, RoomId,
    SessionConfig,
};

fn ok(session: &mut GameSession, outcome: Outcome) {
    assert_eq!(
        outcome,
        Outcome::Applied,
        "unexpected refusal: {:?}",
        session.message().map(|m| m.text.clone())
    );
}

fn text(session: &GameSession) -> String {
    session.message().map(|m| m.text.clone()).unwrap_or_default()
}

/// Walk from the gate to the morgue with every item the player needs for
/// the light-and-card-key half of the puzzle.
fn reach_morgue_with_card_key(s: &mut GameSession) {
    let o = s.collect("열쇠");
    ok(s, o);
    let o = s.use_item("열쇠");
    ok(s, o);
    let o = s.collect("지도");
    ok(s, o);
    for room in ["corridor", "operating"] {
        let o = s.move_to(room);
        ok(s, o);
    }
    let o = s.collect("전지");
    ok(s, o);
    for room in ["corridor", "stairs"] {
        let o = s.move_to(room);
        ok(s, o);
    }
    let o = s.collect("손전등");
    ok(s, o);
    let o = s.interact("지하 내려가기");
    ok(s, o);
    assert_eq!(s.location(), RoomId::Morgue);

    let o = s.interact("서랍 확인");
    ok(s, o);
    assert_eq!(text(s), "카드키을(를) 획득했다!");
    let o = s.collect("비상등");
    ok(s, o);
}

fn fetch_escape_key(s: &mut GameSession) {
    for room in ["stairs", "corridor", "lobby", "security"] {
        let o = s.move_to(room);
        ok(s, o);
    }
    let o = s.collect("테이프");
    ok(s, o);
    let o = s.interact("모니터 켜기");
    ok(s, o);
    let o = s.interact("테이프 재생");
    ok(s, o);
    assert!(text(s).ends_with(fz_core::PASSCODE));

    for room in ["lobby", "corridor", "ward"] {
        let o = s.move_to(room);
        ok(s, o);
    }
    let o = s.interact("서랍 열기");
    ok(s, o);
    assert_eq!(text(s), "탈출열쇠을(를) 획득했다!");
    assert!(s.inventory().has(ItemId::EscapeKey));

    for room in ["corridor", "stairs", "morgue"] {
        let o = s.move_to(room);
        ok(s, o);
    }
}

#[test]
fn full_win_path() {
    let mut s = GameSession::hospital().unwrap();
    reach_morgue_with_card_key(&mut s);
    let o = s.interact("비상등 설치");
    ok(&mut s, o);
    fetch_escape_key(&mut s);

    let o = s.interact("열쇠 사용");
    ok(&mut s, o);
    assert_eq!(s.interact("비상 탈출구 열기"), Outcome::Escaped);
    assert_eq!(s.phase(), GamePhase::Escaped);

    let message = s.message().unwrap();
    assert_eq!(message.text, "비상 탈출구를 열고 탈출에 성공했다!");
    assert_eq!(message.ticks, 300);

    for flag in PuzzleFlag::ALL {
        assert!(s.puzzles().is_set(flag), "{flag:?} not raised");
    }
    // Card key is a possession gate and is never spent.
    assert!(s.inventory().has(ItemId::CardKey));
    let spent: Vec<_> = s.spent_items().iter().map(|i| i.id).collect();
    assert_eq!(
        spent,
        vec![
            ItemId::Key,
            ItemId::EmergencyLight,
            ItemId::Battery,
            ItemId::Tape,
            ItemId::EscapeKey
        ]
    );
    assert!(s.spent_items().iter().all(|i| i.used));
}

#[test]
fn escaped_session_ignores_commands_until_acknowledged() {
    let mut s = GameSession::hospital().unwrap();
    reach_morgue_with_card_key(&mut s);
    let o = s.interact("비상등 설치");
    ok(&mut s, o);
    fetch_escape_key(&mut s);
    let o = s.interact("열쇠 사용");
    ok(&mut s, o);
    s.interact("비상 탈출구 열기");

    assert_eq!(s.move_to("stairs"), Outcome::Inert);
    assert_eq!(s.location(), RoomId::Morgue);
    assert!(!s.is_finished());
    assert!(s.acknowledge());
    assert!(s.is_finished());
}

#[test]
fn exit_stays_shut_without_light() {
    let mut s = GameSession::hospital().unwrap();
    reach_morgue_with_card_key(&mut s);
    fetch_escape_key(&mut s);

    assert_eq!(
        s.interact("열쇠 사용"),
        Outcome::Refused(Refusal::blocked("먼저 비상등을 설치해야 한다."))
    );
    assert_eq!(
        s.interact("비상 탈출구 열기"),
        Outcome::Refused(Refusal::blocked("비상등과 탈출열쇠가 필요하다."))
    );
    assert_eq!(s.phase(), GamePhase::Playing);
    assert!(!s.puzzles().is_set(PuzzleFlag::ExitReady));
}

#[test]
fn exit_stays_shut_without_escape_key() {
    let mut s = GameSession::hospital().unwrap();
    reach_morgue_with_card_key(&mut s);
    let o = s.interact("비상등 설치");
    ok(&mut s, o);
    assert!(s.puzzles().is_set(PuzzleFlag::ExitReady));

    assert_eq!(
        s.interact("열쇠 사용"),
        Outcome::Refused(Refusal::blocked("탈출열쇠가 필요하다."))
    );
    assert_eq!(
        s.interact("비상 탈출구 열기"),
        Outcome::Refused(Refusal::blocked("비상등과 탈출열쇠가 필요하다."))
    );
    assert_eq!(s.phase(), GamePhase::Playing);
}

#[test]
fn exit_stays_shut_on_arrival() {
    let mut s = GameSession::hospital().unwrap();
    reach_morgue_with_card_key(&mut s);
    assert!(matches!(s.interact("비상 탈출구 열기"), Outcome::Refused(_)));
    assert_eq!(s.satisfiable_interactions().len(), 1);
}

#[test]
fn security_stays_locked_until_card_key() {
    let mut s = GameSession::hospital().unwrap();
    s.collect("열쇠");
    s.use_item("열쇠");

    assert_eq!(
        s.move_to("security"),
        Outcome::Refused(Refusal::blocked("카드키가 필요하다."))
    );
    assert_eq!(s.location(), RoomId::Lobby);
    // Checking twice gives the same answer.
    assert_eq!(
        s.move_to("security"),
        Outcome::Refused(Refusal::blocked("카드키가 필요하다."))
    );

    reach_morgue_from_lobby(&mut s);
    for room in ["stairs", "corridor", "lobby", "security"] {
        let o = s.move_to(room);
        ok(&mut s, o);
    }
    assert_eq!(s.location(), RoomId::Security);
}

fn reach_morgue_from_lobby(s: &mut GameSession) {
    for room in ["corridor", "stairs"] {
        let o = s.move_to(room);
        ok(s, o);
    }
    let o = s.collect("손전등");
    ok(s, o);
    let o = s.move_to("morgue");
    ok(s, o);
    let o = s.interact("서랍 확인");
    ok(s, o);
}

#[test]
fn morgue_is_dark_without_flashlight() {
    let mut s = GameSession::new(SessionConfig::default().with_start(RoomId::Stairs)).unwrap();
    assert!(!s.satisfiable_interactions().contains(&Interaction::GoDown));
    let refused = Outcome::Refused(Refusal::blocked("어둡다. 손전등이 필요하다."));
    assert_eq!(s.interact("지하 내려가기"), refused);
    assert_eq!(s.move_to("morgue"), refused);
    assert_eq!(s.location(), RoomId::Stairs);

    let o = s.collect("손전등");
    ok(&mut s, o);
    assert!(s.satisfiable_interactions().contains(&Interaction::GoDown));
}

#[test]
fn full_inventory_keeps_ward_drawer_shut() {
    let mut s = GameSession::new(SessionConfig::default().with_capacity(3)).unwrap();
    let route = [
        ("collect", "열쇠"),
        ("use", "열쇠"),
        ("move", "corridor"),
        ("move", "operating"),
        ("collect", "전지"),
        ("move", "corridor"),
        ("move", "stairs"),
        ("collect", "손전등"),
        ("interact", "지하 내려가기"),
        ("interact", "서랍 확인"),
        ("move", "stairs"),
        ("move", "corridor"),
        ("move", "lobby"),
        ("move", "security"),
        ("interact", "모니터 켜기"),
        ("collect", "테이프"),
        ("interact", "테이프 재생"),
        ("move", "lobby"),
        ("move", "corridor"),
        ("move", "ward"),
        ("collect", "의료기록"),
    ];
    for (verb, arg) in route {
        let o = match verb {
            "collect" => s.collect(arg),
            "use" => s.use_item(arg),
            "move" => s.move_to(arg),
            _ => s.interact(arg),
        };
        ok(&mut s, o);
    }
    assert!(s.inventory().is_full());
    assert!(s.puzzles().is_set(PuzzleFlag::PasswordRevealed));

    assert!(!s.satisfiable_interactions().contains(&Interaction::OpenDrawer));
    assert_eq!(s.interact("서랍 열기"), Outcome::Refused(Refusal::InventoryFull));
    assert!(!s.puzzles().is_set(PuzzleFlag::DrawerOpened));
    assert_eq!(text(&s), "인벤토리가 가득 찼다.");
}

#[test]
fn repeated_puzzle_actions_are_idempotent() {
    let mut s = GameSession::hospital().unwrap();
    reach_morgue_with_card_key(&mut s);
    for room in ["stairs", "corridor", "lobby", "security"] {
        let o = s.move_to(room);
        ok(&mut s, o);
    }
    assert_eq!(
        s.interact("테이프 재생"),
        Outcome::Refused(Refusal::blocked("먼저 모니터를 켜야 한다."))
    );

    s.collect("테이프");
    let o = s.use_item("전지");
    ok(&mut s, o);
    let snapshot = s.puzzles().clone();
    assert_eq!(
        s.interact("모니터 켜기"),
        Outcome::Refused(Refusal::blocked("모니터가 이미 켜져 있다."))
    );
    assert_eq!(s.puzzles(), &snapshot);

    let o = s.use_item("테이프");
    ok(&mut s, o);
    assert!(s.puzzles().is_set(PuzzleFlag::PasswordRevealed));
    let snapshot = s.puzzles().clone();
    assert_eq!(
        s.interact("테이프 재생"),
        Outcome::Refused(Refusal::blocked("테이프를 이미 재생했다."))
    );
    assert_eq!(s.puzzles(), &snapshot);
}

#[test]
fn ward_drawer_is_locked_without_password() {
    let mut s = GameSession::new(SessionConfig::default().with_start(RoomId::Ward)).unwrap();
    assert_eq!(
        s.interact("서랍 열기"),
        Outcome::Refused(Refusal::blocked("잠겨있다."))
    );
    assert!(!s.inventory().has(ItemId::EscapeKey));
}

#[test]
fn morgue_drawer_empties_once() {
    let mut s = GameSession::hospital().unwrap();
    reach_morgue_with_card_key(&mut s);
    assert_eq!(
        s.interact("서랍 확인"),
        Outcome::Refused(Refusal::blocked("서랍은 이미 비어있다."))
    );
    assert!(!s.available_items().contains(&ItemId::CardKey));
}

#[test]
fn full_inventory_leaves_item_collectible() {
    let config = SessionConfig::default()
        .with_start(RoomId::Lobby)
        .with_capacity(1);
    let mut s = GameSession::new(config).unwrap();
    let o = s.collect("지도");
    ok(&mut s, o);
    for room in ["corridor", "operating"] {
        let o = s.move_to(room);
        ok(&mut s, o);
    }

    assert_eq!(s.collect("전지"), Outcome::Refused(Refusal::InventoryFull));
    assert_eq!(text(&s), "인벤토리가 가득 찼다.");
    assert_eq!(s.inventory().len(), 1);
    assert_eq!(s.available_items(), &[ItemId::Battery]);
}

#[test]
fn collecting_twice_fails() {
    let mut s = GameSession::hospital().unwrap();
    let o = s.collect("열쇠");
    ok(&mut s, o);
    assert_eq!(s.collect("열쇠"), Outcome::Refused(Refusal::NoSuchItem));
    assert_eq!(s.inventory().len(), 1);
    assert!(s.available_items().is_empty());
}
