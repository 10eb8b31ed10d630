//! Randomized play checks: world consistency and honest hints.

use std::collections::HashSet;

use proptest::prelude::*;

use fz_core::{Command, GamePhase, GameSession, Interaction, ItemId, Outcome, RoomId, SessionConfig};

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        (0..RoomId::ALL.len()).prop_map(|i| Command::Move(RoomId::ALL[i])),
        (0..ItemId::ALL.len()).prop_map(|i| Command::Collect(ItemId::ALL[i])),
        (0..ItemId::ALL.len()).prop_map(|i| Command::UseItem(ItemId::ALL[i])),
        (0..Interaction::ALL.len()).prop_map(|i| Command::Interact(Interaction::ALL[i])),
    ]
}

proptest! {
    #[test]
    fn random_play_keeps_world_consistent(
        capacity in 1usize..=8,
        commands in proptest::collection::vec(command(), 0..200),
    ) {
        let mut session = GameSession::new(SessionConfig::default().with_capacity(capacity)).unwrap();

        for command in commands {
            let before = session.state().clone();
            let outcome = session.execute(command);
            let state = session.state();

            prop_assert!(state.inventory.len() <= capacity);
            let ids: HashSet<_> = state.inventory.items().iter().map(|i| i.id).collect();
            prop_assert_eq!(ids.len(), state.inventory.len());
            for item in ItemId::ALL {
                prop_assert!(state.locate(item).len() <= 1, "{:?} in two places", item);
            }
            for (flag, was) in before.puzzles.iter() {
                if was {
                    prop_assert!(state.puzzles.is_set(flag), "{:?} was reset", flag);
                }
            }

            match outcome {
                Outcome::Refused(_) | Outcome::Inert => prop_assert_eq!(&before, state),
                Outcome::Escaped => prop_assert_eq!(session.phase(), GamePhase::Escaped),
                Outcome::Applied => {}
            }
        }
    }

    #[test]
    fn hints_predict_interaction_outcomes(
        start in 0..RoomId::ALL.len(),
        capacity in 1usize..=8,
        commands in proptest::collection::vec(command(), 0..120),
    ) {
        let config = SessionConfig::default()
            .with_start(RoomId::ALL[start])
            .with_capacity(capacity);
        let mut session = GameSession::new(config).unwrap();
        for command in commands {
            session.execute(command);
            if session.phase() == GamePhase::Escaped {
                break;
            }

            let hinted = session.satisfiable_interactions();
            for &interaction in session.available_interactions() {
                let outcome = session.clone().execute(Command::Interact(interaction));
                let refused = matches!(outcome, Outcome::Refused(_));
                prop_assert_eq!(
                    hinted.contains(&interaction),
                    !refused,
                    "{:?} in {:?}: {:?}",
                    interaction,
                    session.location(),
                    outcome
                );
            }
        }
    }

    #[test]
    fn can_enter_is_pure(room in 0..RoomId::ALL.len()) {
        let session = GameSession::hospital().unwrap();
        let rooms = &session.state().rooms;
        let target = RoomId::ALL[room];
        let first = rooms.can_enter(target, session.inventory());
        let second = rooms.can_enter(target, session.inventory());
        prop_assert_eq!(first, second);
    }
}
