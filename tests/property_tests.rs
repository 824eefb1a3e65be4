//! Property tests: deck composition and round invariants under random play.

use std::collections::HashMap;
use std::rc::Rc;

use proptest::prelude::*;

use skyjo_engine::cards::{generate_deck, DECK_COMPOSITION, DECK_SIZE};
use skyjo_engine::core::{GameRng, GridShape, PlayerId, RoundConfig};
use skyjo_engine::rules::{Player, Round, RoundState};
use skyjo_engine::strategy::RandomStrategy;

const MAX_TURNS: usize = 2_000;

fn random_players(seed: u64, count: usize) -> Vec<Player> {
    let mut rng = GameRng::new(seed);
    (0..count)
        .map(|i| Player::new(format!("P{i}"), Rc::new(RandomStrategy::from_rng(rng.fork()))))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deck_composition_for_any_seed(seed in any::<u64>()) {
        let deck = generate_deck(Some(seed));
        prop_assert_eq!(deck.len(), DECK_SIZE);

        let mut counts: HashMap<i8, usize> = HashMap::new();
        for card in &deck {
            prop_assert!(!card.is_face_up());
            *counts.entry(card.value()).or_default() += 1;
        }
        for (value, copies) in DECK_COMPOSITION {
            prop_assert_eq!(counts.get(&value).copied(), Some(copies));
        }
        prop_assert_eq!(counts.len(), DECK_COMPOSITION.len());
    }

    #[test]
    fn prop_same_seed_same_deck(seed in any::<u64>()) {
        prop_assert_eq!(generate_deck(Some(seed)), generate_deck(Some(seed)));
    }

    #[test]
    fn prop_random_rounds_keep_invariants(
        deck_seed in any::<u64>(),
        strategy_seed in any::<u64>(),
        player_count in 1usize..=6,
    ) {
        let players = random_players(strategy_seed, player_count);
        let mut round = Round::new(players, RoundConfig::new().with_seed(deck_seed)).unwrap();
        round.distribute(GridShape::STANDARD).unwrap();
        round.reveal_initial_two().unwrap();

        let mut trigger: Option<PlayerId> = None;
        let mut lap_left: Option<usize> = None;

        for _ in 0..MAX_TURNS {
            // A completed column is cleared by the play that completed it
            for (_, player) in round.players() {
                prop_assert!(player.grid().unwrap().completed_columns().is_empty());
            }

            let before = round.state();
            let state = round.play_turn().unwrap();
            prop_assert_eq!(round.card_count(), DECK_SIZE);
            prop_assert!(round.discard_pile().iter().all(|c| c.is_face_up()));

            if before == RoundState::LastTurn {
                prop_assert_eq!(state, RoundState::LastTurn);
                prop_assert_eq!(round.last_turn_trigger(), trigger);
                lap_left = lap_left.map(|left| left - 1);
            } else if state == RoundState::LastTurn {
                trigger = round.last_turn_trigger();
                prop_assert_eq!(trigger, Some(round.current_player()));
                lap_left = Some(round.player_count() - 1);
            } else {
                prop_assert_eq!(round.last_turn_trigger(), None);
            }

            if lap_left == Some(0) {
                break;
            }
            round.advance_player();
        }
    }
}
