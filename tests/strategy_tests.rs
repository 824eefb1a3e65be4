//! Stock strategy tests: random determinism and the text prompt.

use std::io::Cursor;
use std::rc::Rc;

use skyjo_engine::core::{GameRng, GridShape, PlayerId, RoundConfig};
use skyjo_engine::error::SkyjoError;
use skyjo_engine::rules::{Player, Round, RoundState};
use skyjo_engine::strategy::{
    DrawSource, HumanStrategy, LowestIndexStrategy, PlayAction, RandomStrategy, Strategy,
};
use skyjo_engine::zones::Position;

fn random_round(deck_seed: u64, strategy_seed: u64, players: usize) -> Round {
    let mut rng = GameRng::new(strategy_seed);
    let players = (0..players)
        .map(|i| Player::new(format!("P{i}"), Rc::new(RandomStrategy::from_rng(rng.fork()))))
        .collect();
    let mut round = Round::new(players, RoundConfig::new().with_seed(deck_seed)).unwrap();
    round.distribute(GridShape::STANDARD).unwrap();
    round.reveal_initial_two().unwrap();
    round
}

fn play(round: &mut Round, turns: usize) {
    for _ in 0..turns {
        round.play_turn().unwrap();
        round.advance_player();
    }
}

// =============================================================================
// RandomStrategy
// =============================================================================

#[test]
fn test_random_strategy_is_deterministic() {
    let mut a = random_round(3, 99, 3);
    let mut b = random_round(3, 99, 3);

    play(&mut a, 15);
    play(&mut b, 15);

    assert_eq!(a.discard_pile(), b.discard_pile());
    assert_eq!(a.deck_len(), b.deck_len());
    for ((_, pa), (_, pb)) in a.players().zip(b.players()) {
        assert_eq!(pa.grid(), pb.grid());
    }
}

#[test]
fn test_random_reveal_two_picks_distinct_face_down_cells() {
    let strategy = RandomStrategy::new(5);
    let mut player = Player::new("P0", Rc::new(LowestIndexStrategy));
    let hand = (0..12).map(|v| skyjo_engine::cards::Card::new(v).unwrap()).collect();
    player.deal(hand, GridShape::STANDARD).unwrap();
    player.reveal(Position::new(0, 0)).unwrap();

    for _ in 0..50 {
        let (first, second) = strategy.decide_reveal_two(&player.view()).unwrap();
        assert_ne!(first, second);
        assert_ne!(first, Position::new(0, 0));
        assert_ne!(second, Position::new(0, 0));
    }
}

#[test]
fn test_random_strategy_never_picks_illegal_plays() {
    let mut round = random_round(17, 4, 4);
    for _ in 0..40 {
        let current = round.current_player();
        let view = round.view();
        let strategy = RandomStrategy::new(u64::from(round.turn()));
        let drawn = round.discard_top().unwrap().clone();
        let action = strategy.decide_play(&drawn, &view, current).unwrap();
        round.player(current).unwrap().check_play(&drawn, &action).unwrap();

        if round.play_turn().unwrap() == RoundState::LastTurn {
            break;
        }
        round.advance_player();
    }
}

// =============================================================================
// HumanStrategy
// =============================================================================

type ScriptedHuman = HumanStrategy<Cursor<Vec<u8>>, Vec<u8>>;

fn human(input: &str) -> Rc<ScriptedHuman> {
    Rc::new(HumanStrategy::new("You", Cursor::new(input.as_bytes().to_vec()), Vec::new()))
}

fn transcript(human: Rc<ScriptedHuman>) -> String {
    let Ok(human) = Rc::try_unwrap(human) else {
        panic!("strategy still shared");
    };
    let (_, output) = human.into_inner();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_human_draw_reasks_on_bad_input() {
    let you = human("x\nP\n");
    let mut round = Round::new(vec![Player::new("You", you.clone())], RoundConfig::new().with_seed(1)).unwrap();
    round.distribute(GridShape::STANDARD).unwrap();

    let source = you.decide_draw(&round.view(), PlayerId::new(0)).unwrap();
    assert_eq!(source, DrawSource::Discard);

    drop(round);
    let out = transcript(you);
    assert!(out.contains("You's grid:\n[ ?] [ ?] [ ?] [ ?]\n"));
    assert!(out.contains("Deck: 137 cards, discard top: "));
    assert!(out.contains("Unrecognized answer \"x\""));
}

#[test]
fn test_human_plays_a_round_start() {
    let you = human("0 0 0 0\n0 0 1 1\nd\nr 0 0\nd\nr 2 3\n");
    let players = vec![Player::new("You", you.clone()), Player::new("Bot", Rc::new(LowestIndexStrategy))];
    let mut round = Round::new(players, RoundConfig::new().with_seed(12)).unwrap();
    round.distribute(GridShape::STANDARD).unwrap();

    // The prompt accepts the same cell twice; the round does not
    assert_eq!(
        round.reveal_initial_two(),
        Err(SkyjoError::DuplicateRevealPosition(Position::new(0, 0)))
    );
    round.reveal_initial_two().unwrap();

    // (0, 0) is already face-up
    let deck_before = round.deck_len();
    assert_eq!(round.play_turn(), Err(SkyjoError::AlreadyRevealed(Position::new(0, 0))));
    assert_eq!(round.deck_len(), deck_before);

    assert_eq!(round.play_turn(), Ok(RoundState::Ongoing));
    let grid = round.player(PlayerId::new(0)).unwrap().grid().unwrap();
    assert!(grid.get(Position::new(2, 3)).unwrap().unwrap().is_face_up());

    // Out of answers
    let err = round.play_turn().unwrap_err();
    assert_eq!(
        err,
        SkyjoError::Strategy {
            strategy: "You".to_string(),
            reason: "input closed".to_string(),
        }
    );
    assert_eq!(round.turn(), 1);

    drop(round);
    let out = transcript(you);
    assert!(out.contains("Reveal two cards (ROW COL ROW COL):"));
    assert!(out.contains("You drew "));
}

#[test]
fn test_human_play_answers() {
    let you = human("swap 1 1\nx 1 1\n");
    let mut round = Round::new(vec![Player::new("You", Rc::new(LowestIndexStrategy))], RoundConfig::new().with_seed(3)).unwrap();
    round.distribute(GridShape::STANDARD).unwrap();
    let drawn = round.discard_top().unwrap().clone();

    let action = you.decide_play(&drawn, &round.view(), PlayerId::new(0)).unwrap();
    assert_eq!(action, PlayAction::Replace(Position::new(1, 1)));

    drop(round);
    let out = transcript(you);
    assert_eq!(out.matches("[r]eveal ROW COL or [x] replace ROW COL?").count(), 2);
}
