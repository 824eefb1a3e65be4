//! One round of Skyjo.
//!
//! ## State machine
//!
//! ```text
//! AwaitingDistribution --distribute--> AwaitingTwoCardsReveal
//!     --reveal_initial_two--> Ongoing --play_turn*--> LastTurn
//! ```
//!
//! `Ended` exists for drivers to record the end of a round; the engine never
//! enters it. Once `LastTurn` is reached the driving loop gives every other
//! player one more turn and stops.
//!
//! ## Turn order
//!
//! `play_turn` resolves the current player's turn but does not move the
//! cursor; call `advance_player` between turns.
//!
//! ## Card conservation
//!
//! Cards only move between the draw deck, the discard pile and player grids.
//! `card_count` always equals the size of the deck the round was built with.
//!
//! ```
//! use std::rc::Rc;
//! use skyjo_engine::core::{GridShape, RoundConfig};
//! use skyjo_engine::rules::{Player, Round, RoundState};
//! use skyjo_engine::strategy::LowestIndexStrategy;
//!
//! let strategy = Rc::new(LowestIndexStrategy);
//! let players = vec![
//!     Player::new("Alice", strategy.clone()),
//!     Player::new("Bob", strategy),
//! ];
//! let mut round = Round::new(players, RoundConfig::new().with_seed(1)).unwrap();
//!
//! round.distribute(GridShape::STANDARD).unwrap();
//! round.reveal_initial_two().unwrap();
//! while round.play_turn().unwrap() != RoundState::LastTurn {
//!     round.advance_player();
//! }
//! assert_eq!(round.card_count(), 150);
//! ```

use std::rc::Rc;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::player::Player;
use super::view::RoundView;
use crate::cards::{shuffled_deck, Card, Face};
use crate::core::{GameRng, GridShape, PlayerId, PlayerMap, RoundConfig};
use crate::error::{Result, SkyjoError};
use crate::strategy::DrawSource;
use crate::zones::Pile;

/// Phase of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundState {
    AwaitingDistribution,
    AwaitingTwoCardsReveal,
    Ongoing,
    LastTurn,
    Ended,
}

impl RoundState {
    /// True in the phases where turns can be played.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, RoundState::Ongoing | RoundState::LastTurn)
    }
}

impl std::fmt::Display for RoundState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RoundState::AwaitingDistribution => "awaiting_distribution",
            RoundState::AwaitingTwoCardsReveal => "awaiting_two_cards_reveal",
            RoundState::Ongoing => "ongoing",
            RoundState::LastTurn => "last_turn",
            RoundState::Ended => "ended",
        };
        f.write_str(name)
    }
}

/// A round: the players, the draw deck, the discard pile and the phase.
///
/// The round is the only thing that moves cards between players and the
/// shared piles.
#[derive(Clone, Debug)]
pub struct Round {
    players: PlayerMap<Player>,
    current_player: PlayerId,
    starting_player: PlayerId,
    deck: Pile,
    discard: Pile,
    state: RoundState,
    last_turn_trigger: Option<PlayerId>,
    turn: u32,
}

impl Round {
    /// Create a round with a freshly shuffled 150-card deck.
    pub fn new(players: Vec<Player>, config: RoundConfig) -> Result<Self> {
        let mut rng = GameRng::from_seed(config.seed);
        debug!("shuffling deck with seed {}", rng.seed());
        let deck = shuffled_deck(&mut rng);
        Self::with_deck(players, deck, config)
    }

    /// Create a round drawing from `deck` (last card on top).
    ///
    /// `config.seed` is not used: the deck order is taken as given.
    pub fn with_deck(players: Vec<Player>, deck: Vec<Card>, config: RoundConfig) -> Result<Self> {
        let count = players.len();
        let players = PlayerMap::from_vec(players).ok_or(SkyjoError::InvalidPlayerCount(count))?;
        if !players.contains(config.starting_player) {
            return Err(SkyjoError::UnknownPlayer(config.starting_player));
        }

        Ok(Self {
            players,
            current_player: config.starting_player,
            starting_player: config.starting_player,
            deck: Pile::from(deck),
            discard: Pile::new(),
            state: RoundState::AwaitingDistribution,
            last_turn_trigger: None,
            turn: 0,
        })
    }

    // === Accessors ===

    /// Current phase.
    #[must_use]
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// The seat that took the first turn.
    #[must_use]
    pub fn starting_player(&self) -> PlayerId {
        self.starting_player
    }

    /// The player whose turn started the last-turn phase.
    #[must_use]
    pub fn last_turn_trigger(&self) -> Option<PlayerId> {
        self.last_turn_trigger
    }

    /// Number of completed `play_turn` calls.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Number of seats at the table.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// The player at seat `id`, if there is one.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.contains(id).then(|| &self.players[id])
    }

    /// Players in seat order.
    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players.iter()
    }

    /// Cards left in the draw deck.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Discard pile, bottom to top.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        self.discard.as_slice()
    }

    /// Top of the discard pile.
    #[must_use]
    pub fn discard_top(&self) -> Option<&Card> {
        self.discard.top()
    }

    /// Cards in the deck, the discard pile and every grid.
    #[must_use]
    pub fn card_count(&self) -> usize {
        let in_grids: usize = self
            .players
            .values()
            .filter_map(Player::grid)
            .map(|grid| grid.card_count())
            .sum();
        self.deck.len() + self.discard.len() + in_grids
    }

    /// Read-only view for strategies.
    #[must_use]
    pub fn view(&self) -> RoundView<'_> {
        RoundView::new(self)
    }

    // === Transitions ===

    /// Deal a `shape` grid to every player and seed the discard pile.
    ///
    /// Cards are dealt one at a time around the table, `rows * cols` times,
    /// face-down. The next card is turned face-up to start the discard pile.
    pub fn distribute(&mut self, shape: GridShape) -> Result<()> {
        if self.players.values().any(Player::has_grid) {
            return Err(SkyjoError::AlreadyDistributed);
        }
        if self.state != RoundState::AwaitingDistribution {
            return Err(SkyjoError::InvalidState {
                operation: "distribute cards",
                state: self.state,
            });
        }

        let needed = self.player_count() * shape.cell_count() + 1;
        if self.deck.len() < needed {
            return Err(SkyjoError::NotEnoughCards {
                needed,
                available: self.deck.len(),
            });
        }

        let mut hands: PlayerMap<Vec<Card>> = PlayerMap::with_default(self.player_count());
        for _ in 0..shape.cell_count() {
            for (_, hand) in hands.iter_mut() {
                let mut card = self.deck.pop().ok_or(SkyjoError::EmptyDeck)?;
                card.flip(Some(Face::Down));
                hand.push(card);
            }
        }
        for ((_, player), hand) in self.players.iter_mut().zip(hands.into_values()) {
            player.deal(hand, shape)?;
        }

        let mut first_discard = self.deck.pop().ok_or(SkyjoError::EmptyDeck)?;
        first_discard.flip(Some(Face::Up));
        self.discard.push(first_discard);

        self.state = RoundState::AwaitingTwoCardsReveal;
        info!(
            "dealt {shape} grids to {} players, {} cards left in deck",
            self.player_count(),
            self.deck.len()
        );
        Ok(())
    }

    /// Have every player turn over two cards of their choice.
    ///
    /// All choices are collected and checked before any card is turned, so
    /// a rejected choice leaves the round untouched.
    pub fn reveal_initial_two(&mut self) -> Result<()> {
        if self.state != RoundState::AwaitingTwoCardsReveal {
            return Err(SkyjoError::InvalidState {
                operation: "reveal initial cards",
                state: self.state,
            });
        }

        let mut choices = Vec::with_capacity(self.player_count());
        for (id, player) in self.players.iter() {
            let (first, second) = player.strategy().decide_reveal_two(&player.view())?;
            if first == second {
                return Err(SkyjoError::DuplicateRevealPosition(first));
            }
            let grid = player.grid().ok_or(SkyjoError::NoGrid)?;
            grid.check_reveal(first)?;
            grid.check_reveal(second)?;
            choices.push((id, first, second));
        }

        for (id, first, second) in choices {
            let player = &mut self.players[id];
            player.reveal(first)?;
            player.reveal(second)?;
            debug!("{} ({id}) revealed {first} and {second}", player.name());
        }

        self.state = RoundState::Ongoing;
        info!("initial cards revealed, {} starts", self.current_player);
        Ok(())
    }

    /// Resolve the current player's turn and return the new state.
    ///
    /// 1. The strategy picks a draw source; the drawn card is turned face-up.
    /// 2. The strategy picks a play, which is applied to the player's grid.
    ///    Everything discarded goes face-up onto the discard pile, in order.
    /// 3. If the player's grid is now fully revealed, the round enters
    ///    `LastTurn` (only the first time) and records the player.
    ///
    /// If the strategy fails or picks an illegal play, the drawn card goes
    /// back where it came from and the round is unchanged.
    pub fn play_turn(&mut self) -> Result<RoundState> {
        if !self.state.is_playing() {
            return Err(SkyjoError::InvalidState {
                operation: "play a turn",
                state: self.state,
            });
        }

        let current = self.current_player;
        let strategy = Rc::clone(self.players[current].strategy());

        let source = strategy.decide_draw(&self.view(), current)?;
        let mut drawn = match source {
            DrawSource::Deck => self.deck.pop().ok_or(SkyjoError::EmptyDeck)?,
            // Unreachable while playing: distribute seeds the discard pile and
            // every turn ends by discarding at least one card
            DrawSource::Discard => self.discard.pop().ok_or(SkyjoError::EmptyDiscard)?,
        };
        let drawn_face = drawn.face();
        drawn.flip(Some(Face::Up));

        let action = strategy
            .decide_play(&drawn, &self.view(), current)
            .and_then(|action| self.players[current].check_play(&drawn, &action).map(|()| action));
        let action = match action {
            Ok(action) => action,
            Err(err) => {
                drawn.flip(Some(drawn_face));
                match source {
                    DrawSource::Deck => self.deck.push(drawn),
                    DrawSource::Discard => self.discard.push(drawn),
                }
                return Err(err);
            }
        };

        debug!(
            "turn {}: {current} drew {} from {source:?} and plays {action:?}",
            self.turn + 1,
            drawn.value()
        );
        let discarded = self.players[current].play(drawn, action)?;
        if discarded.len() > 1 {
            debug!("{current} cleared a column");
        }
        for mut card in discarded {
            card.flip(Some(Face::Up));
            self.discard.push(card);
        }
        self.turn += 1;

        if self.state != RoundState::LastTurn && self.players[current].all_revealed()? {
            self.state = RoundState::LastTurn;
            self.last_turn_trigger = Some(current);
            info!(
                "{} ({current}) revealed their whole grid, last turn begins",
                self.players[current].name()
            );
        }

        Ok(self.state)
    }

    /// Move the cursor to the next seat (wrapping) and return it.
    pub fn advance_player(&mut self) -> PlayerId {
        self.current_player = self.current_player.next(self.player_count());
        self.current_player
    }
}
