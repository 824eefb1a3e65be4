//! Text-prompt strategy for a human at a terminal.
//!
//! Prints the relevant part of the table, then blocks reading a line:
//!
//! | question      | answers                                         |
//! |---------------|-------------------------------------------------|
//! | draw          | `d` / `deck`, `p` / `discard`                   |
//! | play          | `r ROW COL` (discard + reveal), `x ROW COL` (replace) |
//! | initial reveal| `ROW COL ROW COL`                               |
//!
//! Malformed answers are re-asked. End of input fails the decision.

use std::cell::RefCell;
use std::io::{BufRead, StdinLock, Stdout, Write};

use super::{DrawSource, PlayAction, Strategy};
use crate::cards::Card;
use crate::core::PlayerId;
use crate::error::{Result, SkyjoError};
use crate::rules::{PlayerView, RoundView};
use crate::zones::Position;

/// Blocking prompt over any line-based reader and writer.
pub struct HumanStrategy<R, W> {
    name: String,
    input: RefCell<R>,
    output: RefCell<W>,
}

impl HumanStrategy<StdinLock<'static>, Stdout> {
    /// Prompt on the process's standard input and output.
    #[must_use]
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanStrategy<R, W> {
    #[must_use]
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input: RefCell::new(input),
            output: RefCell::new(output),
        }
    }

    /// Give back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input.into_inner(), self.output.into_inner())
    }

    fn failure(&self, reason: impl Into<String>) -> SkyjoError {
        SkyjoError::Strategy {
            strategy: self.name.clone(),
            reason: reason.into(),
        }
    }

    fn say(&self, text: &str) -> Result<()> {
        let mut output = self.output.borrow_mut();
        writeln!(output, "{text}").map_err(|e| self.failure(e.to_string()))
    }

    /// Ask until `parse` accepts a line.
    fn ask<T>(&self, question: &str, parse: impl Fn(&str) -> Option<T>) -> Result<T> {
        loop {
            {
                let mut output = self.output.borrow_mut();
                write!(output, "{question} ")
                    .and_then(|()| output.flush())
                    .map_err(|e| self.failure(e.to_string()))?;
            }

            let mut line = String::new();
            let read = self
                .input
                .borrow_mut()
                .read_line(&mut line)
                .map_err(|e| self.failure(e.to_string()))?;
            if read == 0 {
                return Err(self.failure("input closed"));
            }

            match parse(line.trim()) {
                Some(answer) => return Ok(answer),
                None => self.say(&format!("Unrecognized answer {:?}", line.trim()))?,
            }
        }
    }
}

fn parse_numbers(words: &[&str]) -> Option<Vec<usize>> {
    words.iter().map(|w| w.parse().ok()).collect()
}

fn parse_draw(line: &str) -> Option<DrawSource> {
    match line.to_ascii_lowercase().as_str() {
        "d" | "deck" => Some(DrawSource::Deck),
        "p" | "discard" => Some(DrawSource::Discard),
        _ => None,
    }
}

fn parse_play(line: &str) -> Option<PlayAction> {
    let words: Vec<_> = line.split_whitespace().collect();
    let (verb, rest) = words.split_first()?;
    let numbers = parse_numbers(rest)?;
    let &[row, col] = numbers.as_slice() else {
        return None;
    };
    let target = Position::new(row, col);
    match verb.to_ascii_lowercase().as_str() {
        "r" | "reveal" => Some(PlayAction::DiscardAndReveal(target)),
        "x" | "replace" => Some(PlayAction::Replace(target)),
        _ => None,
    }
}

fn parse_two_positions(line: &str) -> Option<(Position, Position)> {
    let words: Vec<_> = line.split_whitespace().collect();
    let numbers = parse_numbers(&words)?;
    let &[r1, c1, r2, c2] = numbers.as_slice() else {
        return None;
    };
    Some((Position::new(r1, c1), Position::new(r2, c2)))
}

impl<R: BufRead, W: Write> Strategy for HumanStrategy<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide_draw(&self, round: &RoundView<'_>, player: PlayerId) -> Result<DrawSource> {
        if let Some(grid) = round.player(player).and_then(|p| p.grid()) {
            self.say(&format!("{}'s grid:\n{grid}", self.name))?;
        }
        let top = round
            .discard_top()
            .map_or_else(|| "empty".to_string(), |card| card.value().to_string());
        self.say(&format!("Deck: {} cards, discard top: {top}", round.deck_len()))?;
        self.ask("Draw from [d]eck or disca[p]ile?", parse_draw)
    }

    fn decide_play(&self, drawn: &Card, _round: &RoundView<'_>, _player: PlayerId) -> Result<PlayAction> {
        self.say(&format!("You drew {}", drawn.value()))?;
        self.ask("[r]eveal ROW COL or [x] replace ROW COL?", parse_play)
    }

    fn decide_reveal_two(&self, player: &PlayerView<'_>) -> Result<(Position, Position)> {
        if let Some(grid) = player.grid() {
            self.say(&format!("{}'s grid:\n{grid}", self.name))?;
        }
        self.ask("Reveal two cards (ROW COL ROW COL):", parse_two_positions)
    }
}
