use serde::{Deserialize, Serialize};

use crate::card::{Card, HAND_SIZE};
use crate::error::GameError;

/// A seat at the table: display identity plus the privately held hand.
/// Cards stay in acquisition order; rules address them by index only.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    name: String,
    is_computer: bool,
    hand: Vec<Card>,
}

impl Player {
    pub fn new(name: impl Into<String>, is_computer: bool) -> Self {
        Self {
            name: name.into(),
            is_computer,
            hand: Vec::with_capacity(HAND_SIZE),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_computer(&self) -> bool {
        self.is_computer
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Append a card to the hand, preserving order.
    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Remove and return the card at `index`. Out-of-range indices are an
    /// explicit error rather than a silent no-op, so callers cannot lose
    /// track of hand/discard bookkeeping.
    pub fn play_card(&mut self, index: usize) -> Result<Card, GameError> {
        if index >= self.hand.len() {
            return Err(GameError::HandIndex(index));
        }
        Ok(self.hand.remove(index))
    }

    /// True if any hand card can be physically played on `top`. Ignores a
    /// live wild color override; `Game::play_card` is the authoritative
    /// legality check.
    pub fn has_valid_move(&self, top: &Card) -> bool {
        self.hand.iter().any(|card| card.can_play_on(top))
    }

    /// First hand index playable on `top`. Greedy and hand-order dependent,
    /// matching the automated players' decision rule.
    pub fn select_card_to_play(&self, top: &Card) -> Option<usize> {
        self.hand.iter().position(|card| card.can_play_on(top))
    }

    pub fn has_uno(&self) -> bool {
        self.hand.len() == 1
    }

    pub fn has_won(&self) -> bool {
        self.hand.is_empty()
    }
}
