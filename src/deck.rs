use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::card::{Card, full_deck};

/// Draw pile plus discard pile. The top of either pile is the `Vec` end.
/// Randomness is injected: every shuffling operation takes the seeded RNG
/// owned by the game.
#[derive(Clone, Debug)]
pub struct Deck {
    draw_pile: Vec<Card>,
    discard_pile: Vec<Card>,
}

impl Deck {
    /// Full 108-card deck, shuffled.
    pub fn new(rng: &mut StdRng) -> Self {
        let mut draw_pile = full_deck();
        draw_pile.shuffle(rng);
        Self {
            draw_pile,
            discard_pile: Vec::new(),
        }
    }

    /// Deck with a fixed draw order for deterministic tests. No shuffle is
    /// applied; cards are drawn from the end of `cards`.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            draw_pile: cards,
            discard_pile: Vec::new(),
        }
    }

    /// Shuffle the draw pile. The discard pile is untouched.
    pub fn shuffle(&mut self, rng: &mut StdRng) {
        self.draw_pile.shuffle(rng);
    }

    /// Remove and return the top card of the draw pile.
    ///
    /// When the draw pile runs out, the discard pile minus its top card is
    /// shuffled back in. When that also cannot supply a card (discard pile
    /// holds at most one card), a brand-new shuffled 108-card set is seeded
    /// instead, so a draw always succeeds during normal play.
    pub fn draw(&mut self, rng: &mut StdRng) -> Card {
        if let Some(card) = self.draw_pile.pop() {
            return card;
        }
        if self.discard_pile.len() > 1 {
            let top_index = self.discard_pile.len() - 1;
            let top = self.discard_pile.split_off(top_index);
            self.draw_pile.append(&mut self.discard_pile);
            self.discard_pile = top;
        } else {
            self.draw_pile = full_deck();
        }
        self.draw_pile.shuffle(rng);
        // Both refill paths leave at least one card in the draw pile.
        self.draw(rng)
    }

    /// Place a card on top of the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    /// Peek at the top of the discard pile. `None` only before the first
    /// discard, which never outlives game construction.
    pub fn top_discard(&self) -> Option<&Card> {
        self.discard_pile.last()
    }

    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn discard_pile_len(&self) -> usize {
        self.discard_pile.len()
    }
}
