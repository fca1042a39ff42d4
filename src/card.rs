use serde::{Deserialize, Serialize};

/// Printed color of a card. `Wild` only appears on wild cards; the active
/// color of a running game is always one of the four concrete colors.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Wild,
}

/// What the card does when played.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Numbered card between 0 and 9.
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

/// Representation of a single UNO card. Pure value type: two cards with the
/// same color and kind are interchangeable for rules purposes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,
    pub kind: CardKind,
}

/// The four concrete colors, in deck order.
pub const COLORS: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

pub const DECK_SIZE: usize = 108;
pub const HAND_SIZE: usize = 7;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;

impl Card {
    pub fn new(color: Color, kind: CardKind) -> Self {
        Self { color, kind }
    }

    /// Returns true for Wild and WildDrawFour cards.
    #[inline]
    pub fn is_wild(&self) -> bool {
        matches!(self.color, Color::Wild)
    }

    /// Returns the numeric value when the card is numbered.
    #[inline]
    pub fn number(&self) -> Option<u8> {
        match self.kind {
            CardKind::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Checks whether this card may be placed on `other` by physical match:
    /// wild cards always, otherwise same color, equal numbers, or the same
    /// non-number kind. This ignores a live wild color override; the game
    /// combines it with the current color (see `Game::play_card`).
    #[inline]
    pub fn can_play_on(&self, other: &Card) -> bool {
        self.is_wild() || self.color == other.color || self.kind == other.kind
    }
}

/// Builds the standard 108-card UNO deck in deterministic order (unshuffled):
/// per color one 0, two each of 1-9, two each of Skip/Reverse/DrawTwo, plus
/// four Wild and four WildDrawFour.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for color in COLORS {
        deck.push(Card::new(color, CardKind::Number(0)));
        for number in 1..=9 {
            deck.push(Card::new(color, CardKind::Number(number)));
            deck.push(Card::new(color, CardKind::Number(number)));
        }
        for kind in [CardKind::Skip, CardKind::Reverse, CardKind::DrawTwo] {
            deck.push(Card::new(color, kind));
            deck.push(Card::new(color, kind));
        }
    }
    for _ in 0..4 {
        deck.push(Card::new(Color::Wild, CardKind::Wild));
        deck.push(Card::new(Color::Wild, CardKind::WildDrawFour));
    }
    deck
}
