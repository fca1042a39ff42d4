use serde::{Deserialize, Serialize};

use crate::card::Color;

/// Zero-based seat index within the game.
pub type PlayerId = usize;

/// Decision an agent submits for one full turn.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Turn {
    /// Play the hand card at `hand_index`. `color` carries the replacement
    /// color: it must be `Some` concrete color when the chosen card is wild
    /// and is ignored otherwise.
    Play {
        hand_index: usize,
        color: Option<Color>,
    },
    /// Draw one card from the deck, ending the turn.
    Draw,
}
