use serde::{Deserialize, Serialize};

use crate::card::{Card, Color, HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS};
use crate::error::GameError;
use crate::turn::PlayerId;

/// Global constants for a running game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSettings {
    pub num_players: usize,
    pub hand_size: usize,
}

impl GameSettings {
    pub fn new(num_players: usize) -> Result<Self, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(GameError::InvalidConfiguration(
                "players must be between 2 and 10",
            ));
        }
        Ok(Self {
            num_players,
            hand_size: HAND_SIZE,
        })
    }
}

/// Status of the entire game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Finished { winner: PlayerId },
}

/// Public portion of a seat's state that all opponents may observe. Hands
/// are private; only their size (and the UNO flag it implies) is visible.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerPublicState {
    pub id: PlayerId,
    pub name: String,
    pub is_computer: bool,
    pub hand_size: usize,
    pub is_current: bool,
    pub has_uno: bool,
    pub has_won: bool,
}

/// Game state snapshot from one seat's perspective, tailored for bots and
/// for rendering.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateView {
    pub settings: GameSettings,
    pub status: GameStatus,
    pub self_player: PlayerId,
    pub current_player: PlayerId,
    pub clockwise: bool,
    pub current_color: Color,
    pub top_card: Card,
    pub draw_pile_count: usize,
    pub discard_pile_count: usize,
    pub players: Vec<PlayerPublicState>,
    pub hand: Vec<Card>,
}

impl GameStateView {
    /// Hand indices that are legal to play right now from this perspective:
    /// physical match on the top card, or a match on the active color when a
    /// wild override is live.
    pub fn legal_plays(&self) -> Vec<usize> {
        self.hand
            .iter()
            .enumerate()
            .filter(|(_, card)| {
                card.can_play_on(&self.top_card) || card.color == self.current_color
            })
            .map(|(index, _)| index)
            .collect()
    }
}
