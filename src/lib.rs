//! UNO rules engine with pluggable bots for simulation and UI frontends.

pub mod bot;
pub mod bots;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod player;
pub mod state;
pub mod turn;
pub mod visualize;

pub use crate::bot::Bot;
pub use crate::bots::registry::{create_bot_from_spec, label_for_spec};
pub use crate::bots::{GreedyBot, HumanBot, RandomBot};
pub use crate::card::{COLORS, Card, CardKind, Color, DECK_SIZE, HAND_SIZE, full_deck};
pub use crate::deck::Deck;
pub use crate::error::GameError;
pub use crate::game::{Game, GameBuilder, GameConfig};
pub use crate::player::Player;
pub use crate::state::{GameSettings, GameStateView, GameStatus, PlayerPublicState};
pub use crate::turn::{PlayerId, Turn};
pub use crate::visualize::{describe_turn, format_card, format_color, render_state};
