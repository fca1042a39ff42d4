use thiserror::Error;

use crate::turn::PlayerId;

/// Errors that can occur when manipulating the game state. Illegal card
/// plays are not errors; `Game::play_card` reports them as `Ok(false)` and
/// leaves the state untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("player index {0} is out of range")]
    InvalidPlayer(PlayerId),
    #[error("hand index {0} is out of range")]
    HandIndex(usize),
    #[error("the current color cannot be set to wild")]
    WildColorOverride,
    #[error("a wild play requires a replacement color")]
    MissingWildColor,
    #[error("game is already over")]
    GameOver,
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}
