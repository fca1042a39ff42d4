use crate::state::GameStateView;
use crate::turn::Turn;

/// Interface for defining custom UNO players, human or automated.
pub trait Bot {
    fn select_turn(&mut self, state: &GameStateView) -> Turn;
}
