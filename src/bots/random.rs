use rand::Rng;
use rand::seq::SliceRandom;

use crate::bot::Bot;
use crate::card::COLORS;
use crate::state::GameStateView;
use crate::turn::Turn;

/// Baseline bot that samples uniformly from the legal plays, drawing when
/// none exist. Wild colors are chosen uniformly as well.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Bot for RandomBot<R> {
    fn select_turn(&mut self, state: &GameStateView) -> Turn {
        let plays = state.legal_plays();
        match plays.choose(&mut self.rng).copied() {
            Some(hand_index) => {
                let color = if state.hand[hand_index].is_wild() {
                    Some(COLORS[self.rng.gen_range(0..COLORS.len())])
                } else {
                    None
                };
                Turn::Play { hand_index, color }
            }
            None => Turn::Draw,
        }
    }
}
