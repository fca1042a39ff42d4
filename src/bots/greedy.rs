use crate::bot::Bot;
use crate::card::{COLORS, Color};
use crate::state::GameStateView;
use crate::turn::Turn;

/// Rule-based bot mirroring the stock computer player: play the first legal
/// hand card, otherwise draw. Greedy and hand-order dependent, not optimal
/// play. Wild plays pick the color the hand holds most of, so follow-up
/// turns are as likely as possible to have a match.
pub struct GreedyBot;

impl GreedyBot {
    pub fn new() -> Self {
        Self
    }

    fn wild_color(state: &GameStateView) -> Color {
        let mut counts = [0usize; COLORS.len()];
        for card in &state.hand {
            if let Some(pos) = COLORS.iter().position(|color| *color == card.color) {
                counts[pos] += 1;
            }
        }
        let best = counts
            .iter()
            .enumerate()
            .max_by_key(|(_, count)| **count)
            .map(|(index, _)| index)
            .unwrap_or(0);
        COLORS[best]
    }
}

impl Default for GreedyBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Bot for GreedyBot {
    fn select_turn(&mut self, state: &GameStateView) -> Turn {
        match state.legal_plays().first().copied() {
            Some(hand_index) => {
                let color = state.hand[hand_index]
                    .is_wild()
                    .then(|| Self::wild_color(state));
                Turn::Play { hand_index, color }
            }
            None => Turn::Draw,
        }
    }
}
