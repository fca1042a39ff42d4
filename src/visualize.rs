use std::fmt::Write;

use crate::card::{Card, CardKind, Color};
use crate::state::{GameStateView, GameStatus};
use crate::turn::Turn;

/// Compact card label: `R5`, `G-Skip`, `B+2`, `W`, `W+4`.
pub fn format_card(card: Card) -> String {
    let color = match card.color {
        Color::Red => "R",
        Color::Blue => "B",
        Color::Green => "G",
        Color::Yellow => "Y",
        Color::Wild => "W",
    };
    match card.kind {
        CardKind::Number(n) => format!("{color}{n}"),
        CardKind::Skip => format!("{color}-Skip"),
        CardKind::Reverse => format!("{color}-Rev"),
        CardKind::DrawTwo => format!("{color}+2"),
        CardKind::Wild => String::from("W"),
        CardKind::WildDrawFour => String::from("W+4"),
    }
}

pub fn format_color(color: Color) -> &'static str {
    match color {
        Color::Red => "Red",
        Color::Blue => "Blue",
        Color::Green => "Green",
        Color::Yellow => "Yellow",
        Color::Wild => "Wild",
    }
}

/// Plain-text summary of the game from one seat's perspective.
pub fn render_state(state: &GameStateView) -> String {
    let mut out = String::new();
    let status = match state.status {
        GameStatus::Ongoing => String::from("Ongoing"),
        GameStatus::Finished { winner } => format!("Finished (winner: seat {winner})"),
    };
    let _ = writeln!(out, "Game status: {status}");
    let _ = writeln!(
        out,
        "Top card: {}  |  Active color: {}  |  Direction: {}",
        format_card(state.top_card),
        format_color(state.current_color),
        if state.clockwise {
            "clockwise"
        } else {
            "counter-clockwise"
        }
    );
    let _ = writeln!(
        out,
        "Draw pile: {}  |  Discard pile: {}",
        state.draw_pile_count, state.discard_pile_count
    );
    let _ = writeln!(out, "Players:");
    for player in &state.players {
        let you_tag = if player.id == state.self_player {
            " (You)"
        } else {
            ""
        };
        let current_tag = if player.is_current { " <- current" } else { "" };
        let uno_tag = if player.has_uno { " [UNO]" } else { "" };
        let _ = writeln!(
            out,
            "  Seat {} {}{} - {} cards{}{}",
            player.id, player.name, you_tag, player.hand_size, uno_tag, current_tag
        );
    }
    if state.hand.is_empty() {
        let _ = writeln!(out, "Hand: (empty)");
    } else {
        let entries = state
            .hand
            .iter()
            .enumerate()
            .map(|(index, card)| format!("{}:{}", index, format_card(*card)))
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "Hand: {entries}");
    }
    out
}

/// One-line description of a submitted turn.
pub fn describe_turn(state: &GameStateView, turn: &Turn) -> String {
    match turn {
        Turn::Play { hand_index, color } => {
            let card_desc = state
                .hand
                .get(*hand_index)
                .map(|card| format_card(*card))
                .unwrap_or_else(|| String::from("--"));
            match color {
                Some(color) => format!(
                    "Play hand[{hand_index}] {card_desc}, color {}",
                    format_color(*color)
                ),
                None => format!("Play hand[{hand_index}] {card_desc}"),
            }
        }
        Turn::Draw => String::from("Draw a card"),
    }
}
