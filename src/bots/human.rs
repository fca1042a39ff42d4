use std::io::{self, Write};

use crate::bot::Bot;
use crate::card::Color;
use crate::state::GameStateView;
use crate::turn::Turn;
use crate::visualize::{format_card, format_color, render_state};

/// Interactive bot that queries a human via standard input.
pub struct HumanBot {
    name: String,
}

impl HumanBot {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn prompt_color() -> Color {
        loop {
            print!("Pick a color [r/b/g/y]: ");
            if io::stdout().flush().is_err() {
                eprintln!("failed to flush stdout");
            }
            let mut input = String::new();
            if io::stdin().read_line(&mut input).is_err() {
                eprintln!("failed to read input");
                continue;
            }
            match input.trim().to_ascii_lowercase().as_str() {
                "r" | "red" => return Color::Red,
                "b" | "blue" => return Color::Blue,
                "g" | "green" => return Color::Green,
                "y" | "yellow" => return Color::Yellow,
                other => println!("Invalid color: '{other}'. Use r, b, g or y."),
            }
        }
    }
}

impl Default for HumanBot {
    fn default() -> Self {
        Self::new("You")
    }
}

impl Bot for HumanBot {
    fn select_turn(&mut self, state: &GameStateView) -> Turn {
        loop {
            println!(
                "\n=== {}'s turn (seat {}) ===",
                self.name, state.self_player
            );
            println!("{}", render_state(state));
            let plays = state.legal_plays();
            if plays.is_empty() {
                println!("No playable card; you must draw.");
            } else {
                println!("Playable hand indices: {plays:?}");
            }
            println!("Type a hand index to play, 'd' to draw, or 'q' to quit.");
            print!("Selection: ");
            if io::stdout().flush().is_err() {
                eprintln!("failed to flush stdout");
            }
            let mut input = String::new();
            if io::stdin().read_line(&mut input).is_err() {
                eprintln!("failed to read input");
                continue;
            }
            let trimmed = input.trim();
            if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
                println!("Exiting game at user's request.");
                std::process::exit(0);
            }
            if trimmed.eq_ignore_ascii_case("d") || trimmed.eq_ignore_ascii_case("draw") {
                return Turn::Draw;
            }
            let Ok(choice) = trimmed.parse::<usize>() else {
                println!("Invalid input: '{trimmed}'. Enter a hand index or 'd'.");
                continue;
            };
            let Some(card) = state.hand.get(choice).copied() else {
                println!("Index out of range. Please choose a valid option.");
                continue;
            };
            if !plays.contains(&choice) {
                println!(
                    "{} cannot be played on {} while {} is the active color.",
                    format_card(card),
                    format_card(state.top_card),
                    format_color(state.current_color)
                );
                continue;
            }
            let color = card.is_wild().then(Self::prompt_color);
            println!("You played {}.", format_card(card));
            return Turn::Play {
                hand_index: choice,
                color,
            };
        }
    }
}
