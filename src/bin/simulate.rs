use std::env;
use std::error::Error;
use std::process;

use unobot::{
    Bot, Game, create_bot_from_spec, describe_turn, format_color, render_state,
};

const DEFAULT_SEED: u64 = 0xDEA1_0CA4_D5EE_DF00;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let mut visualize = false;
    let mut seed = DEFAULT_SEED;
    let mut max_turns: Option<usize> = None;
    let mut bot_specs: Vec<String> = Vec::new();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--visualize" => visualize = true,
            "--seed" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--seed requires a value".to_string())?;
                seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("invalid seed value: {value}"))?;
            }
            "--max-turns" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--max-turns requires a value".to_string())?;
                max_turns = Some(
                    value
                        .parse::<usize>()
                        .map_err(|_| format!("invalid max-turns value: {value}"))?,
                );
            }
            "--help" => {
                print_usage();
                return Ok(());
            }
            other => bot_specs.push(other.to_string()),
        }
    }

    if bot_specs.is_empty() {
        bot_specs = vec![String::from("human"), String::from("greedy")];
    }
    if bot_specs.len() < 2 || bot_specs.len() > 10 {
        return Err(format!(
            "expected between 2 and 10 players, received {}",
            bot_specs.len()
        )
        .into());
    }

    let num_players = bot_specs.len();
    let mut game = Game::builder(num_players)?.with_seed(seed).build()?;

    let mut bots: Vec<Box<dyn Bot>> = Vec::with_capacity(num_players);
    for (index, spec) in bot_specs.iter().enumerate() {
        bots.push(create_bot_from_spec(spec, index, seed)?);
    }

    println!("Starting UNO simulation with {num_players} players.\n");
    let mut turns = 0usize;
    while !game.is_game_over() {
        if let Some(limit) = max_turns {
            if turns >= limit {
                println!("Max turn limit {limit} reached. Stopping simulation.");
                break;
            }
        }
        let current = game.current_player_index();
        let state = game.state_view(current)?;
        let turn = bots[current].select_turn(&state);
        if visualize {
            println!("{}", render_state(&state));
            println!("Seat {current}: {}\n", describe_turn(&state, &turn));
        }
        let accepted = game.apply_turn(turn)?;
        if !accepted {
            // Only humans can submit an illegal card; ask again.
            println!("That card cannot be played right now.");
            continue;
        }
        if visualize && game.players()[current].has_uno() {
            println!("{} calls UNO!\n", game.players()[current].name());
        }
        turns += 1;
    }

    match game.winner() {
        Some(winner) => println!(
            "Game finished after {turns} turns. Winner: {} (active color was {}).",
            winner.name(),
            format_color(game.current_color())
        ),
        None => println!("Simulation stopped before completion."),
    }

    Ok(())
}

fn print_usage() {
    println!("Usage: simulate [OPTIONS] [BOT ...]");
    println!("  --visualize           Show the game state and chosen turns");
    println!("  --seed <u64>          Seed for shuffling (default: {DEFAULT_SEED:#x})");
    println!("  --max-turns <usize>   Stop after the specified number of turns");
    println!("  --help                Show this help message");
    println!("Bot entries (2-10 total):");
    println!("  human[:name]          Interactive human-controlled seat");
    println!("  greedy                Plays the first legal card, draws otherwise");
    println!("  random[:seed]         Uniform random legal play with optional per-bot seed");
    println!("If no bots are provided, defaults to one human and one greedy bot.");
}
