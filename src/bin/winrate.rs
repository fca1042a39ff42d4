use std::error::Error;
use std::process;

use clap::Parser;

use unobot::{Bot, Game, create_bot_from_spec, label_for_spec};

/// Default base seed for deterministic runs.
const DEFAULT_SEED: u64 = 0xC0FF_EE5E_ED00_0001;

/// Run repeated UNO matches between bot specs and report per-seat win rates.
#[derive(Parser, Debug)]
#[command(name = "winrate")]
struct Args {
    /// Bot specs for each seat, e.g. `greedy random greedy`.
    #[arg(required = true, num_args = 2..=10)]
    bots: Vec<String>,

    /// Number of games to play.
    #[arg(long, default_value_t = 1000)]
    games: usize,

    /// Base seed; game i uses seed + i.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Safety cap on turns per game.
    #[arg(long, default_value_t = 10_000)]
    max_turns: usize,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    if args.games == 0 {
        return Err("--games must be at least 1".into());
    }
    let num_players = args.bots.len();
    let mut wins = vec![0usize; num_players];
    let mut stalled = 0usize;

    for game_index in 0..args.games {
        let seed = args.seed.wrapping_add(game_index as u64);
        let mut game = Game::builder(num_players)?.with_seed(seed).build()?;
        let mut bots: Vec<Box<dyn Bot>> = Vec::with_capacity(num_players);
        for (index, spec) in args.bots.iter().enumerate() {
            bots.push(create_bot_from_spec(spec, index, seed)?);
        }

        let mut turns = 0usize;
        while !game.is_game_over() && turns < args.max_turns {
            let current = game.current_player_index();
            let state = game.state_view(current)?;
            let turn = bots[current].select_turn(&state);
            let accepted = game.apply_turn(turn)?;
            if !accepted {
                return Err(format!(
                    "bot '{}' submitted an illegal play in game {game_index}",
                    args.bots[current]
                )
                .into());
            }
            turns += 1;
        }

        match game
            .players()
            .iter()
            .position(|player| player.has_won())
        {
            Some(seat) => wins[seat] += 1,
            None => stalled += 1,
        }
    }

    println!(
        "Played {} games with {} seats (base seed {:#x}).",
        args.games, num_players, args.seed
    );
    for (seat, spec) in args.bots.iter().enumerate() {
        let label = label_for_spec(spec);
        let pct = 100.0 * wins[seat] as f64 / args.games as f64;
        println!("  Seat {seat} ({label}): {} wins ({pct:.1}%)", wins[seat]);
    }
    if stalled > 0 {
        println!("  {stalled} games hit the turn cap without a winner.");
    }

    Ok(())
}
