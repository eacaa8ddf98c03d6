//! Plays batches of games with a random shooter and prints a JSON summary.

use clap::Parser;
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use serde::Serialize;
use solo_battleship::{cli::GameArgs, init_logging, GameSession, GameStatus, BOARD_SIZE};

#[derive(Parser)]
#[command(author, version, about = "Simulate random-shot games", long_about = None)]
struct Cli {
    #[command(flatten)]
    game: GameArgs,
    #[arg(long, default_value_t = 100)]
    games: u32,
}

#[derive(Serialize, Default)]
struct Summary {
    games: u32,
    won: u32,
    lost: u32,
    shots: u64,
    hits: u64,
    ships_sunk: u64,
}

/// Fire at unfired cells in random order until the game ends.
fn play(session: &mut GameSession, rng: &mut SmallRng, summary: &mut Summary) {
    let n = BOARD_SIZE as usize;
    let mut targets: Vec<(usize, usize)> =
        (0..n).flat_map(|r| (0..n).map(move |c| (r, c))).collect();
    targets.shuffle(rng);
    for (r, c) in targets {
        let Some(report) = session.fire_at(r, c) else {
            continue;
        };
        summary.shots += 1;
        if report.outcome.is_hit() {
            summary.hits += 1;
        }
        if report.sunk {
            summary.ships_sunk += 1;
        }
        match report.status {
            GameStatus::InProgress => {}
            GameStatus::Won => {
                summary.won += 1;
                return;
            }
            GameStatus::Lost => {
                summary.lost += 1;
                return;
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Cli::parse();

    let mut session = args.game.session()?;
    let mut rng = match args.game.seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(1)),
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    let mut summary = Summary::default();
    for i in 0..args.games {
        if i > 0 {
            session.new_game().map_err(|e| anyhow::anyhow!(e))?;
        }
        play(&mut session, &mut rng, &mut summary);
        summary.games += 1;
    }

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
