use clap::Parser;
use log::info;
use solo_battleship::{cli, init_logging, prelude::*};

#[derive(Parser)]
#[command(author, version, about = "Single-player Battleship in the terminal", long_about = None)]
struct Cli {
    #[command(flatten)]
    game: GameArgs,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Cli::parse();

    if let Some(s) = args.game.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut session = args.game.session()?;
    info!("starting interactive game with {:?}", session.config());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    cli::run(&mut session, stdin.lock(), stdout.lock())?;
    println!("Thanks for playing.");
    Ok(())
}
