#![cfg(feature = "std")]

//! Text front-end: reads commands, fires at the session and renders the
//! result. Also hosts the command-line flags shared by the binaries.

use std::io::{BufRead, Write};

use clap::{Args, ValueEnum};

use crate::{
    config::{GameConfig, PlacementPolicy, SunkDetection, BOARD_SIZE},
    game::{GameSession, GameStatus, ShotReport},
    common::ShotOutcome,
    ui::{coord_to_string, print_snapshot},
};

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Sunk detection mode selectable on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SunkMode {
    /// Never announce sunk ships.
    Placeholder,
    /// Announce a ship once all of its cells are hit.
    Tracked,
}

impl From<SunkMode> for SunkDetection {
    fn from(mode: SunkMode) -> Self {
        match mode {
            SunkMode::Placeholder => SunkDetection::Placeholder,
            SunkMode::Tracked => SunkDetection::Tracked,
        }
    }
}

/// Game flags shared by the interactive binary and the simulator.
#[derive(Args, Clone, Debug)]
pub struct GameArgs {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    pub seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = SunkMode::Placeholder)]
    pub sunk_detection: SunkMode,
    #[arg(
        long,
        help = "Cap random placement attempts per ship, then place deterministically"
    )]
    pub placement_attempts: Option<u32>,
}

impl GameArgs {
    pub fn config(&self) -> GameConfig {
        let placement = match self.placement_attempts {
            Some(attempts) => PlacementPolicy::Capped { attempts },
            None => PlacementPolicy::Unbounded,
        };
        GameConfig::default()
            .with_placement(placement)
            .with_sunk_detection(self.sunk_detection.into())
    }

    /// Build a session from these flags.
    pub fn session(&self) -> anyhow::Result<GameSession> {
        let config = self.config();
        let session = match self.seed {
            Some(seed) => GameSession::from_seed(config, seed),
            None => GameSession::with_config(config),
        };
        session.map_err(|e| anyhow::anyhow!(e))
    }
}

/// A single line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fire(usize, usize),
    NewGame,
    Quit,
    Help,
}

/// Parse a coordinate such as `A5` into `(row, col)`.
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    if col >= GRID_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 || row > GRID_SIZE {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Ok((row - 1, col))
}

/// Parse a line of input: a bare coordinate, `fire <coord>`, `new`, `quit`
/// or `help`.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let first = words.next().ok_or("Empty input")?;
    let command = match first.to_ascii_lowercase().as_str() {
        "new" | "again" | "n" => Command::NewGame,
        "quit" | "exit" | "q" => Command::Quit,
        "help" | "h" | "?" => Command::Help,
        "fire" | "f" => {
            let target = words.next().ok_or("fire needs a target (e.g., fire A5)")?;
            let (r, c) = parse_coord(target)?;
            Command::Fire(r, c)
        }
        _ => {
            let (r, c) = parse_coord(first)?;
            Command::Fire(r, c)
        }
    };
    if words.next().is_some() {
        return Err(format!("Unexpected input after '{}'", first));
    }
    Ok(command)
}

fn print_help<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  A5 | fire A5   fire at column A, row 5")?;
    writeln!(out, "  new            abandon this game and play again")?;
    writeln!(out, "  quit           leave the game")?;
    writeln!(out, "  help           show this message")
}

fn print_report<W: Write>(out: &mut W, report: &ShotReport) -> std::io::Result<()> {
    let at = coord_to_string(report.row, report.col);
    match report.outcome {
        ShotOutcome::Hit => writeln!(out, "{}: Hit!", at)?,
        ShotOutcome::Miss => writeln!(out, "{}: Miss.", at)?,
    }
    if report.sunk {
        writeln!(out, "You sunk a ship!")?;
    }
    Ok(())
}

/// Read one line; `None` on end of input.
fn read_line<R: BufRead>(input: &mut R) -> anyhow::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

/// Ask whether to play again after a finished game.
fn play_again<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    status: GameStatus,
) -> anyhow::Result<bool> {
    let verdict = if status == GameStatus::Won { "won" } else { "lost" };
    loop {
        write!(
            out,
            "You have {} the game! Would you like to play again? [y/n] ",
            verdict
        )?;
        out.flush()?;
        match read_line(input)?.as_deref().map(str::to_ascii_lowercase).as_deref() {
            None | Some("n") | Some("no") => return Ok(false),
            Some("y") | Some("yes") => return Ok(true),
            Some(_) => writeln!(out, "Please answer y or n.")?,
        }
    }
}

/// Drive `session` from `input` until the player quits or input ends.
pub fn run<R: BufRead, W: Write>(
    session: &mut GameSession,
    mut input: R,
    mut out: W,
) -> anyhow::Result<()> {
    writeln!(out, "Sink the fleet: 5 ships, 17 cells. Five misses in a row is a strike; three strikes and you lose.")?;
    print_help(&mut out)?;
    loop {
        print_snapshot(&mut out, &session.snapshot())?;
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = read_line(&mut input)? else {
            return Ok(());
        };
        if line.is_empty() {
            continue;
        }
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(msg) => {
                writeln!(out, "{}", msg)?;
                continue;
            }
        };
        match command {
            Command::Fire(r, c) => match session.fire_at(r, c) {
                Some(report) => {
                    print_report(&mut out, &report)?;
                    if report.status.is_over() {
                        print_snapshot(&mut out, &session.snapshot())?;
                        if !play_again(&mut input, &mut out, report.status)? {
                            return Ok(());
                        }
                        session.new_game().map_err(|e| anyhow::anyhow!(e))?;
                    }
                }
                None => writeln!(
                    out,
                    "{} has already been fired upon.",
                    coord_to_string(r, c)
                )?,
            },
            Command::NewGame => {
                session.new_game().map_err(|e| anyhow::anyhow!(e))?;
                writeln!(out, "New game started.")?;
            }
            Command::Quit => return Ok(()),
            Command::Help => print_help(&mut out)?,
        }
    }
}
