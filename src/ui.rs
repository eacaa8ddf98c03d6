#![cfg(feature = "std")]

//! Terminal rendering of a session snapshot.

use std::io::{self, Write};

use crate::{
    config::BOARD_SIZE,
    game::{CellMark, Counters, GameStatus, SessionSnapshot},
};

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Column label for index `c` (`0` → `A`).
pub fn column_label(c: usize) -> char {
    (b'A' + c as u8) as char
}

/// Human-readable coordinate, e.g. (4, 0) → `A5`.
pub fn coord_to_string(r: usize, c: usize) -> String {
    format!("{}{}", column_label(c), r + 1)
}

fn mark_char(mark: CellMark) -> char {
    match mark {
        CellMark::Untouched => '.',
        CellMark::Hit => 'X',
        CellMark::Miss => 'o',
    }
}

/// Print the four counter labels.
pub fn print_counters<W: Write>(out: &mut W, counters: &Counters) -> io::Result<()> {
    writeln!(
        out,
        "Miss Counter: {:<4} Strike Counter: {}",
        counters.consecutive_misses, counters.strikes
    )?;
    writeln!(
        out,
        "Total Misses: {:<4} Total Hits: {}",
        counters.total_misses, counters.total_hits
    )
}

/// Print the target grid as the player sees it.
pub fn print_grid<W: Write>(out: &mut W, cells: &[[CellMark; GRID_SIZE]; GRID_SIZE]) -> io::Result<()> {
    writeln!(out, "    ╔═══════════════════════╗")?;
    write!(out, "    ║  ")?;
    for c in 0..GRID_SIZE {
        write!(out, " {}", column_label(c))?;
    }
    writeln!(out, " ║")?;
    writeln!(out, "    ╠═══════════════════════╣")?;
    for (r, row) in cells.iter().enumerate() {
        write!(out, "    ║ {:2}", r + 1)?;
        for mark in row {
            write!(out, " {}", mark_char(*mark))?;
        }
        writeln!(out, " ║")?;
    }
    writeln!(out, "    ╚═══════════════════════╝")?;
    writeln!(out, "    Legend: X=Hit  o=Miss  .=Unknown")
}

/// Print counters, grid and, once the game is over, its result.
pub fn print_snapshot<W: Write>(out: &mut W, snapshot: &SessionSnapshot) -> io::Result<()> {
    print_counters(out, &snapshot.counters)?;
    print_grid(out, &snapshot.cells)?;
    match snapshot.status {
        GameStatus::InProgress => Ok(()),
        GameStatus::Won => writeln!(out, "Victory!"),
        GameStatus::Lost => writeln!(out, "Game Over"),
    }
}
