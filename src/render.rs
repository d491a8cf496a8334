//! Text rendering of a board for terminals and logs.

use alloc::string::String;
use core::fmt::{self, Write};

use crate::board::Board;
use crate::cell::{Cell, CellState};
use crate::config::BOARD_SIZE;

fn symbol(cell: &Cell, reveal: bool) -> char {
    match cell.display_state() {
        CellState::Empty => '.',
        CellState::OccupiedShip if reveal => 'S',
        CellState::OccupiedShip => '.',
        CellState::Hit => 'X',
        CellState::Sunk => '#',
        CellState::Miss => 'o',
    }
}

fn write_grid<W: Write>(out: &mut W, board: &Board, reveal: bool) -> fmt::Result {
    write!(out, "   ")?;
    for c in 0..BOARD_SIZE {
        write!(out, " {}", (b'A' + c as u8) as char)?;
    }
    writeln!(out)?;
    for (r, row) in board.cells().iter().enumerate() {
        write!(out, "{:2} ", r + 1)?;
        for cell in row {
            write!(out, " {}", symbol(cell, reveal))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Full grid including intact ships.
/// Legend: `.` water, `S` ship, `X` hit, `#` sunk, `o` miss.
pub fn owner_view(board: &Board) -> String {
    let mut out = String::new();
    let _ = write_grid(&mut out, board, true);
    out
}

/// Grid as the attacker sees it: intact ship segments are hidden.
pub fn opponent_view(board: &Board) -> String {
    let mut out = String::new();
    let _ = write_grid(&mut out, board, false);
    out
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self, true)
    }
}
