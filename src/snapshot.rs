#![cfg(feature = "std")]

//! Serializable board state for saving or syncing a game.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cell::{Cell, CellState};
use crate::common::SnapshotError;
use crate::config::{ship_class_by_name, BOARD_SIZE};
use crate::ship::{SharedShip, Ship};
use core::cell::RefCell;

/// Stored damage of one placed ship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipRecord {
    pub name: String,
    pub size: usize,
    pub hits: usize,
}

/// Stored cell: its attack history and the index of its ship, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRecord {
    pub state: CellState,
    pub ship: Option<usize>,
}

/// Serializable snapshot of a whole board. Every cell of one ship points at
/// the same entry of `ships`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: Vec<Vec<CellRecord>>,
    pub ships: Vec<ShipRecord>,
    pub shots_fired: usize,
}

impl From<&Board> for BoardState {
    fn from(board: &Board) -> Self {
        let ships = board
            .ships()
            .iter()
            .map(|s| {
                let s = s.borrow();
                ShipRecord {
                    name: s.name().to_string(),
                    size: s.size(),
                    hits: s.hits(),
                }
            })
            .collect();
        let cells = board
            .cells()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| CellRecord {
                        state: cell.state(),
                        ship: cell
                            .ship()
                            .and_then(|s| board.ships().iter().position(|p| Rc::ptr_eq(p, s))),
                    })
                    .collect()
            })
            .collect();
        BoardState {
            cells,
            ships,
            shots_fired: board.shots_fired(),
        }
    }
}

impl TryFrom<BoardState> for Board {
    type Error = SnapshotError;

    fn try_from(state: BoardState) -> Result<Self, Self::Error> {
        let ships = state
            .ships
            .iter()
            .map(|record| {
                let class = ship_class_by_name(&record.name)
                    .filter(|class| class.size() == record.size)
                    .ok_or_else(|| SnapshotError::UnknownShipClass {
                        name: record.name.clone(),
                        size: record.size,
                    })?;
                Ok(Rc::new(RefCell::new(Ship::with_hits(class, record.hits))))
            })
            .collect::<Result<Vec<SharedShip>, SnapshotError>>()?;

        let dimensions = SnapshotError::InvalidDimensions {
            expected: BOARD_SIZE,
        };
        // per ship: covered cells, damaged (Hit or Sunk) cells, Sunk cells
        let mut tally = vec![(0usize, 0usize, 0usize); ships.len()];
        let mut rows = Vec::with_capacity(BOARD_SIZE);
        for (row, records) in state.cells.iter().enumerate() {
            let mut cells = Vec::with_capacity(BOARD_SIZE);
            for (col, record) in records.iter().enumerate() {
                let ship = match record.ship {
                    Some(index) => Some(Rc::clone(ships.get(index).ok_or(
                        SnapshotError::UnknownShipIndex { row, col, index },
                    )?)),
                    None => None,
                };
                let consistent = match record.state {
                    CellState::Empty | CellState::Miss => ship.is_none(),
                    CellState::OccupiedShip | CellState::Hit | CellState::Sunk => ship.is_some(),
                };
                if !consistent {
                    return Err(SnapshotError::InconsistentCell { row, col });
                }
                if let Some(index) = record.ship {
                    let (covered, damaged, sunk) = &mut tally[index];
                    *covered += 1;
                    match record.state {
                        CellState::Hit => *damaged += 1,
                        CellState::Sunk => {
                            *damaged += 1;
                            *sunk += 1;
                        }
                        _ => {}
                    }
                }
                cells.push(Cell::from_parts(record.state, ship));
            }
            let line: [Cell; BOARD_SIZE] = cells.try_into().map_err(|_| dimensions.clone())?;
            rows.push(line);
        }
        let cells: [[Cell; BOARD_SIZE]; BOARD_SIZE] =
            rows.try_into().map_err(|_| dimensions)?;

        for (index, (record, &(covered, damaged, sunk))) in
            state.ships.iter().zip(tally.iter()).enumerate()
        {
            if covered != record.size {
                return Err(SnapshotError::ShipCellCount {
                    index,
                    expected: record.size,
                    found: covered,
                });
            }
            if damaged != record.hits.min(record.size) {
                return Err(SnapshotError::ShipDamageMismatch {
                    index,
                    hits: record.hits,
                    damaged,
                });
            }
            // only the finishing shot leaves a Sunk cell
            let expected_sunk = usize::from(record.hits >= record.size);
            if sunk != expected_sunk {
                return Err(SnapshotError::SunkCellMismatch { index });
            }
        }

        Ok(Board::from_parts(cells, ships, state.shots_fired))
    }
}
