//! Common types for the rules engine: shot outcomes and error enums.

use thiserror::Error;

/// Outcome of a single attack on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Coordinate lies outside the grid.
    OutOfBounds,
    /// Cell was attacked before; nothing changed.
    AlreadyShot,
    /// No ship at the cell.
    Water,
    /// Struck a ship that is still afloat.
    Hit,
    /// Struck the last intact segment of a ship.
    Sunk,
}

impl ShotResult {
    /// `true` for outcomes that changed the board.
    pub fn is_new_shot(self) -> bool {
        matches!(self, ShotResult::Water | ShotResult::Hit | ShotResult::Sunk)
    }
}

/// Reasons a ship placement was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    #[error("ship is already placed on this board")]
    AlreadyPlaced,
    #[error("ship placement is out of bounds")]
    OutOfBounds,
    #[error("ship placement covers a non-empty cell at ({row}, {col})")]
    Overlap { row: i32, col: i32 },
    #[error("unable to find a free span for the ship")]
    UnableToPlace,
}

/// Errors raised while restoring a board from a snapshot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("snapshot grid is not {expected}x{expected}")]
    InvalidDimensions { expected: usize },
    #[error("cell ({row}, {col}) refers to missing ship #{index}")]
    UnknownShipIndex { row: usize, col: usize, index: usize },
    #[error("cell ({row}, {col}) has a state inconsistent with its ship reference")]
    InconsistentCell { row: usize, col: usize },
    #[error("ship #{index} covers {found} cells, expected {expected}")]
    ShipCellCount { index: usize, expected: usize, found: usize },
    #[error("ship #{index} records {hits} hits but {damaged} of its cells are damaged")]
    ShipDamageMismatch { index: usize, hits: usize, damaged: usize },
    #[error("ship #{index} has Sunk cells that do not match its sunk flag")]
    SunkCellMismatch { index: usize },
    #[error("ship class {name:?} of size {size} is not in the fleet catalog")]
    UnknownShipClass { name: alloc::string::String, size: usize },
}
