//! Commonly used types for ease of import.

pub use crate::{
    Board, Cell, CellState, Orientation, PlacementError, SharedShip, Ship, ShipClass, ShotResult,
    BOARD_SIZE, STANDARD_FLEET,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, BoardState};
