//! The 10×10 grid: placement validation and attack dispatch.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;
use log::{debug, info, trace};
use rand::Rng;

use crate::cell::Cell;
use crate::common::{PlacementError, ShotResult};
use crate::config::BOARD_SIZE;
use crate::ship::{Orientation, SharedShip, Ship, ShipClass};

/// Attempts made by [`Board::random_placement`] before giving up.
const PLACEMENT_ATTEMPTS: usize = 100;

/// One player's grid of cells plus the ships placed on it.
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    ships: Vec<SharedShip>,
    shots_fired: usize,
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new() -> Self {
        Board {
            cells: core::array::from_fn(|_| core::array::from_fn(|_| Cell::new())),
            ships: Vec::new(),
            shots_fired: 0,
        }
    }

    /// Rebuild a board from restored parts.
    #[cfg(feature = "std")]
    pub(crate) fn from_parts(
        cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
        ships: Vec<SharedShip>,
        shots_fired: usize,
    ) -> Self {
        Board {
            cells,
            ships,
            shots_fired,
        }
    }

    /// Grid index for (`row`, `col`), or `None` outside the board.
    fn index(row: i32, col: i32) -> Option<(usize, usize)> {
        let r = usize::try_from(row).ok().filter(|&r| r < BOARD_SIZE)?;
        let c = usize::try_from(col).ok().filter(|&c| c < BOARD_SIZE)?;
        Some((r, c))
    }

    /// Cells covered by a ship of `size` starting at (`row`, `col`), or `None`
    /// if any part of the span leaves the board.
    fn span(
        row: i32,
        col: i32,
        size: usize,
        orientation: Orientation,
    ) -> Option<impl Iterator<Item = (usize, usize)> + Clone> {
        let (r, c) = Self::index(row, col)?;
        if size == 0 {
            return None;
        }
        let lead = match orientation {
            Orientation::Horizontal => c,
            Orientation::Vertical => r,
        };
        if lead.checked_add(size)? > BOARD_SIZE {
            return None;
        }
        let (dr, dc) = orientation.step();
        Some((0..size).map(move |i| (r + i * dr, c + i * dc)))
    }

    /// Read-only access to one cell; `None` out of bounds.
    pub fn cell(&self, row: i32, col: i32) -> Option<&Cell> {
        Self::index(row, col).map(|(r, c)| &self.cells[r][c])
    }

    pub(crate) fn cells(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Ships placed on this board, in placement order.
    pub fn ships(&self) -> &[SharedShip] {
        &self.ships
    }

    /// Returns `true` when at least one ship is placed and every ship is sunk.
    pub fn all_ships_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(|s| s.borrow().is_sunk())
    }

    /// Number of placed ships still afloat.
    pub fn remaining_ships(&self) -> usize {
        self.ships.iter().filter(|s| !s.borrow().is_sunk()).count()
    }

    /// Attacks that changed the board (Water, Hit or Sunk).
    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }

    /// Place `ship` at (`row`, `col`) in `orientation`.
    /// Returns `false` and leaves the board untouched if the placement is invalid.
    pub fn place_ship(
        &mut self,
        ship: &SharedShip,
        row: i32,
        col: i32,
        orientation: Orientation,
    ) -> bool {
        self.try_place_ship(ship, row, col, orientation).is_ok()
    }

    /// Place `ship`, reporting why a placement was rejected.
    ///
    /// The whole span is validated before any cell is written.
    pub fn try_place_ship(
        &mut self,
        ship: &SharedShip,
        row: i32,
        col: i32,
        orientation: Orientation,
    ) -> Result<(), PlacementError> {
        let (name, size) = {
            let s = ship.borrow();
            (s.name(), s.size())
        };
        if self.ships.iter().any(|s| Rc::ptr_eq(s, ship)) {
            trace!("{} already placed, rejecting ({}, {})", name, row, col);
            return Err(PlacementError::AlreadyPlaced);
        }
        let Some(span) = Self::span(row, col, size, orientation) else {
            trace!("{} at ({}, {}) {:?} leaves the board", name, row, col, orientation);
            return Err(PlacementError::OutOfBounds);
        };
        if let Some((r, c)) = span.clone().find(|&(r, c)| !self.cells[r][c].is_empty()) {
            trace!("{} at ({}, {}) overlaps ({}, {})", name, row, col, r, c);
            return Err(PlacementError::Overlap {
                row: r as i32,
                col: c as i32,
            });
        }
        for (r, c) in span {
            self.cells[r][c].set_ship(Rc::clone(ship));
        }
        self.ships.push(Rc::clone(ship));
        debug!("placed {} at ({}, {}) {:?}", name, row, col, orientation);
        Ok(())
    }

    /// Returns a random in-bounds, non-overlapping (row, col, orientation)
    /// for a ship of `class`.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        class: &ShipClass,
    ) -> Result<(i32, i32, Orientation), PlacementError> {
        let size = class.size();
        if size == 0 || size > BOARD_SIZE {
            return Err(PlacementError::OutOfBounds);
        }
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orientation = Orientation::from_horizontal(rng.random());
            let (max_r, max_c) = match orientation {
                Orientation::Horizontal => (BOARD_SIZE - 1, BOARD_SIZE - size),
                Orientation::Vertical => (BOARD_SIZE - size, BOARD_SIZE - 1),
            };
            let r = rng.random_range(0..=max_r) as i32;
            let c = rng.random_range(0..=max_c) as i32;
            let free = Self::span(r, c, size, orientation)
                .is_some_and(|mut span| span.all(|(r, c)| self.cells[r][c].is_empty()));
            if free {
                return Ok((r, c, orientation));
            }
        }
        Err(PlacementError::UnableToPlace)
    }

    /// Place one new ship per entry of `fleet` at random positions.
    ///
    /// Either every ship is placed or, on error, none of them are.
    pub fn place_fleet_randomly<R: Rng>(
        &mut self,
        rng: &mut R,
        fleet: &[ShipClass],
    ) -> Result<Vec<SharedShip>, PlacementError> {
        let mut placed = Vec::with_capacity(fleet.len());
        for class in fleet {
            let ship = Ship::shared(*class);
            let outcome = self
                .random_placement(rng, class)
                .and_then(|(r, c, o)| self.try_place_ship(&ship, r, c, o));
            if let Err(e) = outcome {
                for ship in &placed {
                    self.remove_unshot(ship);
                }
                return Err(e);
            }
            placed.push(ship);
        }
        Ok(placed)
    }

    /// Undo the placement of a ship that has not been attacked yet.
    fn remove_unshot(&mut self, ship: &SharedShip) {
        for cell in self.cells.iter_mut().flatten() {
            if cell.holds(ship) {
                *cell = Cell::new();
            }
        }
        self.ships.retain(|s| !Rc::ptr_eq(s, ship));
    }

    /// Resolve an attack at (`row`, `col`).
    pub fn receive_attack(&mut self, row: i32, col: i32) -> ShotResult {
        let Some((r, c)) = Self::index(row, col) else {
            trace!("shot at ({}, {}) is off the board", row, col);
            return ShotResult::OutOfBounds;
        };
        let cell = &mut self.cells[r][c];
        let result = cell.mark_attack();
        if result.is_new_shot() {
            self.shots_fired += 1;
        }
        match result {
            ShotResult::Sunk => {
                if let Some(ship) = cell.ship() {
                    info!("{} sunk at ({}, {})", ship.borrow().name(), row, col);
                }
            }
            other => debug!("shot at ({}, {}): {:?}", row, col, other),
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("ships", &self.ships)
            .field("shots_fired", &self.shots_fired)
            .finish_non_exhaustive()
    }
}
