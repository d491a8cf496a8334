//! A single grid position and its attack resolution.

use alloc::rc::Rc;

use crate::common::ShotResult;
use crate::ship::SharedShip;

/// Attack history of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    OccupiedShip,
    Hit,
    Sunk,
    Miss,
}

impl CellState {
    /// Hit, Sunk and Miss accept no further attacks.
    pub const fn is_terminal(self) -> bool {
        matches!(self, CellState::Hit | CellState::Sunk | CellState::Miss)
    }
}

/// One grid position, optionally pointing at the ship that covers it.
#[derive(Debug, Clone, Default)]
pub struct Cell {
    state: CellState,
    ship: Option<SharedShip>,
}

impl Cell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cell from stored parts. Callers keep state and ship consistent.
    #[cfg(feature = "std")]
    pub(crate) fn from_parts(state: CellState, ship: Option<SharedShip>) -> Self {
        Self { state, ship }
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn ship(&self) -> Option<&SharedShip> {
        self.ship.as_ref()
    }

    /// State used for display: a `Hit` cell whose ship has since sunk shows as `Sunk`.
    pub fn display_state(&self) -> CellState {
        match (self.state, &self.ship) {
            (CellState::Hit, Some(ship)) if ship.borrow().is_sunk() => CellState::Sunk,
            (state, _) => state,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.state == CellState::Empty
    }

    pub fn has_ship(&self) -> bool {
        self.ship.is_some()
    }

    pub fn was_already_shot(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn can_be_shot(&self) -> bool {
        !self.was_already_shot()
    }

    /// `true` if this cell holds exactly `ship` (same allocation).
    pub(crate) fn holds(&self, ship: &SharedShip) -> bool {
        self.ship.as_ref().is_some_and(|s| Rc::ptr_eq(s, ship))
    }

    /// Occupy an empty cell with `ship`. Only the board calls this, after
    /// validating the whole span.
    pub(crate) fn set_ship(&mut self, ship: SharedShip) {
        debug_assert!(self.is_empty());
        self.state = CellState::OccupiedShip;
        self.ship = Some(ship);
    }

    /// Resolve an attack on this cell.
    pub fn mark_attack(&mut self) -> ShotResult {
        if self.was_already_shot() {
            return ShotResult::AlreadyShot;
        }
        match &self.ship {
            Some(ship) => {
                if ship.borrow_mut().receive_hit() {
                    self.state = CellState::Sunk;
                    ShotResult::Sunk
                } else {
                    self.state = CellState::Hit;
                    ShotResult::Hit
                }
            }
            None => {
                self.state = CellState::Miss;
                ShotResult::Water
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ship::{Ship, ShipClass};

    #[test]
    fn empty_cell_becomes_miss() {
        let mut cell = Cell::new();
        assert!(cell.is_empty() && cell.can_be_shot());
        assert_eq!(cell.mark_attack(), ShotResult::Water);
        assert_eq!(cell.state(), CellState::Miss);
        assert!(!cell.has_ship());
        assert_eq!(cell.mark_attack(), ShotResult::AlreadyShot);
        assert_eq!(cell.state(), CellState::Miss);
    }

    #[test]
    fn delegates_damage_to_shared_ship() {
        let ship = Ship::shared(ShipClass::DESTROYER);
        let mut bow = Cell::new();
        let mut stern = Cell::new();
        bow.set_ship(Rc::clone(&ship));
        stern.set_ship(Rc::clone(&ship));
        assert!(bow.holds(&ship) && !bow.was_already_shot());

        assert_eq!(bow.mark_attack(), ShotResult::Hit);
        assert_eq!(bow.display_state(), CellState::Hit);
        assert_eq!(stern.mark_attack(), ShotResult::Sunk);
        assert_eq!(stern.state(), CellState::Sunk);

        // raw history keeps Hit, the display follows the ship
        assert_eq!(bow.state(), CellState::Hit);
        assert_eq!(bow.display_state(), CellState::Sunk);
        assert_eq!(bow.mark_attack(), ShotResult::AlreadyShot);
        assert_eq!(ship.borrow().hits(), 2);
    }
}
