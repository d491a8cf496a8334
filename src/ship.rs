//! Ship classes and per-vessel damage accounting.

use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Advances along the column axis from the starting coordinate.
    Horizontal,
    /// Advances along the row axis from the starting coordinate.
    Vertical,
}

impl Orientation {
    /// Map a `horizontal` flag onto an orientation.
    pub const fn from_horizontal(horizontal: bool) -> Self {
        if horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Row and column step for one segment in this direction.
    pub(crate) const fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// Class of ship: name and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShipClass {
    name: &'static str,
    size: usize,
}

impl ShipClass {
    pub const AIRCRAFT_CARRIER: ShipClass = ShipClass::new("Aircraft Carrier", 5);
    pub const BATTLESHIP: ShipClass = ShipClass::new("Battleship", 4);
    pub const CRUISER: ShipClass = ShipClass::new("Cruiser", 3);
    pub const SUBMARINE: ShipClass = ShipClass::new("Submarine", 3);
    pub const DESTROYER: ShipClass = ShipClass::new("Destroyer", 2);

    /// Create a new ship class.
    pub const fn new(name: &'static str, size: usize) -> Self {
        Self { name, size }
    }

    /// Class name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of cells a ship of this class occupies.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Handle to a ship shared by every cell it occupies.
pub type SharedShip = Rc<RefCell<Ship>>;

/// One vessel and the damage it has taken.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    class: ShipClass,
    hits: usize,
    sunk: bool,
}

impl Ship {
    /// A fresh, undamaged ship of `class`. A zero-size class starts sunk.
    pub fn new(class: ShipClass) -> Self {
        Self {
            class,
            hits: 0,
            sunk: class.size() == 0,
        }
    }

    /// A fresh ship wrapped for placement on a board.
    pub fn shared(class: ShipClass) -> SharedShip {
        Rc::new(RefCell::new(Self::new(class)))
    }

    /// Rebuild a ship that has already absorbed `hits`.
    #[cfg(feature = "std")]
    pub(crate) fn with_hits(class: ShipClass, hits: usize) -> Self {
        Self {
            class,
            hits,
            sunk: hits >= class.size(),
        }
    }

    /// Register one hit. Returns `true` if the ship is sunk afterwards.
    ///
    /// Hits past the class size are still counted; a sunk ship stays sunk.
    pub fn receive_hit(&mut self) -> bool {
        self.hits = self.hits.saturating_add(1);
        if self.hits >= self.class.size() {
            self.sunk = true;
        }
        self.sunk
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn size(&self) -> usize {
        self.class.size()
    }

    pub fn name(&self) -> &'static str {
        self.class.name()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", size: {}, hits: {}, sunk: {} }}",
            self.class.name(),
            self.class.size(),
            self.hits,
            self.sunk,
        )
    }
}
