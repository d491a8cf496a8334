use crate::ship::ShipClass;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const STANDARD_FLEET: [ShipClass; NUM_SHIPS] = [
    ShipClass::AIRCRAFT_CARRIER,
    ShipClass::BATTLESHIP,
    ShipClass::CRUISER,
    ShipClass::SUBMARINE,
    ShipClass::DESTROYER,
];

/// Look up a ship class of the standard fleet by its display name.
/// Returns `None` if the name does not match any catalog entry.
pub fn ship_class_by_name(name: &str) -> Option<ShipClass> {
    STANDARD_FLEET.iter().copied().find(|class| class.name() == name)
}
