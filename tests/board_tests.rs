use battleship_rules::{
    Board, CellState, Orientation, PlacementError, Ship, ShipClass, ShotResult, BOARD_SIZE,
    STANDARD_FLEET,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn assert_untouched(board: &Board) {
    for r in 0..BOARD_SIZE as i32 {
        for c in 0..BOARD_SIZE as i32 {
            let cell = board.cell(r, c).unwrap();
            assert_eq!(cell.state(), CellState::Empty, "cell ({r}, {c}) changed");
            assert!(!cell.has_ship());
        }
    }
}

#[test]
fn test_destroyer_hit_sink_then_already_shot() {
    let mut board = Board::new();
    let destroyer = Ship::shared(ShipClass::DESTROYER);
    assert!(board.place_ship(&destroyer, 0, 0, Orientation::from_horizontal(true)));

    assert_eq!(board.receive_attack(0, 0), ShotResult::Hit);
    assert!(!destroyer.borrow().is_sunk());
    assert_eq!(board.receive_attack(0, 1), ShotResult::Sunk);
    assert!(destroyer.borrow().is_sunk());
    assert_eq!(board.receive_attack(0, 0), ShotResult::AlreadyShot);

    assert_eq!(board.cell(0, 0).unwrap().state(), CellState::Hit);
    assert_eq!(board.cell(0, 1).unwrap().state(), CellState::Sunk);
    assert_eq!(board.cell(0, 0).unwrap().display_state(), CellState::Sunk);
    assert!(board.all_ships_sunk());
}

#[test]
fn test_cruiser_vertical_overrun_rejected() {
    let mut board = Board::new();
    let cruiser = Ship::shared(ShipClass::CRUISER);
    assert!(!board.place_ship(&cruiser, 8, 0, Orientation::Vertical));
    assert_eq!(
        board.try_place_ship(&cruiser, 8, 0, Orientation::Vertical),
        Err(PlacementError::OutOfBounds)
    );
    assert_untouched(&board);
    assert!(board.ships().is_empty());
}

#[test]
fn test_span_ending_on_last_row_fits() {
    let mut board = Board::new();
    let cruiser = Ship::shared(ShipClass::CRUISER);
    assert!(board.place_ship(&cruiser, 7, 9, Orientation::Vertical));
    for r in 7..10 {
        assert!(board.cell(r, 9).unwrap().has_ship());
    }
}

#[test]
fn test_negative_and_out_of_range_start_rejected() {
    let mut board = Board::new();
    let sub = Ship::shared(ShipClass::SUBMARINE);
    assert!(!board.place_ship(&sub, -1, 0, Orientation::Horizontal));
    assert!(!board.place_ship(&sub, 0, -2, Orientation::Vertical));
    assert!(!board.place_ship(&sub, 10, 0, Orientation::Horizontal));
    assert!(!board.place_ship(&sub, 0, 8, Orientation::Horizontal));
    assert_untouched(&board);
}

#[test]
fn test_overlap_rejected_and_first_ship_kept() {
    let mut board = Board::new();
    let battleship = Ship::shared(ShipClass::BATTLESHIP);
    let cruiser = Ship::shared(ShipClass::CRUISER);
    assert!(board.place_ship(&battleship, 2, 2, Orientation::Horizontal));
    assert_eq!(
        board.try_place_ship(&cruiser, 0, 4, Orientation::Vertical),
        Err(PlacementError::Overlap { row: 2, col: 4 })
    );
    for c in 2..6 {
        let cell = board.cell(2, c).unwrap();
        assert_eq!(cell.state(), CellState::OccupiedShip);
        assert!(std::rc::Rc::ptr_eq(cell.ship().unwrap(), &battleship));
    }
    assert!(board.cell(0, 4).unwrap().is_empty());
    assert!(board.cell(1, 4).unwrap().is_empty());
    assert_eq!(board.ships().len(), 1);
}

#[test]
fn test_ship_cannot_cover_missed_cell() {
    let mut board = Board::new();
    assert_eq!(board.receive_attack(0, 0), ShotResult::Water);
    let destroyer = Ship::shared(ShipClass::DESTROYER);
    assert!(!board.place_ship(&destroyer, 0, 0, Orientation::Horizontal));
    assert_eq!(
        board.try_place_ship(&destroyer, 0, 0, Orientation::Vertical),
        Err(PlacementError::Overlap { row: 0, col: 0 })
    );
    let cell = board.cell(0, 0).unwrap();
    assert_eq!(cell.state(), CellState::Miss);
    assert!(!cell.has_ship());
    assert!(board.cell(0, 1).unwrap().is_empty());
    assert!(board.ships().is_empty());
}

#[test]
fn test_diagonal_neighbours_allowed() {
    let mut board = Board::new();
    let a = Ship::shared(ShipClass::DESTROYER);
    let b = Ship::shared(ShipClass::DESTROYER);
    assert!(board.place_ship(&a, 0, 0, Orientation::Horizontal));
    assert!(board.place_ship(&b, 1, 2, Orientation::Horizontal));
}

#[test]
fn test_same_ship_cannot_be_placed_twice() {
    let mut board = Board::new();
    let destroyer = Ship::shared(ShipClass::DESTROYER);
    assert!(board.place_ship(&destroyer, 0, 0, Orientation::Horizontal));
    assert_eq!(
        board.try_place_ship(&destroyer, 5, 5, Orientation::Horizontal),
        Err(PlacementError::AlreadyPlaced)
    );
    assert!(board.cell(5, 5).unwrap().is_empty());
}

#[test]
fn test_zero_size_ship_rejected() {
    let mut board = Board::new();
    let ghost = Ship::shared(ShipClass::new("Ghost", 0));
    assert_eq!(
        board.try_place_ship(&ghost, 0, 0, Orientation::Horizontal),
        Err(PlacementError::OutOfBounds)
    );
}

#[test]
fn test_water_is_permanent() {
    let mut board = Board::new();
    assert_eq!(board.receive_attack(4, 4), ShotResult::Water);
    let cell = board.cell(4, 4).unwrap();
    assert_eq!(cell.state(), CellState::Miss);
    assert!(cell.was_already_shot() && !cell.can_be_shot() && !cell.has_ship());
    assert_eq!(board.receive_attack(4, 4), ShotResult::AlreadyShot);
    assert_eq!(board.shots_fired(), 1);
}

#[test]
fn test_out_of_bounds_attacks() {
    let mut board = Board::new();
    for (r, c) in [(-1, 0), (0, -1), (10, 0), (0, 10), (i32::MIN, i32::MAX)] {
        assert_eq!(board.receive_attack(r, c), ShotResult::OutOfBounds);
        assert!(board.cell(r, c).is_none());
    }
    assert_eq!(board.shots_fired(), 0);
    assert_untouched(&board);
}

#[test]
fn test_shared_damage_across_cells() {
    let mut board = Board::new();
    let carrier = Ship::shared(ShipClass::AIRCRAFT_CARRIER);
    assert!(board.place_ship(&carrier, 3, 0, Orientation::Horizontal));
    for c in 0..4 {
        assert_eq!(board.receive_attack(3, c), ShotResult::Hit);
    }
    assert_eq!(carrier.borrow().hits(), 4);
    assert_eq!(board.receive_attack(3, 4), ShotResult::Sunk);
    assert_eq!(board.remaining_ships(), 0);
}

#[test]
fn test_all_ships_sunk_requires_ships() {
    let board = Board::new();
    assert!(!board.all_ships_sunk());
    assert_eq!(board.remaining_ships(), 0);
}

#[test]
fn test_random_fleet_fills_expected_cells() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(42);
    let ships = board.place_fleet_randomly(&mut rng, &STANDARD_FLEET).unwrap();
    assert_eq!(ships.len(), STANDARD_FLEET.len());

    let occupied = (0..BOARD_SIZE as i32)
        .flat_map(|r| (0..BOARD_SIZE as i32).map(move |c| (r, c)))
        .filter(|&(r, c)| board.cell(r, c).unwrap().has_ship())
        .count();
    let expected: usize = STANDARD_FLEET.iter().map(|c| c.size()).sum();
    assert_eq!(occupied, expected, "all ships should be placed without overlap");
}

#[test]
fn test_random_placement_reproducible() {
    let mut rng1 = SmallRng::seed_from_u64(7);
    let mut rng2 = SmallRng::seed_from_u64(7);
    let board1 = Board::new();
    let board2 = Board::new();
    for class in STANDARD_FLEET {
        assert_eq!(
            board1.random_placement(&mut rng1, &class),
            board2.random_placement(&mut rng2, &class)
        );
    }
}

#[test]
fn test_random_fleet_rolls_back_when_full() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(1);
    // an 11-cell ship cannot fit on a 10x10 board
    let fleet = [ShipClass::DESTROYER, ShipClass::new("Leviathan", 11)];
    assert_eq!(
        board.place_fleet_randomly(&mut rng, &fleet).unwrap_err(),
        PlacementError::OutOfBounds
    );
    assert!(board.ships().is_empty());
    assert_untouched(&board);
}
