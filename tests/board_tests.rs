use rand::rngs::SmallRng;
use rand::SeedableRng;
use solo_battleship::{
    Board, BoardError, GameConfig, Grid, Orientation, PlacementPolicy, ShotOutcome,
    SunkDetection, NUM_SHIPS, SHIPS, TOTAL_SHIP_CELLS,
};

fn tracked() -> GameConfig {
    GameConfig::default().with_sunk_detection(SunkDetection::Tracked)
}

#[test]
fn test_manual_place_and_fire() {
    let mut board = Board::default();
    board.place(SHIPS[0], 0, 0, Orientation::Horizontal).unwrap();
    for c in 0..SHIPS[0].length() {
        assert_eq!(board.fire_at(0, c).unwrap(), ShotOutcome::Hit);
    }
    assert_eq!(board.fire_at(0, 5).unwrap(), ShotOutcome::Miss);
    assert_eq!(board.fire_at(1, 0).unwrap(), ShotOutcome::Miss);

    // firing leaves occupancy unchanged
    assert_eq!(board.occupied_cells(), SHIPS[0].length());
    assert_eq!(board.fire_at(0, 0).unwrap(), ShotOutcome::Hit);
}

#[test]
fn test_fire_out_of_range_is_an_error() {
    let board = Board::default();
    assert!(matches!(
        board.fire_at(10, 3),
        Err(BoardError::BitBoard(_))
    ));
}

#[test]
fn test_place_rejects_overlap_and_bounds() {
    let mut board = Board::default();
    board.place(SHIPS[1], 2, 2, Orientation::Vertical).unwrap();
    assert_eq!(
        board
            .place(SHIPS[2], 3, 0, Orientation::Horizontal)
            .unwrap_err(),
        BoardError::ShipOverlaps
    );
    assert_eq!(
        board
            .place(SHIPS[2], 0, 8, Orientation::Horizontal)
            .unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(board.ships().count(), 1);
}

#[test]
fn test_can_place() {
    let mut board = Board::default();
    assert!(board.can_place(0, 5, 5, Orientation::Horizontal));
    assert!(!board.can_place(0, 6, 5, Orientation::Horizontal));
    assert!(!board.can_place(6, 0, 5, Orientation::Vertical));
    board.place(SHIPS[4], 0, 9, Orientation::Vertical).unwrap();
    assert!(!board.can_place(1, 5, 5, Orientation::Horizontal));
    assert!(board.can_place(2, 5, 5, Orientation::Horizontal));
}

#[test]
fn test_reset_places_full_fleet() {
    let mut board = Board::default();
    let mut rng = SmallRng::seed_from_u64(42);
    board.reset(&mut rng).unwrap();
    assert_eq!(board.occupied_cells(), TOTAL_SHIP_CELLS);
    assert_eq!(board.ships().count(), NUM_SHIPS);
    let lengths: Vec<_> = board.ships().map(|s| s.ship_type().length()).collect();
    assert_eq!(lengths, vec![5, 4, 3, 3, 2]);

    // a second reset starts from an empty grid
    board.reset(&mut rng).unwrap();
    assert_eq!(board.occupied_cells(), TOTAL_SHIP_CELLS);
    assert_eq!(board.ships().count(), NUM_SHIPS);
}

#[test]
fn test_reset_is_reproducible() {
    let mut a = Board::default();
    let mut b = Board::default();
    a.reset(&mut SmallRng::seed_from_u64(9)).unwrap();
    b.reset(&mut SmallRng::seed_from_u64(9)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_zero_cap_falls_back_to_scan() {
    let config = GameConfig::default().with_placement(PlacementPolicy::Capped { attempts: 0 });
    let mut board = Board::new(config);
    let mut rng = SmallRng::seed_from_u64(1);
    let carrier = board.place_one_ship(&mut rng, SHIPS[0]).unwrap();
    assert_eq!(carrier.origin(), (0, 0));
    assert_eq!(carrier.orientation(), Orientation::Horizontal);
    let battleship = board.place_one_ship(&mut rng, SHIPS[1]).unwrap();
    assert_eq!(battleship.origin(), (0, 5));

    board.reset(&mut rng).unwrap();
    assert_eq!(board.occupied_cells(), TOTAL_SHIP_CELLS);
}

#[test]
fn test_full_fleet_rejects_extra_ship() {
    let mut board = Board::default();
    let mut rng = SmallRng::seed_from_u64(3);
    board.reset(&mut rng).unwrap();
    assert_eq!(
        board.place_one_ship(&mut rng, SHIPS[4]).unwrap_err(),
        BoardError::UnableToPlaceShip
    );
}

#[test]
fn test_placeholder_never_sinks() {
    let mut board = Board::default();
    board.place(SHIPS[4], 5, 5, Orientation::Horizontal).unwrap();
    let hits = Grid::from_cells([(5, 5), (5, 6)]).unwrap();
    assert!(!board.is_ship_fully_sunk(5, 6, &hits));
}

#[test]
fn test_tracked_sinks_when_all_cells_hit() {
    let mut board = Board::new(tracked());
    board.place(SHIPS[4], 5, 5, Orientation::Horizontal).unwrap();
    board.place(SHIPS[3], 6, 5, Orientation::Horizontal).unwrap();

    let mut hits = Grid::from_cells([(5, 5), (6, 5), (6, 6), (6, 7)]).unwrap();
    assert!(!board.is_ship_fully_sunk(5, 5, &hits));
    assert!(board.is_ship_fully_sunk(6, 7, &hits));
    hits.set(5, 6).unwrap();
    assert!(board.is_ship_fully_sunk(5, 6, &hits));
    // open water never sinks anything
    assert!(!board.is_ship_fully_sunk(0, 0, &hits));
}

#[test]
fn test_ship_at() {
    let mut board = Board::default();
    board.place(SHIPS[2], 4, 1, Orientation::Horizontal).unwrap();
    let ship = board.ship_at(4, 3).unwrap();
    assert_eq!(ship.origin(), (4, 1));
    assert_eq!(ship.ship_type().name(), "Cruiser");
    assert!(board.ship_at(4, 4).is_none());
}
