use battleships::{
    place_fleet_randomly, random_placement, random_target, Board, CellState, ComputerPlayer,
    BOARD_SIZE, FLEET, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_random_fleet_no_overlap() {
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        place_fleet_randomly(&mut board, &FLEET, &mut rng).unwrap();
        assert_eq!(
            board.count(CellState::Ship),
            TOTAL_SHIP_CELLS,
            "all ships should be placed without overlap (seed {})",
            seed
        );
        assert!(!board.all_ships_sunk());
    }
}

#[test]
fn test_random_placement_fits() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut board = Board::new();
    for ship in FLEET.iter() {
        let (r, c) = random_placement(&board, ship, &mut rng);
        assert!(board.can_place_ship(r, c, ship.length(), ship.orientation()));
        board.place_ship(r, c, ship.length(), ship.orientation()).unwrap();
    }
}

#[test]
fn test_reproducible_rng() {
    let mut rng1 = SmallRng::seed_from_u64(12345);
    let mut rng2 = SmallRng::seed_from_u64(12345);
    let mut board1 = Board::new();
    let mut board2 = Board::new();
    ComputerPlayer::new().place_ships(&mut rng1, &mut board1, &FLEET).unwrap();
    ComputerPlayer::new().place_ships(&mut rng2, &mut board2, &FLEET).unwrap();
    assert_eq!(board1, board2);
}

#[test]
fn test_random_target_skips_attacked_cells() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = Board::new();
    place_fleet_randomly(&mut board, &FLEET, &mut rng).unwrap();
    // leave only (9, 9) unattacked
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            if (r, c) != (9, 9) {
                board.hit(r, c);
            }
        }
    }
    for _ in 0..10 {
        assert_eq!(random_target(&board, &mut rng), Some((9, 9)));
    }
    board.hit(9, 9);
    assert_eq!(random_target(&board, &mut rng), None);
}

#[test]
fn test_computer_sinks_fleet_within_board_size() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut computer = ComputerPlayer::new();
    let mut board = Board::new();
    computer.place_ships(&mut rng, &mut board, &FLEET).unwrap();

    let mut shots = 0;
    while !board.all_ships_sunk() {
        let (r, c) = computer.select_target(&mut rng, &board).unwrap();
        assert!(!board.get_cell(r, c).is_attacked());
        board.hit(r, c);
        shots += 1;
        assert!(shots <= BOARD_SIZE * BOARD_SIZE, "computer repeated a target");
    }
}
