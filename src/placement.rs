//! Random ship placement.

use crate::board::Board;
use crate::common::BoardError;
use crate::config::BOARD_SIZE;
use crate::ship::ShipDef;
use log::debug;
use rand::Rng;

/// Sample start coordinates uniformly over the whole board until `ship`
/// fits. Does not place the ship.
///
/// There is no retry limit: with the standard fleet the board never gets
/// crowded enough for this to matter.
pub fn random_placement<R: Rng + ?Sized>(board: &Board, ship: &ShipDef, rng: &mut R) -> (usize, usize) {
    loop {
        let row = rng.random_range(0..BOARD_SIZE);
        let col = rng.random_range(0..BOARD_SIZE);
        if board.can_place_ship(row, col, ship.length(), ship.orientation()) {
            return (row, col);
        }
    }
}

/// Place every ship of `fleet`, in order, at random positions.
pub fn place_fleet_randomly<R: Rng + ?Sized>(
    board: &mut Board,
    fleet: &[ShipDef],
    rng: &mut R,
) -> Result<(), BoardError> {
    for ship in fleet {
        let (row, col) = random_placement(board, ship, rng);
        board.place_ship(row, col, ship.length(), ship.orientation())?;
        debug!("{} placed at ({}, {})", ship.name(), row, col);
    }
    Ok(())
}
