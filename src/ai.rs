//! Uniform random targeting for the computer side.

use crate::{board::Board, config::BOARD_SIZE};
use rand::Rng;

/// Pick a uniformly random cell of `board` that has not been attacked yet.
///
/// Retries until an `Empty` or `Ship` cell comes up. Returns `None` only when
/// every cell has already been attacked.
pub fn random_target<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<(usize, usize)> {
    if board.cells().all(|(_, state)| state.is_attacked()) {
        return None;
    }
    loop {
        let row = rng.random_range(0..BOARD_SIZE);
        let col = rng.random_range(0..BOARD_SIZE);
        if !board.get_cell(row, col).is_attacked() {
            return Some((row, col));
        }
    }
}
