use crate::{
    ai,
    board::Board,
    common::BoardError,
    placement,
    ship::ShipDef,
};
use rand::Rng;

/// Computer opponent: random placement, uniform random targeting.
#[derive(Debug, Default, Clone, Copy)]
pub struct ComputerPlayer;

impl ComputerPlayer {
    pub fn new() -> Self {
        Self
    }

    /// Place the whole fleet at random.
    pub fn place_ships<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        board: &mut Board,
        fleet: &[ShipDef],
    ) -> Result<(), BoardError> {
        placement::place_fleet_randomly(board, fleet, rng)
    }

    /// Choose the next cell to attack on the opponent's `board`.
    pub fn select_target<R: Rng + ?Sized>(&mut self, rng: &mut R, board: &Board) -> Option<(usize, usize)> {
        ai::random_target(board, rng)
    }
}
