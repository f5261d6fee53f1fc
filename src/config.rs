use crate::ship::{Orientation, ShipDef};

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;

/// The fleet placed by both sides, in placement order.
pub const FLEET: [ShipDef; NUM_SHIPS] = [
    ShipDef::new("Cruiser", 3, Orientation::Horizontal),
    ShipDef::new("Battleship", 4, Orientation::Horizontal),
    ShipDef::new("Destroyer", 2, Orientation::Horizontal),
    ShipDef::new("Patrol Boat", 2, Orientation::Vertical),
    ShipDef::new("Submarine", 3, Orientation::Vertical),
];

/// Total number of ship segments in the fleet.
pub const TOTAL_SHIP_CELLS: usize = fleet_cells(&FLEET);

const fn fleet_cells(fleet: &[ShipDef]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fleet.len() {
        total += fleet[i].length();
        i += 1;
    }
    total
}

/// Debug code entered at the row prompt: sink the computer's fleet.
pub const WIN_CODE: &str = "win";
/// Debug code entered at the row prompt: sink the player's own fleet.
pub const LOSE_CODE: &str = "lose";
