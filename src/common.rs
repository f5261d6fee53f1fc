//! Common types for Battleships: cell states and board errors.

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    /// No ship, not attacked.
    #[default]
    Empty,
    /// Ship present, not attacked.
    Ship,
    /// Ship present, attacked.
    Hit,
    /// No ship, attacked.
    Miss,
}

impl CellState {
    /// `true` once the cell has been attacked.
    pub fn is_attacked(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss)
    }

    /// Character used when rendering a board.
    pub fn symbol(self, reveal_ships: bool) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Ship if reveal_ships => 'O',
            CellState::Ship => '.',
            CellState::Hit => 'X',
            CellState::Miss => '*',
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the board.
    OutOfBounds,
    /// Ship run extends past the edge of the board.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "Coordinates are outside the board"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
