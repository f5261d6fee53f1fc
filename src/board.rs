//! Game board state: a fixed grid of cell states.

use crate::common::{BoardError, CellState};
use crate::config::BOARD_SIZE;
use crate::ship::Orientation;
use alloc::string::{String, ToString};
use core::fmt;
use log::{debug, error};

type Grid = [[CellState; BOARD_SIZE]; BOARD_SIZE];

/// One side's board: ship placements, hits and misses.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board (no ships placed, nothing attacked).
    pub fn new() -> Self {
        Board {
            grid: [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Returns `true` when (`row`, `col`) lies on the board.
    pub fn is_inside(&self, row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE
    }

    /// Check whether a ship of `length` fits at (`row`, `col`) without
    /// leaving the board or touching an occupied cell.
    pub fn check_placement(
        &self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        if !self.is_inside(row, col) {
            return Err(BoardError::ShipOutOfBounds);
        }
        let start = match orientation {
            Orientation::Horizontal => col,
            Orientation::Vertical => row,
        };
        if length > BOARD_SIZE - start {
            return Err(BoardError::ShipOutOfBounds);
        }
        for i in 0..length {
            let (r, c) = orientation.step(row, col, i);
            if self.grid[r][c] != CellState::Empty {
                return Err(BoardError::ShipOverlaps);
            }
        }
        Ok(())
    }

    /// Pure predicate form of [`Board::check_placement`].
    pub fn can_place_ship(
        &self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> bool {
        self.check_placement(row, col, length, orientation).is_ok()
    }

    /// Place a ship run. Either every cell becomes `Ship` or the board is
    /// left untouched.
    pub fn place_ship(
        &mut self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        self.check_placement(row, col, length, orientation)?;
        for i in 0..length {
            let (r, c) = orientation.step(row, col, i);
            self.grid[r][c] = CellState::Ship;
        }
        debug!(
            "placed ship of length {} at ({}, {}) {:?}",
            length, row, col, orientation
        );
        Ok(())
    }

    /// Resolve an attack at (`row`, `col`).
    ///
    /// `Ship` becomes `Hit` and `Empty` becomes `Miss`; the new state is
    /// returned. Cells already attacked are left alone and their state is
    /// returned as is. Out-of-bounds coordinates are logged and yield
    /// `Empty` without touching the board.
    pub fn hit(&mut self, row: usize, col: usize) -> CellState {
        if !self.is_inside(row, col) {
            error!("attack at ({}, {}): {}", row, col, BoardError::OutOfBounds);
            return CellState::Empty;
        }
        let next = match self.grid[row][col] {
            CellState::Ship => CellState::Hit,
            CellState::Empty => CellState::Miss,
            terminal => {
                debug!("({}, {}) already attacked", row, col);
                terminal
            }
        };
        self.grid[row][col] = next;
        next
    }

    /// State at (`row`, `col`); `Empty` for coordinates off the board.
    pub fn get_cell(&self, row: usize, col: usize) -> CellState {
        if !self.is_inside(row, col) {
            return CellState::Empty;
        }
        self.grid[row][col]
    }

    /// Returns `true` when no unhit ship cell remains.
    pub fn all_ships_sunk(&self) -> bool {
        self.remaining_ship_cells() == 0
    }

    /// Mark every ship cell as hit. Used by the debug codes.
    pub fn sink_all_ships(&mut self) {
        for cell in self.grid.iter_mut().flatten() {
            if *cell == CellState::Ship {
                *cell = CellState::Hit;
            }
        }
    }

    /// Number of ship cells not yet hit.
    pub fn remaining_ship_cells(&self) -> usize {
        self.count(CellState::Ship)
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.grid.iter().flatten().filter(|&&c| c == state).count()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), CellState)> + '_ {
        self.grid.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().map(move |(c, &state)| ((r, c), state))
        })
    }

    /// Display adapter; ships are drawn only when `reveal_ships` is set.
    pub fn view(&self, reveal_ships: bool) -> BoardView<'_> {
        BoardView {
            board: self,
            reveal_ships,
        }
    }

    /// Render the board as text, see [`BoardView`].
    pub fn render(&self, reveal_ships: bool) -> String {
        self.view(reveal_ships).to_string()
    }
}

/// Text rendering of a [`Board`]: a header of column indices, then one line
/// per row prefixed with its index.
pub struct BoardView<'a> {
    board: &'a Board,
    reveal_ships: bool,
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..BOARD_SIZE {
            write!(f, "{} ", c)?;
        }
        writeln!(f)?;
        for (r, row) in self.board.grid.iter().enumerate() {
            write!(f, "{}  ", r)?;
            for cell in row {
                write!(f, "{} ", cell.symbol(self.reveal_ships))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        write!(f, "{}", self.view(true))?;
        write!(f, "}}")
    }
}
