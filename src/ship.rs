//! Ship descriptors for the fixed fleet.

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Coordinates of the `index`-th cell of a run starting at (`row`, `col`).
    pub fn step(self, row: usize, col: usize, index: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (row, col + index),
            Orientation::Vertical => (row + index, col),
        }
    }

    /// Lowercase label used in prompts.
    pub fn label(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

/// Immutable ship descriptor: name, length and fixed orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipDef {
    name: &'static str,
    length: usize,
    orientation: Orientation,
}

impl ShipDef {
    /// Create a new ship definition.
    pub const fn new(name: &'static str, length: usize, orientation: Orientation) -> Self {
        Self {
            name,
            length,
            orientation,
        }
    }

    /// Ship's display name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length in cells.
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Ship's orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}
