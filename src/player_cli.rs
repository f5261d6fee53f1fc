#![cfg(feature = "std")]

use std::io::{BufRead, Write};

use crate::{
    board::Board,
    config::{BOARD_SIZE, LOSE_CODE, WIN_CODE},
    console::{Console, InputError},
    ship::ShipDef,
};

/// How the human's fleet is put on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PlacementMode {
    /// Prompt for every ship's start cell.
    Manual,
    /// Scatter the fleet at random.
    Auto,
}

/// What the human chose to do on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAction {
    /// Fire at (row, col) on the computer's board.
    Attack(usize, usize),
    /// Debug code: sink the computer's fleet.
    ForceWin,
    /// Debug code: sink the player's own fleet.
    ForceLoss,
}

const BAD_COORD: &str = "Invalid coordinates, please choose coordinates between 0 and 9.";

/// Parse a board coordinate: ASCII digits only, value 0-9.
pub fn parse_coord(input: &str) -> Option<usize> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    input.parse::<usize>().ok().filter(|&v| v < BOARD_SIZE)
}

/// Interactive player reading from a [`Console`].
#[derive(Debug, Default, Clone, Copy)]
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }

    /// Ask for manual (`m`) or automatic (`a`) placement until one is given.
    pub fn choose_placement_mode<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<PlacementMode, InputError> {
        loop {
            let line = console.prompt_line("Place your ships manually (m) or automatically (a)? ")?;
            match line.chars().next().map(|c| c.to_ascii_lowercase()) {
                Some('m') => return Ok(PlacementMode::Manual),
                Some('a') => return Ok(PlacementMode::Auto),
                _ => writeln!(console.out(), "Invalid option. Choose 'm' or 'a'.")?,
            }
        }
    }

    /// Prompt for the start cell of every ship in `fleet`, in order.
    pub fn place_ships<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
        board: &mut Board,
        fleet: &[ShipDef],
    ) -> Result<(), InputError> {
        writeln!(console.out(), "\n--- Ship placement for PLAYER (manual) ---")?;
        for ship in fleet {
            loop {
                writeln!(
                    console.out(),
                    "\nPlace: {} (length = {}, orientation = {})",
                    ship.name(),
                    ship.length(),
                    ship.orientation().label()
                )?;
                write!(console.out(), "{}", board.view(true))?;

                let Some(row) = read_coord(console, "Enter START ROW (0-9): ")? else {
                    continue;
                };
                let Some(col) = read_coord(console, "Enter START COLUMN (0-9): ")? else {
                    continue;
                };
                match board.place_ship(row, col, ship.length(), ship.orientation()) {
                    Ok(()) => {
                        writeln!(console.out(), "Ship placed!")?;
                        break;
                    }
                    Err(e) => writeln!(console.out(), "The ship cannot be placed here: {}.", e)?,
                }
            }
        }
        writeln!(console.out(), "\nPLAYER's final board:")?;
        write!(console.out(), "{}", board.view(true))?;
        Ok(())
    }

    /// Read an attack on `opponent`, or one of the debug codes at the row
    /// prompt. Re-prompts until a fresh in-bounds cell is given.
    pub fn select_target<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
        opponent: &Board,
    ) -> Result<TurnAction, InputError> {
        loop {
            let token = console.prompt_token("Enter attack ROW (0-9) or debug code (win / lose): ")?;
            if token == WIN_CODE {
                writeln!(console.out(), "[DEBUG] Code 'win' activated: instant victory for the player!")?;
                return Ok(TurnAction::ForceWin);
            }
            if token == LOSE_CODE {
                writeln!(console.out(), "[DEBUG] Code 'lose' activated: instant defeat for the player!")?;
                return Ok(TurnAction::ForceLoss);
            }
            let Some(row) = parse_coord(&token) else {
                writeln!(console.out(), "{}", BAD_COORD)?;
                continue;
            };
            let Some(col) = read_coord(console, "Enter attack COLUMN (0-9): ")? else {
                continue;
            };
            if opponent.get_cell(row, col).is_attacked() {
                writeln!(console.out(), "You already fired there. Choose another position.")?;
                continue;
            }
            return Ok(TurnAction::Attack(row, col));
        }
    }
}

/// Prompt for one coordinate; `None` (after a notice) when it is invalid.
fn read_coord<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
) -> Result<Option<usize>, InputError> {
    let token = console.prompt_token(prompt)?;
    let coord = parse_coord(&token);
    if coord.is_none() {
        writeln!(console.out(), "{}", BAD_COORD)?;
    }
    Ok(coord)
}
