#![cfg(feature = "std")]
//! Turn controller: an explicit state machine over setup, alternating turns
//! and end-of-game checks.

use std::io::{BufRead, Write};

use log::{info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{
    board::Board,
    common::CellState,
    config::FLEET,
    console::{Console, InputError},
    player_ai::ComputerPlayer,
    player_cli::{CliPlayer, PlacementMode, TurnAction},
    placement,
    ship::ShipDef,
};

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    PlayerWon,
    PlayerLost,
    /// Input ended mid-prompt.
    Aborted,
}

impl Outcome {
    /// Closing line printed for this outcome.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::PlayerWon => "YOU WON! All of the computer's ships have been sunk!",
            Outcome::PlayerLost => "YOU LOST! All of your ships have been sunk!",
            Outcome::Aborted => "Input interrupted. Leaving the game.",
        }
    }
}

/// Controller states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    SetupPlayer,
    SetupComputer,
    PlayerTurn,
    CheckAfterPlayer,
    ComputerTurn,
    CheckAfterComputer,
    GameOver(Outcome),
}

/// Options taken from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameOptions {
    /// Fixed RNG seed; a fresh one is drawn from the OS when absent.
    pub seed: Option<u64>,
    /// Placement mode for the human; prompted for when absent.
    pub placement: Option<PlacementMode>,
}

/// Owns both boards, the RNG and the console, and sequences the game.
pub struct GameController<R, W> {
    console: Console<R, W>,
    rng: SmallRng,
    fleet: &'static [ShipDef],
    player_board: Board,
    computer_board: Board,
    human: CliPlayer,
    computer: ComputerPlayer,
    placement: Option<PlacementMode>,
    phase: Phase,
}

impl<R: BufRead, W: Write> GameController<R, W> {
    pub fn new(input: R, output: W, options: GameOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        Self::with_rng(input, output, rng, options.placement)
    }

    /// Controller with an explicit randomness source.
    pub fn with_rng(input: R, output: W, rng: SmallRng, placement: Option<PlacementMode>) -> Self {
        Self {
            console: Console::new(input, output),
            rng,
            fleet: &FLEET,
            player_board: Board::new(),
            computer_board: Board::new(),
            human: CliPlayer::new(),
            computer: ComputerPlayer::new(),
            placement,
            phase: Phase::SetupPlayer,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    /// Run the current phase and move to the next one.
    pub fn step(&mut self) -> anyhow::Result<Phase> {
        let next = match self.phase {
            Phase::SetupPlayer => self.setup_player()?,
            Phase::SetupComputer => self.setup_computer()?,
            Phase::PlayerTurn => self.player_turn()?,
            Phase::CheckAfterPlayer => self.check_after_player(),
            Phase::ComputerTurn => self.computer_turn()?,
            Phase::CheckAfterComputer => self.check_after_computer(),
            over @ Phase::GameOver(_) => over,
        };
        if next != self.phase {
            info!("{:?} -> {:?}", self.phase, next);
        }
        self.phase = next;
        Ok(next)
    }

    /// Step until the game is over, print the outcome and return it.
    pub fn run(&mut self) -> anyhow::Result<Outcome> {
        loop {
            if let Phase::GameOver(outcome) = self.step()? {
                let out = self.console.out();
                writeln!(out, "\n{}", outcome.message())?;
                writeln!(out, "\nGame over.")?;
                out.flush()?;
                info!("game finished: {:?}", outcome);
                return Ok(outcome);
            }
        }
    }

    fn setup_player(&mut self) -> anyhow::Result<Phase> {
        let mode = match self.placement {
            Some(mode) => mode,
            None => match interrupted(self.human.choose_placement_mode(&mut self.console))? {
                Some(mode) => mode,
                None => return Ok(Phase::GameOver(Outcome::Aborted)),
            },
        };
        match mode {
            PlacementMode::Manual => {
                let placed = self
                    .human
                    .place_ships(&mut self.console, &mut self.player_board, self.fleet);
                if interrupted(placed)?.is_none() {
                    return Ok(Phase::GameOver(Outcome::Aborted));
                }
            }
            PlacementMode::Auto => {
                writeln!(self.console.out(), "\n--- PLAYER places ships at random ---")?;
                placement::place_fleet_randomly(&mut self.player_board, self.fleet, &mut self.rng)?;
                let out = self.console.out();
                writeln!(out, "PLAYER has placed all ships.")?;
                writeln!(out, "\nPLAYER's board:")?;
                write!(out, "{}", self.player_board.view(true))?;
            }
        }
        Ok(Phase::SetupComputer)
    }

    fn setup_computer(&mut self) -> anyhow::Result<Phase> {
        writeln!(self.console.out(), "\n--- COMPUTER places ships at random ---")?;
        self.computer
            .place_ships(&mut self.rng, &mut self.computer_board, self.fleet)?;
        let out = self.console.out();
        writeln!(out, "COMPUTER has placed all ships.")?;
        writeln!(out, "\n=== THE GAME BEGINS ===")?;
        Ok(Phase::PlayerTurn)
    }

    fn player_turn(&mut self) -> anyhow::Result<Phase> {
        let out = self.console.out();
        writeln!(out, "\nPLAYER's board:")?;
        write!(out, "{}", self.player_board.view(true))?;
        writeln!(out, "\nCOMPUTER's board:")?;
        write!(out, "{}", self.computer_board.view(false))?;
        writeln!(out, "\n--- PLAYER's turn ---")?;

        let action = self.human.select_target(&mut self.console, &self.computer_board);
        match interrupted(action)? {
            Some(TurnAction::Attack(row, col)) => {
                let result = self.computer_board.hit(row, col);
                self.report(row, col, result)?;
            }
            Some(TurnAction::ForceWin) => {
                info!("debug code: sinking the computer's fleet");
                self.computer_board.sink_all_ships();
            }
            Some(TurnAction::ForceLoss) => {
                info!("debug code: sinking the player's fleet");
                self.player_board.sink_all_ships();
            }
            None => return Ok(Phase::GameOver(Outcome::Aborted)),
        }
        Ok(Phase::CheckAfterPlayer)
    }

    fn check_after_player(&self) -> Phase {
        if self.computer_board.all_ships_sunk() {
            Phase::GameOver(Outcome::PlayerWon)
        } else if self.player_board.all_ships_sunk() {
            Phase::GameOver(Outcome::PlayerLost)
        } else {
            Phase::ComputerTurn
        }
    }

    fn computer_turn(&mut self) -> anyhow::Result<Phase> {
        writeln!(self.console.out(), "\n--- COMPUTER's turn ---")?;
        match self.computer.select_target(&mut self.rng, &self.player_board) {
            Some((row, col)) => {
                writeln!(self.console.out(), "COMPUTER fires at ({}, {})", row, col)?;
                let result = self.player_board.hit(row, col);
                self.report(row, col, result)?;
            }
            None => warn!("no cell left for the computer to attack"),
        }
        Ok(Phase::CheckAfterComputer)
    }

    fn check_after_computer(&self) -> Phase {
        if self.player_board.all_ships_sunk() {
            Phase::GameOver(Outcome::PlayerLost)
        } else {
            Phase::PlayerTurn
        }
    }

    fn report(&mut self, row: usize, col: usize, result: CellState) -> std::io::Result<()> {
        let out = self.console.out();
        match result {
            CellState::Hit => writeln!(out, "Hit at ({}, {})!", row, col),
            CellState::Miss => writeln!(out, "Miss at ({}, {}).", row, col),
            _ => writeln!(out, "({}, {}) was already attacked.", row, col),
        }
    }
}

/// Map a closed input stream to `None`; other failures propagate.
fn interrupted<T>(result: Result<T, InputError>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InputError::Closed) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
