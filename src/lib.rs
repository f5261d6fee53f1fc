#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod ai;
mod board;
mod common;
mod config;
mod placement;
mod player_ai;
mod ship;
#[cfg(feature = "std")]
mod console;
#[cfg(feature = "std")]
mod game;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use placement::*;
pub use player_ai::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use console::*;
#[cfg(feature = "std")]
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{format_record, init_logging, level_from, LOG_ENV};
#[cfg(feature = "std")]
pub use player_cli::*;
