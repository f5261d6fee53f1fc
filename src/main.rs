use std::io;

use anyhow::Context;
use battleships::{init_logging, GameController, GameOptions, PlacementMode};
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about = "Battleships against the computer on two 10x10 boards", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, value_enum, help = "Place your ships manually or automatically instead of being asked")]
    placement: Option<PlacementMode>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }

    let options = GameOptions {
        seed: cli.seed,
        placement: cli.placement,
    };
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut game = GameController::new(stdin.lock(), stdout.lock(), options);
    game.run().context("game session failed")?;
    Ok(())
}
