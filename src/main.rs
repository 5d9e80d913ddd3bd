//! Rook-vs-Bishop: watch a random rook try to dodge a stationary bishop.
//!
//! ## Usage
//!
//! - `rook-vs-bishop` - Play the reference game (rook h1, bishop c3, 15 turns)
//! - `rook-vs-bishop --seed 42 --delay-ms 0` - Replay a game instantly
//! - `rook-vs-bishop -vv` - Also log every roll to stderr

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rook_vs_bishop::board::{Board, GameConfig, Pacing};
use rook_vs_bishop::constants::{PACING_DELAY, TURN_LIMIT};
use rook_vs_bishop::dice::RandomDice;
use rook_vs_bishop::position::Position;
use rook_vs_bishop::report::ConsoleReporter;

/// Rook-vs-Bishop: a two-piece chess simulation
#[derive(Parser)]
#[command(name = "rook-vs-bishop")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Maximum number of full turns before a stalemate
    #[arg(long, default_value_t = TURN_LIMIT)]
    turns: usize,

    /// Pause between turns, in milliseconds (0 disables)
    #[arg(long, default_value_t = PACING_DELAY.as_millis() as u64)]
    delay_ms: u64,

    /// Seed for the dice, to replay a game
    #[arg(long)]
    seed: Option<u64>,

    /// Starting square of the black rook
    #[arg(long, default_value = "h1")]
    rook: String,

    /// Starting square of the white bishop
    #[arg(long, default_value = "c3")]
    bishop: String,

    /// Log more detail to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mover_start: Position = cli
        .rook
        .parse()
        .with_context(|| format!("invalid --rook square {:?}", cli.rook))?;
    let interceptor_start: Position = cli
        .bishop
        .parse()
        .with_context(|| format!("invalid --bishop square {:?}", cli.bishop))?;

    let pacing = match cli.delay_ms {
        0 => Pacing::Off,
        ms => Pacing::Every(Duration::from_millis(ms)),
    };

    let mut board = Board::new(GameConfig {
        turn_limit: cli.turns,
        pacing,
        mover_start,
        interceptor_start,
    });
    let mut dice = match cli.seed {
        Some(seed) => RandomDice::with_seed(seed),
        None => RandomDice::new(),
    };

    board.run(&mut dice, &mut ConsoleReporter::new());
    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
