//! Rook-vs-Bishop: a two-piece chess simulation.
//!
//! A black rook jumps around an 8x8 wrapping board at random while a white
//! bishop stands still. After every half-move the side to move next checks
//! whether it can capture the other; the first capture wins, and fifteen
//! quiet turns end in a stalemate.
//!
//! ## Modules
//!
//! - [`constants`] - Board size, turn limit and starting squares
//! - [`position`] - Wrapping board coordinates
//! - [`dice`] - Coin and dice sources (random or scripted)
//! - [`mover`] - Movement and capture rules per piece kind
//! - [`piece`] - Colors, piece kinds and pieces
//! - [`player`] - A player and their piece
//! - [`board`] - Board state and the turn loop
//! - [`report`] - Narration of the game
//!
//! ## Example
//!
//! ```
//! use rook_vs_bishop::board::{Board, GameConfig, Pacing};
//! use rook_vs_bishop::dice::RandomDice;
//! use rook_vs_bishop::report::EventLog;
//!
//! let mut board = Board::new(GameConfig {
//!     pacing: Pacing::Off,
//!     ..GameConfig::default()
//! });
//! let mut log = EventLog::new();
//! let winner = board.run(&mut RandomDice::with_seed(7), &mut log);
//! assert!(log.turns() <= 15);
//! println!("winner: {winner:?}");
//! ```

pub mod board;
pub mod constants;
pub mod dice;
pub mod mover;
pub mod piece;
pub mod player;
pub mod position;
pub mod report;
