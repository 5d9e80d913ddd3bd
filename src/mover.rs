//! Movement and capture rules for each kind of piece.
//!
//! Only two strategies exist: the bishop never moves and captures along
//! diagonals, the rook jumps a random distance along one axis and captures
//! along files and ranks.

use std::fmt;

use tracing::debug;

use crate::dice::Dice;
use crate::piece::Piece;
use crate::position::Position;

/// The axis a rook shifts along.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    File,
    Rank,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::File => write!(f, "file"),
            Axis::Rank => write!(f, "rank"),
        }
    }
}

/// The coin and dice behind one random move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Roll {
    pub coin: u8,
    pub die1: u8,
    pub die2: u8,
}

impl Roll {
    /// Tails (0) moves along the file, heads (1) along the rank.
    pub fn axis(&self) -> Axis {
        if self.coin == 0 { Axis::File } else { Axis::Rank }
    }

    /// Number of squares moved: the sum of both dice, 0..=10.
    pub fn degree(&self) -> i32 {
        i32::from(self.die1) + i32::from(self.die2)
    }
}

/// How a piece moves and what it can capture.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mover {
    /// Never moves; intercepts anything on a shared diagonal.
    Stationary,
    /// Moves a two-dice distance along a coin-chosen axis; intercepts
    /// anything on a shared file or rank.
    RandomAxisShift,
}

impl Mover {
    /// Move `position` in place. Returns the roll when dice were used.
    pub fn advance(&self, position: &mut Position, dice: &mut dyn Dice) -> Option<Roll> {
        match self {
            Mover::Stationary => None,
            Mover::RandomAxisShift => {
                // Sum of two d6, not one uniform draw over 0..=10.
                let roll = Roll {
                    coin: dice.coin_flip(),
                    die1: dice.d6(),
                    die2: dice.d6(),
                };
                match roll.axis() {
                    Axis::File => position.shift_file(roll.degree()),
                    Axis::Rank => position.shift_rank(roll.degree()),
                }
                debug!(
                    coin = roll.coin,
                    die1 = roll.die1,
                    die2 = roll.die2,
                    axis = %roll.axis(),
                    to = %position,
                    "random axis shift"
                );
                Some(roll)
            }
        }
    }

    /// Whether `me` could capture `opponent` from where they stand.
    pub fn has_intercept(&self, me: &Piece, opponent: &Piece) -> bool {
        let a = me.position();
        let b = opponent.position();
        match self {
            // Diagonal: equal file and rank distance, including the same square.
            Mover::Stationary => a.file().abs_diff(b.file()) == a.rank().abs_diff(b.rank()),
            Mover::RandomAxisShift => a.file() == b.file() || a.rank() == b.rank(),
        }
    }
}
