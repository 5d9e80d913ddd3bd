use crate::dice::Dice;
use crate::mover::Roll;
use crate::piece::{Color, Piece, PieceKind};
use crate::position::Position;

/// A player and the single piece they control.
#[derive(Clone, Debug)]
pub struct Player {
    color: Color,
    piece: Piece,
}

impl Player {
    /// The piece is created in the player's color, so the two always agree.
    pub fn new(color: Color, kind: PieceKind, position: Position) -> Self {
        Self {
            color,
            piece: Piece::new(color, kind, position),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    /// Take this player's move. With one piece there is nothing to choose.
    pub fn make_move(&mut self, dice: &mut dyn Dice) -> Option<Roll> {
        self.piece.advance(dice)
    }

    /// Whether this player's piece can capture the opponent's piece.
    pub fn check_for_win(&self, opponent: &Player) -> bool {
        self.piece.has_intercept(&opponent.piece)
    }
}
