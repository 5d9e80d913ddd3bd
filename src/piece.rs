use std::fmt;

use crate::dice::Dice;
use crate::mover::{Mover, Roll};
use crate::position::Position;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Capitalized name, for sentences like "White is the winner!".
    pub fn title(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Bishop,
    Rook,
}

impl PieceKind {
    /// The movement strategy every piece of this kind uses.
    pub fn mover(self) -> Mover {
        match self {
            PieceKind::Bishop => Mover::Stationary,
            PieceKind::Rook => Mover::RandomAxisShift,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Bishop => write!(f, "bishop"),
            PieceKind::Rook => write!(f, "rook"),
        }
    }
}

/// A piece on the board. Its mover is fixed by its kind at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    color: Color,
    kind: PieceKind,
    position: Position,
    mover: Mover,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind, position: Position) -> Self {
        Self {
            color,
            kind,
            position,
            mover: kind.mover(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn mover(&self) -> Mover {
        self.mover
    }

    /// Move this piece according to its mover.
    pub fn advance(&mut self, dice: &mut dyn Dice) -> Option<Roll> {
        self.mover.advance(&mut self.position, dice)
    }

    /// Whether this piece could capture `opponent` right now.
    pub fn has_intercept(&self, opponent: &Piece) -> bool {
        self.mover.has_intercept(self, opponent)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.color, self.kind, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;

    #[test]
    fn test_kind_selects_mover() {
        let bishop = Piece::new(Color::White, PieceKind::Bishop, Position::new(2, 2));
        let rook = Piece::new(Color::Black, PieceKind::Rook, Position::new(7, 0));
        assert_eq!(bishop.mover(), Mover::Stationary);
        assert_eq!(rook.mover(), Mover::RandomAxisShift);
    }

    #[test]
    fn test_display() {
        let bishop = Piece::new(Color::White, PieceKind::Bishop, Position::new(2, 2));
        assert_eq!(bishop.to_string(), "white bishop: c3");
        let rook = Piece::new(Color::Black, PieceKind::Rook, Position::new(7, 0));
        assert_eq!(rook.to_string(), "black rook: h1");
    }

    #[test]
    fn test_advance_moves_own_position() {
        let mut dice = ScriptedDice::new(&[0], &[1, 0]).unwrap();
        let mut rook = Piece::new(Color::Black, PieceKind::Rook, Position::new(7, 0));
        rook.advance(&mut dice);
        assert_eq!(rook.position(), Position::new(0, 0));
        assert_eq!(rook.to_string(), "black rook: a1");
    }

    #[test]
    fn test_intercept_uses_own_rule() {
        let bishop = Piece::new(Color::White, PieceKind::Bishop, Position::new(2, 2));
        let rook = Piece::new(Color::Black, PieceKind::Rook, Position::new(2, 6));
        // Same file: the rook sees the bishop, the bishop does not see the rook.
        assert!(rook.has_intercept(&bishop));
        assert!(!bishop.has_intercept(&rook));
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(Color::Black.opponent(), Color::White);
    }
}
