//! Squares on the 8x8 board.
//!
//! A [`Position`] is a (file, rank) pair that always stays on the board.
//! Shifting past either edge wraps around to the opposite side, so a rook
//! moving ten files from `a1` ends up on `c1`.

use std::fmt;
use std::str::FromStr;

use crate::constants::{BOARD_SIZE, FILE_LETTERS};

/// Error returned when a square such as `"c3"` cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePositionError {
    /// Input was not exactly one file letter followed by one rank digit
    Length(usize),
    /// File letter outside a-h
    File(char),
    /// Rank digit outside 1-8
    Rank(char),
}

impl fmt::Display for ParsePositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsePositionError::Length(n) => {
                write!(f, "expected a square like c3, got {n} characters")
            }
            ParsePositionError::File(c) => write!(f, "invalid file '{c}', expected a-h"),
            ParsePositionError::Rank(c) => write!(f, "invalid rank '{c}', expected 1-8"),
        }
    }
}

impl std::error::Error for ParsePositionError {}

/// Wrap any integer back onto the board, e.g. `-1 -> 7` and `16 -> 0`.
#[inline]
pub fn wrap(value: i32) -> i32 {
    value.rem_euclid(BOARD_SIZE)
}

/// A square on the board. Both coordinates are always in `0..BOARD_SIZE`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    file: i32,
    rank: i32,
}

impl Position {
    /// Create a position, wrapping out-of-range coordinates onto the board.
    pub fn new(file: i32, rank: i32) -> Self {
        Self {
            file: wrap(file),
            rank: wrap(rank),
        }
    }

    #[inline]
    pub fn file(&self) -> i32 {
        self.file
    }

    #[inline]
    pub fn rank(&self) -> i32 {
        self.rank
    }

    /// Shift left (negative) or right (positive), wrapping at the edges.
    pub fn shift_file(&mut self, degree: i32) {
        self.file = wrap(self.file + degree);
    }

    /// Shift down (negative) or up (positive), wrapping at the edges.
    pub fn shift_rank(&mut self, degree: i32) {
        self.rank = wrap(self.rank + degree);
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = FILE_LETTERS[self.file as usize] as char;
        write!(f, "{letter}{}", self.rank + 1)
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        let &[file_ch, rank_ch] = chars.as_slice() else {
            return Err(ParsePositionError::Length(chars.len()));
        };

        let file = match file_ch.to_ascii_lowercase() {
            c @ 'a'..='h' => c as i32 - 'a' as i32,
            _ => return Err(ParsePositionError::File(file_ch)),
        };
        let rank = match rank_ch {
            c @ '1'..='8' => c as i32 - '1' as i32,
            _ => return Err(ParsePositionError::Rank(rank_ch)),
        };

        Ok(Position { file, rank })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_negative() {
        assert_eq!(wrap(-1), 7);
        assert_eq!(wrap(-8), 0);
        assert_eq!(wrap(-17), 7);
    }

    #[test]
    fn test_wrap_overflow() {
        assert_eq!(wrap(8), 0);
        assert_eq!(wrap(16), 0);
        assert_eq!(wrap(11), 3);
    }

    #[test]
    fn test_wrap_always_on_board() {
        for x in -40..40 {
            for degree in -12..12 {
                let w = wrap(x + degree);
                assert!((0..BOARD_SIZE).contains(&w), "wrap({}) = {w}", x + degree);
            }
        }
    }

    #[test]
    fn test_shift_file_wraps_left() {
        let mut pos = Position::new(0, 3);
        pos.shift_file(-1);
        assert_eq!(pos.file(), 7);
        assert_eq!(pos.rank(), 3);
    }

    #[test]
    fn test_shift_file_wraps_right() {
        let mut pos = Position::new(7, 0);
        pos.shift_file(9);
        assert_eq!(pos.file(), 0);
    }

    #[test]
    fn test_shift_rank() {
        let mut pos = Position::new(4, 6);
        pos.shift_rank(10);
        assert_eq!(pos.rank(), 0);
        assert_eq!(pos.file(), 4);
    }

    #[test]
    fn test_new_wraps() {
        assert_eq!(Position::new(9, -1), Position::new(1, 7));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(2, 2).to_string(), "c3");
        assert_eq!(Position::new(7, 0).to_string(), "h1");
        assert_eq!(Position::new(0, 7).to_string(), "a8");
    }

    #[test]
    fn test_parse() {
        assert_eq!("c3".parse::<Position>(), Ok(Position::new(2, 2)));
        assert_eq!("H1".parse::<Position>(), Ok(Position::new(7, 0)));
        assert_eq!(" a8 ".parse::<Position>(), Ok(Position::new(0, 7)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Position>(), Err(ParsePositionError::Length(0)));
        assert_eq!("c10".parse::<Position>(), Err(ParsePositionError::Length(3)));
        assert_eq!("i3".parse::<Position>(), Err(ParsePositionError::File('i')));
        assert_eq!("c9".parse::<Position>(), Err(ParsePositionError::Rank('9')));
        assert_eq!("c0".parse::<Position>(), Err(ParsePositionError::Rank('0')));
    }
}
