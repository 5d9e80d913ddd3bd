//! Board geometry, game limits and the reference starting squares.

use std::time::Duration;

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN). Files and ranks both run from 0 to `BOARD_SIZE - 1`.
pub const BOARD_SIZE: i32 = 8;

/// Letters used to render files, indexed by file number.
pub const FILE_LETTERS: &[u8; BOARD_SIZE as usize] = b"abcdefgh";

// =============================================================================
// Game Parameters
// =============================================================================

/// Maximum number of full turns before the game is declared a stalemate.
pub const TURN_LIMIT: usize = 15;

/// Faces on each die. Rolls are zero-indexed, so a die shows 0..=5.
pub const DIE_SIDES: u8 = 6;

/// Faces on the coin. 0 selects the file axis, 1 the rank axis.
pub const COIN_SIDES: u8 = 2;

/// Pause between reported turns so the narration can be followed live.
pub const PACING_DELAY: Duration = Duration::from_secs(2);

// =============================================================================
// Starting Squares
// =============================================================================

/// The white bishop starts on c3.
pub const INTERCEPTOR_START: (i32, i32) = (2, 2);

/// The black rook starts on h1.
pub const MOVER_START: (i32, i32) = (7, 0);
