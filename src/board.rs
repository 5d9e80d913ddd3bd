//! The board and the turn loop.
//!
//! A board holds two players with fixed roles: the black rook moves at
//! random every turn, the white bishop stands still. Each full turn is
//!
//! 1. the rook moves, then the bishop checks whether it can capture it;
//! 2. the bishop takes its (empty) move, then the rook checks whether it can
//!    capture the bishop.
//!
//! The first successful check ends the game. If no check succeeds within the
//! turn limit the game is a stalemate.

use std::fmt;
use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use crate::constants::{INTERCEPTOR_START, MOVER_START, PACING_DELAY, TURN_LIMIT};
use crate::dice::Dice;
use crate::piece::{Color, PieceKind};
use crate::player::Player;
use crate::position::Position;
use crate::report::Reporter;

/// Delay between reported turns. Purely cosmetic.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pacing {
    Off,
    Every(Duration),
}

impl Pacing {
    pub fn pause(&self) {
        if let Pacing::Every(delay) = *self {
            thread::sleep(delay);
        }
    }
}

/// Settings for one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Maximum number of full turns
    pub turn_limit: usize,
    pub pacing: Pacing,
    /// Starting square of the rook
    pub mover_start: Position,
    /// Starting square of the bishop
    pub interceptor_start: Position,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            turn_limit: TURN_LIMIT,
            pacing: Pacing::Every(PACING_DELAY),
            mover_start: Position::new(MOVER_START.0, MOVER_START.1),
            interceptor_start: Position::new(INTERCEPTOR_START.0, INTERCEPTOR_START.1),
        }
    }
}

/// Where the game stands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    /// Waiting to play the given turn (0-based).
    Running(usize),
    /// Over: the winning color, or `None` for a stalemate.
    Finished(Option<Color>),
}

impl GameState {
    pub fn is_finished(&self) -> bool {
        matches!(self, GameState::Finished(_))
    }
}

pub struct Board {
    mover: Player,
    interceptor: Player,
    turn_limit: usize,
    pacing: Pacing,
    state: GameState,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Board {
    pub fn new(config: GameConfig) -> Self {
        Self {
            mover: Player::new(Color::Black, PieceKind::Rook, config.mover_start),
            interceptor: Player::new(Color::White, PieceKind::Bishop, config.interceptor_start),
            turn_limit: config.turn_limit,
            pacing: config.pacing,
            state: GameState::Running(0),
        }
    }

    /// The player whose piece moves at random.
    pub fn mover(&self) -> &Player {
        &self.mover
    }

    /// The player whose piece stands still.
    pub fn interceptor(&self) -> &Player {
        &self.interceptor
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn turn_limit(&self) -> usize {
        self.turn_limit
    }

    /// Play one full turn and return the new state.
    ///
    /// Does nothing once the game is finished. Reaching the turn limit
    /// finishes the game as a stalemate.
    pub fn play_turn(&mut self, dice: &mut dyn Dice, reporter: &mut dyn Reporter) -> GameState {
        let GameState::Running(turn) = self.state else {
            return self.state;
        };
        if turn >= self.turn_limit {
            return self.stalemate(reporter);
        }

        reporter.turn_started(turn);

        if let Some(roll) = self.mover.make_move(dice) {
            reporter.rolled(self.mover.piece(), &roll);
        }
        // Bishop to move next: can it take the rook where it landed?
        if self.interceptor.check_for_win(&self.mover) {
            return self.finish(Role::Interceptor, reporter);
        }

        if let Some(roll) = self.interceptor.make_move(dice) {
            reporter.rolled(self.interceptor.piece(), &roll);
        }
        if self.mover.check_for_win(&self.interceptor) {
            return self.finish(Role::Mover, reporter);
        }

        debug!(turn, rook = %self.mover.piece().position(), "no capture");
        reporter.snapshot(self);

        if turn + 1 >= self.turn_limit {
            return self.stalemate(reporter);
        }
        self.state = GameState::Running(turn + 1);
        self.state
    }

    /// Play until someone wins or the turn limit runs out.
    /// Returns the winner, or `None` for a stalemate.
    pub fn run(&mut self, dice: &mut dyn Dice, reporter: &mut dyn Reporter) -> Option<Color> {
        if self.state == GameState::Running(0) {
            reporter.game_started(self);
        }
        loop {
            match self.play_turn(dice, reporter) {
                GameState::Finished(winner) => return winner,
                GameState::Running(_) => self.pacing.pause(),
            }
        }
    }

    fn finish(&mut self, winner: Role, reporter: &mut dyn Reporter) -> GameState {
        let (capturer, captured) = match winner {
            Role::Mover => (&self.mover, &self.interceptor),
            Role::Interceptor => (&self.interceptor, &self.mover),
        };
        let color = capturer.color();
        info!(winner = %color, rook = %self.mover.piece().position(), "capture");

        reporter.snapshot(self);
        reporter.captured(capturer.piece(), captured.piece());
        reporter.winner(color);

        self.state = GameState::Finished(Some(color));
        self.state
    }

    fn stalemate(&mut self, reporter: &mut dyn Reporter) -> GameState {
        info!(turns = self.turn_limit, "stalemate");
        reporter.stalemate(self.turn_limit);
        self.state = GameState::Finished(None);
        self.state
    }
}

#[derive(Copy, Clone)]
enum Role {
    Mover,
    Interceptor,
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----Current Board Positions----")?;
        writeln!(f, "{}", self.interceptor.piece())?;
        writeln!(f, "{}", self.mover.piece())
    }
}
