//! Reporting of game progress.
//!
//! The board calls a [`Reporter`] at fixed points of every turn. The
//! [`ConsoleReporter`] narrates the game on stdout; [`EventLog`] keeps the
//! same events in memory so tests can inspect exactly what was reported.

use std::io::{self, Write};

use crate::board::Board;
use crate::mover::Roll;
use crate::piece::{Color, Piece};

/// Receives everything the game reports, in order.
pub trait Reporter {
    /// Called once before the first turn.
    fn game_started(&mut self, board: &Board);

    fn turn_started(&mut self, turn: usize);

    /// A piece rolled the dice and moved.
    fn rolled(&mut self, piece: &Piece, roll: &Roll);

    /// Current positions of both pieces.
    fn snapshot(&mut self, board: &Board);

    fn captured(&mut self, capturer: &Piece, captured: &Piece);

    fn winner(&mut self, color: Color);

    /// The turn limit ran out with no capture.
    fn stalemate(&mut self, turns: usize);
}

/// Narrates the game on stdout.
pub struct ConsoleReporter<W: Write = io::Stdout> {
    out: W,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    // Reporting is best effort; a closed stdout must not stop the game.
    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        let _ = writeln!(self.out, "{text}");
        let _ = self.out.flush();
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn game_started(&mut self, board: &Board) {
        self.line(format_args!("----Starting a game of chess----"));
        self.snapshot(board);
    }

    fn turn_started(&mut self, turn: usize) {
        self.line(format_args!("\n----Running turn {turn}----"));
    }

    fn rolled(&mut self, piece: &Piece, roll: &Roll) {
        let kind = piece.kind();
        self.line(format_args!("Calculating the {kind}'s move"));
        self.line(format_args!("The outcome of the coin toss was {}", roll.coin));
        self.line(format_args!(
            "The die rolls were {} and {} for a sum of {}",
            roll.die1,
            roll.die2,
            roll.degree()
        ));
        self.line(format_args!(
            "changing the {kind}'s {} by {} spaces",
            roll.axis(),
            roll.degree()
        ));
    }

    fn snapshot(&mut self, board: &Board) {
        let _ = write!(self.out, "{board}");
        let _ = self.out.flush();
    }

    fn captured(&mut self, capturer: &Piece, captured: &Piece) {
        self.line(format_args!(
            "The {} {} is able to capture the {} {}",
            capturer.color(),
            capturer.kind(),
            captured.color(),
            captured.kind()
        ));
    }

    fn winner(&mut self, color: Color) {
        self.line(format_args!("{} is the winner!", color.title()));
    }

    fn stalemate(&mut self, turns: usize) {
        self.line(format_args!("No winner was found after {turns} moves. Stalemate!"));
    }
}

/// One reported event, as recorded by [`EventLog`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    GameStarted(String),
    TurnStarted(usize),
    Rolled(Piece, Roll),
    Snapshot(String),
    Captured { capturer: Piece, captured: Piece },
    Winner(Color),
    Stalemate(usize),
}

/// Records every event in memory.
#[derive(Default, Debug)]
pub struct EventLog {
    pub events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of turns that were started.
    pub fn turns(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::TurnStarted(_)))
            .count()
    }

    pub fn rolls(&self) -> impl Iterator<Item = &Roll> + '_ {
        self.events.iter().filter_map(|e| match e {
            Event::Rolled(_, roll) => Some(roll),
            _ => None,
        })
    }
}

impl Reporter for EventLog {
    fn game_started(&mut self, board: &Board) {
        self.events.push(Event::GameStarted(board.to_string()));
    }

    fn turn_started(&mut self, turn: usize) {
        self.events.push(Event::TurnStarted(turn));
    }

    fn rolled(&mut self, piece: &Piece, roll: &Roll) {
        self.events.push(Event::Rolled(piece.clone(), *roll));
    }

    fn snapshot(&mut self, board: &Board) {
        self.events.push(Event::Snapshot(board.to_string()));
    }

    fn captured(&mut self, capturer: &Piece, captured: &Piece) {
        self.events.push(Event::Captured {
            capturer: capturer.clone(),
            captured: captured.clone(),
        });
    }

    fn winner(&mut self, color: Color) {
        self.events.push(Event::Winner(color));
    }

    fn stalemate(&mut self, turns: usize) {
        self.events.push(Event::Stalemate(turns));
    }
}
