//! Randomness sources for the rook's moves.
//!
//! The rook flips a coin to pick an axis and rolls two six-sided dice for the
//! distance. Everything random goes through the [`Dice`] trait so games can be
//! replayed exactly, either from a seed ([`RandomDice::with_seed`]) or from a
//! fixed script ([`ScriptedDice`]).

use std::fmt;

use crate::constants::{COIN_SIDES, DIE_SIDES};

/// A source of coin flips and zero-indexed die rolls.
pub trait Dice {
    /// Flip a coin: 0 or 1.
    fn coin_flip(&mut self) -> u8;

    /// Roll a six-sided die: 0..=5.
    fn d6(&mut self) -> u8;
}

/// Dice backed by a `fastrand` generator.
pub struct RandomDice {
    rng: fastrand::Rng,
}

impl Default for RandomDice {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomDice {
    /// Dice seeded once from the process entropy source.
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Dice with a fixed seed, for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Dice for RandomDice {
    fn coin_flip(&mut self) -> u8 {
        self.rng.u8(0..COIN_SIDES)
    }

    fn d6(&mut self) -> u8 {
        self.rng.u8(0..DIE_SIDES)
    }
}

/// Error returned when a script contains a value the dice could never show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// No values were given for the coin or the dice
    Empty,
    /// Coin value outside 0..=1
    Coin(u8),
    /// Die value outside 0..=5
    Die(u8),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Empty => write!(f, "dice script needs at least one coin and one die value"),
            ScriptError::Coin(v) => write!(f, "coin value {v} out of range 0..{COIN_SIDES}"),
            ScriptError::Die(v) => write!(f, "die value {v} out of range 0..{DIE_SIDES}"),
        }
    }
}

impl std::error::Error for ScriptError {}

/// Dice that replay fixed sequences, cycling back to the start when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    coins: Vec<u8>,
    dice: Vec<u8>,
    next_coin: usize,
    next_die: usize,
}

impl ScriptedDice {
    pub fn new(coins: &[u8], dice: &[u8]) -> Result<Self, ScriptError> {
        if coins.is_empty() || dice.is_empty() {
            return Err(ScriptError::Empty);
        }
        if let Some(&c) = coins.iter().find(|&&c| c >= COIN_SIDES) {
            return Err(ScriptError::Coin(c));
        }
        if let Some(&d) = dice.iter().find(|&&d| d >= DIE_SIDES) {
            return Err(ScriptError::Die(d));
        }
        Ok(Self {
            coins: coins.to_vec(),
            dice: dice.to_vec(),
            next_coin: 0,
            next_die: 0,
        })
    }
}

impl Dice for ScriptedDice {
    fn coin_flip(&mut self) -> u8 {
        let v = self.coins[self.next_coin];
        self.next_coin = (self.next_coin + 1) % self.coins.len();
        v
    }

    fn d6(&mut self) -> u8 {
        let v = self.dice[self.next_die];
        self.next_die = (self.next_die + 1) % self.dice.len();
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_dice_bounds() {
        let mut dice = RandomDice::with_seed(42);
        for _ in 0..10_000 {
            assert!(dice.coin_flip() < COIN_SIDES);
            assert!(dice.d6() < DIE_SIDES);
        }
    }

    #[test]
    fn test_random_dice_covers_all_faces() {
        let mut dice = RandomDice::with_seed(7);
        let mut seen = [false; DIE_SIDES as usize];
        let mut coins = [false; COIN_SIDES as usize];
        for _ in 0..1_000 {
            seen[dice.d6() as usize] = true;
            coins[dice.coin_flip() as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
        assert!(coins.iter().all(|&s| s));
    }

    #[test]
    fn test_seeded_dice_repeat() {
        let mut a = RandomDice::with_seed(1234);
        let mut b = RandomDice::with_seed(1234);
        for _ in 0..100 {
            assert_eq!(a.coin_flip(), b.coin_flip());
            assert_eq!(a.d6(), b.d6());
        }
    }

    #[test]
    fn test_scripted_dice_cycle() {
        let mut dice = ScriptedDice::new(&[0, 1], &[5, 0, 3]).unwrap();
        assert_eq!(dice.coin_flip(), 0);
        assert_eq!(dice.coin_flip(), 1);
        assert_eq!(dice.coin_flip(), 0);
        assert_eq!(dice.d6(), 5);
        assert_eq!(dice.d6(), 0);
        assert_eq!(dice.d6(), 3);
        assert_eq!(dice.d6(), 5);
    }

    #[test]
    fn test_scripted_dice_rejects_bad_values() {
        assert_eq!(ScriptedDice::new(&[], &[1]).unwrap_err(), ScriptError::Empty);
        assert_eq!(ScriptedDice::new(&[2], &[1]).unwrap_err(), ScriptError::Coin(2));
        assert_eq!(ScriptedDice::new(&[0], &[6]).unwrap_err(), ScriptError::Die(6));
    }
}
