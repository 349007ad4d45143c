use std::fmt;

use crate::{error::GameError, guess::GuessResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    low: i64,
    high: i64,
}

impl Range {
    pub fn new(low: i64, high: i64) -> Result<Self, GameError> {
        if low > high {
            return Err(GameError::InvalidRange { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> i64 {
        self.low
    }

    pub fn high(&self) -> i64 {
        self.high
    }

    pub fn contains(&self, value: i64) -> bool {
        self.low <= value && value <= self.high
    }

    // The full `i64` span needs more than 64 bits.
    pub fn span(&self) -> u128 {
        (i128::from(self.high) - i128::from(self.low) + 1) as u128
    }

    pub fn narrow(&mut self, guess: i64, result: GuessResult) {
        match result {
            GuessResult::Low => self.low = self.low.max(guess),
            GuessResult::High => self.high = self.high.min(guess),
            GuessResult::Win => {}
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} & {}", self.low, self.high)
    }
}
