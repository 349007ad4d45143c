use log::debug;
use rand::{Rng, rngs::ThreadRng};

use crate::{error::GameError, history::GuessHistory, range::Range};

#[derive(Debug)]
pub struct Picker<R: Rng = ThreadRng> {
    rng: R,
}

impl Picker<ThreadRng> {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl<R: Rng> Picker<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    // Not recorded in any history.
    pub fn secret(&mut self, range: Range) -> i64 {
        self.rng.random_range(range.low()..=range.high())
    }

    /// Draws a value not yet in `history`. Every collision is marked as a duplicate.
    pub fn pick(&mut self, history: &mut GuessHistory, range: Range) -> Result<i64, GameError> {
        if history.count_within(&range) >= range.span() {
            return Err(GameError::RangeExhausted {
                low: range.low(),
                high: range.high(),
            });
        }
        loop {
            let guess = self.rng.random_range(range.low()..=range.high());
            if !history.contains(guess) {
                return Ok(guess);
            }
            debug!("Drew `{guess}` again, redrawing");
            history.mark_duplicate(guess);
        }
    }
}
