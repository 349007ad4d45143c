use rand::Rng;

use crate::{
    error::GameError, guess::GuessResult, history::GuessHistory, picker::Picker, range::Range,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Guessing,
    Done(Outcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Aborted,
}

#[derive(Debug)]
pub struct Round {
    secret: i64,
    range: Range,
    history: GuessHistory,
    state: State,
}

impl Round {
    pub fn new(secret: i64, range: Range) -> Self {
        Self {
            secret,
            range,
            history: GuessHistory::new(),
            state: State::Guessing,
        }
    }

    pub fn apply(&mut self, guess: i64) -> GuessResult {
        debug_assert_eq!(self.state, State::Guessing);
        let result = GuessResult::compare(self.secret, guess);
        self.history.record(guess);
        match result {
            GuessResult::Win => self.state = State::Done(Outcome::Won),
            _ => self.range.narrow(guess, result),
        }
        result
    }

    pub fn is_repeat(&self, guess: i64) -> bool {
        self.history.contains(guess)
    }

    pub fn machine_guess<R: Rng>(&mut self, picker: &mut Picker<R>) -> Result<i64, GameError> {
        picker.pick(&mut self.history, self.range)
    }

    pub fn abort(&mut self) {
        if self.state == State::Guessing {
            self.state = State::Done(Outcome::Aborted);
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            State::Guessing => None,
            State::Done(outcome) => Some(outcome),
        }
    }

    pub fn range(&self) -> Range {
        self.range
    }

    pub fn history(&self) -> &GuessHistory {
        &self.history
    }
}
