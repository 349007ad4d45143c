use std::collections::HashSet;

use indexmap::IndexSet;

use crate::range::Range;

#[derive(Debug, Default)]
pub struct GuessHistory {
    guesses: Vec<i64>,
    seen: HashSet<i64>,
    duplicates: IndexSet<i64>,
}

impl GuessHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a guess. Returns `true` if the value had already been guessed.
    pub fn record(&mut self, guess: i64) -> bool {
        self.guesses.push(guess);
        let repeated = !self.seen.insert(guess);
        if repeated {
            self.duplicates.insert(guess);
        }
        repeated
    }

    pub fn mark_duplicate(&mut self, value: i64) {
        self.duplicates.insert(value);
    }

    pub fn contains(&self, value: i64) -> bool {
        self.seen.contains(&value)
    }

    pub fn count_within(&self, range: &Range) -> u128 {
        self.seen.iter().filter(|value| range.contains(**value)).count() as u128
    }

    pub fn guesses(&self) -> &[i64] {
        &self.guesses
    }

    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    // First-recurrence order.
    pub fn duplicates(&self) -> impl Iterator<Item = i64> + '_ {
        self.duplicates.iter().copied()
    }

    pub fn duplicate_count(&self) -> usize {
        self.duplicates.len()
    }
}
