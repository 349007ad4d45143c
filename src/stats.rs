use std::fmt;

use crate::round::{Outcome, Round};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub outcome: Outcome,
    pub total_guesses: usize,
    pub duplicates: Vec<i64>,
}

impl SessionStats {
    pub fn from_round(round: &Round) -> Option<Self> {
        let outcome = round.outcome()?;
        let history = round.history();
        Some(Self {
            outcome,
            total_guesses: history.len(),
            duplicates: history.duplicates().collect(),
        })
    }

    pub fn duplicate_count(&self) -> usize {
        self.duplicates.len()
    }
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end_phrase = match self.outcome {
            Outcome::Won => "to guess the correct number!",
            Outcome::Aborted => "before you gave up!",
        };
        writeln!(f, "It took {} guess(es) {}", self.total_guesses, end_phrase)?;
        write!(
            f,
            "There were {} number(s) that were guessed more than once.",
            self.duplicate_count()
        )?;
        if !self.duplicates.is_empty() {
            let listed = self
                .duplicates
                .iter()
                .map(|value| value.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            write!(
                f,
                "\n\nThese are the number(s) that were guessed more than once:\n{listed}"
            )?;
        }
        Ok(())
    }
}
