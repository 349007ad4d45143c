use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    Low,
    Win,
    High,
}

impl GuessResult {
    pub fn compare(secret: i64, guess: i64) -> Self {
        match guess.cmp(&secret) {
            Ordering::Less => GuessResult::Low,
            Ordering::Equal => GuessResult::Win,
            Ordering::Greater => GuessResult::High,
        }
    }

    pub fn is_win(self) -> bool {
        self == GuessResult::Win
    }
}
