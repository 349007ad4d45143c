#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid range: low `{low}` is greater than high `{high}`")]
    InvalidRange { low: i64, high: i64 },
    #[error("Every number between `{low}` and `{high}` was already guessed")]
    RangeExhausted { low: i64, high: i64 },
    #[error("Unknown menu option `{0}`")]
    UnknownMode(String),
    #[error("Unknown difficulty `{0}`")]
    UnknownDifficulty(String),
}
