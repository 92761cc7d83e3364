use thiserror::Error;

use crate::models::GameStatus;

/// Failure modes for the puzzle core.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("a game needs at least one group, got {0}")]
    InvalidGroupCount(usize),
    #[error("cannot wait a negative duration ({0}ms)")]
    NegativeDuration(i64),
    #[error("puzzle has no groups")]
    EmptyPuzzle,
    #[error("group {0} has no words")]
    EmptyGroup(usize),
    #[error("word {0:?} appears more than once in the puzzle")]
    DuplicateWord(String),
    #[error("group {index} has {actual} words, expected {expected}")]
    GroupSizeMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },
    #[error("a guess must contain {expected} distinct words, got {actual}")]
    WrongGuessSize { expected: usize, actual: usize },
    #[error("word {0:?} is not part of this puzzle")]
    UnknownWord(String),
    #[error("game is already over ({0})")]
    GameOver(GameStatus),
    #[error("failed to read puzzle file")]
    Io(#[from] std::io::Error),
    #[error("failed to parse puzzle data")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
