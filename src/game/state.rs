use crate::{
    error::{GameError, Result},
    models::GameStatus,
};

/// Mistakes a player may make before the next one ends the game
pub const INITIAL_MISTAKES: i32 = 4;
/// Value of `num_mistakes_remaining` that signals a lost game
pub const LOSS_THRESHOLD: i32 = -1;

/// Progress of a single puzzle session.
///
/// The counters are public so game logic can mutate them directly; the
/// status is never stored and is recomputed from them on every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    num_groups: usize,
    /// Submitted guesses in order, each one a set of words
    pub guesses: Vec<Vec<String>>,
    /// Reaches `LOSS_THRESHOLD` when the game is lost
    pub num_mistakes_remaining: i32,
    /// Unique indexes in `0..num_groups` of solved groups
    pub completed_group_indexes: Vec<usize>,
}

impl GameState {
    /// Start a session for a puzzle with `num_groups` groups
    pub fn new(num_groups: usize) -> Result<Self> {
        if num_groups == 0 {
            return Err(GameError::InvalidGroupCount(num_groups));
        }

        Ok(Self {
            num_groups,
            guesses: Vec::new(),
            num_mistakes_remaining: INITIAL_MISTAKES,
            completed_group_indexes: Vec::new(),
        })
    }

    pub fn num_groups(&self) -> usize {
        self.num_groups
    }

    /// Derive the session status. Loss takes precedence over a win.
    pub fn status(&self) -> GameStatus {
        if self.num_mistakes_remaining == LOSS_THRESHOLD {
            GameStatus::Lost
        } else if self.completed_group_indexes.len() == self.num_groups {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }

    pub fn is_over(&self) -> bool {
        self.status() != GameStatus::Playing
    }

    pub fn is_group_completed(&self, index: usize) -> bool {
        self.completed_group_indexes.contains(&index)
    }
}
