//! Client-side helpers for a word-grouping puzzle: session state with a
//! derived win/loss status, a shuffle utility, an async delay, and the
//! shared puzzle data shapes.

pub mod config;
pub mod error;
pub mod game;
pub mod models;
pub mod puzzle;
pub mod utils;

pub use error::{GameError, Result};
pub use game::GameState;
pub use models::{GameStatus, GridPosition, Group, WordPositions};
pub use puzzle::Puzzle;
pub use utils::{shuffle_array, wait};
