use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A themed set of words sharing a difficulty rating
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Group {
    pub difficulty: u8,
    pub theme: String,
    pub words: Vec<String>,
}

/// Grid cell a word is rendered in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct GridPosition {
    pub col: usize,
    pub row: usize,
}

/// Layout mapping from word to its rendered grid cell
pub type WordPositions = HashMap<String, GridPosition>;

/// Progress classification of a puzzle session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        };
        f.write_str(label)
    }
}
