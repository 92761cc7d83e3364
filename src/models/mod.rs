pub mod game;

pub use game::{GameStatus, GridPosition, Group, WordPositions};
