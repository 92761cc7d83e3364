// Game engine modules

pub mod guess;
pub mod layout;
pub mod state;

pub use guess::{submit_guess, GuessOutcome};
pub use layout::{layout_words, remaining_layout, shuffled_layout};
pub use state::{GameState, INITIAL_MISTAKES, LOSS_THRESHOLD};
