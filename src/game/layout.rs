use rand::Rng;

use crate::{
    game::GameState,
    models::{GridPosition, WordPositions},
    puzzle::Puzzle,
    utils::shuffle_array_with,
};

/// Place words row by row into a grid `columns` wide
pub fn layout_words(words: &[String], columns: usize) -> WordPositions {
    let columns = columns.max(1);
    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            (
                word.clone(),
                GridPosition {
                    col: i % columns,
                    row: i / columns,
                },
            )
        })
        .collect()
}

/// Shuffle every word of the puzzle and lay them out
pub fn shuffled_layout<R: Rng + ?Sized>(
    puzzle: &Puzzle,
    columns: usize,
    rng: &mut R,
) -> (Vec<String>, WordPositions) {
    let words = shuffle_array_with(&puzzle.words(), rng);
    let positions = layout_words(&words, columns);
    (words, positions)
}

/// Shuffle and lay out only the words of groups not yet solved
pub fn remaining_layout<R: Rng + ?Sized>(
    puzzle: &Puzzle,
    state: &GameState,
    columns: usize,
    rng: &mut R,
) -> (Vec<String>, WordPositions) {
    let remaining: Vec<String> = puzzle
        .groups()
        .iter()
        .enumerate()
        .filter(|(index, _)| !state.is_group_completed(*index))
        .flat_map(|(_, group)| group.words.iter().cloned())
        .collect();

    let words = shuffle_array_with(&remaining, rng);
    let positions = layout_words(&words, columns);
    (words, positions)
}
