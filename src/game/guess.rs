use std::collections::{BTreeSet, HashMap};

use crate::{
    error::{GameError, Result},
    game::state::{GameState, LOSS_THRESHOLD},
    models::GameStatus,
    puzzle::{normalize_word, Puzzle},
};

/// Result of checking a guess against the puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Every word belongs to the same unsolved group
    Correct { group_index: usize },
    /// All but one word share a group
    OneAway,
    Incorrect,
    /// Same set of words as an earlier guess; nothing changed
    AlreadyGuessed,
}

/// Check a guess and apply its effect to the session
pub fn submit_guess(
    state: &mut GameState,
    puzzle: &Puzzle,
    words: &[String],
) -> Result<GuessOutcome> {
    let status = state.status();
    if status != GameStatus::Playing {
        return Err(GameError::GameOver(status));
    }

    let guess: BTreeSet<String> = words.iter().map(|w| normalize_word(w)).collect();
    if guess.len() != puzzle.group_size() || words.len() != guess.len() {
        tracing::warn!("Rejected guess of {} words", words.len());
        return Err(GameError::WrongGuessSize {
            expected: puzzle.group_size(),
            actual: guess.len(),
        });
    }

    let mut group_counts: HashMap<usize, usize> = HashMap::new();
    for word in &guess {
        let group = puzzle
            .group_of(word)
            .ok_or_else(|| GameError::UnknownWord(word.clone()))?;
        *group_counts.entry(group).or_default() += 1;
    }

    let already_guessed = state
        .guesses
        .iter()
        .any(|previous| previous.iter().cloned().collect::<BTreeSet<_>>() == guess);
    if already_guessed {
        return Ok(GuessOutcome::AlreadyGuessed);
    }

    state.guesses.push(guess.into_iter().collect());

    let (best_group, best_count) = group_counts
        .into_iter()
        .max_by_key(|(group, count)| (*count, std::cmp::Reverse(*group)))
        .unwrap_or((0, 0));

    let outcome = if best_count == puzzle.group_size() && !state.is_group_completed(best_group) {
        state.completed_group_indexes.push(best_group);
        GuessOutcome::Correct {
            group_index: best_group,
        }
    } else {
        state.num_mistakes_remaining = (state.num_mistakes_remaining - 1).max(LOSS_THRESHOLD);
        if best_count + 1 == puzzle.group_size() {
            GuessOutcome::OneAway
        } else {
            GuessOutcome::Incorrect
        }
    };

    tracing::debug!(
        "Guess {} -> {:?}, {} mistakes remaining, status {}",
        state.guesses.len(),
        outcome,
        state.num_mistakes_remaining,
        state.status()
    );

    Ok(outcome)
}
