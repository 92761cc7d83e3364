use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

use crate::{
    error::{GameError, Result},
    game::GameState,
    models::Group,
};

/// Normalise a word for comparison against the puzzle
pub fn normalize_word(word: &str) -> String {
    word.trim().to_uppercase()
}

/// A validated set of groups for one game
#[derive(Debug, Clone)]
pub struct Puzzle {
    groups: Vec<Group>,
    word_groups: HashMap<String, usize>,
}

impl Puzzle {
    /// Load a puzzle from a JSON file holding an array of groups
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let puzzle = Self::from_json(&content)?;

        tracing::info!(
            "Loaded puzzle with {} groups of {} words",
            puzzle.groups.len(),
            puzzle.group_size()
        );

        Ok(puzzle)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let groups: Vec<Group> = serde_json::from_str(json)?;
        Self::from_groups(groups)
    }

    /// Validate groups and index their words
    pub fn from_groups(groups: Vec<Group>) -> Result<Self> {
        let Some(first) = groups.first() else {
            return Err(GameError::EmptyPuzzle);
        };
        let expected = first.words.len();

        let mut word_groups = HashMap::new();
        let mut normalized = Vec::with_capacity(groups.len());

        for (index, group) in groups.into_iter().enumerate() {
            if group.words.is_empty() {
                return Err(GameError::EmptyGroup(index));
            }
            if group.words.len() != expected {
                return Err(GameError::GroupSizeMismatch {
                    index,
                    expected,
                    actual: group.words.len(),
                });
            }

            let words: Vec<String> = group.words.iter().map(|w| normalize_word(w)).collect();
            for word in &words {
                if word_groups.insert(word.clone(), index).is_some() {
                    return Err(GameError::DuplicateWord(word.clone()));
                }
            }

            normalized.push(Group { words, ..group });
        }

        Ok(Self {
            groups: normalized,
            word_groups,
        })
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Number of words in each group
    pub fn group_size(&self) -> usize {
        self.groups[0].words.len()
    }

    /// All words in group order
    pub fn words(&self) -> Vec<String> {
        self.groups
            .iter()
            .flat_map(|group| group.words.iter().cloned())
            .collect()
    }

    /// Index of the group a word belongs to
    pub fn group_of(&self, word: &str) -> Option<usize> {
        self.word_groups.get(&normalize_word(word)).copied()
    }

    /// Start a session sized for this puzzle
    pub fn new_game(&self) -> Result<GameState> {
        GameState::new(self.groups.len())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_puzzle() -> Puzzle {
        Puzzle::from_json(
            r#"[
                {"difficulty": 0, "theme": "Fish", "words": ["bass", "pike", "sole", "carp"]},
                {"difficulty": 1, "theme": "Keys", "words": ["tab", "shift", "enter", "escape"]},
                {"difficulty": 2, "theme": "Planets", "words": ["mars", "venus", "earth", "saturn"]},
                {"difficulty": 3, "theme": "Trees", "words": ["oak", "ash", "elm", "yew"]}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_puzzle_normalizes_words() {
        let puzzle = sample_puzzle();
        assert_eq!(puzzle.groups()[0].words, vec!["BASS", "PIKE", "SOLE", "CARP"]);
        assert_eq!(puzzle.group_of(" Venus "), Some(2));
        assert_eq!(puzzle.group_of("PLUTO"), None);
    }

    #[test]
    fn test_words_in_group_order() {
        let puzzle = sample_puzzle();
        let words = puzzle.words();
        assert_eq!(words.len(), 16);
        assert_eq!(words[0], "BASS");
        assert_eq!(words[15], "YEW");
        assert_eq!(puzzle.group_size(), 4);
    }

    #[test]
    fn test_new_game_matches_group_count() {
        let game = sample_puzzle().new_game().unwrap();
        assert_eq!(game.num_groups(), 4);
    }

    #[test]
    fn test_empty_puzzle_rejected() {
        assert!(matches!(Puzzle::from_json("[]"), Err(GameError::EmptyPuzzle)));
    }

    #[test]
    fn test_empty_group_rejected() {
        let groups = vec![Group {
            difficulty: 0,
            theme: "Nothing".to_string(),
            words: Vec::new(),
        }];
        assert!(matches!(
            Puzzle::from_groups(groups),
            Err(GameError::EmptyGroup(0))
        ));
    }

    #[test]
    fn test_duplicate_word_rejected() {
        let result = Puzzle::from_json(
            r#"[
                {"difficulty": 0, "theme": "A", "words": ["one", "two"]},
                {"difficulty": 1, "theme": "B", "words": ["ONE", "three"]}
            ]"#,
        );
        assert!(matches!(result, Err(GameError::DuplicateWord(w)) if w == "ONE"));
    }

    #[test]
    fn test_uneven_groups_rejected() {
        let result = Puzzle::from_json(
            r#"[
                {"difficulty": 0, "theme": "A", "words": ["one", "two"]},
                {"difficulty": 1, "theme": "B", "words": ["three"]}
            ]"#,
        );
        assert!(matches!(
            result,
            Err(GameError::GroupSizeMismatch {
                index: 1,
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            Puzzle::from_json("{not json"),
            Err(GameError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = Puzzle::load("./does-not-exist/puzzle.json").await;
        assert!(matches!(result, Err(GameError::Io(_))));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("puzzle-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"[{"difficulty": 0, "theme": "Fish", "words": ["bass", "pike"]}]"#,
        )
        .await
        .unwrap();

        let puzzle = Puzzle::load(&path).await.unwrap();
        assert_eq!(puzzle.groups().len(), 1);
        assert_eq!(puzzle.group_of("pike"), Some(0));

        fs::remove_file(&path).await.unwrap();
    }
}
