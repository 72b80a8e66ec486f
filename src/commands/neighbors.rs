//! Neighbor listing command
//!
//! Shows every word one substitution away, grouped by the changed position.

use super::CommandError;
use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::ladder::neighbors;

/// Neighbors of one word
pub struct NeighborsResult {
    pub word: String,
    /// Whether the word itself is in the dictionary
    pub in_dictionary: bool,
    /// `by_position[i]` holds neighbors that differ at letter `i`
    pub by_position: Vec<Vec<String>>,
}

impl NeighborsResult {
    #[must_use]
    pub fn total(&self) -> usize {
        self.by_position.iter().map(Vec::len).sum()
    }
}

/// List the neighbors of `word`
///
/// The word does not have to be in the dictionary itself.
///
/// # Errors
///
/// Returns `CommandError::InvalidWord` if `word` is empty or not a-z.
pub fn list_neighbors(word: &str, dictionary: &Dictionary) -> Result<NeighborsResult, CommandError> {
    let word = Word::new(word.trim())?;
    let mut by_position = vec![Vec::new(); word.length()];

    for neighbor in neighbors(&word, dictionary) {
        if let Some(position) = word.changed_position(neighbor) {
            by_position[position].push(neighbor.text().to_string());
        }
    }

    Ok(NeighborsResult {
        in_dictionary: dictionary.contains(word.text()),
        word: word.text().to_string(),
        by_position,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::words_from_slice;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(words_from_slice(&["cat", "cot", "cog", "dog", "dot", "cop"])).0
    }

    #[test]
    fn groups_by_position() {
        let result = list_neighbors("cot", &dictionary()).unwrap();

        assert_eq!(result.word, "cot");
        assert!(result.in_dictionary);
        assert_eq!(result.by_position[0], ["dot"]);
        assert_eq!(result.by_position[1], ["cat"]);
        assert_eq!(result.by_position[2], ["cog", "cop"]);
        assert_eq!(result.total(), 4);
    }

    #[test]
    fn word_outside_dictionary() {
        let result = list_neighbors("Cut", &dictionary()).unwrap();

        assert_eq!(result.word, "cut");
        assert!(!result.in_dictionary);
        assert_eq!(result.by_position[1], ["cat", "cot"]);
    }

    #[test]
    fn invalid_word() {
        assert!(matches!(
            list_neighbors("c0t", &dictionary()),
            Err(CommandError::InvalidWord(_))
        ));
    }
}
