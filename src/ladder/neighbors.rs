//! One-letter neighbor enumeration
//!
//! The ladder graph is never materialized. Edges out of a word are found on
//! demand: every position is tried with every other letter and the result is
//! looked up in the word's length bucket.

use crate::core::Word;
use crate::dictionary::Dictionary;

/// Letters tried at each position, in enumeration order
pub const ALPHABET: std::ops::RangeInclusive<u8> = b'a'..=b'z';

/// Visit each dictionary word one substitution away from `word`
///
/// Order is position ascending, then letter `a` to `z`. The word itself is
/// never visited, and only words of the same length can be.
pub fn for_each_neighbor<'d, F>(word: &Word, dictionary: &'d Dictionary, mut visit: F)
where
    F: FnMut(&'d Word),
{
    let Some(bucket) = dictionary.bucket(word.length()) else {
        return;
    };

    let mut candidate = word.as_bytes().to_vec();

    for position in 0..candidate.len() {
        let original = candidate[position];

        for letter in ALPHABET {
            if letter == original {
                continue;
            }
            candidate[position] = letter;

            // Candidate bytes are always a-z, so this never fails
            if let Ok(text) = std::str::from_utf8(&candidate)
                && let Some(found) = bucket.get(text)
            {
                visit(found);
            }
        }

        candidate[position] = original;
    }
}

/// All dictionary words one substitution away from `word`
///
/// # Examples
/// ```
/// use word_ladder::core::Word;
/// use word_ladder::dictionary::{Dictionary, loader::words_from_slice};
/// use word_ladder::ladder::neighbors;
///
/// let (dictionary, _) = Dictionary::from_words(words_from_slice(&["cat", "cot", "cut", "dog"]));
/// let cat = Word::new("cat").unwrap();
/// let found: Vec<&str> = neighbors(&cat, &dictionary).iter().map(|w| w.text()).collect();
/// assert_eq!(found, ["cot", "cut"]);
/// ```
#[must_use]
pub fn neighbors<'d>(word: &Word, dictionary: &'d Dictionary) -> Vec<&'d Word> {
    let mut found = Vec::new();
    for_each_neighbor(word, dictionary, |neighbor| found.push(neighbor));
    found
}

/// Number of neighbors a word has
#[must_use]
pub fn degree(word: &Word, dictionary: &Dictionary) -> usize {
    let mut count = 0;
    for_each_neighbor(word, dictionary, |_| count += 1);
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::words_from_slice;

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::from_words(words_from_slice(words)).0
    }

    fn texts<'a>(words: &[&'a Word]) -> Vec<&'a str> {
        words.iter().map(|w| w.text()).collect()
    }

    #[test]
    fn neighbors_in_position_then_alphabet_order() {
        let dictionary = dictionary(&["cat", "cot", "cog", "dog", "dot", "cop", "bat", "cab"]);
        let cot = Word::new("cot").unwrap();

        // position 0: dot; position 1: cat; position 2: cog, cop
        assert_eq!(
            texts(&neighbors(&cot, &dictionary)),
            ["dot", "cat", "cog", "cop"]
        );
    }

    #[test]
    fn neighbors_exclude_self() {
        let dictionary = dictionary(&["cat", "cot"]);
        let cat = Word::new("cat").unwrap();

        let found = neighbors(&cat, &dictionary);
        assert!(found.iter().all(|w| w.text() != "cat"));
        assert_eq!(texts(&found), ["cot"]);
    }

    #[test]
    fn neighbors_never_cross_lengths() {
        let dictionary = dictionary(&["cat", "cats", "at", "cot"]);
        let cat = Word::new("cat").unwrap();

        for neighbor in neighbors(&cat, &dictionary) {
            assert_eq!(neighbor.length(), 3);
        }
        assert_eq!(degree(&cat, &dictionary), 1);
    }

    #[test]
    fn neighbors_of_unknown_length() {
        let dictionary = dictionary(&["cat", "cot"]);
        let word = Word::new("ladder").unwrap();
        assert!(neighbors(&word, &dictionary).is_empty());
    }

    #[test]
    fn neighbors_of_word_outside_dictionary() {
        // The input need not be a member itself
        let dictionary = dictionary(&["cat", "cot"]);
        let cut = Word::new("cut").unwrap();
        assert_eq!(texts(&neighbors(&cut, &dictionary)), ["cat", "cot"]);
    }

    #[test]
    fn every_neighbor_differs_by_one() {
        let dictionary = dictionary(&["cold", "cord", "card", "ward", "warm", "word", "wore"]);
        let cord = Word::new("cord").unwrap();

        let found = neighbors(&cord, &dictionary);
        assert_eq!(texts(&found), ["word", "card", "cold"]);
        assert!(found.iter().all(|w| w.differs_by_one(&cord)));
    }

    #[test]
    fn single_letter_words() {
        let dictionary = dictionary(&["a", "i", "o"]);
        let a = Word::new("a").unwrap();
        assert_eq!(texts(&neighbors(&a, &dictionary)), ["i", "o"]);
    }
}
