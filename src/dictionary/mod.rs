//! The in-memory dictionary
//!
//! Words are partitioned into length buckets. A bucket is a hashed set, so a
//! membership test is O(1) amortized regardless of dictionary size. The
//! dictionary is built once and then shared read-only (typically behind an
//! `Arc`) by every search.

mod embedded;
pub mod loader;

use crate::core::Word;
use rustc_hash::{FxHashMap, FxHashSet};

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};
pub use loader::{DictionaryError, DictionarySource, LoadStats};

/// A set of words grouped by length
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    buckets: FxHashMap<usize, FxHashSet<Word>>,
    total: usize,
}

impl Dictionary {
    /// Build a dictionary from already-validated words
    ///
    /// Duplicates are collapsed. Returns the dictionary and the number of
    /// duplicate entries that were dropped.
    pub fn from_words<I>(words: I) -> (Self, usize)
    where
        I: IntoIterator<Item = Word>,
    {
        let mut dictionary = Self::default();
        let mut duplicates = 0;

        for word in words {
            if !dictionary.insert(word) {
                duplicates += 1;
            }
        }

        (dictionary, duplicates)
    }

    fn insert(&mut self, word: Word) -> bool {
        let inserted = self.buckets.entry(word.length()).or_default().insert(word);
        if inserted {
            self.total += 1;
        }
        inserted
    }

    /// Check whether a word is present
    ///
    /// The lookup is exact: callers normalize case before asking.
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Look up the stored copy of a word
    #[inline]
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&Word> {
        self.buckets.get(&word.len())?.get(word)
    }

    /// The set of words with the given length, if any
    #[inline]
    pub(crate) fn bucket(&self, length: usize) -> Option<&FxHashSet<Word>> {
        self.buckets.get(&length)
    }

    /// Total number of distinct words
    #[must_use]
    pub const fn len(&self) -> usize {
        self.total
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Word lengths present in the dictionary, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.buckets.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// Number of words with the given length
    #[must_use]
    pub fn count_of_length(&self, length: usize) -> usize {
        self.bucket(length).map_or(0, FxHashSet::len)
    }

    /// All words of a given length in alphabetical order
    ///
    /// Hash iteration order is not stable, so anything that must be
    /// reproducible (sampling, reporting) goes through this.
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> Vec<&Word> {
        let mut words: Vec<&Word> = self
            .bucket(length)
            .map(|bucket| bucket.iter().collect())
            .unwrap_or_default();
        words.sort_unstable();
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::words_from_slice;

    fn sample() -> Dictionary {
        let (dictionary, _) =
            Dictionary::from_words(words_from_slice(&["cat", "cot", "dog", "word", "ward"]));
        dictionary
    }

    #[test]
    fn contains_exact_words() {
        let dictionary = sample();
        assert!(dictionary.contains("cat"));
        assert!(dictionary.contains("ward"));
        assert!(!dictionary.contains("cog"));
        assert!(!dictionary.contains(""));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let dictionary = sample();
        assert!(!dictionary.contains("CAT"));
    }

    #[test]
    fn partitions_by_length() {
        let dictionary = sample();
        assert_eq!(dictionary.len(), 5);
        assert_eq!(dictionary.lengths(), vec![3, 4]);
        assert_eq!(dictionary.count_of_length(3), 3);
        assert_eq!(dictionary.count_of_length(4), 2);
        assert_eq!(dictionary.count_of_length(5), 0);
    }

    #[test]
    fn duplicates_are_collapsed() {
        let (dictionary, duplicates) =
            Dictionary::from_words(words_from_slice(&["cat", "CAT", "cat", "cot"]));
        assert_eq!(dictionary.len(), 2);
        assert_eq!(duplicates, 2);
    }

    #[test]
    fn words_of_length_sorted() {
        let dictionary = sample();
        let words: Vec<&str> = dictionary
            .words_of_length(3)
            .into_iter()
            .map(Word::text)
            .collect();
        assert_eq!(words, ["cat", "cot", "dog"]);
        assert!(dictionary.words_of_length(9).is_empty());
    }

    #[test]
    fn empty_dictionary() {
        let dictionary = Dictionary::default();
        assert!(dictionary.is_empty());
        assert!(dictionary.lengths().is_empty());
        assert!(!dictionary.contains("cat"));
    }
}
