//! Word representation
//!
//! A Word is a non-empty run of lowercase ASCII letters. Length is not fixed:
//! the dictionary partitions words by length and a ladder only ever connects
//! words of equal length.

use std::borrow::Borrow;
use std::fmt;
use thiserror::Error;

/// A lowercase dictionary word
///
/// Immutable once built. Hashes and compares exactly like its text, so a
/// `&str` can be used to look a `Word` up in a hashed set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word must contain only the letters a-z")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input is lowercased. Surrounding whitespace is not stripped, so
    /// `" cat"` is rejected; callers that accept user input trim first.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - Contains non-ASCII characters
    /// - Contains anything other than a-z after lowercasing
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("Cat").unwrap();
    /// assert_eq!(word.text(), "cat");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("c4t").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes (always a-z)
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.text.len()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.length()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.as_bytes()[position]
    }

    /// Position of the single letter that differs from `other`
    ///
    /// Returns `None` when the words differ in length, are identical, or
    /// differ in more than one position.
    #[must_use]
    pub fn changed_position(&self, other: &Self) -> Option<usize> {
        if self.length() != other.length() {
            return None;
        }

        let mut diffs = self
            .as_bytes()
            .iter()
            .zip(other.as_bytes())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i);

        match (diffs.next(), diffs.next()) {
            (Some(position), None) => Some(position),
            _ => None,
        }
    }

    /// True when the two words are one ladder step apart
    #[inline]
    #[must_use]
    pub fn differs_by_one(&self, other: &Self) -> bool {
        self.changed_position(other).is_some()
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("cat").unwrap();
        assert_eq!(word.text(), "cat");
        assert_eq!(word.as_bytes(), b"cat");
        assert_eq!(word.length(), 3);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("WORD").unwrap();
        assert_eq!(word.text(), "word");

        let word2 = Word::new("wOrD").unwrap();
        assert_eq!(word, word2);
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("a").unwrap().length(), 1);
        assert_eq!(Word::new("ladders").unwrap().length(), 7);
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("c4t"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("ca t"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new(" cat"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("can't"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("café"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("dog").unwrap();
        assert_eq!(word.char_at(0), b'd');
        assert_eq!(word.char_at(1), b'o');
        assert_eq!(word.char_at(2), b'g');
    }

    #[test]
    fn changed_position_single_difference() {
        let cat = Word::new("cat").unwrap();
        let cot = Word::new("cot").unwrap();
        assert_eq!(cat.changed_position(&cot), Some(1));
        assert!(cat.differs_by_one(&cot));
    }

    #[test]
    fn changed_position_rejects_other_cases() {
        let cat = Word::new("cat").unwrap();
        assert_eq!(cat.changed_position(&cat), None);
        assert_eq!(cat.changed_position(&Word::new("dog").unwrap()), None);
        assert_eq!(cat.changed_position(&Word::new("cats").unwrap()), None);
        assert_eq!(cat.changed_position(&Word::new("act").unwrap()), None);
    }

    #[test]
    fn word_lookup_by_str() {
        let mut set = FxHashSet::default();
        set.insert(Word::new("cog").unwrap());
        assert!(set.contains("cog"));
        assert!(!set.contains("cot"));
    }

    #[test]
    fn word_ordering_is_alphabetical() {
        let mut words = vec![
            Word::new("dot").unwrap(),
            Word::new("cat").unwrap(),
            Word::new("cog").unwrap(),
        ];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["cat", "cog", "dot"]);
    }

    #[test]
    fn word_display() {
        let word = Word::new("weaver").unwrap();
        assert_eq!(format!("{word}"), "weaver");
    }
}
