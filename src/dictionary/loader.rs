//! Dictionary loading utilities
//!
//! Turns a raw word list (file, text, or the embedded default) into a
//! [`Dictionary`]. Entries are trimmed and lowercased; anything that is not
//! purely a-z afterwards is skipped, and duplicates collapse.

use super::{DEFAULT_WORDS, Dictionary};
use crate::core::Word;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

/// Where a dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// The word list compiled into the binary
    Embedded,
    /// A newline separated word list on disk
    File(PathBuf),
}

impl fmt::Display for DictionarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl FromStr for DictionarySource {
    type Err = std::convert::Infallible;

    /// `default` (or `embedded`) selects the bundled list, anything else is a path
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "default" | "embedded" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        })
    }
}

/// Dictionary construction failure
///
/// Fatal at startup: a process without a dictionary cannot serve requests.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("invalid dictionary source '{origin}': {reason}")]
    InvalidSource { origin: String, reason: String },
}

/// Counters collected while loading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Distinct words kept
    pub accepted: usize,
    /// Entries that normalized to an already-kept word
    pub duplicates: usize,
    /// Entries dropped because they were not purely alphabetic
    pub rejected: usize,
}

/// Load a dictionary from the given source
///
/// # Errors
///
/// Returns `DictionaryError::InvalidSource` if the source cannot be read or
/// contains no usable words.
pub fn load(source: &DictionarySource) -> Result<(Dictionary, LoadStats), DictionaryError> {
    let (dictionary, stats) = match source {
        DictionarySource::Embedded => load_entries(DEFAULT_WORDS.iter().copied()),
        DictionarySource::File(path) => {
            let content = read_source(path)?;
            load_entries(content.lines())
        }
    };

    if dictionary.is_empty() {
        return Err(DictionaryError::InvalidSource {
            origin: source.to_string(),
            reason: "no usable words".to_string(),
        });
    }

    info!(
        %source,
        words = stats.accepted,
        duplicates = stats.duplicates,
        rejected = stats.rejected,
        lengths = ?dictionary.lengths(),
        "dictionary loaded"
    );

    Ok((dictionary, stats))
}

/// Load words from a file
///
/// # Errors
///
/// Returns `DictionaryError::InvalidSource` if the file cannot be read or
/// contains no usable words.
///
/// # Examples
/// ```no_run
/// use word_ladder::dictionary::loader::load_from_file;
///
/// let (dictionary, _) = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<(Dictionary, LoadStats), DictionaryError> {
    load(&DictionarySource::File(path.as_ref().to_path_buf()))
}

/// Load the embedded default dictionary
///
/// # Errors
///
/// Only fails if the bundled list is empty, which the build would not produce.
pub fn load_embedded() -> Result<(Dictionary, LoadStats), DictionaryError> {
    load(&DictionarySource::Embedded)
}

fn read_source(path: &Path) -> Result<String, DictionaryError> {
    fs::read_to_string(path).map_err(|e| DictionaryError::InvalidSource {
        origin: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Build a dictionary from raw entries, one word per entry
///
/// Blank entries and `#` comment lines are ignored without being counted.
pub fn load_entries<'a, I>(entries: I) -> (Dictionary, LoadStats)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut rejected = 0;

    let words: Vec<Word> = entries
        .into_iter()
        .map(str::trim)
        .filter(|entry| !entry.is_empty() && !entry.starts_with('#'))
        .filter_map(|entry| match Word::new(entry) {
            Ok(word) => Some(word),
            Err(e) => {
                debug!(entry, error = %e, "skipping dictionary entry");
                rejected += 1;
                None
            }
        })
        .collect();

    let (dictionary, duplicates) = Dictionary::from_words(words);

    let stats = LoadStats {
        accepted: dictionary.len(),
        duplicates,
        rejected,
    };

    (dictionary, stats)
}

/// Convert a string slice to Words, skipping invalid entries
///
/// # Examples
/// ```
/// use word_ladder::dictionary::loader::words_from_slice;
///
/// let words = words_from_slice(&["cat", "Dog", "c4t"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s.trim()).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DEFAULT_WORDS_COUNT;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["cat", "cot", "cog"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "cat");
        assert_eq!(words[2].text(), "cog");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["cat", "it's", "", "d0g", "dog"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "dog");
    }

    #[test]
    fn load_entries_normalizes_and_counts() {
        let (dictionary, stats) =
            load_entries(["  Cat ", "cat", "COT", "", "# comment", "x-ray", "dog"]);

        assert_eq!(
            stats,
            LoadStats {
                accepted: 3,
                duplicates: 1,
                rejected: 1,
            }
        );
        assert!(dictionary.contains("cat"));
        assert!(dictionary.contains("cot"));
        assert!(dictionary.contains("dog"));
        assert!(!dictionary.contains("x-ray"));
    }

    #[test]
    fn load_embedded_dictionary() {
        let (dictionary, stats) = load_embedded().unwrap();

        assert_eq!(stats.accepted, DEFAULT_WORDS_COUNT);
        assert_eq!(stats.rejected, 0);
        assert_eq!(dictionary.len(), DEFAULT_WORDS_COUNT);
        assert!(dictionary.contains("cold"));
        assert!(dictionary.contains("warm"));
    }

    #[test]
    fn load_missing_file_is_invalid_source() {
        let result = load_from_file("/definitely/not/here/words.txt");

        assert!(matches!(
            result,
            Err(DictionaryError::InvalidSource { .. })
        ));
    }

    #[test]
    fn load_file_without_words_is_invalid_source() {
        let path = std::env::temp_dir().join(format!(
            "word_ladder_empty_{}.txt",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "# nothing here").unwrap();
        writeln!(file, "123").unwrap();
        drop(file);

        let result = load_from_file(&path);
        fs::remove_file(&path).unwrap();

        let Err(DictionaryError::InvalidSource { reason, .. }) = result else {
            panic!("expected InvalidSource");
        };
        assert_eq!(reason, "no usable words");
    }

    #[test]
    fn load_file_with_words() {
        let path = std::env::temp_dir().join(format!(
            "word_ladder_words_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "cat\ncot\r\nDOG\n\n").unwrap();

        let result = load_from_file(&path);
        fs::remove_file(&path).unwrap();

        let (dictionary, stats) = result.unwrap();
        assert_eq!(stats.accepted, 3);
        assert!(dictionary.contains("dog"));
    }

    #[test]
    fn source_from_str() {
        assert_eq!(
            "default".parse::<DictionarySource>().unwrap(),
            DictionarySource::Embedded
        );
        assert_eq!(
            "words.txt".parse::<DictionarySource>().unwrap(),
            DictionarySource::File(PathBuf::from("words.txt"))
        );
    }
}
