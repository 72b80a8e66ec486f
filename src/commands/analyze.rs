//! Word analysis command
//!
//! Describes where a word sits in the ladder graph: how many neighbors it
//! has, how large its connected component is, and how far its farthest
//! reachable word lies.

use super::CommandError;
use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::ladder::{degree, distances_from};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub degree: usize,
    /// Words at each distance, starting with the word itself at 0
    pub layer_sizes: Vec<usize>,
    pub component_size: usize,
    /// Words of the same length in the dictionary
    pub bucket_size: usize,
    /// Farthest reachable word and its distance
    pub farthest: Option<(String, usize)>,
}

impl AnalysisResult {
    /// Share of same-length words reachable from this one
    #[must_use]
    pub fn coverage(&self) -> f64 {
        if self.bucket_size == 0 {
            return 0.0;
        }
        self.component_size as f64 / self.bucket_size as f64
    }
}

/// Analyze a word's position in the ladder graph
///
/// # Errors
///
/// Returns an error if:
/// - The word is empty or not a-z
/// - The word is not in the dictionary
pub fn analyze_word(word: &str, dictionary: &Dictionary) -> Result<AnalysisResult, CommandError> {
    let word = Word::new(word.trim())?;
    let reach = distances_from(word.text(), dictionary)?;

    Ok(AnalysisResult {
        degree: degree(&word, dictionary),
        layer_sizes: reach.layer_sizes(),
        component_size: reach.component_size(),
        bucket_size: dictionary.count_of_length(word.length()),
        farthest: reach
            .farthest()
            .map(|far| (far.text().to_string(), reach.eccentricity())),
        word: word.text().to_string(),
    })
}
