//! Request validation and response shaping
//!
//! Sits between the HTTP layer and the search engine. Every failure here is
//! the caller's problem (a 400), never a server fault.

use crate::core::{Word, WordError};
use crate::dictionary::Dictionary;
use crate::ladder::{Distance, Ladder, LimitKind, SearchError, SearchLimits};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Successful ladder response, in the shape the UI reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LadderResponse {
    pub distance_between_words: usize,
    pub path: Vec<String>,
}

/// Body of every non-200 response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Which query parameter a problem refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstWord,
    FinalWord,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstWord => write!(f, "firstWord"),
            Self::FinalWord => write!(f, "finalWord"),
        }
    }
}

/// Client-side request failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("{0} must not be empty")]
    Empty(Field),
    #[error("{field} must contain only letters a-z, got '{word}'")]
    NotAlphabetic { field: Field, word: String },
    #[error("words must be the same length ('{first}' has {first_len} letters, '{last}' has {last_len})")]
    LengthMismatch {
        first: String,
        first_len: usize,
        last: String,
        last_len: usize,
    },
    #[error("'{0}' is not in the dictionary")]
    WordNotFound(String),
    #[error("no ladder connects '{first}' and '{last}'")]
    Unreachable { first: String, last: String },
    #[error("search stopped at the {0} before finding a ladder")]
    SearchLimit(LimitKind),
}

impl RequestError {
    /// Malformed input, as opposed to a well-formed question with no answer
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::Empty(_) | Self::NotAlphabetic { .. } | Self::LengthMismatch { .. }
        )
    }

    #[must_use]
    pub fn body(&self) -> ErrorBody {
        ErrorBody::new(self.to_string())
    }
}

impl From<SearchError> for RequestError {
    fn from(error: SearchError) -> Self {
        match error {
            SearchError::WordNotFound(word) => Self::WordNotFound(word),
            SearchError::LimitExceeded(limit) => Self::SearchLimit(limit),
        }
    }
}

/// Trim and lowercase a raw query value into a Word
///
/// # Errors
///
/// `RequestError::Empty` or `RequestError::NotAlphabetic` naming `field`.
pub fn normalize(field: Field, raw: &str) -> Result<Word, RequestError> {
    Word::new(raw.trim()).map_err(|e| match e {
        WordError::Empty => RequestError::Empty(field),
        WordError::NonAscii | WordError::InvalidCharacters => RequestError::NotAlphabetic {
            field,
            word: raw.trim().to_string(),
        },
    })
}

/// Shared, immutable request handler
///
/// Clone is an `Arc` bump; each worker thread holds its own clone.
#[derive(Debug, Clone)]
pub struct RequestHandler {
    dictionary: Arc<Dictionary>,
    limits: SearchLimits,
}

impl RequestHandler {
    #[must_use]
    pub const fn new(dictionary: Arc<Dictionary>, limits: SearchLimits) -> Self {
        Self { dictionary, limits }
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Validate a pair of words and find the ladder between them
    ///
    /// Checks run in order: non-empty and alphabetic, equal length, present
    /// in the dictionary. The first failure wins.
    ///
    /// # Errors
    ///
    /// Any `RequestError`; an unreachable pair is reported as
    /// `RequestError::Unreachable` because a success response must carry a
    /// numeric distance.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use word_ladder::dictionary::{Dictionary, loader::words_from_slice};
    /// use word_ladder::ladder::SearchLimits;
    /// use word_ladder::service::RequestHandler;
    ///
    /// let (dictionary, _) = Dictionary::from_words(words_from_slice(&["cat", "cot", "dot", "dog"]));
    /// let handler = RequestHandler::new(Arc::new(dictionary), SearchLimits::default());
    ///
    /// let response = handler.handle("Cat", "dog").unwrap();
    /// assert_eq!(response.distance_between_words, 3);
    /// assert_eq!(response.path, ["cat", "cot", "dot", "dog"]);
    /// ```
    pub fn handle(&self, first_word: &str, final_word: &str) -> Result<LadderResponse, RequestError> {
        let first = normalize(Field::FirstWord, first_word)?;
        let last = normalize(Field::FinalWord, final_word)?;

        if first.length() != last.length() {
            return Err(RequestError::LengthMismatch {
                first_len: first.length(),
                first: first.text().to_string(),
                last_len: last.length(),
                last: last.text().to_string(),
            });
        }

        for word in [&first, &last] {
            if !self.dictionary.contains(word.text()) {
                return Err(RequestError::WordNotFound(word.text().to_string()));
            }
        }

        let ladder = Ladder::new(&self.dictionary).with_limits(self.limits);
        let result = ladder.shortest_path(first.text(), last.text())?;

        debug!(
            first = %first,
            last = %last,
            distance = %result.distance,
            "search finished"
        );

        match result.distance {
            Distance::Reachable(hops) => Ok(LadderResponse {
                distance_between_words: hops,
                path: result.path_texts(),
            }),
            Distance::Unreachable => Err(RequestError::Unreachable {
                first: first.text().to_string(),
                last: last.text().to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::{load_embedded, words_from_slice};

    fn handler(words: &[&str]) -> RequestHandler {
        let (dictionary, _) = Dictionary::from_words(words_from_slice(words));
        RequestHandler::new(Arc::new(dictionary), SearchLimits::default())
    }

    fn weaver() -> RequestHandler {
        handler(&["cat", "cot", "cog", "dog", "dot", "cop", "zzz"])
    }

    #[test]
    fn handle_finds_ladder() {
        let response = weaver().handle("cat", "dog").unwrap();
        assert_eq!(
            response,
            LadderResponse {
                distance_between_words: 3,
                path: vec![
                    "cat".to_string(),
                    "cot".to_string(),
                    "dot".to_string(),
                    "dog".to_string()
                ],
            }
        );
    }

    #[test]
    fn handle_normalizes_input() {
        let response = weaver().handle("  CAT ", "Dog").unwrap();
        assert_eq!(response.distance_between_words, 3);
        assert_eq!(response.path.first().map(String::as_str), Some("cat"));
    }

    #[test]
    fn handle_same_word() {
        let response = weaver().handle("cog", "cog").unwrap();
        assert_eq!(response.distance_between_words, 0);
        assert_eq!(response.path, ["cog"]);
    }

    #[test]
    fn empty_input_rejected() {
        let handler = weaver();
        assert_eq!(
            handler.handle("", "dog"),
            Err(RequestError::Empty(Field::FirstWord))
        );
        assert_eq!(
            handler.handle("cat", "   "),
            Err(RequestError::Empty(Field::FinalWord))
        );
    }

    #[test]
    fn non_alphabetic_rejected() {
        let err = weaver().handle("c4t", "dog").unwrap_err();
        assert_eq!(
            err,
            RequestError::NotAlphabetic {
                field: Field::FirstWord,
                word: "c4t".to_string()
            }
        );
        assert!(err.is_invalid_input());
    }

    #[test]
    fn validation_order_alphabetic_before_length() {
        // Both problems present: the alphabetic check fires first
        let err = weaver().handle("cat", "do-gs").unwrap_err();
        assert!(matches!(
            err,
            RequestError::NotAlphabetic {
                field: Field::FinalWord,
                ..
            }
        ));
    }

    #[test]
    fn length_mismatch_rejected() {
        let err = weaver().handle("cat", "dogs").unwrap_err();
        assert!(matches!(
            err,
            RequestError::LengthMismatch {
                first_len: 3,
                last_len: 4,
                ..
            }
        ));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn validation_order_length_before_dictionary() {
        let err = weaver().handle("xyz", "abcd").unwrap_err();
        assert!(matches!(err, RequestError::LengthMismatch { .. }));
    }

    #[test]
    fn missing_word_named() {
        let handler = weaver();
        assert_eq!(
            handler.handle("cat", "xyz"),
            Err(RequestError::WordNotFound("xyz".to_string()))
        );
        assert_eq!(
            handler.handle("abc", "xyz"),
            Err(RequestError::WordNotFound("abc".to_string()))
        );
        assert!(!RequestError::WordNotFound("abc".to_string()).is_invalid_input());
    }

    #[test]
    fn unreachable_pair_is_client_error() {
        let err = weaver().handle("cat", "zzz").unwrap_err();
        assert_eq!(
            err,
            RequestError::Unreachable {
                first: "cat".to_string(),
                last: "zzz".to_string()
            }
        );
        assert_eq!(err.body().message, "no ladder connects 'cat' and 'zzz'");
    }

    #[test]
    fn search_limit_surfaced() {
        let (dictionary, _) = load_embedded().unwrap();
        let handler = RequestHandler::new(
            Arc::new(dictionary),
            SearchLimits {
                max_depth: Some(2),
                max_visited: None,
            },
        );

        assert_eq!(
            handler.handle("cold", "warm"),
            Err(RequestError::SearchLimit(LimitKind::Depth(2)))
        );
    }

    #[test]
    fn response_serializes_camel_case() {
        let response = weaver().handle("cat", "cot").unwrap();
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"distanceBetweenWords":1,"path":["cat","cot"]}"#);
    }

    #[test]
    fn error_body_serializes_message() {
        let body = RequestError::Empty(Field::FinalWord).body();
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"message":"finalWord must not be empty"}"#);
    }
}
