//! Word ladder search
//!
//! The ladder graph has a node per dictionary word and an edge between words
//! of equal length that differ in exactly one position. It is never built;
//! [`neighbors`] computes edges on demand and [`shortest_path`] runs BFS over
//! them.

pub mod neighbors;
pub mod reach;
pub mod search;

use crate::core::Word;
use crate::dictionary::Dictionary;

pub use neighbors::{degree, neighbors};
pub use reach::{Reach, distances_from};
pub use search::{Distance, LimitKind, PathResult, SearchError, SearchLimits, shortest_path};

/// Search front end bound to one dictionary
///
/// Cheap to build: holds a borrow and a copy of the limits, nothing else.
/// Every call allocates its own search state, so one `Ladder` can be used
/// from many threads at once.
#[derive(Debug, Clone, Copy)]
pub struct Ladder<'d> {
    dictionary: &'d Dictionary,
    limits: SearchLimits,
}

impl<'d> Ladder<'d> {
    #[must_use]
    pub const fn new(dictionary: &'d Dictionary) -> Self {
        Self {
            dictionary,
            limits: SearchLimits::unlimited(),
        }
    }

    #[must_use]
    pub const fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    #[must_use]
    pub const fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Shortest ladder between two words under this ladder's limits
    ///
    /// # Errors
    ///
    /// See [`search::shortest_path`].
    pub fn shortest_path(&self, start: &str, goal: &str) -> Result<PathResult<'d>, SearchError> {
        shortest_path(start, goal, self.dictionary, self.limits)
    }

    #[must_use]
    pub fn neighbors(&self, word: &Word) -> Vec<&'d Word> {
        neighbors(word, self.dictionary)
    }

    /// BFS layers from `start`; ignores limits
    ///
    /// # Errors
    ///
    /// `SearchError::WordNotFound` if `start` is not in the dictionary.
    pub fn reach(&self, start: &str) -> Result<Reach<'d>, SearchError> {
        distances_from(start, self.dictionary)
    }
}
