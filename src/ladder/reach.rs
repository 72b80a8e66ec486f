//! Full BFS layering from a single word
//!
//! Used for analysis rather than request handling: it always explores the
//! whole connected component.

use super::neighbors::for_each_neighbor;
use super::search::SearchError;
use crate::core::Word;
use crate::dictionary::Dictionary;
use rustc_hash::FxHashSet;

/// Words grouped by ladder distance from an origin
#[derive(Debug, Clone)]
pub struct Reach<'d> {
    /// `layers[d]` holds every word exactly `d` steps away, in discovery order
    pub layers: Vec<Vec<&'d Word>>,
}

impl<'d> Reach<'d> {
    #[must_use]
    pub fn origin(&self) -> &'d Word {
        self.layers[0][0]
    }

    /// Words reachable from the origin, itself included
    #[must_use]
    pub fn component_size(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }

    /// Distance to the farthest reachable word
    #[must_use]
    pub fn eccentricity(&self) -> usize {
        self.layers.len() - 1
    }

    /// First-discovered word in the deepest layer, if the origin has neighbors
    #[must_use]
    pub fn farthest(&self) -> Option<&'d Word> {
        if self.layers.len() < 2 {
            return None;
        }
        self.layers.last().and_then(|layer| layer.first()).copied()
    }

    #[must_use]
    pub fn layer_sizes(&self) -> Vec<usize> {
        self.layers.iter().map(Vec::len).collect()
    }
}

/// Layer the component containing `start` by distance
///
/// # Errors
///
/// `SearchError::WordNotFound` if `start` is not in the dictionary.
pub fn distances_from<'d>(start: &str, dictionary: &'d Dictionary) -> Result<Reach<'d>, SearchError> {
    let origin = dictionary
        .get(start)
        .ok_or_else(|| SearchError::WordNotFound(start.to_string()))?;

    let mut visited: FxHashSet<&'d Word> = FxHashSet::default();
    visited.insert(origin);

    let mut layers = vec![vec![origin]];

    loop {
        let mut next = Vec::new();
        if let Some(current) = layers.last() {
            for &word in current {
                for_each_neighbor(word, dictionary, |neighbor| {
                    if visited.insert(neighbor) {
                        next.push(neighbor);
                    }
                });
            }
        }

        if next.is_empty() {
            break;
        }
        layers.push(next);
    }

    Ok(Reach { layers })
}
