//! Breadth-first shortest ladder search
//!
//! Every edge has weight 1, so BFS finds a shortest path and is equivalent to
//! Dijkstra here. All search state (frontier, predecessors) lives on the stack
//! of the call and is dropped when it returns.

use super::neighbors::for_each_neighbor;
use crate::core::Word;
use crate::dictionary::Dictionary;
use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::fmt;
use thiserror::Error;

/// Length of a ladder, or the absence of one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distance {
    Reachable(usize),
    Unreachable,
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reachable(hops) => write!(f, "{hops}"),
            Self::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// Outcome of a search
///
/// `path` runs from start to goal inclusive and is empty when unreachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult<'d> {
    pub distance: Distance,
    pub path: Vec<&'d Word>,
}

impl<'d> PathResult<'d> {
    #[must_use]
    pub const fn unreachable() -> Self {
        Self {
            distance: Distance::Unreachable,
            path: Vec::new(),
        }
    }

    fn found(path: Vec<&'d Word>) -> Self {
        Self {
            distance: Distance::Reachable(path.len().saturating_sub(1)),
            path,
        }
    }

    #[must_use]
    pub const fn is_reachable(&self) -> bool {
        matches!(self.distance, Distance::Reachable(_))
    }

    /// Number of single-letter changes, if reachable
    #[must_use]
    pub const fn hops(&self) -> Option<usize> {
        match self.distance {
            Distance::Reachable(hops) => Some(hops),
            Distance::Unreachable => None,
        }
    }

    /// Path as owned strings
    #[must_use]
    pub fn path_texts(&self) -> Vec<String> {
        self.path.iter().map(|w| w.text().to_string()).collect()
    }
}

/// Optional bounds on how much work one search may do
///
/// A disconnected pair in a large bucket makes BFS visit the whole component
/// before giving up. These cap that.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Deepest BFS layer to expand into
    pub max_depth: Option<usize>,
    /// Most words the search may discover
    pub max_visited: Option<usize>,
}

impl SearchLimits {
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_depth: None,
            max_visited: None,
        }
    }
}

/// Which limit stopped a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    Depth(usize),
    Visited(usize),
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Depth(depth) => write!(f, "maximum ladder length of {depth}"),
            Self::Visited(count) => write!(f, "maximum of {count} explored words"),
        }
    }
}

/// Reasons a search produced no `PathResult`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("'{0}' is not in the dictionary")]
    WordNotFound(String),
    #[error("search stopped at the {0} before finding a ladder")]
    LimitExceeded(LimitKind),
}

/// Find a shortest ladder from `start` to `goal`
///
/// - Different lengths: unreachable, never an error.
/// - Either word missing: `WordNotFound` naming it (start checked first).
/// - `start == goal`: distance 0, path `[start]`, no search.
///
/// Ties between equally short ladders are broken by neighbor enumeration
/// order, so the same dictionary always yields the same path.
///
/// # Errors
///
/// `SearchError::WordNotFound` for an absent word, `SearchError::LimitExceeded`
/// when a limit in `limits` stops the search first.
pub fn shortest_path<'d>(
    start: &str,
    goal: &str,
    dictionary: &'d Dictionary,
    limits: SearchLimits,
) -> Result<PathResult<'d>, SearchError> {
    if start.len() != goal.len() {
        return Ok(PathResult::unreachable());
    }

    let start = lookup(start, dictionary)?;
    let goal = lookup(goal, dictionary)?;

    if start == goal {
        return Ok(PathResult::found(vec![start]));
    }

    let mut predecessors: FxHashMap<&'d Word, Option<&'d Word>> = FxHashMap::default();
    let mut frontier: VecDeque<(&'d Word, usize)> = VecDeque::new();
    let mut depth_cut = false;

    predecessors.insert(start, None);
    frontier.push_back((start, 0));

    while let Some((current, depth)) = frontier.pop_front() {
        if limits.max_depth.is_some_and(|max| depth >= max) {
            depth_cut = true;
            continue;
        }

        let mut found = false;
        let mut visited_cut = false;

        for_each_neighbor(current, dictionary, |neighbor| {
            if found || visited_cut || predecessors.contains_key(neighbor) {
                return;
            }
            if limits
                .max_visited
                .is_some_and(|max| predecessors.len() >= max)
            {
                visited_cut = true;
                return;
            }

            predecessors.insert(neighbor, Some(current));
            if neighbor == goal {
                found = true;
            } else {
                frontier.push_back((neighbor, depth + 1));
            }
        });

        if found {
            return Ok(PathResult::found(reconstruct(goal, &predecessors)));
        }
        if visited_cut && let Some(max) = limits.max_visited {
            return Err(SearchError::LimitExceeded(LimitKind::Visited(max)));
        }
    }

    if depth_cut && let Some(max) = limits.max_depth {
        return Err(SearchError::LimitExceeded(LimitKind::Depth(max)));
    }

    Ok(PathResult::unreachable())
}

fn lookup<'d>(word: &str, dictionary: &'d Dictionary) -> Result<&'d Word, SearchError> {
    dictionary
        .get(word)
        .ok_or_else(|| SearchError::WordNotFound(word.to_string()))
}

/// Walk predecessor links from `goal` back to the start, then reverse
fn reconstruct<'d>(
    goal: &'d Word,
    predecessors: &FxHashMap<&'d Word, Option<&'d Word>>,
) -> Vec<&'d Word> {
    let mut path = vec![goal];
    let mut current = goal;

    while let Some(&Some(previous)) = predecessors.get(current) {
        path.push(previous);
        current = previous;
    }

    path.reverse();
    path
}
