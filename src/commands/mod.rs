//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod neighbors;
pub mod serve;
pub mod solve;

use crate::core::WordError;
use crate::ladder::SearchError;
use thiserror::Error;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use neighbors::{NeighborsResult, list_neighbors};
pub use serve::run_serve;
pub use solve::{SolveConfig, SolveResult, solve_ladder};

/// Failures from the non-serving commands
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("dictionary has fewer than two words of length {0}")]
    SparseBucket(usize),
    #[error("dictionary is empty")]
    EmptyDictionary,
}
