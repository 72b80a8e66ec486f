//! Benchmark command
//!
//! Samples random word pairs from one length bucket and solves them in
//! parallel. Sampling is seeded, so a given seed and dictionary always
//! produce the same pairs and the same results.

use super::CommandError;
use crate::dictionary::Dictionary;
use crate::ladder::{Distance, Ladder, SearchError, SearchLimits};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Number of pairs to solve
    pub count: usize,
    /// Word length to sample; defaults to the largest bucket
    pub length: Option<usize>,
    pub seed: u64,
    pub limits: SearchLimits,
    /// Draw a progress bar on stderr
    pub progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            count: 200,
            length: None,
            seed: 42,
            limits: SearchLimits::unlimited(),
            progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub length: usize,
    pub total_pairs: usize,
    pub reachable: usize,
    pub unreachable: usize,
    /// Pairs stopped by a search limit
    pub limited: usize,
    pub average_distance: f64,
    pub max_distance: usize,
    /// First pair found at `max_distance`
    pub longest: Option<(String, String)>,
    /// Ladder length → number of pairs
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub pairs_per_second: f64,
}

enum Outcome {
    Reachable(usize),
    Unreachable,
    Limited,
}

/// Run the benchmark
///
/// # Errors
///
/// Returns `CommandError::EmptyDictionary` or `CommandError::SparseBucket`
/// when there is nothing to sample from.
///
/// # Panics
///
/// Panics if the progress template is malformed.
pub fn run_benchmark(
    dictionary: &Dictionary,
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult, CommandError> {
    let length = match config.length {
        Some(length) => length,
        None => largest_bucket(dictionary).ok_or(CommandError::EmptyDictionary)?,
    };

    let words = dictionary.words_of_length(length);
    if words.len() < 2 {
        return Err(CommandError::SparseBucket(length));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let pairs: Vec<(&str, &str)> = (0..config.count)
        .map(|_| {
            let first = words[rng.random_range(0..words.len())];
            let last = words[rng.random_range(0..words.len())];
            (first.text(), last.text())
        })
        .collect();

    let pb = if config.progress {
        ProgressBar::new(pairs.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb.set_message(format!("{length}-letter pairs"));

    let ladder = Ladder::new(dictionary).with_limits(config.limits);
    let start = Instant::now();

    let outcomes: Vec<Outcome> = pairs
        .par_iter()
        .map(|&(first, last)| {
            let outcome = match ladder.shortest_path(first, last) {
                Ok(result) => match result.distance {
                    Distance::Reachable(hops) => Outcome::Reachable(hops),
                    Distance::Unreachable => Outcome::Unreachable,
                },
                Err(SearchError::LimitExceeded(_)) => Outcome::Limited,
                // Both words were drawn from the dictionary
                Err(SearchError::WordNotFound(_)) => Outcome::Unreachable,
            };
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut unreachable = 0;
    let mut limited = 0;
    let mut longest: Option<(usize, usize)> = None;

    for (index, outcome) in outcomes.iter().enumerate() {
        match *outcome {
            Outcome::Reachable(hops) => {
                *distribution.entry(hops).or_insert(0) += 1;
                if longest.is_none_or(|(_, max)| hops > max) {
                    longest = Some((index, hops));
                }
            }
            Outcome::Unreachable => unreachable += 1,
            Outcome::Limited => limited += 1,
        }
    }

    let reachable: usize = distribution.values().sum();
    let total_distance: usize = distribution.iter().map(|(hops, count)| hops * count).sum();
    let average_distance = if reachable > 0 {
        total_distance as f64 / reachable as f64
    } else {
        0.0
    };

    Ok(BenchmarkResult {
        length,
        total_pairs: pairs.len(),
        reachable,
        unreachable,
        limited,
        average_distance,
        max_distance: longest.map_or(0, |(_, hops)| hops),
        longest: longest.map(|(index, _)| {
            let (first, last) = pairs[index];
            (first.to_string(), last.to_string())
        }),
        distribution,
        duration,
        pairs_per_second: pairs.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

/// Length with the most words; ties go to the longer length
fn largest_bucket(dictionary: &Dictionary) -> Option<usize> {
    dictionary
        .lengths()
        .into_iter()
        .max_by_key(|&length| dictionary.count_of_length(length))
}
