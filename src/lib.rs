//! Word Ladder
//!
//! Finds the shortest chain of dictionary words between two words of equal
//! length, changing one letter per step, and serves it over HTTP.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::dictionary::{Dictionary, loader::words_from_slice};
//! use word_ladder::ladder::{Distance, Ladder};
//!
//! let (dictionary, _) = Dictionary::from_words(words_from_slice(&[
//!     "cold", "cord", "card", "ward", "warm",
//! ]));
//!
//! let result = Ladder::new(&dictionary).shortest_path("cold", "warm").unwrap();
//! assert_eq!(result.distance, Distance::Reachable(4));
//! assert_eq!(result.path_texts(), ["cold", "cord", "card", "ward", "warm"]);
//! ```

// Core domain types
pub mod core;

// Word storage and loading
pub mod dictionary;

// Graph search
pub mod ladder;

// HTTP endpoint
pub mod service;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
