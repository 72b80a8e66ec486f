//! Core domain types for word ladders
//!
//! Pure value types with no I/O. Everything above this layer borrows them.

mod word;

pub use word::{Word, WordError};
