//! Ladder solving command
//!
//! Runs one pair through the same validation and search path the HTTP
//! handler uses.

use crate::dictionary::Dictionary;
use crate::ladder::SearchLimits;
use crate::service::{LadderResponse, RequestError, RequestHandler};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Configuration for solving one pair
pub struct SolveConfig {
    pub first: String,
    pub last: String,
    pub limits: SearchLimits,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(first: String, last: String) -> Self {
        Self {
            first,
            last,
            limits: SearchLimits::unlimited(),
        }
    }
}

/// Result of solving one pair
pub struct SolveResult {
    pub response: LadderResponse,
    pub duration: Duration,
}

/// Solve a ladder between two words
///
/// # Errors
///
/// Returns the same `RequestError` the HTTP endpoint would report as a 400.
pub fn solve_ladder(
    config: SolveConfig,
    dictionary: Arc<Dictionary>,
) -> Result<SolveResult, RequestError> {
    let handler = RequestHandler::new(dictionary, config.limits);

    let start = Instant::now();
    let response = handler.handle(&config.first, &config.last)?;

    Ok(SolveResult {
        response,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::load_embedded;
    use crate::ladder::LimitKind;

    fn embedded() -> Arc<Dictionary> {
        Arc::new(load_embedded().unwrap().0)
    }

    #[test]
    fn solve_embedded_pair() {
        let config = SolveConfig::new("head".to_string(), "tail".to_string());
        let result = solve_ladder(config, embedded()).unwrap();

        assert_eq!(result.response.distance_between_words, 5);
        assert_eq!(
            result.response.path,
            ["head", "held", "hell", "tell", "tall", "tail"]
        );
    }

    #[test]
    fn solve_reports_validation_errors() {
        let config = SolveConfig::new("head".to_string(), "tails".to_string());
        let result = solve_ladder(config, embedded());

        assert!(matches!(result, Err(RequestError::LengthMismatch { .. })));
    }

    #[test]
    fn solve_respects_limits() {
        let mut config = SolveConfig::new("head".to_string(), "tail".to_string());
        config.limits.max_depth = Some(3);

        let result = solve_ladder(config, embedded());
        assert!(matches!(
            result,
            Err(RequestError::SearchLimit(LimitKind::Depth(3)))
        ));
    }

    #[test]
    fn solve_isolated_word_unreachable() {
        let config = SolveConfig::new("ebb".to_string(), "cat".to_string());
        let result = solve_ladder(config, embedded());

        assert!(matches!(result, Err(RequestError::Unreachable { .. })));
    }
}
