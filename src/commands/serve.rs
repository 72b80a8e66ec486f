//! Serve command
//!
//! Binds the HTTP listener and blocks on the worker pool.

use crate::dictionary::Dictionary;
use crate::service::{LadderServer, ServerConfig, ServerError};
use std::sync::Arc;

/// Bind and serve until the process exits
///
/// # Errors
///
/// Returns a `ServerError` if the address cannot be bound or a worker fails.
pub fn run_serve(config: &ServerConfig, dictionary: Arc<Dictionary>) -> Result<(), ServerError> {
    LadderServer::bind(config, dictionary)?.run()
}
