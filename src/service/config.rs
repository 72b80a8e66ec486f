//! Server configuration

use crate::ladder::SearchLimits;
use std::num::NonZeroUsize;
use std::thread;

/// Port the UI expects the backend on
pub const DEFAULT_PORT: u16 = 3000;

/// Interface to listen on
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Resolved settings for one server instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Number of request worker threads
    pub workers: usize,
    pub limits: SearchLimits,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            workers: default_workers(),
            limits: SearchLimits::default(),
        }
    }
}

impl ServerConfig {
    /// `host:port` suitable for binding
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// One worker per available core, falling back to 4
#[must_use]
pub fn default_workers() -> usize {
    thread::available_parallelism().map_or(4, NonZeroUsize::get)
}
