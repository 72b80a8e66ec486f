//! HTTP service layer
//!
//! Request validation ([`handler`]), settings ([`config`]) and the threaded
//! listener ([`server`]).

pub mod config;
pub mod handler;
pub mod server;

pub use config::{DEFAULT_HOST, DEFAULT_PORT, ServerConfig};
pub use handler::{ErrorBody, Field, LadderResponse, RequestError, RequestHandler};
pub use server::{LadderServer, Reply, RunningServer, ServerError, route};
