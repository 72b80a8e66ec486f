//! HTTP front end
//!
//! A `tiny_http` listener shared by a fixed pool of worker threads. Each
//! worker blocks in `recv`, routes the request, and writes a JSON reply. The
//! dictionary behind the handler is read-only, so workers never contend.

use super::config::ServerConfig;
use super::handler::{ErrorBody, RequestHandler};
use crate::dictionary::Dictionary;
use serde::Serialize;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Instant;
use thiserror::Error;
use tiny_http::{Header, Method, Request, Response, Server};
use tracing::{debug, error, info, warn};
use url::Url;

/// Server lifecycle failures
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {address}: {reason}")]
    Bind { address: String, reason: String },
    #[error("failed to start worker thread: {0}")]
    Spawn(#[from] io::Error),
    #[error("{0} worker thread(s) panicked")]
    WorkerPanicked(usize),
}

/// A routed response, before it is written to the socket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self { status, body },
            Err(e) => {
                error!(error = %e, "failed to serialize response");
                Self {
                    status: 500,
                    body: r#"{"message":"internal error"}"#.to_string(),
                }
            }
        }
    }

    fn error(status: u16, message: impl Into<String>) -> Self {
        Self::json(status, &ErrorBody::new(message))
    }

    fn into_response(self) -> Response<io::Cursor<Vec<u8>>> {
        let mut response = Response::from_data(self.body.into_bytes()).with_status_code(self.status);
        for (field, value) in [
            ("Content-Type", "application/json; charset=utf-8"),
            ("Access-Control-Allow-Origin", "*"),
        ] {
            if let Ok(header) = Header::from_bytes(field.as_bytes(), value.as_bytes()) {
                response.add_header(header);
            }
        }
        response
    }
}

/// Map one request to a reply
///
/// `GET /?firstWord=..&finalWord=..` is the only route. A missing parameter
/// is treated as empty input.
pub fn route(method: &Method, url: &str, handler: &RequestHandler) -> Reply {
    let Ok(parsed) = Url::parse(&format!("http://localhost{url}")) else {
        return Reply::error(400, "malformed request url");
    };

    if parsed.path() != "/" {
        return Reply::error(404, format!("no route for {}", parsed.path()));
    }

    if *method != Method::Get {
        return Reply::error(405, format!("method {method} not allowed"));
    }

    let mut first_word = None;
    let mut final_word = None;
    for (key, value) in parsed.query_pairs() {
        match key.as_ref() {
            "firstWord" if first_word.is_none() => first_word = Some(value.into_owned()),
            "finalWord" if final_word.is_none() => final_word = Some(value.into_owned()),
            _ => {}
        }
    }

    match handler.handle(
        first_word.as_deref().unwrap_or_default(),
        final_word.as_deref().unwrap_or_default(),
    ) {
        Ok(response) => Reply::json(200, &response),
        Err(e) => {
            debug!(error = %e, "rejected request");
            Reply::json(400, &e.body())
        }
    }
}

fn serve_request(request: Request, handler: &RequestHandler) {
    let started = Instant::now();
    let method = request.method().to_string();
    let url = request.url().to_string();

    let reply = route(request.method(), &url, handler);
    let status = reply.status;

    if let Err(e) = request.respond(reply.into_response()) {
        warn!(%method, %url, error = %e, "failed to write response");
        return;
    }

    info!(
        %method,
        %url,
        status,
        elapsed_us = started.elapsed().as_micros() as u64,
        "request"
    );
}

/// A bound but not yet serving listener
pub struct LadderServer {
    server: Arc<Server>,
    handler: RequestHandler,
    workers: usize,
}

impl LadderServer {
    /// Bind the listening socket
    ///
    /// Binding happens before any worker starts, so a port conflict is
    /// reported before traffic could be accepted.
    ///
    /// # Errors
    ///
    /// `ServerError::Bind` if the address cannot be bound.
    pub fn bind(config: &ServerConfig, dictionary: Arc<Dictionary>) -> Result<Self, ServerError> {
        let address = config.address();
        let server = Server::http(&address).map_err(|e| ServerError::Bind {
            address: address.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            server: Arc::new(server),
            handler: RequestHandler::new(dictionary, config.limits),
            workers: config.workers.max(1),
        })
    }

    /// The address actually bound (useful with port 0)
    #[must_use]
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Start the worker pool and return immediately
    ///
    /// # Errors
    ///
    /// `ServerError::Spawn` if a worker thread cannot be created.
    pub fn spawn(self) -> Result<RunningServer, ServerError> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let local_addr = self.local_addr();
        let mut workers = Vec::with_capacity(self.workers);

        for id in 0..self.workers {
            let server = Arc::clone(&self.server);
            let handler = self.handler.clone();
            let shutdown = Arc::clone(&shutdown);

            let handle = thread::Builder::new()
                .name(format!("ladder-worker-{id}"))
                .spawn(move || worker_loop(id, &server, &handler, &shutdown))?;
            workers.push(handle);
        }

        info!(
            address = ?local_addr,
            workers = workers.len(),
            words = self.handler.dictionary().len(),
            "server listening"
        );

        Ok(RunningServer {
            server: self.server,
            shutdown,
            workers,
            local_addr,
        })
    }

    /// Serve until the process is stopped
    ///
    /// # Errors
    ///
    /// `ServerError::Spawn` or `ServerError::WorkerPanicked`.
    pub fn run(self) -> Result<(), ServerError> {
        self.spawn()?.join()
    }
}

fn worker_loop(id: usize, server: &Server, handler: &RequestHandler, shutdown: &AtomicBool) {
    debug!(worker = id, "worker started");
    loop {
        match server.recv() {
            Ok(request) => serve_request(request, handler),
            Err(e) => {
                if shutdown.load(Ordering::Acquire) {
                    break;
                }
                warn!(worker = id, error = %e, "failed to receive request");
            }
        }
    }
    debug!(worker = id, "worker stopped");
}

/// Handle to a serving worker pool
pub struct RunningServer {
    server: Arc<Server>,
    shutdown: Arc<AtomicBool>,
    workers: Vec<JoinHandle<()>>,
    local_addr: Option<SocketAddr>,
}

impl RunningServer {
    #[must_use]
    pub const fn local_addr(&self) -> Option<SocketAddr> {
        self.local_addr
    }

    /// Stop accepting requests and wait for every worker to exit
    ///
    /// # Errors
    ///
    /// `ServerError::WorkerPanicked` if any worker panicked.
    pub fn shutdown(self) -> Result<(), ServerError> {
        self.shutdown.store(true, Ordering::Release);
        // Each unblock releases exactly one thread parked in recv
        for _ in &self.workers {
            self.server.unblock();
        }
        info!("server shutting down");
        self.join()
    }

    /// Wait for every worker to exit
    ///
    /// # Errors
    ///
    /// `ServerError::WorkerPanicked` if any worker panicked.
    pub fn join(self) -> Result<(), ServerError> {
        let panicked = self
            .workers
            .into_iter()
            .map(JoinHandle::join)
            .filter(Result::is_err)
            .count();

        if panicked > 0 {
            return Err(ServerError::WorkerPanicked(panicked));
        }
        Ok(())
    }
}
