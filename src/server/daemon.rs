//! Search server
//!
//! Holds the searcher in memory and serves requests over TCP. Connections
//! are handled on their own threads; the searcher is shared read-only, so
//! requests never wait on each other.

use crate::error::{ErrorKind, FolioError};
use crate::query::SearchQuery;
use crate::searcher::Searcher;
use crate::server::protocol::{
    read_message, write_message, Request, Response, SearchResponse, StatusResponse,
};
use anyhow::{Context, Result};
use std::io::{BufReader, BufWriter};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Connection timeout
const CONNECTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum results per search response
///
/// Keeps a pattern that matches nearly everywhere from producing a response
/// larger than the protocol frame limit (~500 bytes of context per result).
pub const MAX_RESULTS_CAP: usize = 50_000;

/// Server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub listen: SocketAddr,
    /// Upper bound applied to every search, whatever the client asks for
    pub max_results: usize,
    pub connection_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: super::listen_addr_from_env(),
            max_results: MAX_RESULTS_CAP,
            connection_timeout: CONNECTION_TIMEOUT,
        }
    }
}

/// Statistics for the server
struct ServerStats {
    start_time: Instant,
    queries_served: AtomicU64,
}

impl ServerStats {
    fn new() -> Self {
        Self {
            start_time: Instant::now(),
            queries_served: AtomicU64::new(0),
        }
    }
}

/// The search server
pub struct SearchServer {
    searcher: Arc<Searcher>,
    config: ServerConfig,
    stats: ServerStats,
    /// Shutdown flag
    shutdown: AtomicBool,
}

impl SearchServer {
    /// Create a new server wrapped in Arc
    pub fn new(searcher: Arc<Searcher>, config: ServerConfig) -> Arc<Self> {
        Arc::new(Self {
            searcher,
            config,
            stats: ServerStats::new(),
            shutdown: AtomicBool::new(false),
        })
    }

    /// Bind the configured address and serve until shutdown (blocking)
    pub fn run(self: &Arc<Self>) -> Result<()> {
        let listener = TcpListener::bind(self.config.listen)
            .with_context(|| format!("Failed to bind to {}", self.config.listen))?;
        self.serve(listener)
    }

    /// Serve connections from an already bound listener (blocking)
    pub fn serve(self: &Arc<Self>, listener: TcpListener) -> Result<()> {
        let local_addr = listener.local_addr()?;
        info!(addr = %local_addr, "listening");

        for stream in listener.incoming() {
            if self.shutdown.load(Ordering::Relaxed) {
                break;
            }

            match stream {
                Ok(stream) => {
                    let _ = stream.set_read_timeout(Some(self.config.connection_timeout));
                    let _ = stream.set_write_timeout(Some(self.config.connection_timeout));

                    let server = Arc::clone(self);
                    thread::spawn(move || {
                        if let Err(e) = server.handle_connection(stream, local_addr) {
                            warn!(error = %e, "connection error");
                        }
                    });
                }
                Err(e) => {
                    warn!(error = %e, "accept error");
                }
            }
        }

        info!("server stopped");
        Ok(())
    }

    /// Handle a single client connection
    fn handle_connection(&self, stream: TcpStream, local_addr: SocketAddr) -> Result<()> {
        let peer = stream.peer_addr().ok();
        let mut reader = BufReader::new(stream.try_clone()?);
        let mut writer = BufWriter::new(stream);
        debug!(?peer, "connection opened");

        loop {
            let request: Request = match read_message(&mut reader) {
                Ok(req) => req,
                Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                    // Client disconnected
                    break;
                }
                Err(e) if e.kind() == std::io::ErrorKind::InvalidInput => {
                    // The frame body was left unread; the stream cannot be resynced
                    let resp = Response::Error {
                        kind: ErrorKind::Validation,
                        message: format!("Invalid request: {}", e),
                    };
                    write_message(&mut writer, &resp)?;
                    warn!(?peer, error = %e, "closing connection after oversized frame");
                    break;
                }
                Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                    let resp = Response::Error {
                        kind: ErrorKind::Validation,
                        message: format!("Invalid request: {}", e),
                    };
                    write_message(&mut writer, &resp)?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            let response = self.handle_request(request);
            write_message(&mut writer, &response)?;

            if matches!(response, Response::ShuttingDown) {
                // Wake the accept loop so it observes the flag
                let _ = TcpStream::connect(local_addr);
                break;
            }
        }

        debug!(?peer, "connection closed");
        Ok(())
    }

    /// Handle a single request
    pub fn handle_request(&self, request: Request) -> Response {
        match request {
            Request::Search { query, limit } => self.handle_search(query, limit),

            Request::Page { offset } => {
                self.stats.queries_served.fetch_add(1, Ordering::Relaxed);
                Response::Page(self.searcher.page(offset))
            }

            Request::Titles => Response::Titles {
                titles: self.searcher.titles().entries().to_vec(),
            },

            Request::Status => self.handle_status(),

            Request::Shutdown => {
                info!("shutdown requested");
                self.shutdown.store(true, Ordering::Relaxed);
                Response::ShuttingDown
            }

            Request::Ping => Response::Pong,
        }
    }

    /// Handle a search request
    fn handle_search(&self, query: SearchQuery, limit: Option<usize>) -> Response {
        let start = Instant::now();
        let cap = limit.map_or(self.config.max_results, |l| l.min(self.config.max_results));

        // One extra result tells us whether the cap cut anything off
        let mut results = match self.searcher.search_limited(&query, Some(cap.saturating_add(1))) {
            Ok(results) => results,
            Err(e) => return error_response(&e),
        };
        let truncated = results.len() > cap;
        results.truncate(cap);

        self.stats.queries_served.fetch_add(1, Ordering::Relaxed);

        let duration_ms = start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            query = %query.text,
            results = results.len(),
            truncated,
            duration_ms,
            "search served"
        );

        Response::Search(SearchResponse {
            results,
            duration_ms,
            truncated,
        })
    }

    /// Handle status request
    fn handle_status(&self) -> Response {
        let stats = self.searcher.stats();

        Response::Status(StatusResponse {
            uptime_secs: self.stats.start_time.elapsed().as_secs(),
            corpus_bytes: stats.corpus_bytes,
            titles: stats.titles,
            queries_served: self.stats.queries_served.load(Ordering::Relaxed),
            memory_bytes: stats.memory_bytes() as u64,
        })
    }
}

fn error_response(err: &FolioError) -> Response {
    if err.is_request_error() {
        debug!(error = %err, "request rejected");
    } else {
        warn!(error = %err, "request failed");
    }
    Response::Error {
        kind: err.kind(),
        message: err.to_string(),
    }
}
