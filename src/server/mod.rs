//! Search server for warm queries
//!
//! The server builds the [`Searcher`](crate::Searcher) once and keeps it in
//! memory, answering requests over TCP with a length-prefixed JSON protocol.
//!
//! Architecture:
//! - `daemon`: Accept loop, one thread per connection, shared `Arc<Searcher>`
//! - `client`: Connects, sends requests, decodes responses
//! - `protocol`: Message types and framing

mod client;
pub mod daemon;
pub mod protocol;

pub use client::{ClientError, ClientResult, SearchClient};
pub use daemon::{SearchServer, ServerConfig};

use std::net::{Ipv4Addr, SocketAddr};

/// Port used when neither `--listen` nor `PORT` is given
pub const DEFAULT_PORT: u16 = 3001;

/// Listen address from the `PORT` environment variable, on loopback
///
/// Falls back to [`DEFAULT_PORT`] when `PORT` is unset or not a port number.
pub fn listen_addr_from_env() -> SocketAddr {
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.trim().parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    SocketAddr::from((Ipv4Addr::LOCALHOST, port))
}
