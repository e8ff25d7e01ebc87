//! Protocol messages for client-server communication
//!
//! Uses a simple length-prefixed JSON protocol:
//! - 4 bytes (little-endian u32): message length
//! - N bytes: JSON-encoded message

use crate::error::ErrorKind;
use crate::index::TitleBoundary;
use crate::page::PageResult;
use crate::query::SearchQuery;
use crate::searcher::SearchResult;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// Largest frame either side will read
pub const MAX_MESSAGE_SIZE: usize = 100 * 1024 * 1024;

/// Request from client to server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Run a search
    Search {
        query: SearchQuery,
        /// Maximum number of results (server cap applies on top)
        #[serde(default)]
        limit: Option<usize>,
    },

    /// Read the page around an offset
    Page { offset: i64 },

    /// List the title boundary table
    Titles,

    /// Check server health and get stats
    Status,

    /// Graceful shutdown request
    Shutdown,

    /// Ping for connection testing
    Ping,
}

/// Response from server to client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Response {
    /// Search results
    Search(SearchResponse),

    /// Page text
    Page(PageResult),

    /// Title boundaries in offset order
    Titles { titles: Vec<TitleBoundary> },

    /// Server status
    Status(StatusResponse),

    /// Shutdown acknowledged
    ShuttingDown,

    /// Pong response
    Pong,

    /// Request failed; other requests are unaffected
    Error { kind: ErrorKind, message: String },
}

/// Search results response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matches in ascending offset order
    pub results: Vec<SearchResult>,
    /// Time taken in milliseconds
    pub duration_ms: f64,
    /// Whether more matches existed than were returned
    pub truncated: bool,
}

/// Server status response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server uptime in seconds
    pub uptime_secs: u64,
    pub corpus_bytes: usize,
    pub titles: usize,
    /// Total queries served (search and page)
    pub queries_served: u64,
    /// Memory usage in bytes (approximate)
    pub memory_bytes: u64,
}

/// Write a message to a stream with length prefix
pub fn write_message<W: Write>(writer: &mut W, msg: &impl Serialize) -> std::io::Result<()> {
    let json = serde_json::to_vec(msg)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    if json.len() > MAX_MESSAGE_SIZE {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "Message too large",
        ));
    }

    let len = json.len() as u32;
    writer.write_all(&len.to_le_bytes())?;
    writer.write_all(&json)?;
    writer.flush()?;

    Ok(())
}

/// Read a message from a stream with length prefix
///
/// An oversized frame fails with `InvalidInput` before its body is read, so
/// the stream is no longer aligned on a frame boundary. A body that is not
/// valid JSON fails with `InvalidData` after being fully consumed.
pub fn read_message<R: Read, T: for<'de> Deserialize<'de>>(reader: &mut R) -> std::io::Result<T> {
    let mut len_buf = [0u8; 4];
    reader.read_exact(&mut len_buf)?;
    let len = u32::from_le_bytes(len_buf) as usize;

    if len > MAX_MESSAGE_SIZE {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "Message too large",
        ));
    }

    let mut buf = vec![0u8; len];
    reader.read_exact(&mut buf)?;

    serde_json::from_slice(&buf).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}
