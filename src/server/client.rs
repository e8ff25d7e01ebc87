//! Client for connecting to a running search server

use crate::error::ErrorKind;
use crate::index::TitleBoundary;
use crate::page::PageResult;
use crate::query::SearchQuery;
use crate::server::protocol::{
    read_message, write_message, Request, Response, SearchResponse, StatusResponse,
};
use std::io::{BufReader, BufWriter};
use std::net::{SocketAddr, TcpStream};
use std::time::Duration;
use thiserror::Error;

/// Read/write timeout
const IO_TIMEOUT: Duration = Duration::from_secs(30);

/// Connect timeout
const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in client operations
#[derive(Debug, Error)]
pub enum ClientError {
    /// Communication error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Server rejected the request
    #[error("Server error ({kind:?}): {message}")]
    Server { kind: ErrorKind, message: String },
    /// Response did not match the request
    #[error("Invalid response from server")]
    InvalidResponse,
}

/// Client for the search server
pub struct SearchClient {
    reader: BufReader<TcpStream>,
    writer: BufWriter<TcpStream>,
}

impl SearchClient {
    /// Connect to a server
    pub fn connect(addr: SocketAddr) -> ClientResult<Self> {
        let stream = TcpStream::connect_timeout(&addr, CONNECT_TIMEOUT)?;
        let _ = stream.set_read_timeout(Some(IO_TIMEOUT));
        let _ = stream.set_write_timeout(Some(IO_TIMEOUT));

        let reader = BufReader::new(stream.try_clone()?);
        let writer = BufWriter::new(stream);

        Ok(Self { reader, writer })
    }

    fn call(&mut self, request: &Request) -> ClientResult<Response> {
        write_message(&mut self.writer, request)?;
        match read_message(&mut self.reader)? {
            Response::Error { kind, message } => Err(ClientError::Server { kind, message }),
            response => Ok(response),
        }
    }

    /// Execute a search query
    pub fn search(&mut self, query: SearchQuery, limit: Option<usize>) -> ClientResult<SearchResponse> {
        match self.call(&Request::Search { query, limit })? {
            Response::Search(sr) => Ok(sr),
            _ => Err(ClientError::InvalidResponse),
        }
    }

    /// Read the page around `offset`
    pub fn page(&mut self, offset: i64) -> ClientResult<PageResult> {
        match self.call(&Request::Page { offset })? {
            Response::Page(page) => Ok(page),
            _ => Err(ClientError::InvalidResponse),
        }
    }

    /// Get the title boundary table
    pub fn titles(&mut self) -> ClientResult<Vec<TitleBoundary>> {
        match self.call(&Request::Titles)? {
            Response::Titles { titles } => Ok(titles),
            _ => Err(ClientError::InvalidResponse),
        }
    }

    /// Get server status
    pub fn status(&mut self) -> ClientResult<StatusResponse> {
        match self.call(&Request::Status)? {
            Response::Status(status) => Ok(status),
            _ => Err(ClientError::InvalidResponse),
        }
    }

    /// Ping the server
    pub fn ping(&mut self) -> ClientResult<()> {
        match self.call(&Request::Ping)? {
            Response::Pong => Ok(()),
            _ => Err(ClientError::InvalidResponse),
        }
    }

    /// Request server shutdown
    pub fn shutdown(&mut self) -> ClientResult<()> {
        match self.call(&Request::Shutdown)? {
            Response::ShuttingDown => Ok(()),
            _ => Err(ClientError::InvalidResponse),
        }
    }
}
