//! # Folio - Search Over a Single Static Corpus
//!
//! Folio answers regex and substring queries over one large, immutable text
//! (the complete works of an author), returning each match with surrounding
//! context and the title of the work it falls in, and serves fixed-size
//! "pages" of text around any offset for reading.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`corpus`] - The immutable text, loaded once
//! - [`index`] - Suffix arrays, substring index, title boundary table
//! - [`query`] - Query model and compilation to a single regex
//! - [`searcher`] - Search engine tying the indexes together
//! - [`page`] - Reading-mode page windows
//! - [`server`] - Length-prefixed JSON server and client
//! - [`output`] - Terminal formatting of results
//! - [`utils`] - Text windows, line numbers, progress spinner
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio::{Searcher, SearcherConfig, SearchQuery};
//!
//! let searcher = Searcher::open(&SearcherConfig::default()).unwrap();
//!
//! let query = SearchQuery::new("to be or not").whole_word(true);
//! for result in searcher.search(&query).unwrap() {
//!     println!("{:?} @ {}", result.enclosing_title, result.match_offset);
//! }
//!
//! let page = searcher.page(120_000);
//! println!("{}", page.page_text);
//! ```
//!
//! ## Performance
//!
//! Startup sorts two suffix arrays (exact and ASCII case-folded) in
//! parallel. Queries that compile to plain literals are answered with a
//! binary search; everything else is a single regex pass over the corpus.

pub mod catalog;
pub mod corpus;
pub mod error;
pub mod index;
pub mod output;
pub mod page;
pub mod query;
pub mod searcher;
pub mod server;
pub mod utils;

pub use corpus::Corpus;
pub use error::{ErrorKind, FolioError, Result};
pub use page::PageResult;
pub use query::{QueryMode, SearchQuery};
pub use searcher::{SearchResult, Searcher, SearcherConfig};
