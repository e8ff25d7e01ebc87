//! Suffix array indexing module
//!
//! This module provides O(m log n) exact substring search using suffix arrays.
//! It backs literal queries; regex queries that are not plain literals are
//! answered by scanning the corpus instead.
//!
//! ## Architecture
//!
//! - `builder`: Sorts all suffixes of the corpus (optionally case-folded)
//! - `reader`: Binary search over the sorted suffixes
//! - `types`: Core type definitions

pub mod builder;
pub mod reader;
pub mod types;

// Re-exports for convenience
pub use builder::SuffixArrayBuilder;
pub use reader::SuffixArray;
pub use types::{SuffixArrayConfig, SuffixArrayStats, SuffixEntry, MAX_COMPARE};
