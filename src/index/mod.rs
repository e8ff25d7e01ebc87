//! Index structures built once at startup
//!
//! - [`substring`] - Suffix-array backed substring/regex search over the corpus
//! - [`boundaries`] - Offset to section title resolution
//! - [`suffix_array`] - Suffix array construction and lookup
//! - [`stats`] - Size and shape of the built indexes

pub mod boundaries;
pub mod stats;
pub mod substring;
pub mod suffix_array;

pub use boundaries::{TitleBoundary, TitleBoundaryTable};
pub use stats::IndexStats;
pub use substring::{Strategy, SubstringIndex};
