//! Types for suffix array indexing
//!
//! This module defines the core types used for suffix array lookups,
//! which provide O(m log n) exact substring matching.

use serde::{Deserialize, Serialize};

/// Suffix array entry - byte position in the indexed text
///
/// 32 bits keeps the array at 4 bytes per corpus byte; texts past
/// `u32::MAX` bytes are rejected at build time.
pub type SuffixEntry = u32;

/// Suffixes are ordered by at most this many leading bytes.
///
/// Lookups for longer patterns cannot rely on the ordering and report
/// themselves unsupported so callers fall back to scanning.
pub const MAX_COMPARE: usize = 256;

/// Texts larger than this are sorted with rayon
pub const PARALLEL_SORT_THRESHOLD: usize = 100_000;

/// Configuration for suffix array building
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SuffixArrayConfig {
    /// Build over ASCII-lowercased text (default: false)
    pub case_insensitive: bool,
}

impl SuffixArrayConfig {
    pub fn case_insensitive() -> Self {
        Self {
            case_insensitive: true,
        }
    }
}

/// Statistics about a suffix array
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SuffixArrayStats {
    pub text_size: usize,
    pub suffix_count: usize,
    pub case_insensitive: bool,
    /// Heap bytes held by the suffix entries
    pub entry_bytes: usize,
}
