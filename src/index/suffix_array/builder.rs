//! Suffix array builder
//!
//! Builds a suffix array over the corpus bytes by sorting every suffix
//! position, optionally over an ASCII case-folded copy of the text.
//!
//! The resulting suffix array enables O(m log n) substring search.

use super::reader::SuffixArray;
use super::types::*;
use crate::error::{FolioError, Result};
use rayon::prelude::*;
use std::sync::Arc;

/// Builder for constructing a suffix array from one text
pub struct SuffixArrayBuilder {
    config: SuffixArrayConfig,
}

impl SuffixArrayBuilder {
    /// Create a new suffix array builder with the given configuration
    pub fn new(config: SuffixArrayConfig) -> Self {
        Self { config }
    }

    /// Create a builder with default configuration (case-sensitive)
    pub fn with_defaults() -> Self {
        Self::new(SuffixArrayConfig::default())
    }

    /// Build the suffix array
    ///
    /// A case-sensitive array shares `text`; a case-insensitive one owns a
    /// lowercased copy of the same length, so positions are interchangeable.
    pub fn build(&self, text: Arc<[u8]>) -> Result<SuffixArray> {
        if text.len() > SuffixEntry::MAX as usize {
            return Err(FolioError::Configuration(format!(
                "corpus of {} bytes exceeds the suffix array limit of {} bytes",
                text.len(),
                SuffixEntry::MAX
            )));
        }

        let text: Arc<[u8]> = if self.config.case_insensitive {
            text.iter().map(|b| b.to_ascii_lowercase()).collect()
        } else {
            text
        };

        let entries = build_suffix_array_parallel(&text);

        Ok(SuffixArray::from_parts(
            text,
            entries,
            self.config.case_insensitive,
        ))
    }
}

/// Build suffix array using parallel sort
///
/// This approach:
/// 1. Creates array of all suffix positions [0, 1, 2, ..., n-1]
/// 2. Sorts positions by comparing the suffixes they point to
/// 3. Uses rayon for parallel sorting on large inputs
///
/// Time: O(n log n) comparisons, each bounded by `MAX_COMPARE` bytes
/// Space: O(n) for the suffix array
pub(crate) fn build_suffix_array_parallel(text: &[u8]) -> Vec<SuffixEntry> {
    let n = text.len();

    let mut sa: Vec<SuffixEntry> = (0..n as SuffixEntry).collect();

    if n > PARALLEL_SORT_THRESHOLD {
        sa.par_sort_unstable_by(|&a, &b| compare_suffixes(text, a as usize, b as usize));
    } else {
        sa.sort_unstable_by(|&a, &b| compare_suffixes(text, a as usize, b as usize));
    }

    sa
}

/// Compare two suffixes lexicographically on their first `MAX_COMPARE` bytes
#[inline]
fn compare_suffixes(text: &[u8], a: usize, b: usize) -> std::cmp::Ordering {
    let len_a = (text.len() - a).min(MAX_COMPARE);
    let len_b = (text.len() - b).min(MAX_COMPARE);

    text[a..a + len_a].cmp(&text[b..b + len_b])
}
