//! Suffix array lookups
//!
//! Provides O(m log n) exact substring search over an in-memory suffix array.

use super::types::*;
use std::sync::Arc;

/// A sorted suffix array together with the text it indexes
pub struct SuffixArray {
    /// Indexed text (ASCII-lowercased when `case_insensitive`)
    text: Arc<[u8]>,
    /// Suffix start positions in sorted order
    entries: Vec<SuffixEntry>,
    /// Whether the array was built over case-folded text
    case_insensitive: bool,
}

impl SuffixArray {
    pub(crate) fn from_parts(
        text: Arc<[u8]>,
        entries: Vec<SuffixEntry>,
        case_insensitive: bool,
    ) -> Self {
        Self {
            text,
            entries,
            case_insensitive,
        }
    }

    /// Get the indexed text
    #[inline]
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    #[inline]
    fn suffix(&self, i: usize) -> &[u8] {
        &self.text[self.entries[i] as usize..]
    }

    /// Whether `pattern` can be answered from the suffix ordering
    #[inline]
    pub fn supports(&self, pattern: &[u8]) -> bool {
        !pattern.is_empty() && pattern.len() <= MAX_COMPARE
    }

    /// Search for a pattern in the suffix array
    ///
    /// Returns the range [lo, hi) of indices in the suffix array where all
    /// suffixes start with the pattern, or `None` if the pattern is empty or
    /// longer than the sorted prefix length.
    pub fn search(&self, pattern: &[u8]) -> Option<(usize, usize)> {
        if !self.supports(pattern) {
            return None;
        }

        // Apply case folding if the SA was built case-insensitive
        let folded: Vec<u8>;
        let pattern = if self.case_insensitive {
            folded = pattern.to_ascii_lowercase();
            &folded[..]
        } else {
            pattern
        };

        let lo = self.lower_bound(pattern);
        let hi = self.upper_bound(pattern, lo);
        Some((lo, hi))
    }

    /// Find first index where suffix starts with pattern (or would if inserted)
    fn lower_bound(&self, pattern: &[u8]) -> usize {
        self.entries.partition_point(|&pos| {
            let suffix = &self.text[pos as usize..];
            let cmp_len = pattern.len().min(suffix.len());
            &suffix[..cmp_len] < pattern
        })
    }

    /// Find first index at or after `start` whose suffix does NOT start with pattern
    fn upper_bound(&self, pattern: &[u8], start: usize) -> usize {
        let mut lo = start;
        let mut hi = self.entries.len();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.suffix(mid).starts_with(pattern) {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        lo
    }

    /// All start positions of `pattern`, ascending, overlapping occurrences included
    pub fn positions(&self, pattern: &[u8]) -> Option<Vec<usize>> {
        let (lo, hi) = self.search(pattern)?;
        let mut positions: Vec<usize> = self.entries[lo..hi].iter().map(|&p| p as usize).collect();
        positions.sort_unstable();
        Some(positions)
    }

    /// Get statistics about this suffix array
    pub fn stats(&self) -> SuffixArrayStats {
        SuffixArrayStats {
            text_size: self.text.len(),
            suffix_count: self.entries.len(),
            case_insensitive: self.case_insensitive,
            entry_bytes: self.entries.len() * std::mem::size_of::<SuffixEntry>(),
        }
    }
}
