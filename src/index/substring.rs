//! Substring index over the corpus
//!
//! Two suffix arrays are kept: one over the exact bytes and one over an
//! ASCII-lowercased copy. Queries that compile to a plain literal are
//! answered by binary search on the matching array; every other pattern is
//! evaluated by a regex scan of the corpus. Both paths yield the same
//! leftmost, non-overlapping match starts in ascending order.

use crate::corpus::Corpus;
use crate::error::{FolioError, Result};
use crate::index::suffix_array::{SuffixArray, SuffixArrayBuilder, SuffixArrayConfig, SuffixArrayStats};
use crate::query::{CompiledQuery, LiteralProbe};
use rayon::join;
use regex::Regex;
use std::time::Instant;
use tracing::{debug, info};

/// Searchable index over an immutable corpus
pub struct SubstringIndex {
    corpus: Corpus,
    exact: SuffixArray,
    folded: SuffixArray,
}

/// Which evaluation path answered a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Binary search on the exact suffix array
    ExactSuffixArray,
    /// Binary search on the case-folded suffix array
    FoldedSuffixArray,
    /// Regex scan over the whole corpus
    Scan,
}

impl SubstringIndex {
    /// Build both suffix arrays for `corpus`
    pub fn build(corpus: &Corpus) -> Result<Self> {
        let start = Instant::now();
        let bytes = corpus.shared_bytes();

        let (exact, folded) = join(
            || SuffixArrayBuilder::with_defaults().build(bytes.clone()),
            || SuffixArrayBuilder::new(SuffixArrayConfig::case_insensitive()).build(bytes.clone()),
        );
        let (exact, folded) = (exact?, folded?);

        info!(
            bytes = corpus.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "built substring index"
        );

        Ok(Self {
            corpus: corpus.clone(),
            exact,
            folded,
        })
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// The path `find_all` takes for a compiled query
    pub fn strategy(&self, query: &CompiledQuery) -> Strategy {
        match query.literal() {
            Some(probe) => match self.suffix_array_for(probe) {
                Some(sa) if sa.supports(probe.text.as_bytes()) => {
                    if probe.case_insensitive {
                        Strategy::FoldedSuffixArray
                    } else {
                        Strategy::ExactSuffixArray
                    }
                }
                _ => Strategy::Scan,
            },
            None => Strategy::Scan,
        }
    }

    fn suffix_array_for(&self, probe: &LiteralProbe) -> Option<&SuffixArray> {
        if !probe.case_insensitive {
            Some(&self.exact)
        } else if probe.is_ascii_foldable() {
            Some(&self.folded)
        } else {
            None
        }
    }

    /// Every match start of `query`, ascending
    pub fn find_all(&self, query: &CompiledQuery) -> Vec<usize> {
        self.find_limited(query, None)
    }

    /// The first `limit` match starts of `query` (all of them for `None`), ascending
    pub fn find_limited(&self, query: &CompiledQuery, limit: Option<usize>) -> Vec<usize> {
        let limit = limit.unwrap_or(usize::MAX);
        let strategy = self.strategy(query);

        let offsets = match (strategy, query.literal()) {
            (Strategy::ExactSuffixArray, Some(probe)) => {
                self.lookup(&self.exact, probe.text.as_bytes(), limit)
            }
            (Strategy::FoldedSuffixArray, Some(probe)) => {
                self.lookup(&self.folded, probe.text.as_bytes(), limit)
            }
            _ => self.scan(query.regex(), limit),
        };

        debug!(
            pattern = query.pattern(),
            ?strategy,
            matches = offsets.len(),
            "find_all"
        );
        offsets
    }

    /// Compile `pattern` and return every match start, ascending
    pub fn find_all_pattern(&self, pattern: &str) -> Result<Vec<usize>> {
        let regex = Regex::new(pattern).map_err(|e| FolioError::query_syntax(pattern, e))?;
        Ok(self.scan(&regex, usize::MAX))
    }

    /// Case-sensitive literal occurrences, leftmost and non-overlapping
    pub fn find_literal(&self, literal: &str) -> Vec<usize> {
        let needle = literal.as_bytes();
        if self.exact.supports(needle) {
            return self.lookup(&self.exact, needle, usize::MAX);
        }
        if needle.is_empty() {
            return Vec::new();
        }
        memchr::memmem::find_iter(self.corpus.as_bytes(), needle).collect()
    }

    fn lookup(&self, sa: &SuffixArray, needle: &[u8], limit: usize) -> Vec<usize> {
        let positions = sa.positions(needle).unwrap_or_default();
        non_overlapping(positions, needle.len(), limit)
    }

    fn scan(&self, regex: &Regex, limit: usize) -> Vec<usize> {
        let len = self.corpus.len();
        regex
            .find_iter(self.corpus.text())
            .map(|m| m.start())
            // an empty match at the very end has no byte to point at
            .filter(|&start| start < len)
            .take(limit)
            .collect()
    }

    /// Statistics for the exact and case-folded suffix arrays
    pub fn stats(&self) -> (SuffixArrayStats, SuffixArrayStats) {
        (self.exact.stats(), self.folded.stats())
    }
}

/// Keep the leftmost occurrences that do not overlap an earlier kept one
fn non_overlapping(sorted: Vec<usize>, needle_len: usize, limit: usize) -> Vec<usize> {
    let mut kept = Vec::with_capacity(sorted.len().min(limit));
    let mut next_free = 0;

    for pos in sorted {
        if kept.len() == limit {
            break;
        }
        if pos >= next_free {
            kept.push(pos);
            next_free = pos + needle_len;
        }
    }

    kept
}
