//! Page reader
//!
//! Returns a fixed-size window of text around an arbitrary offset for
//! reading mode. Out-of-range offsets clamp instead of failing.

use crate::corpus::Corpus;
use crate::utils::clamp_window_signed;
use serde::{Deserialize, Serialize};

/// Bytes on each side of the requested offset
pub const PAGE_RADIUS: usize = 2000;

/// Distance between consecutive page offsets
pub const PAGE_STEP: i64 = 2 * PAGE_RADIUS as i64;

/// A page of corpus text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    /// Offset the page was requested for (unclamped)
    pub offset: i64,
    pub page_text: String,
    /// Offset to request for the previous page
    pub prev_offset: i64,
    /// Offset to request for the next page
    pub next_offset: i64,
}

/// Read the page centred on `offset`
pub fn read_page(corpus: &Corpus, offset: i64) -> PageResult {
    let (start, end) = clamp_window_signed(corpus.text(), offset, PAGE_RADIUS);
    let corpus_len = i64::try_from(corpus.len()).unwrap_or(i64::MAX);

    let prev_offset = if offset < PAGE_STEP {
        PAGE_RADIUS as i64
    } else {
        offset - PAGE_STEP
    };
    let next_offset = offset.saturating_add(PAGE_STEP).min(corpus_len);

    PageResult {
        offset,
        page_text: corpus.text()[start..end].to_string(),
        prev_offset,
        next_offset,
    }
}
