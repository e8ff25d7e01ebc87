//! Title boundary table
//!
//! Maps byte offsets to the work that contains them. Each title's start
//! offset is its second literal occurrence in the corpus (the first being
//! the table-of-contents entry), or its only occurrence.

use crate::error::{FolioError, Result};
use crate::index::substring::SubstringIndex;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Start of one titled section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleBoundary {
    pub title: String,
    pub start_offset: usize,
}

/// Section starts sorted ascending by offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleBoundaryTable {
    entries: Vec<TitleBoundary>,
    corpus_len: usize,
}

impl TitleBoundaryTable {
    /// Locate every title in the corpus
    ///
    /// A title that never occurs is a `Configuration` error: the list and the
    /// corpus are expected to be co-versioned.
    pub fn build<S: AsRef<str>>(index: &SubstringIndex, titles: &[S]) -> Result<Self> {
        let mut entries = Vec::with_capacity(titles.len());

        for title in titles {
            let title = title.as_ref();
            let occurrences = index.find_literal(title);

            let start_offset = match occurrences.as_slice() {
                [] => {
                    return Err(FolioError::Configuration(format!(
                        "title {title:?} does not occur in the corpus"
                    )));
                }
                [only] => *only,
                [_, body, ..] => *body,
            };

            entries.push(TitleBoundary {
                title: title.to_string(),
                start_offset,
            });
        }

        Ok(Self::from_entries(entries, index.corpus().len()))
    }

    /// Build a table from known boundaries, sorting them by offset
    pub fn from_entries(mut entries: Vec<TitleBoundary>, corpus_len: usize) -> Self {
        if let Some(pos) = entries
            .windows(2)
            .position(|pair| pair[0].start_offset > pair[1].start_offset)
        {
            warn!(
                before = %entries[pos].title,
                after = %entries[pos + 1].title,
                "title list is not in corpus order, sorting boundaries by offset"
            );
        }
        // stable: titles sharing an offset keep input order
        entries.sort_by_key(|e| e.start_offset);

        info!(titles = entries.len(), "built title boundary table");
        Self { entries, corpus_len }
    }

    /// Title of the section containing `offset`
    ///
    /// Sections are `[start_i, start_{i+1})`; the last one runs to the end of
    /// the corpus. Offsets before the first section have no title.
    pub fn resolve(&self, offset: usize) -> Option<&str> {
        let idx = self.entries.partition_point(|e| e.start_offset <= offset);
        idx.checked_sub(1).map(|i| self.entries[i].title.as_str())
    }

    /// Byte range `[start, end)` of a section
    pub fn section_range(&self, title: &str) -> Option<(usize, usize)> {
        let idx = self.entries.iter().position(|e| e.title == title)?;
        let start = self.entries[idx].start_offset;
        let end = self
            .entries
            .get(idx + 1)
            .map_or(self.corpus_len, |next| next.start_offset);
        Some((start, end))
    }

    pub fn entries(&self) -> &[TitleBoundary] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
