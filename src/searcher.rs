//! Search engine
//!
//! [`Searcher`] is the immutable context built once at startup: the corpus,
//! its substring index, and the title boundary table. It is `Send + Sync`
//! and is shared by reference (or `Arc`) across concurrent requests; no
//! operation on it takes a lock or mutates state.

use crate::catalog::{canonical_titles, load_titles};
use crate::corpus::Corpus;
use crate::error::Result;
use crate::index::{IndexStats, SubstringIndex, TitleBoundaryTable};
use crate::page::{read_page, PageResult};
use crate::query::{compile, SearchQuery};
use crate::utils::clamp_window;
use crate::utils::progress::spinner;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

/// Bytes of context on each side of a match
pub const CONTEXT_RADIUS: usize = 250;

/// One match with its surrounding text and enclosing work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Byte offset where the match begins
    pub match_offset: usize,
    /// Byte offset where `context_text` begins
    pub context_offset: usize,
    pub context_text: String,
    /// `None` when the match precedes every known section
    pub enclosing_title: Option<String>,
}

/// Where the searcher gets its corpus and titles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearcherConfig {
    pub corpus_path: PathBuf,
    /// Newline-separated title list; the built-in catalog when `None`
    pub titles_path: Option<PathBuf>,
}

impl Default for SearcherConfig {
    fn default() -> Self {
        Self {
            corpus_path: PathBuf::from("completeworks.txt"),
            titles_path: None,
        }
    }
}

/// Read-only search context
pub struct Searcher {
    index: SubstringIndex,
    titles: TitleBoundaryTable,
}

impl Searcher {
    /// Load the corpus and titles from disk and build every index
    pub fn open(config: &SearcherConfig) -> Result<Self> {
        let corpus = Corpus::load(&config.corpus_path)?;
        let titles = match &config.titles_path {
            Some(path) => load_titles(path)?,
            None => canonical_titles(),
        };
        Self::build(corpus, &titles)
    }

    /// Index an in-memory corpus
    pub fn build<S: AsRef<str>>(corpus: Corpus, titles: &[S]) -> Result<Self> {
        let pb = spinner("Indexing corpus...");
        let index = SubstringIndex::build(&corpus);
        pb.finish_and_clear();

        let index = index?;
        let titles = TitleBoundaryTable::build(&index, titles)?;

        info!(
            bytes = corpus.len(),
            titles = titles.len(),
            "searcher ready"
        );
        Ok(Self { index, titles })
    }

    pub fn corpus(&self) -> &Corpus {
        self.index.corpus()
    }

    pub fn index(&self) -> &SubstringIndex {
        &self.index
    }

    pub fn titles(&self) -> &TitleBoundaryTable {
        &self.titles
    }

    /// Every match of `query`, in ascending offset order
    pub fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>> {
        self.search_limited(query, None)
    }

    /// The first `limit` matches of `query` (all when `None`)
    pub fn search_limited(
        &self,
        query: &SearchQuery,
        limit: Option<usize>,
    ) -> Result<Vec<SearchResult>> {
        let compiled = compile(query)?;
        let offsets = self.index.find_limited(&compiled, limit);

        let results: Vec<SearchResult> = offsets
            .par_iter()
            .map(|&offset| self.result_at(offset))
            .collect();

        debug!(
            pattern = compiled.pattern(),
            matches = results.len(),
            "search"
        );
        Ok(results)
    }

    fn result_at(&self, offset: usize) -> SearchResult {
        let text = self.corpus().text();
        let (start, end) = clamp_window(text, offset, CONTEXT_RADIUS);
        SearchResult {
            match_offset: offset,
            context_offset: start,
            context_text: text[start..end].to_string(),
            enclosing_title: self.titles.resolve(offset).map(str::to_string),
        }
    }

    /// The reading-mode page around `offset`
    pub fn page(&self, offset: i64) -> PageResult {
        read_page(self.corpus(), offset)
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats::collect(&self.index, &self.titles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FolioError;

    const TEXT: &str = "CONTENTS\nFIRST PLAY\nSECOND PLAY\n\n\
FIRST PLAY\nWith all my heart I love thee; LOVE is art.\n\n\
SECOND PLAY\nThe heart of the matter: love, Love, LOVE.\n";

    fn searcher() -> Searcher {
        Searcher::build(Corpus::from_text(TEXT), &["FIRST PLAY", "SECOND PLAY"]).unwrap()
    }

    fn offsets(results: &[SearchResult]) -> Vec<usize> {
        results.iter().map(|r| r.match_offset).collect()
    }

    #[test]
    fn test_search_case_insensitive_and_titles() {
        let s = searcher();
        let results = s.search(&SearchQuery::new("love")).unwrap();

        assert_eq!(results.len(), 5);
        assert_eq!(results[0].enclosing_title.as_deref(), Some("FIRST PLAY"));
        assert_eq!(results[4].enclosing_title.as_deref(), Some("SECOND PLAY"));
        for r in &results {
            assert!(TEXT[r.match_offset..].to_lowercase().starts_with("love"));
        }
    }

    #[test]
    fn test_search_match_case() {
        let s = searcher();
        let results = s.search(&SearchQuery::new("LOVE").match_case(true)).unwrap();
        assert_eq!(results.len(), 2);
        for r in &results {
            assert!(TEXT[r.match_offset..].starts_with("LOVE"));
        }
    }

    #[test]
    fn test_whole_word() {
        let s = searcher();
        let all = s.search(&SearchQuery::new("art")).unwrap();
        let words = s.search(&SearchQuery::new("art").whole_word(true)).unwrap();

        // "heart" twice plus "art" once
        assert_eq!(all.len(), 3);
        assert_eq!(words.len(), 1);
        assert!(TEXT[words[0].match_offset..].starts_with("art."));
    }

    #[test]
    fn test_matches_in_table_of_contents_have_no_title() {
        let s = searcher();
        let results = s.search(&SearchQuery::new("PLAY").match_case(true)).unwrap();
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].enclosing_title, None);
        assert_eq!(results[1].enclosing_title, None);
        assert_eq!(results[2].enclosing_title.as_deref(), Some("FIRST PLAY"));
        assert_eq!(results[3].enclosing_title.as_deref(), Some("SECOND PLAY"));
    }

    #[test]
    fn test_context_window() {
        let text = format!("{}needle{}", "x".repeat(400), "y".repeat(400));
        let s = Searcher::build(Corpus::from_text(text.clone()), &["needle"]).unwrap();
        let results = s.search(&SearchQuery::new("needle").match_case(true)).unwrap();

        assert_eq!(results.len(), 1);
        let r = &results[0];
        assert_eq!(r.match_offset, 400);
        assert_eq!(r.context_offset, 150);
        assert_eq!(r.context_text, &text[150..650]);
        assert_eq!(r.enclosing_title.as_deref(), Some("needle"));
    }

    #[test]
    fn test_results_are_ordered() {
        let s = searcher();
        let results = s.search(&SearchQuery::new("[a-z]+")).unwrap();
        let offsets = offsets(&results);
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_limit() {
        let s = searcher();
        let all = s.search(&SearchQuery::new("e")).unwrap();
        let some = s.search_limited(&SearchQuery::new("e"), Some(3)).unwrap();
        assert_eq!(some, all[..3].to_vec());
    }

    #[test]
    fn test_errors_are_distinguishable_from_empty_results() {
        let s = searcher();
        assert!(s.search(&SearchQuery::new("nowhere")).unwrap().is_empty());
        assert!(matches!(
            s.search(&SearchQuery::new("(")),
            Err(FolioError::QuerySyntax { .. })
        ));
        assert!(matches!(
            s.search(&SearchQuery::new(" ")),
            Err(FolioError::Validation(_))
        ));
    }

    #[test]
    fn test_open_missing_corpus() {
        let config = SearcherConfig {
            corpus_path: PathBuf::from("/no/such/corpus.txt"),
            titles_path: None,
        };
        assert!(matches!(Searcher::open(&config), Err(FolioError::Io { .. })));
    }

    #[test]
    fn test_searcher_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Searcher>();
    }
}
