//! End-to-end search, title and page behavior over a small anthology

mod fixtures;

use fixtures::{corpus_text, nth_offset, searcher, write_titles, write_to_disk, TITLES};
use folio::page::{PAGE_RADIUS, PAGE_STEP};
use folio::searcher::CONTEXT_RADIUS;
use folio::{ErrorKind, FolioError, QueryMode, SearchQuery, Searcher, SearcherConfig};

fn offsets(searcher: &Searcher, query: &SearchQuery) -> Vec<usize> {
    searcher
        .search(query)
        .unwrap()
        .iter()
        .map(|r| r.match_offset)
        .collect()
}

#[test]
fn test_results_are_ordered_and_in_bounds() {
    let s = searcher();
    let text = s.corpus().text();

    for pattern in ["the", "o", r"\w+", "love", "[A-Z]{3,}", "\u{2019}"] {
        let results = s.search(&SearchQuery::new(pattern)).unwrap();
        assert!(!results.is_empty(), "{pattern}");

        for pair in results.windows(2) {
            assert!(pair[0].match_offset < pair[1].match_offset, "{pattern}");
        }
        for r in &results {
            assert!(r.match_offset < text.len());
            assert!(r.context_offset <= r.match_offset);
            assert!(r.context_text.len() <= 2 * CONTEXT_RADIUS);
            assert_eq!(
                &text[r.context_offset..r.context_offset + r.context_text.len()],
                r.context_text
            );
        }
    }
}

#[test]
fn test_results_round_trip_to_the_corpus() {
    let s = searcher();
    let text = s.corpus().text();

    for r in s.search(&SearchQuery::new("Denmark").match_case(true)).unwrap() {
        assert!(text[r.match_offset..].starts_with("Denmark"));
    }
    for r in s.search(&SearchQuery::new("FATHOM")).unwrap() {
        assert!(text[r.match_offset..].to_lowercase().starts_with("fathom"));
    }
}

#[test]
fn test_case_and_whole_word_options() {
    let s = searcher();

    let sensitive = offsets(&s, &SearchQuery::new("love").match_case(true));
    let insensitive = offsets(&s, &SearchQuery::new("love"));
    let word = offsets(&s, &SearchQuery::new("love").match_case(true).whole_word(true));
    let word_insensitive = offsets(&s, &SearchQuery::new("love").whole_word(true));

    // "lovely" once, "love" 20 times in the sonnet refrain, once in Hamlet
    assert_eq!(sensitive.len(), 22);
    assert_eq!(insensitive.len(), 42);
    assert_eq!(word.len(), 21);
    assert_eq!(word_insensitive.len(), 41);

    assert!(sensitive.iter().all(|o| insensitive.contains(o)));
    assert!(word.iter().all(|o| sensitive.contains(o)));
    assert!(!word.contains(&nth_offset(&corpus_text(), "lovely", 0)));
}

#[test]
fn test_case_insensitive_beyond_ascii() {
    let s = searcher();
    let text = corpus_text();

    assert_eq!(
        offsets(&s, &SearchQuery::new("\u{2019}TIS")),
        vec![nth_offset(&text, "\u{2019}tis", 0)]
    );
    // contains letters with non-ASCII case variants
    assert_eq!(
        offsets(&s, &SearchQuery::new("SHAKE")),
        vec![nth_offset(&text, "shake", 0)]
    );
}

#[test]
fn test_literal_mode_ignores_regex_syntax() {
    let s = searcher();
    let text = corpus_text();

    let literal = offsets(&s, &SearchQuery::new("be,").mode(QueryMode::Literal));
    assert_eq!(
        literal,
        vec![nth_offset(&text, "be,", 0), nth_offset(&text, "be,", 1)]
    );

    let regex = s.search(&SearchQuery::new("(be")).unwrap_err();
    assert_eq!(regex.kind(), ErrorKind::QuerySyntax);
    assert!(
        s.search(&SearchQuery::new("(be").mode(QueryMode::Literal))
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_titles_resolve_to_enclosing_work() {
    let s = searcher();
    let text = corpus_text();

    for r in s.search(&SearchQuery::new("Denmark")).unwrap() {
        assert_eq!(r.enclosing_title.as_deref(), Some("THE TRAGEDY OF HAMLET"));
    }
    for r in s.search(&SearchQuery::new("fathom")).unwrap() {
        assert_eq!(r.enclosing_title.as_deref(), Some("THE TEMPEST"));
    }

    // the table of contents precedes every work
    let tempest = s.search(&SearchQuery::new("TEMPEST").match_case(true)).unwrap();
    assert_eq!(tempest.len(), 2);
    assert_eq!(tempest[0].match_offset, nth_offset(&text, "THE TEMPEST", 0) + 4);
    assert_eq!(tempest[0].enclosing_title, None);
    assert_eq!(tempest[1].enclosing_title.as_deref(), Some("THE TEMPEST"));
}

#[test]
fn test_title_table_uses_second_occurrence() {
    let s = searcher();
    let text = corpus_text();
    let entries = s.titles().entries();

    assert_eq!(entries.len(), TITLES.len());
    for (entry, title) in entries.iter().zip(TITLES) {
        assert_eq!(entry.title, title);
        assert_eq!(entry.start_offset, nth_offset(&text, title, 1));
    }
    assert!(entries.windows(2).all(|w| w[0].start_offset < w[1].start_offset));
}

#[test]
fn test_title_table_is_deterministic() {
    let first = searcher();
    let second = searcher();
    assert_eq!(first.titles().entries(), second.titles().entries());
}

#[test]
fn test_page_window_and_navigation() {
    let s = searcher();
    let text = s.corpus().text();
    let len = text.len() as i64;

    for offset in [0, 1_000, len / 2, len - 1, len + 10_000, -250] {
        let page = s.page(offset);
        assert!(page.page_text.len() <= 2 * PAGE_RADIUS);
        assert!(text.contains(&page.page_text));
        assert_eq!(page, s.page(offset));
    }

    let middle = s.page(5_000);
    assert_eq!(middle.next_offset, (5_000 + PAGE_STEP).min(len));
    assert_eq!(middle.prev_offset, 1_000);
    assert_eq!(s.page(1_000).prev_offset, PAGE_RADIUS as i64);
}

#[test]
fn test_empty_query_is_rejected() {
    let s = searcher();
    for text in ["", "   ", "\n"] {
        let err = s.search(&SearchQuery::new(text)).unwrap_err();
        assert!(matches!(err, FolioError::Validation(_)), "{text:?}");
    }
}

#[test]
fn test_open_from_disk() {
    let files = write_to_disk();
    let config = SearcherConfig {
        corpus_path: files.corpus.clone(),
        titles_path: Some(files.titles.clone()),
    };

    let s = Searcher::open(&config).unwrap();
    assert_eq!(s.corpus().text(), corpus_text());
    assert_eq!(s.titles().len(), TITLES.len());
    assert_eq!(s.search(&SearchQuery::new("tempest")).unwrap().len(), 2);
}

#[test]
fn test_open_rejects_unknown_title() {
    let files = write_to_disk();
    let titles = files.dir.path().join("bad_titles.txt");
    write_titles(&titles, &["THE SONNETS", "THE TAMING OF THE SHREW"]);

    let config = SearcherConfig {
        corpus_path: files.corpus.clone(),
        titles_path: Some(titles),
    };
    let err = Searcher::open(&config).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn test_open_rejects_empty_title_list() {
    let files = write_to_disk();
    let titles = files.dir.path().join("empty.txt");
    write_titles(&titles, &[]);

    let config = SearcherConfig {
        corpus_path: files.corpus.clone(),
        titles_path: Some(titles),
    };
    let err = Searcher::open(&config).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}
