#![no_main]

use arbitrary::Arbitrary;
use folio::{Corpus, QueryMode, SearchQuery, Searcher};
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

static SEARCHER: OnceLock<Searcher> = OnceLock::new();

const TEXT: &str = "CONTENTS\nSONNETS\nHAMLET\n\nSONNETS\nShall I compare thee \
to a summer\u{2019}s day?\n\nHAMLET\nTo be, or not to be: that is the question. \
Ærger, straße, KELVIN \u{212A}.\n";

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    match_case: bool,
    whole_word: bool,
    literal: bool,
    limit: Option<u8>,
}

fuzz_target!(|input: Input| {
    // Any query either fails cleanly or returns in-bounds, ordered results
    let searcher = SEARCHER.get_or_init(|| {
        Searcher::build(Corpus::from_text(TEXT), &["SONNETS", "HAMLET"]).unwrap()
    });

    let mode = if input.literal {
        QueryMode::Literal
    } else {
        QueryMode::Regex
    };
    let query = SearchQuery::new(input.text)
        .match_case(input.match_case)
        .whole_word(input.whole_word)
        .mode(mode);

    if let Ok(results) = searcher.search_limited(&query, input.limit.map(usize::from)) {
        let mut previous = None;
        for r in &results {
            assert!(r.match_offset < TEXT.len());
            assert!(r.context_text.len() <= 500);
            assert!(previous < Some(r.match_offset));
            previous = Some(r.match_offset);
        }
    }
});
