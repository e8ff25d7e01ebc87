#![no_main]

use folio::Corpus;
use folio::page::read_page;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (String, i64)| {
    // Pages never panic on multibyte text and never exceed the window
    let (text, offset) = data;
    let corpus = Corpus::from_text(text);
    let page = read_page(&corpus, offset);
    assert!(page.page_text.len() <= 4000);
    assert!(corpus.text().contains(&page.page_text));
});
