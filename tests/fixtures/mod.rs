//! Shared fixtures for integration tests
#![allow(dead_code)]

use folio::{Corpus, Searcher};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TITLES: [&str; 3] = ["THE SONNETS", "THE TRAGEDY OF HAMLET", "THE TEMPEST"];

/// A small corpus laid out like the real one: front matter, a table of
/// contents naming every work, then the works themselves
pub fn corpus_text() -> String {
    let mut text = String::from(
        "The Project Gutenberg eBook of a Small Anthology\n\n\
         Contents\n\n",
    );
    for title in TITLES {
        text.push_str(&format!("    {title}\n"));
    }

    text.push_str(
        "\n\nTHE SONNETS\n\n\
         Shall I compare thee to a summer\u{2019}s day?\n\
         Thou art more lovely and more temperate:\n\
         Rough winds do shake the darling buds of May,\n\
         And summer\u{2019}s lease hath all too short a date.\n",
    );
    text.push_str(&"    Love is not love which alters when it alteration finds.\n".repeat(20));

    text.push_str(
        "\n\nTHE TRAGEDY OF HAMLET\n\n\
         HAMLET. To be, or not to be, that is the question:\n\
         Whether \u{2019}tis nobler in the mind to suffer\n\
         The slings and arrows of outrageous fortune.\n\
         Doubt thou the stars are fire; but never doubt I love.\n",
    );
    text.push_str(&"    Something is rotten in the state of Denmark.\n".repeat(30));

    text.push_str(
        "\n\nTHE TEMPEST\n\n\
         PROSPERO. We are such stuff as dreams are made on,\n\
         and our little life is rounded with a sleep.\n\
         MIRANDA. O brave new world, that has such people in\u{2019}t!\n",
    );
    text.push_str(&"    Full fathom five thy father lies.\n".repeat(40));

    text
}

pub fn searcher() -> Searcher {
    Searcher::build(Corpus::from_text(corpus_text()), &TITLES).expect("Failed to build searcher")
}

/// Byte offset of the `nth` (0-based) occurrence of `needle`
pub fn nth_offset(text: &str, needle: &str, nth: usize) -> usize {
    text.match_indices(needle)
        .nth(nth)
        .map(|(i, _)| i)
        .unwrap_or_else(|| panic!("{needle:?} occurs fewer than {} times", nth + 1))
}

/// Corpus and title list written to a temporary directory
pub struct OnDisk {
    pub dir: TempDir,
    pub corpus: PathBuf,
    pub titles: PathBuf,
}

pub fn write_to_disk() -> OnDisk {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let corpus = dir.path().join("completeworks.txt");
    let titles = dir.path().join("titles.txt");

    fs::write(&corpus, corpus_text()).expect("Failed to write corpus");
    write_titles(&titles, &TITLES);

    OnDisk { dir, corpus, titles }
}

pub fn write_titles(path: &Path, titles: &[&str]) {
    let mut contents = String::from("# works in corpus order\n");
    for title in titles {
        contents.push_str(title);
        contents.push('\n');
    }
    fs::write(path, contents).expect("Failed to write titles");
}
