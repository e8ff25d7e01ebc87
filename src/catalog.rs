//! Canonical section titles
//!
//! The built-in list matches the heading text of the complete-works corpus,
//! in table-of-contents order. A replacement list can be read from a file
//! with one title per line.

use crate::error::{FolioError, Result};
use std::path::Path;

/// Work titles of the complete-works corpus, in table-of-contents order
pub const CANONICAL_TITLES: &[&str] = &[
    "THE SONNETS",
    "ALL’S WELL THAT ENDS WELL",
    "THE TRAGEDY OF ANTONY AND CLEOPATRA",
    "AS YOU LIKE IT",
    "THE COMEDY OF ERRORS",
    "THE TRAGEDY OF CORIOLANUS",
    "CYMBELINE",
    "THE TRAGEDY OF HAMLET, PRINCE OF DENMARK",
    "THE FIRST PART OF KING HENRY THE FOURTH",
    "THE SECOND PART OF KING HENRY THE FOURTH",
    "THE LIFE OF KING HENRY THE FIFTH",
    "THE FIRST PART OF HENRY THE SIXTH",
    "THE SECOND PART OF KING HENRY THE SIXTH",
    "THE THIRD PART OF KING HENRY THE SIXTH",
    "KING HENRY THE EIGHTH",
    "KING JOHN",
    "THE TRAGEDY OF JULIUS CAESAR",
    "THE TRAGEDY OF KING LEAR",
    "LOVE’S LABOUR’S LOST",
    "THE TRAGEDY OF MACBETH",
    "MEASURE FOR MEASURE",
    "THE MERCHANT OF VENICE",
    "THE MERRY WIVES OF WINDSOR",
    "A MIDSUMMER NIGHT’S DREAM",
    "MUCH ADO ABOUT NOTHING",
    "THE TRAGEDY OF OTHELLO, MOOR OF VENICE",
    "PERICLES, PRINCE OF TYRE",
    "KING RICHARD THE SECOND",
    "KING RICHARD THE THIRD",
    "THE TRAGEDY OF ROMEO AND JULIET",
    "THE TAMING OF THE SHREW",
    "THE TEMPEST",
    "THE LIFE OF TIMON OF ATHENS",
    "THE TRAGEDY OF TITUS ANDRONICUS",
    "THE HISTORY OF TROILUS AND CRESSIDA",
    "TWELFTH NIGHT; OR, WHAT YOU WILL",
    "THE TWO GENTLEMEN OF VERONA",
    "THE TWO NOBLE KINSMEN",
    "THE WINTER’S TALE",
    "A LOVER’S COMPLAINT",
    "THE PASSIONATE PILGRIM",
    "THE PHOENIX AND THE TURTLE",
    "THE RAPE OF LUCRECE",
    "VENUS AND ADONIS",
];

/// The built-in titles as owned strings
pub fn canonical_titles() -> Vec<String> {
    CANONICAL_TITLES.iter().map(|t| t.to_string()).collect()
}

/// Parse a title list: one title per line, blank lines and `#` comments skipped
pub fn parse_titles(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Read a title list from a file
pub fn load_titles(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path).map_err(|e| FolioError::io(path, e))?;
    let titles = parse_titles(&contents);
    if titles.is_empty() {
        return Err(FolioError::Configuration(format!(
            "title list {} contains no titles",
            path.display()
        )));
    }
    Ok(titles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_canonical_titles_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for title in CANONICAL_TITLES {
            assert!(seen.insert(*title), "duplicate title {title}");
        }
        assert_eq!(CANONICAL_TITLES.len(), 44);
    }

    #[test]
    fn test_parse_titles_skips_comments_and_blanks() {
        let titles = parse_titles("# works\nTHE TEMPEST\n\n  KING JOHN  \n");
        assert_eq!(titles, vec!["THE TEMPEST", "KING JOHN"]);
    }

    #[test]
    fn test_load_empty_list_is_configuration_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"# nothing here\n\n").unwrap();

        let err = load_titles(file.path()).unwrap_err();
        assert!(matches!(err, FolioError::Configuration(_)));
    }
}
