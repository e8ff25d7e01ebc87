//! Query compiler
//!
//! Rules, applied in order:
//! 1. Start from the query text (escaped in literal mode, raw otherwise)
//! 2. Whole-word queries get `\b` on both sides
//! 3. Case-insensitive queries get a leading `(?i)`

use super::{QueryMode, SearchQuery};
use crate::error::{FolioError, Result};
use regex::Regex;

/// A query compiled to a regex, ready for the substring index
#[derive(Debug, Clone)]
pub struct CompiledQuery {
    pattern: String,
    regex: Regex,
    literal: Option<LiteralProbe>,
}

impl CompiledQuery {
    /// The final pattern string
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Set when the regex matches exactly the occurrences of a literal string
    pub fn literal(&self) -> Option<&LiteralProbe> {
        self.literal.as_ref()
    }
}

/// Literal text equivalent to a compiled pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralProbe {
    pub text: String,
    pub case_insensitive: bool,
}

impl LiteralProbe {
    /// Whether ASCII case folding gives the same matches as Unicode `(?i)`.
    ///
    /// Only `k` and `s` have non-ASCII simple case folds (KELVIN SIGN and
    /// LATIN SMALL LETTER LONG S).
    pub fn is_ascii_foldable(&self) -> bool {
        self.text.is_ascii()
            && !self
                .text
                .bytes()
                .any(|b| matches!(b.to_ascii_lowercase(), b'k' | b's'))
    }
}

/// Compile a query into a single pattern
///
/// Fails with `Validation` for blank text and `QuerySyntax` when the result
/// is not a valid regex.
pub fn compile(query: &SearchQuery) -> Result<CompiledQuery> {
    if query.text.trim().is_empty() {
        return Err(FolioError::Validation("query text is empty".to_string()));
    }

    let fragment = match query.mode {
        QueryMode::Regex => query.text.clone(),
        QueryMode::Literal => regex::escape(&query.text),
    };

    let mut pattern = if query.whole_word {
        format!(r"\b{}\b", fragment)
    } else {
        fragment
    };

    if !query.match_case {
        pattern.insert_str(0, "(?i)");
    }

    let regex = Regex::new(&pattern).map_err(|e| FolioError::query_syntax(&pattern, e))?;

    let is_plain = query.mode == QueryMode::Literal || regex::escape(&query.text) == query.text;
    let literal = (is_plain && !query.whole_word).then(|| LiteralProbe {
        text: query.text.clone(),
        case_insensitive: !query.match_case,
    });

    Ok(CompiledQuery {
        pattern,
        regex,
        literal,
    })
}
