//! Query model and compilation
//!
//! A [`SearchQuery`] is the structured request (text plus case and
//! whole-word flags); [`compile`] turns it into a single regex, and notes
//! when that regex is really a plain literal the suffix arrays can answer.

pub mod compiler;

pub use compiler::{compile, CompiledQuery, LiteralProbe};

use serde::{Deserialize, Serialize};

/// How the query text is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    /// Text is a regex fragment, passed through unescaped
    #[default]
    Regex,
    /// Text is matched literally; regex metacharacters are escaped
    Literal,
}

/// A structured search request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub text: String,
    #[serde(default)]
    pub match_case: bool,
    #[serde(default)]
    pub whole_word: bool,
    #[serde(default)]
    pub mode: QueryMode,
}

impl SearchQuery {
    /// Case-insensitive, substring, regex-mode query
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            match_case: false,
            whole_word: false,
            mode: QueryMode::Regex,
        }
    }

    pub fn match_case(mut self, match_case: bool) -> Self {
        self.match_case = match_case;
        self
    }

    pub fn whole_word(mut self, whole_word: bool) -> Self {
        self.whole_word = whole_word;
        self
    }

    pub fn mode(mut self, mode: QueryMode) -> Self {
        self.mode = mode;
        self
    }
}
