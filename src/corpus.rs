//! Corpus store
//!
//! Holds the full text being searched. Loaded once at startup and never
//! mutated afterwards; every other component borrows from it.

use crate::error::{FolioError, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Immutable text corpus
#[derive(Debug, Clone)]
pub struct Corpus {
    text: Arc<str>,
}

impl Corpus {
    /// Read the corpus from a file
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD and a warning is
    /// logged; byte offsets then refer to the repaired text.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| FolioError::io(path, e))?;
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    valid_up_to = e.utf8_error().valid_up_to(),
                    "corpus is not valid UTF-8, replacing invalid sequences"
                );
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        info!(path = %path.display(), bytes = text.len(), "loaded corpus");
        Ok(Self::from_text(text))
    }

    /// Build a corpus from in-memory text
    pub fn from_text(text: impl Into<Arc<str>>) -> Self {
        Self { text: text.into() }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Shared handle to the underlying bytes (no copy)
    pub fn shared_bytes(&self) -> Arc<[u8]> {
        Arc::<[u8]>::from(Arc::clone(&self.text))
    }

    /// Corpus length in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
