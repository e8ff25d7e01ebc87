use crate::index::suffix_array::SuffixArrayStats;
use crate::index::{SubstringIndex, TitleBoundaryTable};
use crate::utils::line_count;
use serde::{Deserialize, Serialize};

/// Size and shape of the loaded corpus and its indexes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexStats {
    pub corpus_bytes: usize,
    pub corpus_lines: usize,
    pub titles: usize,
    pub exact: SuffixArrayStats,
    pub folded: SuffixArrayStats,
}

impl IndexStats {
    pub fn collect(index: &SubstringIndex, table: &TitleBoundaryTable) -> Self {
        let (exact, folded) = index.stats();
        Self {
            corpus_bytes: index.corpus().len(),
            corpus_lines: line_count(index.corpus().text()),
            titles: table.len(),
            exact,
            folded,
        }
    }

    /// Approximate heap footprint: corpus, folded copy, and both suffix arrays
    pub fn memory_bytes(&self) -> usize {
        self.corpus_bytes + self.folded.text_size + self.exact.entry_bytes + self.folded.entry_bytes
    }
}

/// Format byte size for display
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;
    const GB: usize = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;

    #[test]
    fn test_collect() {
        let index = SubstringIndex::build(&Corpus::from_text("ONE\nbody\nTWO\nmore\n")).unwrap();
        let table = TitleBoundaryTable::build(&index, &["ONE", "TWO"]).unwrap();
        let stats = IndexStats::collect(&index, &table);

        assert_eq!(stats.corpus_bytes, 18);
        assert_eq!(stats.corpus_lines, 4);
        assert_eq!(stats.titles, 2);
        assert_eq!(stats.exact.suffix_count, 18);
        assert!(stats.folded.case_insensitive);
        assert_eq!(stats.memory_bytes(), 18 + 18 + 72 + 72);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 bytes");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(5 * 1024 * 1024 + 512 * 1024), "5.50 MB");
    }
}
