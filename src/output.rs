//! Output formatting for search results, pages, and index information

use crate::corpus::Corpus;
use crate::index::stats::format_size;
use crate::index::{IndexStats, TitleBoundaryTable};
use crate::page::PageResult;
use crate::searcher::SearchResult;
use crate::utils::line_number;
use regex::Regex;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Heading used for matches before the first known work
const NO_TITLE: &str = "(front matter)";

/// Colored stdout, or plain when `color` is false
pub fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print search results grouped under the title of their work
///
/// `regex` is the compiled query, used to find the extent of each match for
/// highlighting. Line numbers are shown when the corpus is available.
pub fn print_search_results<W: WriteColor>(
    out: &mut W,
    results: &[SearchResult],
    regex: &Regex,
    corpus: Option<&Corpus>,
) -> io::Result<()> {
    let mut current_title: Option<Option<&str>> = None;

    for r in results {
        let title = r.enclosing_title.as_deref();
        if current_title != Some(title) {
            if current_title.is_some() {
                // Add blank line between works
                writeln!(out)?;
            }
            out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
            writeln!(out, "{}", title.unwrap_or(NO_TITLE))?;
            out.reset()?;
            current_title = Some(title);
        }

        // Offset, then line number
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{}", r.match_offset)?;
        if let Some(corpus) = corpus {
            write!(out, ":{}", line_number(corpus.text(), r.match_offset))?;
        }
        out.reset()?;
        write!(out, ":")?;

        let (start, end) = match_extent(r, regex);
        print_highlighted(out, &r.context_text, start, end)?;
    }

    Ok(())
}

/// Byte range of the match inside `context_text`
fn match_extent(r: &SearchResult, regex: &Regex) -> (usize, usize) {
    let rel = r
        .match_offset
        .saturating_sub(r.context_offset)
        .min(r.context_text.len());

    if !r.context_text.is_char_boundary(rel) {
        return (rel, rel);
    }
    match regex.find_at(&r.context_text, rel) {
        Some(m) if m.start() == rel => (m.start(), m.end()),
        _ => (rel, rel),
    }
}

/// Print one context line with the match highlighted; newlines become spaces
fn print_highlighted<W: WriteColor>(
    out: &mut W,
    content: &str,
    match_start: usize,
    match_end: usize,
) -> io::Result<()> {
    let flat = content.replace(['\n', '\r'], " ");

    // Text before match
    write!(out, "{}", &flat[..match_start])?;

    // The match itself (highlighted)
    if match_end > match_start {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(out, "{}", &flat[match_start..match_end])?;
        out.reset()?;
    }

    // Text after match
    writeln!(out, "{}", &flat[match_end..])?;

    Ok(())
}

/// Print a page with its navigation offsets
pub fn print_page<W: WriteColor>(out: &mut W, page: &PageResult) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    writeln!(
        out,
        "-- offset {} (prev {}, next {}) --",
        page.offset, page.prev_offset, page.next_offset
    )?;
    out.reset()?;
    writeln!(out, "{}", page.page_text)?;
    Ok(())
}

/// Print every work with its start offset and size
pub fn print_titles<W: WriteColor>(out: &mut W, table: &TitleBoundaryTable) -> io::Result<()> {
    for entry in table.entries() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{:>10}", entry.start_offset)?;
        out.reset()?;

        let size = table
            .section_range(&entry.title)
            .map_or(0, |(start, end)| end - start);
        writeln!(out, "  {:<45} {}", entry.title, format_size(size))?;
    }
    Ok(())
}

/// Display index statistics
pub fn print_stats<W: Write>(out: &mut W, stats: &IndexStats) -> io::Result<()> {
    writeln!(out, "Index Statistics")?;
    writeln!(out, "================")?;
    writeln!(out)?;
    writeln!(out, "Corpus size:      {}", format_size(stats.corpus_bytes))?;
    writeln!(out, "Corpus lines:     {}", stats.corpus_lines)?;
    writeln!(out, "Titles:           {}", stats.titles)?;
    writeln!(out, "Suffixes:         {}", stats.exact.suffix_count)?;
    writeln!(
        out,
        "Suffix arrays:    {} exact + {} folded",
        format_size(stats.exact.entry_bytes),
        format_size(stats.folded.entry_bytes)
    )?;
    writeln!(out, "Memory (approx):  {}", format_size(stats.memory_bytes()))?;
    Ok(())
}
