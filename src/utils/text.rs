//! Offset arithmetic over UTF-8 text

/// Compute the byte range `[center - radius, center + radius)` clamped to
/// `text`, narrowed inward so both ends land on `char` boundaries.
///
/// A center past the end of the text yields a truncated or empty window,
/// never a panic.
pub fn clamp_window(text: &str, center: usize, radius: usize) -> (usize, usize) {
    let len = text.len();
    let start = center.saturating_sub(radius).min(len);
    let end = center.saturating_add(radius).min(len);
    snap_inward(text, start, end)
}

/// Like [`clamp_window`] for a signed center; a negative center clamps the
/// start to 0 while the end stays at `center + radius`.
pub fn clamp_window_signed(text: &str, center: i64, radius: usize) -> (usize, usize) {
    let len = text.len() as i64;
    let radius = i64::try_from(radius).unwrap_or(i64::MAX);
    let start = center.saturating_sub(radius).clamp(0, len);
    let end = center.saturating_add(radius).clamp(start, len);
    snap_inward(text, start as usize, end as usize)
}

/// Narrow `[start, end)` until both ends are `char` boundaries
pub fn snap_inward(text: &str, mut start: usize, mut end: usize) -> (usize, usize) {
    while start < end && !text.is_char_boundary(start) {
        start += 1;
    }
    while end > start && !text.is_char_boundary(end) {
        end -= 1;
    }
    (start, end)
}

/// 1-based line number of the byte at `pos`
pub fn line_number(text: &str, pos: usize) -> usize {
    let pos = pos.min(text.len());
    memchr::memchr_iter(b'\n', &text.as_bytes()[..pos]).count() + 1
}

/// Number of lines in `text` (a trailing newline does not open a new line)
pub fn line_count(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    let newlines = memchr::memchr_iter(b'\n', text.as_bytes()).count();
    if text.ends_with('\n') {
        newlines
    } else {
        newlines + 1
    }
}
