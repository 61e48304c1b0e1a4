//! Whitespace trimming over byte spans.

use std::ops::Range;

/// Trim a byte span of `text`, returning the span of the trimmed content.
///
/// Returns `None` when nothing but whitespace is left. Whitespace is the
/// Unicode `White_Space` set, so the ideographic space (U+3000) is trimmed
/// along with ASCII blanks and line breaks.
pub(crate) fn trim_span(text: &str, span: Range<usize>) -> Option<Range<usize>> {
    let window = &text[span.clone()];
    let head = window.trim_start();
    let trimmed = head.trim_end();
    if trimmed.is_empty() {
        return None;
    }
    let start = span.start + (window.len() - head.len());
    Some(start..start + trimmed.len())
}
