//! Recursive separator splitting with overlap.
//!
//! Walks the text left to right, cutting one chunk at a time at the best
//! boundary that keeps the chunk within `chunk_size` characters.
//!
//! ## The Algorithm
//!
//! Given the remaining text, `chunk_size` and separator tiers (coarsest first):
//!
//! ```text
//! 1. Remaining text fits in chunk_size?  Emit it (trimmed) and stop.
//! 2. For each tier, find the rightmost occurrence that starts at or before
//!    chunk_size - len(separator). First tier with a hit wins.
//! 3. No hit in any tier? Hard cut at chunk_size.
//! 4. Emit text[..split] (trimmed, skipped if blank).
//! 5. Continue from split - overlap.
//! ```
//!
//! Picking the *rightmost* hit keeps chunks as close to `chunk_size` as the
//! boundary allows, while the tier order keeps paragraph breaks ahead of
//! line breaks, and line breaks ahead of punctuation.
//!
//! ## Overlap
//!
//! ```text
//! "ABCDEFGHIJ", chunk_size = 4, overlap = 2 (no separators)
//!
//! Chunk 0: "ABCD"  [0..4]
//! Chunk 1: "CDEF"  [2..6]   <- starts at 4 - 2 = 2
//! Chunk 2: "EFGH"  [4..8]
//! Chunk 3: "GHIJ"  [6..10]  <- remainder fits, stop
//! ```
//!
//! If a separator is found so early that `split - overlap` would not move
//! past the current start, the next chunk starts at `split` instead. Every
//! step therefore consumes at least one character and the loop terminates.
//!
//! ## Units
//!
//! All sizes are counted in characters (Unicode scalar values), so `。` counts
//! as one, same as `a`. Slab spans are reported in bytes.

use std::ops::Range;

use tracing::{debug, trace};

use crate::config::SplitterConfig;
use crate::trim::trim_span;
use crate::{Chunker, Error, Result, Slab};

/// Default separator tiers for Chinese prose, highest priority first.
///
/// Paragraph break, line break, then the full-width period, exclamation
/// mark, question mark, comma and ideographic comma.
pub const CHINESE_SEPARATORS: [&str; 7] = ["\n\n", "\n", "。", "！", "？", "，", "、"];

/// Recursive separator splitter with overlap.
///
/// ## Example
///
/// ```rust
/// use ragsplit::RecursiveChunker;
///
/// let chunker = RecursiveChunker::chinese(4, 2).unwrap();
/// let chunks = chunker.split("ABCDEFGHIJ");
/// assert_eq!(chunks, ["ABCD", "CDEF", "EFGH", "GHIJ"]);
/// ```
#[derive(Debug, Clone)]
pub struct RecursiveChunker {
    chunk_size: usize,
    overlap: usize,
    separators: Vec<String>,
}

/// A separator tier with its length in characters precomputed.
struct Tier<'a> {
    pattern: &'a str,
    chars: usize,
}

impl RecursiveChunker {
    /// Create a new recursive chunker.
    ///
    /// # Arguments
    ///
    /// * `chunk_size` - Maximum chunk size in characters
    /// * `overlap` - Characters repeated at the start of the next chunk
    /// * `separators` - Separator tiers, coarsest first. May be empty, in
    ///   which case every cut is a hard cut.
    ///
    /// # Errors
    ///
    /// Returns an error if `chunk_size == 0`, `overlap >= chunk_size`, or any
    /// separator is the empty string.
    pub fn new<S: AsRef<str>>(chunk_size: usize, overlap: usize, separators: &[S]) -> Result<Self> {
        validate(chunk_size, overlap, separators)?;
        Ok(Self {
            chunk_size,
            overlap,
            separators: separators.iter().map(|s| s.as_ref().to_string()).collect(),
        })
    }

    /// Create a chunker with [`CHINESE_SEPARATORS`].
    ///
    /// # Errors
    ///
    /// Returns an error if `chunk_size == 0` or `overlap >= chunk_size`.
    pub fn chinese(chunk_size: usize, overlap: usize) -> Result<Self> {
        Self::new(chunk_size, overlap, &CHINESE_SEPARATORS)
    }

    /// Create a chunker from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: &SplitterConfig) -> Result<Self> {
        Self::new(config.chunk_size, config.overlap, config.separators.as_slice())
    }

    /// Maximum chunk size in characters.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Characters of overlap between consecutive chunks.
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Separator tiers, coarsest first.
    pub fn separators(&self) -> &[String] {
        &self.separators
    }

    /// Split `text` into trimmed, non-empty chunks in source order.
    ///
    /// The returned vector is owned by the caller; there is nothing to
    /// release beyond dropping it.
    pub fn split(&self, text: &str) -> Vec<String> {
        self.spans(text)
            .into_iter()
            .map(|span| text[span].to_string())
            .collect()
    }

    /// Compute the trimmed byte span of every emitted chunk.
    ///
    /// Positions are walked char by char from the current start, so memory
    /// stays independent of the input length.
    fn spans(&self, text: &str) -> Vec<Range<usize>> {
        let tiers: Vec<Tier<'_>> = self
            .separators
            .iter()
            .map(|s| Tier {
                pattern: s.as_str(),
                chars: s.chars().count(),
            })
            .collect();

        let mut spans = Vec::with_capacity(self.estimate_chunks(text.len()));
        let mut start = 0;

        // `limit` is `chunk_size` chars past `start`; `None` once the rest fits.
        while let Some(limit) = advance(text, start, self.chunk_size) {
            let split = self.find_split(text, &tiers, start, limit).unwrap_or(limit);

            if let Some(span) = trim_span(text, start..split) {
                trace!(start = span.start, end = span.end, "chunk");
                spans.push(span);
            }

            start = retreat(text, start, split, self.overlap).unwrap_or(split);
        }

        if let Some(span) = trim_span(text, start..text.len()) {
            trace!(start = span.start, end = span.end, "final chunk");
            spans.push(span);
        }

        debug!(
            bytes = text.len(),
            chunks = spans.len(),
            chunk_size = self.chunk_size,
            overlap = self.overlap,
            "split text"
        );
        spans
    }

    /// Find the split position (byte offset) for the window starting at `start`.
    ///
    /// Returns the position just past the rightmost occurrence of the first
    /// tier that has one at or before `chunk_size - tier.chars`. `limit` is
    /// the byte offset `chunk_size` chars past `start`.
    fn find_split(
        &self,
        text: &str,
        tiers: &[Tier<'_>],
        start: usize,
        limit: usize,
    ) -> Option<usize> {
        tiers.iter().find_map(|tier| {
            // A tier longer than the chunk clamps its bound to 0 and may only
            // match right at `start`.
            let window_end = if tier.chars <= self.chunk_size {
                limit
            } else {
                advance(text, start, tier.chars).unwrap_or(text.len())
            };
            text[start..window_end]
                .rfind(tier.pattern)
                .map(|pos| start + pos + tier.pattern.len())
        })
    }
}

/// Byte offset `n` chars past `from`, or `None` if no more than `n` chars remain.
fn advance(text: &str, from: usize, n: usize) -> Option<usize> {
    text[from..].char_indices().nth(n).map(|(i, _)| from + i)
}

/// Byte offset `n` chars before `to`, if that lies strictly after `from`.
fn retreat(text: &str, from: usize, to: usize, n: usize) -> Option<usize> {
    if n == 0 {
        return Some(to);
    }
    text[from..to]
        .char_indices()
        .rev()
        .nth(n - 1)
        .map(|(i, _)| from + i)
        .filter(|&i| i > from)
}

impl Chunker for RecursiveChunker {
    fn chunk(&self, text: &str) -> Vec<Slab> {
        self.spans(text)
            .into_iter()
            .enumerate()
            .map(|(index, span)| Slab::new(&text[span.clone()], span.start, span.end, index))
            .collect()
    }

    fn estimate_chunks(&self, text_len: usize) -> usize {
        if text_len == 0 {
            return 0;
        }
        text_len.div_ceil(self.chunk_size - self.overlap)
    }
}

/// Check splitter parameters.
pub(crate) fn validate<S: AsRef<str>>(
    chunk_size: usize,
    overlap: usize,
    separators: &[S],
) -> Result<()> {
    if chunk_size == 0 {
        return Err(Error::InvalidChunkSize(chunk_size));
    }
    if overlap >= chunk_size {
        return Err(Error::OverlapExceedsSize {
            size: chunk_size,
            overlap,
        });
    }
    if let Some(index) = separators.iter().position(|s| s.as_ref().is_empty()) {
        return Err(Error::EmptySeparator { index });
    }
    Ok(())
}

/// Split Chinese text with the default separator tiers.
///
/// Returns trimmed, non-empty chunks in source order. Empty or
/// whitespace-only input yields an empty vector. The caller owns the
/// result; dropping it frees every chunk.
///
/// ```rust
/// let chunks = ragsplit::split_chinese_text("第一段。\n\n第二段。", 6, 0).unwrap();
/// assert_eq!(chunks, ["第一段。", "第二段。"]);
/// ```
///
/// # Errors
///
/// Returns an error if `chunk_size == 0` or `overlap >= chunk_size`.
pub fn split_chinese_text(text: &str, chunk_size: usize, overlap: usize) -> Result<Vec<String>> {
    Ok(RecursiveChunker::chinese(chunk_size, overlap)?.split(text))
}
