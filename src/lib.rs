//! # ragsplit
//!
//! Separator-aware text splitting for retrieval-augmented generation (RAG)
//! pipelines over Chinese (and mixed) text.
//!
//! ## The Problem
//!
//! Documents have to be cut into pieces small enough to embed, but a cut in
//! the middle of a sentence hands the retriever half a thought. Chinese text
//! makes the usual tricks awkward: there are no spaces between words, and
//! sentences end in full-width punctuation (`。！？`) rather than `". "`.
//!
//! ## The Approach
//!
//! Walk the text left to right. For each chunk, look for the best boundary
//! at or before `chunk_size` characters, trying separators from the largest
//! structural break to the smallest:
//!
//! ```text
//! Separators: ["\n\n", "\n", "。", "！", "？", "，", "、"]
//!
//! 1. Rightmost paragraph break that fits? Cut after it.
//! 2. Otherwise the rightmost line break, then full stop, and so on.
//! 3. Nothing fits? Hard cut at chunk_size.
//! 4. Start the next chunk `overlap` characters before the cut.
//! ```
//!
//! Every chunk is trimmed; chunks that are only whitespace are dropped.
//!
//! ## Quick Start
//!
//! ```rust
//! use ragsplit::{split_chinese_text, Chunker, RecursiveChunker};
//!
//! let text = "第一段讲退货政策。\n\n第二段讲物流费用，包括仓储费、配送费。";
//!
//! // One-shot
//! let chunks = split_chinese_text(text, 16, 2)?;
//! assert!(chunks.iter().all(|c| c.chars().count() <= 16));
//!
//! // Reusable, with positions
//! let chunker = RecursiveChunker::chinese(16, 2)?;
//! for slab in chunker.chunk(text) {
//!     assert_eq!(&text[slab.span()], slab.text);
//! }
//! # Ok::<(), ragsplit::Error>(())
//! ```
//!
//! ## Units
//!
//! `chunk_size` and `overlap` count characters (Unicode scalar values), so
//! `。` and `a` each count as one. [`Slab`] spans are byte offsets, ready for
//! slicing the source string.
//!
//! ## Scoring
//!
//! [`calc_similarity`] scores two embedding vectors with cosine similarity
//! scaled by [`SIMILARITY_BOOST`], and [`rank_by_similarity`] picks the top
//! matches for a query.

mod config;
mod error;
mod recursive;
mod similarity;
mod slab;
mod trim;

pub use config::SplitterConfig;
pub use error::{Error, Result};
pub use recursive::{split_chinese_text, RecursiveChunker, CHINESE_SEPARATORS};
pub use similarity::{
    calc_similarity, cosine_similarity, rank_by_similarity, Scored, SIMILARITY_BOOST,
};
pub use slab::Slab;

/// A text chunking strategy.
///
/// ```rust
/// use ragsplit::{Chunker, RecursiveChunker};
///
/// fn chunk_document(chunker: &dyn Chunker, text: &str) -> Vec<ragsplit::Slab> {
///     chunker.chunk(text)
/// }
///
/// let chunker = RecursiveChunker::chinese(100, 10).unwrap();
/// let slabs = chunk_document(&chunker, "你好，世界。");
/// assert_eq!(slabs.len(), 1);
/// ```
pub trait Chunker: Send + Sync {
    /// Split text into chunks.
    ///
    /// Each chunk is a [`Slab`] holding the trimmed text and its byte span
    /// in the original document.
    fn chunk(&self, text: &str) -> Vec<Slab>;

    /// Estimate the number of chunks for a text of `text_len` characters.
    ///
    /// Useful for pre-allocation. May be approximate.
    fn estimate_chunks(&self, text_len: usize) -> usize {
        (text_len / 500).max(1)
    }
}
