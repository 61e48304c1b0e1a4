//! The Slab type: one trimmed chunk plus where it came from.

/// A trimmed chunk of text with its position in the original document.
///
/// ## Byte Offsets
///
/// Sizes are counted in characters while splitting, but `start` and `end`
/// are byte offsets so the chunk can be sliced straight back out of the
/// source. They describe the *trimmed* text, not the raw window the splitter
/// cut:
///
/// ```rust
/// use ragsplit::{Chunker, RecursiveChunker};
///
/// let text = "  第一句。第二句。";
/// let chunker = RecursiveChunker::chinese(6, 0).unwrap();
///
/// for slab in chunker.chunk(text) {
///     assert_eq!(&text[slab.span()], slab.text);
/// }
/// ```
///
/// ## Overlap
///
/// Adjacent slabs may share text when the splitter runs with an overlap.
/// `index` is the slab's position in the output, so a slab can always be
/// paired with its neighbours after being stored elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slab {
    /// The trimmed chunk text. Never empty.
    pub text: String,
    /// Byte offset where the trimmed text starts in the original document.
    pub start: usize,
    /// Byte offset where the trimmed text ends (exclusive).
    pub end: usize,
    /// Zero-based index of this chunk in the sequence.
    pub index: usize,
}

impl Slab {
    /// Create a new slab.
    #[must_use]
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }

    /// The length of this chunk in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether this chunk is empty. Slabs produced by a chunker never are.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The length of this chunk in characters, the unit chunk sizes use.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// The byte span of this chunk in the original document.
    #[must_use]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// Consume the slab, keeping only its text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

impl std::fmt::Display for Slab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Slab {{ index: {}, span: {}..{}, chars: {} }}",
            self.index,
            self.start,
            self.end,
            self.char_len()
        )
    }
}
