//! Error types for ragsplit.

/// Errors that can occur while configuring a splitter or scoring vectors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid chunk size (must be > 0).
    #[error("invalid chunk size: {0} (must be > 0)")]
    InvalidChunkSize(usize),

    /// Overlap is not smaller than the chunk size.
    #[error("overlap {overlap} must be smaller than chunk size {size}")]
    OverlapExceedsSize {
        /// The chunk size.
        size: usize,
        /// The overlap that reached or exceeded the size.
        overlap: usize,
    },

    /// A separator tier is the empty string.
    #[error("separator at position {index} is empty")]
    EmptySeparator {
        /// Position of the offending separator in the priority list.
        index: usize,
    },

    /// A vector is shorter than the requested comparison length.
    #[error("vector dimension mismatch: expected at least {expected}, got {actual}")]
    DimensionMismatch {
        /// Number of elements the comparison needs.
        expected: usize,
        /// Number of elements actually available.
        actual: usize,
    },

    /// Cosine similarity is undefined for a zero vector.
    #[error("cosine similarity is undefined for a zero-norm vector")]
    ZeroNorm,

    /// Reading a configuration file failed.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for ragsplit operations.
pub type Result<T> = std::result::Result<T, Error>;
