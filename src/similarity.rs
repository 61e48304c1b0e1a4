//! Boosted cosine similarity for ranking retrieved chunks.
//!
//! Scores are plain cosine similarity multiplied by [`SIMILARITY_BOOST`], so
//! parallel vectors score `1.2` rather than `1.0`. The boost is uniform: it
//! changes score magnitudes, never the ranking.

use crate::{Error, Result};

/// Fixed multiplier applied to every cosine score.
pub const SIMILARITY_BOOST: f32 = 1.2;

/// A candidate's position in the input and its boosted score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored {
    /// Index of the candidate in the slice passed to [`rank_by_similarity`].
    pub index: usize,
    /// Boosted cosine similarity against the query.
    pub score: f32,
}

/// Cosine similarity between two equal-length vectors.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the lengths differ and
/// [`Error::ZeroNorm`] if either vector is all zeros.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(Error::ZeroNorm);
    }
    Ok(dot / (norm_a * norm_b))
}

/// Boosted cosine similarity over the first `len` elements of each vector.
///
/// ```rust
/// let score = ragsplit::calc_similarity(&[1.0, 0.0], &[1.0, 0.0], 2).unwrap();
/// assert!((score - 1.2).abs() < 1e-6);
/// ```
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if either vector has fewer than
/// `len` elements and [`Error::ZeroNorm`] if either prefix is all zeros.
pub fn calc_similarity(vec1: &[f32], vec2: &[f32], len: usize) -> Result<f32> {
    let a = prefix(vec1, len)?;
    let b = prefix(vec2, len)?;
    Ok(cosine_similarity(a, b)? * SIMILARITY_BOOST)
}

fn prefix(v: &[f32], len: usize) -> Result<&[f32]> {
    v.get(..len).ok_or(Error::DimensionMismatch {
        expected: len,
        actual: v.len(),
    })
}

/// Rank candidates against a query, best first, keeping at most `k`.
///
/// Each candidate is compared over the query's full length. Equal scores
/// keep their input order.
///
/// # Errors
///
/// Fails on the first candidate that is shorter than the query or has a
/// zero norm, or if the query itself has a zero norm.
pub fn rank_by_similarity<V: AsRef<[f32]>>(
    query: &[f32],
    candidates: &[V],
    k: usize,
) -> Result<Vec<Scored>> {
    let mut scored = candidates
        .iter()
        .enumerate()
        .map(|(index, c)| {
            calc_similarity(query, c.as_ref(), query.len()).map(|score| Scored { index, score })
        })
        .collect::<Result<Vec<_>>>()?;

    // Stable sort keeps input order among ties.
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(k);
    Ok(scored)
}
