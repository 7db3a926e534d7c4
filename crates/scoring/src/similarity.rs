//! Cosine similarity and the 0-100 match-score mapping.
//!
//! Scoring must never crash on odd vectors: a dimension mismatch or a
//! zero-magnitude vector yields zero similarity, not an error, so encoder
//! changes can never take down the ranking path.

/// Minimum mapped score a package must exceed to be considered relevant
/// on the vector paths. Fixed design constant, not user-configurable.
pub const MIN_RELEVANCE_SCORE: u8 = 30;

/// Cosine similarity between two vectors, in [-1, 1].
///
/// Fails soft: returns 0.0 when the lengths differ or either vector has
/// zero magnitude. Never divides by zero, never panics.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (&x, &y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(-1.0, 1.0)
}

/// Map a cosine similarity onto the 0-100 integer scale:
/// `round(max(0, similarity) * 100)`.
pub fn to_match_score(similarity: f32) -> u8 {
    (similarity.max(0.0) * 100.0).round() as u8
}
