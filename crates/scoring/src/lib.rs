//! # Scoring Crate
//!
//! Similarity scoring and preference matching over the catalog.
//!
//! ## Main Components
//!
//! - **similarity**: Fail-soft cosine similarity and the 0-100 score
//!   mapping, plus the fixed relevance threshold
//! - **cache**: Precomputed catalog vectors (built once, read-only,
//!   shared behind an `Arc`)
//! - **attribute**: The attribute-weighted matcher for structured
//!   preferences
//! - **traits**: The `ScoringStrategy` seam the ranking engine selects
//!   between
//! - **strategies**: `AttributeStrategy` and `LinearScanStrategy`
//!
//! ## Architecture
//!
//! Scoring is pure and bounded: no strategy here blocks, sleeps, or
//! mutates shared state. The accelerated-index path is deliberately not
//! in this crate — it is async and best-effort, so it lives with the
//! engine that knows how to fall back from it.

pub mod attribute;
pub mod cache;
pub mod similarity;
pub mod strategies;
pub mod traits;

// Re-export main types
pub use attribute::AttributeMatcher;
pub use cache::VectorCache;
pub use similarity::{MIN_RELEVANCE_SCORE, cosine_similarity, to_match_score};
pub use strategies::{AttributeStrategy, LinearScanStrategy};
pub use traits::{RankRequest, ScoredPackage, ScoringStrategy};
