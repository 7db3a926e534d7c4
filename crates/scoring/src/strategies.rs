//! The two synchronous scoring strategies.
//!
//! `AttributeStrategy` serves structured preferences through the
//! attribute matcher; `LinearScanStrategy` serves free-text queries by
//! encoding the query and scanning every cached catalog vector. The
//! index-accelerated path lives in the engine crate because it is async
//! and best-effort.

use crate::attribute::AttributeMatcher;
use crate::cache::VectorCache;
use crate::similarity::{MIN_RELEVANCE_SCORE, cosine_similarity, to_match_score};
use crate::traits::{RankRequest, ScoredPackage, ScoringStrategy};
use anyhow::{Result, bail};
use catalog::Catalog;
use encoder::{Embedder, fallback_query_vector};
use std::sync::Arc;
use tracing::debug;

/// Structured-preference scoring via the attribute matcher.
#[derive(Debug, Clone, Default)]
pub struct AttributeStrategy {
    matcher: AttributeMatcher,
}

impl AttributeStrategy {
    pub fn new() -> Self {
        Self {
            matcher: AttributeMatcher::new(),
        }
    }
}

impl ScoringStrategy for AttributeStrategy {
    fn name(&self) -> &str {
        "attribute-match"
    }

    fn score(&self, request: &RankRequest, catalog: &Catalog) -> Result<Vec<ScoredPackage>> {
        let RankRequest::Preferences(preferences) = request else {
            bail!("attribute strategy requires structured preferences");
        };

        let scored: Vec<ScoredPackage> = catalog
            .packages()
            .iter()
            .filter_map(|package| self.matcher.score(package, preferences))
            .collect();

        debug!(
            "Attribute matcher scored {} of {} packages",
            scored.len(),
            catalog.len()
        );
        Ok(scored)
    }
}

/// Free-text scoring by linear cosine scan over the vector cache.
pub struct LinearScanStrategy {
    cache: Arc<VectorCache>,
    embedder: Arc<dyn Embedder>,
}

impl LinearScanStrategy {
    pub fn new(cache: Arc<VectorCache>, embedder: Arc<dyn Embedder>) -> Self {
        Self { cache, embedder }
    }
}

impl ScoringStrategy for LinearScanStrategy {
    fn name(&self) -> &str {
        "linear-scan"
    }

    /// ## Algorithm
    /// 1. Encode the query (fallback encoding if the embedder fails)
    /// 2. Cosine against every cached vector
    /// 3. Keep packages scoring above the relevance threshold
    fn score(&self, request: &RankRequest, _catalog: &Catalog) -> Result<Vec<ScoredPackage>> {
        let RankRequest::Query(query) = request else {
            bail!("linear scan requires a free-text query");
        };

        let query_vector = self
            .embedder
            .encode_query(query)
            .unwrap_or_else(|_| fallback_query_vector(query));

        let scored: Vec<ScoredPackage> = self
            .cache
            .ids()
            .iter()
            .zip(self.cache.vectors())
            .filter_map(|(&id, vector)| {
                let similarity = cosine_similarity(query_vector.as_slice(), vector.as_slice());
                let score = to_match_score(similarity);
                (score > MIN_RELEVANCE_SCORE).then(|| ScoredPackage {
                    id,
                    score,
                    reasons: Vec::new(),
                })
            })
            .collect();

        debug!(
            "Linear scan kept {} of {} packages above threshold {}",
            scored.len(),
            self.cache.len(),
            MIN_RELEVANCE_SCORE
        );
        Ok(scored)
    }
}
