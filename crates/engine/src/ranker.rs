//! # Recommendation Engine
//!
//! This module coordinates the ranking pipeline:
//! 1. Build the vector cache at construction (catalog-load time)
//! 2. Kick off the accelerated-index build in the background
//! 3. Per request, pick a scoring strategy by input shape and backend
//!    readiness
//! 4. Threshold, sort, truncate, and annotate the survivors
//!
//! The engine is stateless across calls apart from the read-only caches
//! and the last-path monitoring flag; a rank request either completes or
//! fails fast, and every backend failure degrades silently to the linear
//! scan.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use catalog::{Catalog, TicketPackage, UserPreferences};
use encoder::{Embedder, fallback_query_vector};
use scoring::{
    AttributeStrategy, LinearScanStrategy, MIN_RELEVANCE_SCORE, RankRequest, ScoredPackage,
    ScoringStrategy, VectorCache, to_match_score,
};
use vector_index::IndexHandle;

use crate::reasons;
use crate::status::{EngineStatus, PathTracker, ScoringPath};

/// Default number of recommendations returned.
pub const DEFAULT_LIMIT: usize = 5;

/// How long a rank request will wait for the index before falling back.
const INDEX_WAIT: Duration = Duration::from_secs(2);

/// Base ef parameter for ANN search.
const SEARCH_EF: usize = 64;

/// Final recommendation returned to the caller.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub package: TicketPackage,
    /// Mapped similarity on the 0-100 integer scale.
    pub score: u8,
    /// Ordered, deterministic justification strings.
    pub reasons: Vec<String>,
}

/// Main engine coordinating encoding, scoring, and ranking.
pub struct RecommendationEngine {
    catalog: Arc<Catalog>,
    embedder: Arc<dyn Embedder>,
    cache: Arc<VectorCache>,
    index: IndexHandle,
    attribute: AttributeStrategy,
    linear: LinearScanStrategy,
    path_tracker: PathTracker,
}

impl RecommendationEngine {
    /// Create an engine with the accelerated backend enabled.
    ///
    /// Builds the vector cache synchronously (it is needed for the
    /// fallback path from the first request) and spawns the index build
    /// in the background; requests arriving before it finishes take the
    /// linear-scan path.
    pub async fn new(catalog: Arc<Catalog>, embedder: Arc<dyn Embedder>) -> Self {
        Self::with_backend(catalog, embedder, true).await
    }

    /// Create an engine that never uses the accelerated backend.
    ///
    /// Exists for operational comparison and tests; results must agree
    /// with the accelerated engine up to floating-point rounding.
    pub async fn without_index(catalog: Arc<Catalog>, embedder: Arc<dyn Embedder>) -> Self {
        Self::with_backend(catalog, embedder, false).await
    }

    async fn with_backend(
        catalog: Arc<Catalog>,
        embedder: Arc<dyn Embedder>,
        enable_index: bool,
    ) -> Self {
        let cache = Arc::new(VectorCache::build(&catalog, embedder.as_ref()));

        let index = if enable_index && !cache.is_empty() {
            IndexHandle::spawn_build(cache.vectors().to_vec())
        } else {
            IndexHandle::disabled()
        };

        let linear = LinearScanStrategy::new(cache.clone(), embedder.clone());
        info!(
            "Engine ready: {} packages, dimension {}, index {}",
            catalog.len(),
            cache.dimension(),
            if enable_index { "building" } else { "disabled" }
        );

        Self {
            catalog,
            embedder,
            cache,
            index,
            attribute: AttributeStrategy::new(),
            linear,
            path_tracker: PathTracker::new(),
        }
    }

    /// Rank the catalog against a free-text query.
    ///
    /// ## Algorithm
    /// 1. If the accelerated index is ready (bounded wait), search it and
    ///    map labels back to packages; any index error falls through
    /// 2. Otherwise cosine-scan every cached vector
    /// 3. Drop items at or below the relevance threshold
    /// 4. Stable-sort descending (ties keep catalog order)
    /// 5. Truncate to `limit` and annotate reasons
    ///
    /// Empty catalogs and empty result sets are not errors; the caller
    /// gets an empty list.
    pub async fn rank_query(&self, query: &str, limit: usize) -> Vec<Recommendation> {
        let scored = match self.index_scored(query, limit).await {
            Some(scored) => {
                self.path_tracker.record(ScoringPath::AnnIndex);
                scored
            }
            None => {
                self.path_tracker.record(ScoringPath::LinearScan);
                self.linear_scored(query)
            }
        };

        self.finish(scored, limit, |package, score| {
            reasons::annotate(query, package, score)
        })
    }

    /// Rank the catalog against structured preferences.
    ///
    /// Delegates to the attribute matcher and skips vector encoding
    /// entirely. Zero-scoring packages never appear.
    pub fn rank_preferences(
        &self,
        preferences: &UserPreferences,
        limit: usize,
    ) -> Vec<Recommendation> {
        self.path_tracker.record(ScoringPath::AttributeMatch);

        let request = RankRequest::Preferences(preferences.clone());
        let scored = match self.attribute.score(&request, &self.catalog) {
            Ok(scored) => scored,
            Err(error) => {
                warn!("Attribute matching failed: {}", error);
                Vec::new()
            }
        };

        // The matcher already produced per-term reasons; keep them.
        self.finish(scored, limit, |_, _| Vec::new())
    }

    /// Operational snapshot for tooling; not needed for correctness.
    pub fn status(&self) -> EngineStatus {
        EngineStatus {
            ann_active: self.index.is_ready(),
            catalog_size: self.catalog.len(),
            vector_dimension: self.cache.dimension(),
            last_path: self.path_tracker.last(),
        }
    }

    /// Wait up to `timeout` for the accelerated index. Returns whether
    /// it became ready; useful for tooling that wants the fast path on
    /// its first request.
    pub async fn wait_for_index(&self, timeout: Duration) -> bool {
        self.index.wait_ready(timeout).await.is_some()
    }

    /// Score via the accelerated index, if it is usable.
    ///
    /// Any failure — still building after the bounded wait, build
    /// failed, dimension mismatch, search error — returns `None` and the
    /// caller falls back. Nothing propagates.
    async fn index_scored(&self, query: &str, limit: usize) -> Option<Vec<ScoredPackage>> {
        let index = self.index.wait_ready(INDEX_WAIT).await?;

        let query_vector = self
            .embedder
            .encode_query(query)
            .unwrap_or_else(|_| fallback_query_vector(query));

        let ef = SEARCH_EF.max(limit * 2);
        let mut hits = match index.search(query_vector.as_slice(), limit, ef) {
            Ok(hits) => hits,
            Err(error) => {
                warn!("ANN search failed, falling back to linear scan: {}", error);
                return None;
            }
        };

        // Rows come back in distance order; re-sort by catalog position
        // so score ties later break in catalog order, same as the scan.
        hits.sort_by_key(|&(row, _)| row);

        let scored = hits
            .into_iter()
            .filter_map(|(row, distance)| {
                let (id, _) = self.cache.row(row)?;
                let score = to_match_score(1.0 - distance);
                (score > MIN_RELEVANCE_SCORE).then(|| ScoredPackage {
                    id,
                    score,
                    reasons: Vec::new(),
                })
            })
            .collect();
        Some(scored)
    }

    fn linear_scored(&self, query: &str) -> Vec<ScoredPackage> {
        let request = RankRequest::Query(query.to_string());
        match self.linear.score(&request, &self.catalog) {
            Ok(scored) => scored,
            Err(error) => {
                warn!("Linear scan failed: {}", error);
                Vec::new()
            }
        }
    }

    /// Shared tail of both paths: sort, truncate, attach packages and
    /// reasons.
    fn finish<F>(
        &self,
        mut scored: Vec<ScoredPackage>,
        limit: usize,
        annotate: F,
    ) -> Vec<Recommendation>
    where
        F: Fn(&TicketPackage, u8) -> Vec<String>,
    {
        // Stable sort: equal scores keep their catalog iteration order.
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(limit);

        scored
            .into_iter()
            .filter_map(|item| {
                let package = self.catalog.get(item.id)?.clone();
                let reasons = if item.reasons.is_empty() {
                    annotate(&package, item.score)
                } else {
                    item.reasons
                };
                Some(Recommendation {
                    package,
                    score: item.score,
                    reasons,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use catalog::{BudgetRange, HospitalityLevel};
    use chrono::NaiveDate;
    use encoder::{FeatureVector, RuleBasedEmbedder};

    // ============================================================================
    // Test Fixtures
    // ============================================================================

    fn reference_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 8).unwrap()
    }

    fn test_embedder() -> Arc<dyn Embedder> {
        Arc::new(RuleBasedEmbedder::new(reference_date()))
    }

    fn package(
        id: u32,
        location: &str,
        sport: &str,
        price: f32,
        level: Option<HospitalityLevel>,
        tickets: u32,
    ) -> TicketPackage {
        TicketPackage {
            id,
            price,
            venue: "Test Arena".to_string(),
            event_date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            sport: sport.to_string(),
            seating_category: "Lower Bowl".to_string(),
            hospitality_type: if level >= Some(HospitalityLevel::Gold) {
                "VIP Club Access".to_string()
            } else {
                "Standard".to_string()
            },
            hospitality_venue: "Lounge".to_string(),
            hospitality_level: level,
            location: location.to_string(),
            available_tickets: tickets,
            description: "Great seats".to_string(),
        }
    }

    /// The two-package catalog from the reference scenario.
    fn scenario_catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::from_packages(vec![
                package(
                    1,
                    "New York",
                    "Basketball",
                    450.0,
                    Some(HospitalityLevel::Platinum),
                    8,
                ),
                package(
                    2,
                    "Los Angeles",
                    "Basketball",
                    280.0,
                    Some(HospitalityLevel::Gold),
                    12,
                ),
            ])
            .unwrap(),
        )
    }

    /// Embedder whose query vectors are orthogonal to every package
    /// vector, to drive all scores to zero.
    struct OrthogonalEmbedder;

    impl Embedder for OrthogonalEmbedder {
        fn id(&self) -> &str {
            "orthogonal"
        }

        fn encode_package(&self, _: &TicketPackage) -> anyhow::Result<FeatureVector> {
            let mut values = vec![0.0; encoder::DIMENSION];
            values[0] = 1.0;
            Ok(FeatureVector::from_values(values))
        }

        fn encode_query(&self, _: &str) -> anyhow::Result<FeatureVector> {
            let mut values = vec![0.0; encoder::DIMENSION];
            values[1] = 1.0;
            Ok(FeatureVector::from_values(values))
        }
    }

    /// Embedder that fails on queries, to exercise the query fallback.
    struct QueryFailingEmbedder(RuleBasedEmbedder);

    impl Embedder for QueryFailingEmbedder {
        fn id(&self) -> &str {
            "query-failing"
        }

        fn encode_package(&self, p: &TicketPackage) -> anyhow::Result<FeatureVector> {
            self.0.encode_package(p)
        }

        fn encode_query(&self, _: &str) -> anyhow::Result<FeatureVector> {
            Err(anyhow!("embedding backend unavailable"))
        }
    }

    // ============================================================================
    // Query-path tests
    // ============================================================================

    #[tokio::test]
    async fn test_scenario_vip_basketball_in_new_york() {
        let engine = RecommendationEngine::without_index(scenario_catalog(), test_embedder()).await;

        let results = engine
            .rank_query("VIP basketball tickets in New York for 4 people", 5)
            .await;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].package.id, 1, "New York package ranks first");
        assert!(results[0].score > results[1].score);
        assert!(
            results[0].reasons.iter().any(|r| r.contains("New York")),
            "expected a location reason, got {:?}",
            results[0].reasons
        );
        assert!(
            results[0].reasons.iter().any(|r| r.contains("VIP")),
            "expected a hospitality reason, got {:?}",
            results[0].reasons
        );
    }

    #[tokio::test]
    async fn test_rank_query_is_deterministic() {
        let engine = RecommendationEngine::without_index(scenario_catalog(), test_embedder()).await;
        let query = "basketball this weekend for 4 people";

        let first = engine.rank_query(query, 5).await;
        let second = engine.rank_query(query, 5).await;

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.package.id, b.package.id);
            assert_eq!(a.score, b.score);
            assert_eq!(a.reasons, b.reasons);
        }
    }

    #[tokio::test]
    async fn test_scores_stay_in_bounds() {
        let engine = RecommendationEngine::without_index(scenario_catalog(), test_embedder()).await;
        let results = engine.rank_query("luxury basketball in new york", 5).await;

        for result in &results {
            assert!(result.score <= 100);
            assert!(result.score > MIN_RELEVANCE_SCORE);
        }
    }

    #[tokio::test]
    async fn test_k_bound_holds() {
        let engine = RecommendationEngine::without_index(scenario_catalog(), test_embedder()).await;

        assert!(engine.rank_query("basketball", 1).await.len() <= 1);
        assert!(engine.rank_query("basketball", 0).await.is_empty());
    }

    #[tokio::test]
    async fn test_below_threshold_items_are_dropped() {
        let engine =
            RecommendationEngine::without_index(scenario_catalog(), Arc::new(OrthogonalEmbedder))
                .await;

        let results = engine.rank_query("anything at all", 5).await;
        assert!(
            results.is_empty(),
            "orthogonal vectors score 0 and must not appear"
        );
    }

    #[tokio::test]
    async fn test_empty_catalog_is_not_an_error() {
        let catalog = Arc::new(Catalog::new());
        let engine = RecommendationEngine::new(catalog, test_embedder()).await;

        let results = engine.rank_query("basketball", 5).await;
        assert!(results.is_empty());
        assert!(!engine.status().ann_active);
    }

    #[tokio::test]
    async fn test_query_encoding_failure_recovers_via_fallback() {
        let embedder = Arc::new(QueryFailingEmbedder(RuleBasedEmbedder::new(
            reference_date(),
        )));
        let engine = RecommendationEngine::without_index(scenario_catalog(), embedder).await;

        // The fallback query encoding still carries location and sport,
        // so ranking proceeds instead of erroring.
        let results = engine
            .rank_query("basketball tickets in New York", 5)
            .await;
        assert!(!results.is_empty());
        assert_eq!(results[0].package.id, 1);
    }

    // ============================================================================
    // Preference-path tests
    // ============================================================================

    #[tokio::test]
    async fn test_scenario_baseball_preferences_yield_empty() {
        let engine = RecommendationEngine::without_index(scenario_catalog(), test_embedder()).await;

        let prefs = UserPreferences {
            sport: Some("Baseball".to_string()),
            ..Default::default()
        };
        let results = engine.rank_preferences(&prefs, 5);
        assert!(results.is_empty(), "no basketball package matches baseball");
    }

    #[tokio::test]
    async fn test_scenario_budget_prefers_cheaper_package() {
        let catalog = Arc::new(
            Catalog::from_packages(vec![
                package(1, "Chicago", "Hockey", 100.0, None, 20),
                package(2, "Chicago", "Hockey", 900.0, None, 20),
            ])
            .unwrap(),
        );
        let engine = RecommendationEngine::without_index(catalog, test_embedder()).await;

        let prefs = UserPreferences {
            budget: Some(BudgetRange::new(0.0, 200.0)),
            ..Default::default()
        };
        let results = engine.rank_preferences(&prefs, 5);

        assert_eq!(results.len(), 1, "the $900 package scores 0 and is dropped");
        assert_eq!(results[0].package.price, 100.0);
        assert!(results[0].reasons.iter().any(|r| r.contains("budget")));
    }

    #[tokio::test]
    async fn test_preference_reasons_mirror_fired_terms() {
        let engine = RecommendationEngine::without_index(scenario_catalog(), test_embedder()).await;

        let prefs = UserPreferences {
            location: Some("New York".to_string()),
            sport: Some("Basketball".to_string()),
            party_size: Some(4),
            ..Default::default()
        };
        let results = engine.rank_preferences(&prefs, 5);

        assert_eq!(results[0].package.id, 1);
        let reasons = &results[0].reasons;
        assert!(reasons.iter().any(|r| r.contains("New York")));
        assert!(reasons.iter().any(|r| r.contains("Basketball")));
        assert!(reasons.iter().any(|r| r.contains("group of 4")));
    }

    #[tokio::test]
    async fn test_ties_break_in_catalog_order() {
        // Two identical packages: identical vectors, identical scores.
        let catalog = Arc::new(
            Catalog::from_packages(vec![
                package(10, "Chicago", "Hockey", 150.0, None, 20),
                package(11, "Chicago", "Hockey", 150.0, None, 20),
            ])
            .unwrap(),
        );
        let engine = RecommendationEngine::without_index(catalog, test_embedder()).await;

        let results = engine.rank_query("hockey in chicago", 5).await;
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].score, results[1].score);
        assert_eq!(results[0].package.id, 10, "catalog order breaks the tie");
        assert_eq!(results[1].package.id, 11);
    }

    // ============================================================================
    // Status tests
    // ============================================================================

    #[tokio::test]
    async fn test_status_reports_last_path() {
        let engine = RecommendationEngine::without_index(scenario_catalog(), test_embedder()).await;

        let status = engine.status();
        assert_eq!(status.last_path, ScoringPath::None);
        assert_eq!(status.catalog_size, 2);
        assert_eq!(status.vector_dimension, encoder::DIMENSION);
        assert!(!status.ann_active);

        engine.rank_query("basketball", 5).await;
        assert_eq!(engine.status().last_path, ScoringPath::LinearScan);

        engine.rank_preferences(&UserPreferences::default(), 5);
        assert_eq!(engine.status().last_path, ScoringPath::AttributeMatch);
    }
}
