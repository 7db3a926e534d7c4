//! Core scoring-strategy trait.
//!
//! The engine's per-request choice between attribute matching, a linear
//! cosine scan, and the accelerated index is expressed as interchangeable
//! implementations of one trait instead of scattered conditionals, so
//! each strategy is independently testable.

use anyhow::Result;
use catalog::{Catalog, PackageId, UserPreferences};

/// What a rank request is made of: free text or structured preferences.
#[derive(Debug, Clone)]
pub enum RankRequest {
    Query(String),
    Preferences(UserPreferences),
}

/// A package paired with its mapped 0-100 score and reason strings.
///
/// Reasons are derived deterministically from the (request, package,
/// score) triple; there is no randomness anywhere in scoring.
#[derive(Debug, Clone)]
pub struct ScoredPackage {
    pub id: PackageId,
    pub score: u8,
    pub reasons: Vec<String>,
}

/// A scorer that turns a request and a catalog into scored packages.
///
/// ## Design Note
/// - `Send + Sync` so strategies can serve concurrent rank requests
/// - Implementations filter out their own irrelevant items (zero scores
///   for the attribute matcher, at-or-below-threshold scores for the
///   vector scan); ordering and truncation stay with the engine
pub trait ScoringStrategy: Send + Sync {
    /// Returns the name of this strategy (for logging and status).
    fn name(&self) -> &str;

    /// Score the catalog against a request.
    ///
    /// # Returns
    /// * `Ok(Vec<ScoredPackage>)` - surviving packages, unordered
    /// * `Err` - if this strategy cannot serve the request shape
    fn score(&self, request: &RankRequest, catalog: &Catalog) -> Result<Vec<ScoredPackage>>;
}
