//! Attribute-weighted preference matching.
//!
//! The non-vector scorer: matches explicit structured preferences against
//! a package with fixed additive weights and produces a reasons list
//! mirroring which terms fired. All text matching is case-insensitive
//! substring containment in either direction, so "New York" matches
//! "new york city" and vice versa.

use crate::traits::ScoredPackage;
use catalog::{TicketPackage, UserPreferences};

/// Per-dimension weights. Fixed design constants.
pub const LOCATION_WEIGHT: f32 = 30.0;
pub const SPORT_WEIGHT: f32 = 25.0;
pub const HOSPITALITY_WEIGHT: f32 = 20.0;
pub const DATE_WEIGHT_MAX: f32 = 15.0;
pub const PARTY_SIZE_WEIGHT: f32 = 10.0;
pub const BUDGET_IN_RANGE_WEIGHT: f32 = 20.0;
pub const BUDGET_UNDER_WEIGHT: f32 = 10.0;

/// Date proximity window in days; the date term scales linearly to zero
/// across it.
pub const DATE_WINDOW_DAYS: i64 = 30;

/// Scores a package against structured preferences.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeMatcher;

impl AttributeMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Score one package. Returns `None` when no preference term fires
    /// at all; zero-scoring packages are excluded from results.
    ///
    /// ## Algorithm
    /// Additive: location 30, sport 25, hospitality 20, date up to 15
    /// (scaled by `1 - days_diff/30` inside the window), party size 10,
    /// budget +20 in range / +10 strictly under the minimum. Being under
    /// budget is rewarded, never penalized; over budget contributes 0.
    /// The total is clamped to 100.
    pub fn score(
        &self,
        package: &TicketPackage,
        preferences: &UserPreferences,
    ) -> Option<ScoredPackage> {
        let mut total = 0.0f32;
        let mut reasons = Vec::new();

        if let Some(location) = &preferences.location {
            if fuzzy_contains(&package.location, location) {
                total += LOCATION_WEIGHT;
                reasons.push(format!("Located in {}", package.location));
            }
        }

        if let Some(sport) = &preferences.sport {
            if fuzzy_contains(&package.sport, sport) {
                total += SPORT_WEIGHT;
                reasons.push(format!("Matches your interest in {}", package.sport));
            }
        }

        if let Some(hospitality) = &preferences.hospitality {
            if fuzzy_contains(&package.hospitality_type, hospitality) {
                total += HOSPITALITY_WEIGHT;
                reasons.push(format!("Includes {}", package.hospitality_type));
            }
        }

        if let Some(target) = preferences.target_date {
            let days_diff = (package.event_date - target).num_days().abs();
            if days_diff <= DATE_WINDOW_DAYS {
                let proximity = 1.0 - days_diff as f32 / DATE_WINDOW_DAYS as f32;
                total += DATE_WEIGHT_MAX * proximity;
                reasons.push(format!("Event within {} days of your date", days_diff));
            }
        }

        if let Some(party_size) = preferences.party_size {
            if package.available_tickets >= party_size {
                total += PARTY_SIZE_WEIGHT;
                reasons.push(format!("Enough tickets for your group of {}", party_size));
            }
        }

        if let Some(budget) = preferences.budget {
            if budget.contains(package.price) {
                total += BUDGET_IN_RANGE_WEIGHT;
                reasons.push("Within your budget".to_string());
            } else if package.price < budget.min {
                total += BUDGET_UNDER_WEIGHT;
                reasons.push("Under your budget".to_string());
            }
        }

        if total <= 0.0 {
            return None;
        }

        Some(ScoredPackage {
            id: package.id,
            score: total.round().min(100.0) as u8,
            reasons,
        })
    }
}

/// Case-insensitive substring containment in either direction.
fn fuzzy_contains(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}
