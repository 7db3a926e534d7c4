//! Structured user preferences extracted from a conversation.
//!
//! Preferences are ephemeral per-conversation state: every field is
//! optional, and later partial extractions merge into earlier ones rather
//! than replacing them. Nothing here is ever persisted to the catalog.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive price range the user is willing to pay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: f32,
    pub max: f32,
}

impl BudgetRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Whether a price falls within [min, max].
    pub fn contains(&self, price: f32) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Structured preference fields accumulated across a conversation.
///
/// Any subset may be present. `merge` implements the accumulation rule:
/// field-level overwrite on conflict, keep the existing value where the
/// newer extraction is silent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Free-text city, matched by substring against package locations.
    pub location: Option<String>,
    /// Sport category, matched by substring against package sports.
    pub sport: Option<String>,
    /// Hospitality wording, matched by substring against hospitality type.
    pub hospitality: Option<String>,
    pub target_date: Option<NaiveDate>,
    pub party_size: Option<u32>,
    pub budget: Option<BudgetRange>,
}

impl UserPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a newer partial extraction into this one.
    ///
    /// Each field set in `newer` overwrites the corresponding field here;
    /// unset fields leave the accumulated value untouched.
    pub fn merge(&mut self, newer: UserPreferences) {
        if newer.location.is_some() {
            self.location = newer.location;
        }
        if newer.sport.is_some() {
            self.sport = newer.sport;
        }
        if newer.hospitality.is_some() {
            self.hospitality = newer.hospitality;
        }
        if newer.target_date.is_some() {
            self.target_date = newer.target_date;
        }
        if newer.party_size.is_some() {
            self.party_size = newer.party_size;
        }
        if newer.budget.is_some() {
            self.budget = newer.budget;
        }
    }

    /// True when no preference dimension is set at all.
    pub fn is_empty(&self) -> bool {
        self.location.is_none()
            && self.sport.is_none()
            && self.hospitality.is_none()
            && self.target_date.is_none()
            && self.party_size.is_none()
            && self.budget.is_none()
    }
}
