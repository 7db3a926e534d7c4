//! Core domain types for the ticket package catalog.
//!
//! This module defines the fundamental data structures used throughout the
//! system: the immutable `TicketPackage` record, the ordinal
//! `HospitalityLevel`, and the in-memory `Catalog` store with its lookup
//! indices.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use chrono::NaiveDate;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a ticket package.
pub type PackageId = u32;

// =============================================================================
// Hospitality
// =============================================================================

/// Ordinal hospitality tier: Bronze < Silver < Gold < Platinum.
///
/// The derived `Ord` follows variant declaration order, so comparisons like
/// `level >= HospitalityLevel::Gold` work as expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HospitalityLevel {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl HospitalityLevel {
    /// Map the tier onto a [0, 1] scalar used by the feature encoder.
    ///
    /// Bronze = 0.25, Silver = 0.5, Gold = 0.75, Platinum = 1.0.
    /// Callers encode a missing/unknown level as 0.5 (the Silver midpoint).
    pub fn scalar(self) -> f32 {
        match self {
            HospitalityLevel::Bronze => 0.25,
            HospitalityLevel::Silver => 0.5,
            HospitalityLevel::Gold => 0.75,
            HospitalityLevel::Platinum => 1.0,
        }
    }

    /// Parse a level from free text, case-insensitively.
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "bronze" => Some(HospitalityLevel::Bronze),
            "silver" => Some(HospitalityLevel::Silver),
            "gold" => Some(HospitalityLevel::Gold),
            "platinum" => Some(HospitalityLevel::Platinum),
            _ => None,
        }
    }
}

// =============================================================================
// TicketPackage
// =============================================================================

/// A single catalog item: an event ticket package with hospitality options.
///
/// Loaded once from a static source at startup and read-only thereafter.
/// Text fields (location, sport, seating, description) are free text and
/// matched by case-insensitive substring throughout the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketPackage {
    pub id: PackageId,
    /// Price in whole currency units; never negative.
    pub price: f32,
    pub venue: String,
    pub event_date: NaiveDate,
    /// Sport category, e.g. "Basketball".
    pub sport: String,
    /// Seating category, e.g. "Lower Bowl" or "Courtside".
    pub seating_category: String,
    /// Hospitality offering, e.g. "VIP Club Access".
    pub hospitality_type: String,
    /// Where the hospitality is served, e.g. "Skyline Lounge".
    pub hospitality_venue: String,
    /// Ordinal tier; `None` when the package carries no tiered hospitality.
    pub hospitality_level: Option<HospitalityLevel>,
    /// Free-text city, e.g. "New York".
    pub location: String,
    pub available_tickets: u32,
    pub description: String,
}

impl TicketPackage {
    /// Scalar for the hospitality tier, defaulting to the 0.5 midpoint
    /// when no level is set.
    pub fn hospitality_scalar(&self) -> f32 {
        self.hospitality_level
            .map(HospitalityLevel::scalar)
            .unwrap_or(0.5)
    }
}

// =============================================================================
// Catalog - The In-Memory Package Store
// =============================================================================

/// Holds every ticket package plus secondary indices for fast lookups.
///
/// Packages are kept in insertion order; that order is the tie-break order
/// used by the ranking engine, so it must stay stable for the lifetime of
/// the catalog. Mutators are only called while loading; afterwards the
/// catalog is shared behind an `Arc` and read concurrently without locking.
#[derive(Debug, Default)]
pub struct Catalog {
    packages: Vec<TicketPackage>,

    /// PackageId -> position in `packages`.
    id_index: HashMap<PackageId, usize>,

    /// Lowercased sport -> package ids, in insertion order.
    sport_index: HashMap<String, Vec<PackageId>>,
    /// Lowercased location -> package ids, in insertion order.
    location_index: HashMap<String, Vec<PackageId>>,
}

impl Catalog {
    /// Creates a new, empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a package and update the secondary indices.
    ///
    /// A package with a duplicate id replaces nothing; it is appended and
    /// the id index points at the latest copy. Loaders are expected to
    /// reject duplicates before getting here.
    pub fn insert_package(&mut self, package: TicketPackage) {
        let position = self.packages.len();
        self.id_index.insert(package.id, position);
        self.sport_index
            .entry(package.sport.to_lowercase())
            .or_default()
            .push(package.id);
        self.location_index
            .entry(package.location.to_lowercase())
            .or_default()
            .push(package.id);
        self.packages.push(package);
    }

    /// Get a package by id.
    pub fn get(&self, id: PackageId) -> Option<&TicketPackage> {
        self.id_index.get(&id).map(|&pos| &self.packages[pos])
    }

    /// All packages in insertion (ranking tie-break) order.
    pub fn packages(&self) -> &[TicketPackage] {
        &self.packages
    }

    /// Package ids for a sport (exact, case-insensitive).
    ///
    /// Returns an empty slice for an unknown sport.
    pub fn by_sport(&self, sport: &str) -> &[PackageId] {
        self.sport_index
            .get(&sport.to_lowercase())
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Package ids for a location (exact, case-insensitive).
    pub fn by_location(&self, location: &str) -> &[PackageId] {
        self.location_index
            .get(&location.to_lowercase())
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_package(id: PackageId) -> TicketPackage {
        TicketPackage {
            id,
            price: 450.0,
            venue: "Madison Square Garden".to_string(),
            event_date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            sport: "Basketball".to_string(),
            seating_category: "Lower Bowl".to_string(),
            hospitality_type: "VIP Club Access".to_string(),
            hospitality_venue: "Skyline Lounge".to_string(),
            hospitality_level: Some(HospitalityLevel::Platinum),
            location: "New York".to_string(),
            available_tickets: 8,
            description: "Premium courtside experience".to_string(),
        }
    }

    #[test]
    fn test_hospitality_ordering() {
        assert!(HospitalityLevel::Bronze < HospitalityLevel::Silver);
        assert!(HospitalityLevel::Gold < HospitalityLevel::Platinum);
    }

    #[test]
    fn test_hospitality_scalar() {
        assert_eq!(HospitalityLevel::Bronze.scalar(), 0.25);
        assert_eq!(HospitalityLevel::Silver.scalar(), 0.5);
        assert_eq!(HospitalityLevel::Gold.scalar(), 0.75);
        assert_eq!(HospitalityLevel::Platinum.scalar(), 1.0);
    }

    #[test]
    fn test_hospitality_parse() {
        assert_eq!(
            HospitalityLevel::parse("platinum"),
            Some(HospitalityLevel::Platinum)
        );
        assert_eq!(
            HospitalityLevel::parse(" Gold "),
            Some(HospitalityLevel::Gold)
        );
        assert_eq!(HospitalityLevel::parse("diamond"), None);
    }

    #[test]
    fn test_missing_level_defaults_to_midpoint() {
        let mut package = sample_package(1);
        package.hospitality_level = None;
        assert_eq!(package.hospitality_scalar(), 0.5);
    }

    #[test]
    fn test_insert_and_get() {
        let mut catalog = Catalog::new();
        catalog.insert_package(sample_package(1));

        let retrieved = catalog.get(1).unwrap();
        assert_eq!(retrieved.id, 1);
        assert_eq!(retrieved.location, "New York");
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn test_secondary_indices_are_case_insensitive() {
        let mut catalog = Catalog::new();
        catalog.insert_package(sample_package(1));

        assert_eq!(catalog.by_sport("BASKETBALL"), &[1]);
        assert_eq!(catalog.by_location("new york"), &[1]);
        assert!(catalog.by_sport("baseball").is_empty());
    }

    #[test]
    fn test_packages_preserve_insertion_order() {
        let mut catalog = Catalog::new();
        for id in [3, 1, 2] {
            catalog.insert_package(sample_package(id));
        }

        let ids: Vec<_> = catalog.packages().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
