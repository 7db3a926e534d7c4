//! Human-readable justifications for query-path results.
//!
//! Reasons are derived deterministically from the (query, package, score)
//! triple by a fixed rule order. The attribute path produces its own
//! reasons inside the matcher; these rules only serve free-text queries,
//! where the vector score alone would be opaque to the user.

use catalog::{HospitalityLevel, TicketPackage};
use encoder::blocks::price::{MID_MAX, PriceTier};

/// Budget-intent keywords checked against the query.
const BUDGET_KEYWORDS: &[&str] = &["cheap", "budget", "affordable", "under"];

/// Premium-intent keywords checked against the query.
const PREMIUM_KEYWORDS: &[&str] = &["vip", "luxury", "premium"];

/// Generate reasons for one ranked package.
///
/// ## Algorithm
/// Independent checks, in order:
/// 1. Query mentions the package's location
/// 2. Query mentions the package's sport
/// 3. Budget keywords in the query align with a budget/mid-tier price
/// 4. Premium keywords align with Gold-or-better hospitality, a VIP
///    offering, or a premium-tier price
/// 5. Qualitative score band (> 80 excellent, > 60 good)
/// 6. Generic "{score}% match" when nothing else fired
pub fn annotate(query: &str, package: &TicketPackage, score: u8) -> Vec<String> {
    let lowered = query.to_lowercase();
    let mut reasons = Vec::new();

    if lowered.contains(&package.location.to_lowercase()) {
        reasons.push(format!("Located in {}", package.location));
    }

    if lowered.contains(&package.sport.to_lowercase()) {
        reasons.push(format!("Matches your interest in {}", package.sport));
    }

    if contains_any(&lowered, BUDGET_KEYWORDS) && package.price < MID_MAX {
        reasons.push(format!("Budget-friendly at ${:.0}", package.price));
    }

    if contains_any(&lowered, PREMIUM_KEYWORDS) && is_premium_offering(package) {
        reasons.push(format!("Premium hospitality: {}", package.hospitality_type));
    }

    if score > 80 {
        reasons.push("Excellent match".to_string());
    } else if score > 60 {
        reasons.push("Good match".to_string());
    }

    if reasons.is_empty() {
        reasons.push(format!("{}% match with your query", score));
    }

    reasons
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

fn is_premium_offering(package: &TicketPackage) -> bool {
    let gold_or_better = package
        .hospitality_level
        .map(|level| level >= HospitalityLevel::Gold)
        .unwrap_or(false);
    let vip_offering = package.hospitality_type.to_lowercase().contains("vip");
    let premium_priced = matches!(
        PriceTier::of(package.price),
        PriceTier::Premium | PriceTier::Luxury
    );

    gold_or_better || vip_offering || premium_priced
}
