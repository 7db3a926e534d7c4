//! Query-side signal extraction.
//!
//! Pulls numeric group-size mentions, price mentions, and coarse temporal
//! keywords out of free text so the query encoder can override the
//! corresponding neutral block defaults.

use crate::blocks::temporal::TemporalHint;
use once_cell::sync::Lazy;
use regex::Regex;

/// Representative price for an "under N" mention: shoppers saying
/// "under 200" cluster toward the top of that range, not the middle.
const UNDER_CAP_FACTOR: f32 = 0.75;

static GROUP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d{1,3})\s*(?:people|persons?|group|friends|family)\b")
        .expect("group-size regex")
});

static RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$?(\d+(?:\.\d+)?)\s*(?:-|to)\s*\$?(\d+(?:\.\d+)?)").expect("price-range regex")
});

static UNDER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:under|below)\s*\$?(\d+(?:\.\d+)?)").expect("under-price regex")
});

static AROUND_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\baround\s*\$?(\d+(?:\.\d+)?)").expect("around-price regex"));

static DOLLAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$(\d+(?:\.\d+)?)").expect("dollar-amount regex"));

/// A price mention detected in a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceMention {
    /// Price the encoder should treat the query as asking for.
    pub representative: f32,
    /// Upper bound when the mention expressed one ("under 200", "$100-$300").
    pub cap: Option<f32>,
}

/// Structured signals extracted from a free-text query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuerySignals {
    pub group_size: Option<u32>,
    pub price: Option<PriceMention>,
    pub temporal: Option<TemporalHint>,
}

impl QuerySignals {
    /// Extract all signals from a query. Purely lexical and deterministic.
    pub fn extract(query: &str) -> Self {
        Self {
            group_size: extract_group_size(query),
            price: extract_price(query),
            temporal: extract_temporal(query),
        }
    }
}

/// A number immediately followed by a people/person/group/friends/family
/// token, e.g. "for 4 people".
fn extract_group_size(query: &str) -> Option<u32> {
    GROUP_RE
        .captures(query)
        .and_then(|caps| caps[1].parse().ok())
}

/// Price mentions, most specific form first: an explicit range, then
/// "under"/"below", then "around", then a bare dollar amount.
fn extract_price(query: &str) -> Option<PriceMention> {
    if let Some(caps) = RANGE_RE.captures(query) {
        let low: f32 = caps[1].parse().ok()?;
        let high: f32 = caps[2].parse().ok()?;
        return Some(PriceMention {
            representative: (low + high) / 2.0,
            cap: Some(high),
        });
    }

    if let Some(caps) = UNDER_RE.captures(query) {
        let cap: f32 = caps[1].parse().ok()?;
        return Some(PriceMention {
            representative: cap * UNDER_CAP_FACTOR,
            cap: Some(cap),
        });
    }

    if let Some(caps) = AROUND_RE.captures(query) {
        let value: f32 = caps[1].parse().ok()?;
        return Some(PriceMention {
            representative: value,
            cap: None,
        });
    }

    if let Some(caps) = DOLLAR_RE.captures(query) {
        let value: f32 = caps[1].parse().ok()?;
        return Some(PriceMention {
            representative: value,
            cap: None,
        });
    }

    None
}

fn extract_temporal(query: &str) -> Option<TemporalHint> {
    let lowered = query.to_lowercase();
    if lowered.contains("tonight") || lowered.contains("today") {
        Some(TemporalHint::Today)
    } else if lowered.contains("this week") || lowered.contains("weekend") {
        Some(TemporalHint::ThisWeek)
    } else if lowered.contains("this month") {
        Some(TemporalHint::ThisMonth)
    } else {
        None
    }
}
