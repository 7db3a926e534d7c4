//! Price block: normalized price, tier indicators, log-scaled value.
//!
//! Layout: [normalized, budget, mid, premium, luxury, log_scaled].
//! The tier breakpoints and the normalization ceiling are fixed design
//! constants shared with the ranking reasons.

use super::neutral;

/// Normalization ceiling; prices above this clip to 1.0.
pub const PRICE_CEILING: f32 = 1000.0;

/// Tier breakpoints: budget < 100 <= mid < 300 <= premium < 600 <= luxury.
pub const BUDGET_MAX: f32 = 100.0;
pub const MID_MAX: f32 = 300.0;
pub const PREMIUM_MAX: f32 = 600.0;

pub const SIZE: usize = 6;

/// Price tier derived from the fixed breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceTier {
    Budget,
    Mid,
    Premium,
    Luxury,
}

impl PriceTier {
    pub fn of(price: f32) -> Self {
        if price < BUDGET_MAX {
            PriceTier::Budget
        } else if price < MID_MAX {
            PriceTier::Mid
        } else if price < PREMIUM_MAX {
            PriceTier::Premium
        } else {
            PriceTier::Luxury
        }
    }
}

/// Encode a price block from a known price.
pub fn encode(price: f32) -> Vec<f32> {
    let normalized = (price / PRICE_CEILING).min(1.0);
    let tier = PriceTier::of(price);
    let log_scaled = (1.0 + price).ln() / (1.0 + PRICE_CEILING).ln();

    vec![
        normalized,
        if tier == PriceTier::Budget { 1.0 } else { 0.0 },
        if tier == PriceTier::Mid { 1.0 } else { 0.0 },
        if tier == PriceTier::Premium { 1.0 } else { 0.0 },
        if tier == PriceTier::Luxury { 1.0 } else { 0.0 },
        log_scaled,
    ]
}

/// Neutral price block for queries with no price mention.
pub fn encode_neutral() -> Vec<f32> {
    neutral(SIZE)
}
