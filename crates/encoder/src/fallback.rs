//! Degraded-mode fallback encoding.
//!
//! When full encoding fails (a malformed record, or a pluggable embedding
//! backend that is down), callers substitute a reduced vector built from
//! only the location, sport, price-tier, and hospitality-level blocks.
//! The remaining dimensions are filled with small fixed-magnitude noise
//! rather than zeros so fallback vectors stay pairwise distinguishable
//! under cosine similarity. This is a deliberate degraded-mode contract,
//! not an error path.

use crate::blocks::{hospitality, location, price, sport};
use crate::vector::{DIMENSION, FeatureVector};
use catalog::TicketPackage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hash::{DefaultHasher, Hash, Hasher};

/// Magnitude of the noise tail. Small enough not to drown the real
/// blocks, large enough to keep zero-overlap vectors from collapsing to
/// identical directions.
const NOISE_MAGNITUDE: f32 = 0.01;

/// Reduced encoding for a catalog package.
///
/// Deterministic: the noise tail is seeded from the package id, so the
/// same package always produces the same fallback vector.
pub fn fallback_package_vector(package: &TicketPackage) -> FeatureVector {
    let mut values = Vec::with_capacity(DIMENSION);
    values.extend(location::encode(&package.location));
    values.extend(sport::encode(&package.sport));
    values.extend(tier_indicators(package.price));
    values.push(package.hospitality_scalar());

    fill_noise_tail(&mut values, seed_for(&format!("package:{}", package.id)));
    FeatureVector::from_values(values)
}

/// Reduced encoding for a query, seeded from the query text itself.
pub fn fallback_query_vector(query: &str) -> FeatureVector {
    let mut values = Vec::with_capacity(DIMENSION);
    values.extend(location::encode(query));
    values.extend(sport::encode(query));
    values.extend(vec![0.5; 4]);
    values.push(hospitality::level_scalar_from_text(query));

    fill_noise_tail(&mut values, seed_for(&format!("query:{}", query)));
    FeatureVector::from_values(values)
}

/// Just the tier one-hots from the full price block.
fn tier_indicators(price_value: f32) -> Vec<f32> {
    price::encode(price_value)[1..5].to_vec()
}

fn seed_for(text: &str) -> u64 {
    // DefaultHasher::new() uses fixed keys, so this is stable across runs.
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish()
}

fn fill_noise_tail(values: &mut Vec<f32>, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    while values.len() < DIMENSION {
        values.push(rng.random_range(-NOISE_MAGNITUDE..NOISE_MAGNITUDE));
    }
}
