//! # Encoder Crate
//!
//! Deterministic, rule-based feature encoding for ticket packages and
//! free-text queries.
//!
//! ## Main Components
//!
//! - **vector**: Fixed-length `FeatureVector` (D = 384) with the
//!   pad/truncate invariant
//! - **blocks**: One module per sub-feature block (location, sport,
//!   price, hospitality, venue, temporal, text)
//! - **query**: Signal extraction for group size, price mentions, and
//!   temporal keywords
//! - **fallback**: Reduced degraded-mode encoding with a deterministic
//!   noise tail
//!
//! ## Architecture
//!
//! Catalog records and queries are encoded through the same block
//! functions in the same fixed order, so their vectors are directly
//! comparable under cosine similarity. The `Embedder` trait is the
//! pluggable seam: `RuleBasedEmbedder` is the synthetic stand-in for a
//! real embedding service, and anything implementing the trait can
//! replace it without touching the scorers.
//!
//! ## Example Usage
//!
//! ```ignore
//! use encoder::{Embedder, RuleBasedEmbedder};
//! use chrono::NaiveDate;
//!
//! let embedder = RuleBasedEmbedder::new(NaiveDate::from_ymd_opt(2026, 8, 8).unwrap());
//! let query_vector = embedder.encode_query("VIP basketball in New York")?;
//! let package_vector = embedder.encode_package(&package)?;
//! ```

pub mod blocks;
pub mod fallback;
pub mod query;
pub mod vector;

// Re-export main types
pub use blocks::temporal::TemporalHint;
pub use fallback::{fallback_package_vector, fallback_query_vector};
pub use query::{PriceMention, QuerySignals};
pub use vector::{DIMENSION, FeatureVector};

use anyhow::Result;
use catalog::TicketPackage;
use chrono::NaiveDate;
use tracing::debug;

use blocks::{hospitality, location, price, sport, temporal, text, venue};

/// Pluggable embedding source.
///
/// ## Design Note
/// `Send + Sync` so one embedder can serve concurrent rank requests.
/// Implementations may fail (a remote model service, a missing weights
/// file); callers recover locally with the fallback encoding and never
/// propagate the error.
pub trait Embedder: Send + Sync {
    /// Stable identifier for logging and cache invalidation.
    fn id(&self) -> &str;

    /// Output dimension; every returned vector has exactly this length.
    fn dimension(&self) -> usize {
        DIMENSION
    }

    /// Encode a catalog package.
    fn encode_package(&self, package: &TicketPackage) -> Result<FeatureVector>;

    /// Encode a free-text query into the same vector space.
    fn encode_query(&self, query: &str) -> Result<FeatureVector>;
}

/// The deterministic rule-based embedder.
///
/// Takes an explicit reference date instead of reading the wall clock so
/// the date block (days-until-event, window flags) is a pure function of
/// its inputs and ranking stays reproducible.
#[derive(Debug, Clone)]
pub struct RuleBasedEmbedder {
    reference_date: NaiveDate,
}

impl RuleBasedEmbedder {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self { reference_date }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }
}

impl Embedder for RuleBasedEmbedder {
    fn id(&self) -> &str {
        "rule-based-v1"
    }

    fn encode_package(&self, package: &TicketPackage) -> Result<FeatureVector> {
        let blocks = vec![
            location::encode(&package.location),
            sport::encode(&package.sport),
            price::encode(package.price),
            hospitality::encode(package.hospitality_scalar(), &package.hospitality_type),
            venue::encode(&package.venue),
            temporal::encode_event(package.event_date, self.reference_date),
            temporal::encode_availability(package.available_tickets),
            text::encode_keywords(&package.description),
            text::encode_seating(&package.seating_category),
        ];
        Ok(FeatureVector::from_blocks(&blocks))
    }

    fn encode_query(&self, query_text: &str) -> Result<FeatureVector> {
        let signals = QuerySignals::extract(query_text);
        debug!("Query signals: {:?}", signals);

        let price_block = match signals.price {
            Some(mention) => price::encode(mention.representative),
            None => price::encode_neutral(),
        };

        let blocks = vec![
            location::encode(query_text),
            sport::encode(query_text),
            price_block,
            hospitality::encode(
                hospitality::level_scalar_from_text(query_text),
                query_text,
            ),
            venue::encode(query_text),
            temporal::encode_query_date(signals.temporal),
            temporal::encode_query_availability(signals.group_size),
            text::encode_keywords(query_text),
            text::encode_seating(query_text),
        ];
        Ok(FeatureVector::from_blocks(&blocks))
    }
}
