//! Engine crate for the ticket-recs recommendation system.
//!
//! This crate contains the ranking engine that coordinates the encoder,
//! the scoring strategies, and the optional accelerated index.

pub mod ranker;
pub mod reasons;
pub mod status;

pub use ranker::{DEFAULT_LIMIT, Recommendation, RecommendationEngine};
pub use status::{EngineStatus, ScoringPath};
