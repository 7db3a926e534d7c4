//! Operational status reporting.
//!
//! The engine exposes a queryable snapshot of its scoring setup so
//! operational tooling can tell whether the accelerated backend is live
//! and which path served the most recent request. None of this is needed
//! for correctness; degraded mode is invisible to rank callers.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

/// Which scoring path served a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ScoringPath {
    /// No request served yet.
    None = 0,
    AnnIndex = 1,
    LinearScan = 2,
    AttributeMatch = 3,
}

impl fmt::Display for ScoringPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScoringPath::None => "none",
            ScoringPath::AnnIndex => "ann-index",
            ScoringPath::LinearScan => "linear-scan",
            ScoringPath::AttributeMatch => "attribute-match",
        };
        write!(f, "{}", name)
    }
}

/// Lock-free tracker for the last-served path.
///
/// Relaxed ordering is enough: this is a monitoring hint, not a
/// synchronization point.
#[derive(Debug, Default)]
pub struct PathTracker(AtomicU8);

impl PathTracker {
    pub fn new() -> Self {
        Self(AtomicU8::new(ScoringPath::None as u8))
    }

    pub fn record(&self, path: ScoringPath) {
        self.0.store(path as u8, Ordering::Relaxed);
    }

    pub fn last(&self) -> ScoringPath {
        match self.0.load(Ordering::Relaxed) {
            1 => ScoringPath::AnnIndex,
            2 => ScoringPath::LinearScan,
            3 => ScoringPath::AttributeMatch,
            _ => ScoringPath::None,
        }
    }
}

/// Snapshot of the engine's scoring setup.
#[derive(Debug, Clone)]
pub struct EngineStatus {
    /// Whether the accelerated index finished building successfully.
    pub ann_active: bool,
    pub catalog_size: usize,
    pub vector_dimension: usize,
    pub last_path: ScoringPath,
}
