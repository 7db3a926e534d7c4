//! Accelerated nearest-neighbor backend for catalog vectors.
//!
//! This crate wraps an HNSW index behind a small contract:
//! `build(vectors) -> index` and `search(query, k) -> (labels, distances)`.
//! Initialization is best-effort and asynchronous relative to catalog
//! load: `IndexHandle::spawn_build` returns immediately and publishes
//! readiness through a watch channel, so the ranking engine can serve
//! requests through the linear-scan fallback while the graph is still
//! building, and bounded-wait (never block indefinitely) once it wants
//! the fast path.
//!
//! ## Implementation Notes
//!
//! HNSW parameters:
//! - M (max_nb_connection): 16
//! - ef_construction: 200
//! - max_layer: 16
//!
//! `DistCosine` distances are `1 - cosine`, so lower distance means
//! higher similarity; callers map back with `1.0 - distance`.

use encoder::FeatureVector;
use hnsw_rs::hnsw::Hnsw;
use hnsw_rs::prelude::{DistCosine, Neighbour};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{error, info};

/// Default HNSW parameters.
const MAX_NB_CONNECTION: usize = 16;
const EF_CONSTRUCTION: usize = 200;
const MAX_LAYER: usize = 16;

/// Errors from building or querying the accelerated index.
///
/// Callers treat every variant the same way: log it and fall back to the
/// linear scan. Nothing here is ever surfaced to the end caller.
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Cannot build an index from an empty vector set")]
    EmptyInput,

    #[error("Query dimension mismatch: index has {expected}, query has {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Index build failed: {0}")]
    BuildFailed(String),
}

/// An in-memory HNSW index over the catalog vectors.
///
/// Labels are row positions in the vector cache the index was built
/// from, so search results map straight back to catalog packages.
pub struct AnnIndex {
    hnsw: Hnsw<'static, f32, DistCosine>,
    count: usize,
    dimension: usize,
}

impl AnnIndex {
    /// Build an index over a set of vectors. Row position becomes the
    /// search label.
    pub fn build(vectors: &[FeatureVector]) -> Result<Self, IndexError> {
        if vectors.is_empty() {
            return Err(IndexError::EmptyInput);
        }
        let count = vectors.len();
        let dimension = vectors[0].len();

        info!("Building HNSW index over {} vectors", count);

        let hnsw: Hnsw<f32, DistCosine> = Hnsw::new(
            MAX_NB_CONNECTION,
            count,
            MAX_LAYER,
            EF_CONSTRUCTION,
            DistCosine,
        );

        // The graph clones vector data internally; keep owned copies
        // alive through the insertion call.
        let owned: Vec<Vec<f32>> = vectors.iter().map(|v| v.as_slice().to_vec()).collect();
        let with_ids: Vec<(&Vec<f32>, usize)> = owned.iter().zip(0..count).collect();
        hnsw.parallel_insert(&with_ids);

        Ok(Self {
            hnsw,
            count,
            dimension,
        })
    }

    /// Search for the `k` nearest neighbors.
    ///
    /// # Returns
    /// (label, distance) pairs sorted by ascending distance, where
    /// distance is `1 - cosine`.
    pub fn search(
        &self,
        query: &[f32],
        k: usize,
        ef: usize,
    ) -> Result<Vec<(usize, f32)>, IndexError> {
        if query.len() != self.dimension {
            return Err(IndexError::DimensionMismatch {
                expected: self.dimension,
                actual: query.len(),
            });
        }
        if k == 0 {
            return Ok(Vec::new());
        }

        let neighbours: Vec<Neighbour> = self.hnsw.search(query, k, ef);
        Ok(neighbours
            .into_iter()
            .map(|n| (n.d_id, n.distance))
            .collect())
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }
}

/// Lifecycle of the background index build.
#[derive(Clone)]
enum IndexState {
    Building,
    Ready(Arc<AnnIndex>),
    /// Build failed; readiness stays false forever and every request
    /// takes the fallback path.
    Failed,
}

/// Shared handle onto an index that is being (or has been) built.
///
/// Cheap to clone; any number of concurrent rank requests may observe
/// "not yet ready" and take the fallback path without coordination.
#[derive(Clone)]
pub struct IndexHandle {
    state: watch::Receiver<IndexState>,
}

impl IndexHandle {
    /// Kick off an index build in the background and return immediately.
    ///
    /// Must be called from within a tokio runtime. The build runs on the
    /// blocking pool; the handle flips to ready (or failed) when it
    /// finishes.
    pub fn spawn_build(vectors: Vec<FeatureVector>) -> Self {
        let (sender, receiver) = watch::channel(IndexState::Building);

        tokio::spawn(async move {
            let outcome = tokio::task::spawn_blocking(move || AnnIndex::build(&vectors)).await;

            let state = match outcome {
                Ok(Ok(index)) => {
                    info!("ANN index ready: {} vectors", index.len());
                    IndexState::Ready(Arc::new(index))
                }
                Ok(Err(build_error)) => {
                    error!("ANN index build failed: {}", build_error);
                    IndexState::Failed
                }
                Err(join_error) => {
                    error!("ANN index build task panicked: {}", join_error);
                    IndexState::Failed
                }
            };
            // Receivers may all be gone if the engine was dropped; that
            // is not an error.
            let _ = sender.send(state);
        });

        Self { state: receiver }
    }

    /// A handle that will never become ready. Used when the backend is
    /// disabled outright.
    pub fn disabled() -> Self {
        let (_sender, receiver) = watch::channel(IndexState::Failed);
        Self { state: receiver }
    }

    /// Whether the index finished building successfully.
    pub fn is_ready(&self) -> bool {
        matches!(*self.state.borrow(), IndexState::Ready(_))
    }

    /// The index, if it is ready right now.
    pub fn try_index(&self) -> Option<Arc<AnnIndex>> {
        match &*self.state.borrow() {
            IndexState::Ready(index) => Some(index.clone()),
            _ => None,
        }
    }

    /// Wait up to `timeout` for the index to become ready.
    ///
    /// Returns `None` on timeout, on build failure, or when the build
    /// task disappeared — the caller falls back to the linear scan in
    /// every case. This is the only bounded wait in the system.
    pub async fn wait_ready(&self, timeout: Duration) -> Option<Arc<AnnIndex>> {
        let mut state = self.state.clone();
        let waited = tokio::time::timeout(timeout, async {
            loop {
                match &*state.borrow() {
                    IndexState::Ready(index) => return Some(index.clone()),
                    IndexState::Failed => return None,
                    IndexState::Building => {}
                }
                if state.changed().await.is_err() {
                    // Sender dropped without publishing a result.
                    return None;
                }
            }
        })
        .await;

        waited.unwrap_or(None)
    }
}
