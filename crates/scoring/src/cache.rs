//! Precomputed catalog vectors.
//!
//! One vector per catalog package, computed once at catalog-load time and
//! immutable afterwards. The cache is shared behind an `Arc` and read by
//! any number of concurrent rank requests without locking; a catalog
//! change means building a fresh cache, not mutating this one.

use catalog::{Catalog, PackageId};
use encoder::{Embedder, FeatureVector, fallback_package_vector};
use rayon::prelude::*;
use tracing::{info, warn};

/// The catalog's packages encoded into vector space, in catalog order.
#[derive(Debug)]
pub struct VectorCache {
    ids: Vec<PackageId>,
    vectors: Vec<FeatureVector>,
    dimension: usize,
    embedder_id: String,
}

impl VectorCache {
    /// Encode every package in the catalog, in parallel.
    ///
    /// A package that fails to encode gets the fallback encoding instead;
    /// encoding failure is recovered here and never propagated.
    pub fn build(catalog: &Catalog, embedder: &dyn Embedder) -> Self {
        let vectors: Vec<FeatureVector> = catalog
            .packages()
            .par_iter()
            .map(|package| match embedder.encode_package(package) {
                Ok(vector) => vector,
                Err(error) => {
                    warn!(
                        "Falling back to reduced encoding for package {}: {}",
                        package.id, error
                    );
                    fallback_package_vector(package)
                }
            })
            .collect();

        let ids: Vec<PackageId> = catalog.packages().iter().map(|p| p.id).collect();
        info!(
            "Built vector cache: {} packages, dimension {}",
            ids.len(),
            embedder.dimension()
        );

        Self {
            ids,
            vectors,
            dimension: embedder.dimension(),
            embedder_id: embedder.id().to_string(),
        }
    }

    /// Package ids in catalog (tie-break) order, parallel to `vectors`.
    pub fn ids(&self) -> &[PackageId] {
        &self.ids
    }

    pub fn vectors(&self) -> &[FeatureVector] {
        &self.vectors
    }

    /// The id and vector at a cache row.
    pub fn row(&self, index: usize) -> Option<(PackageId, &FeatureVector)> {
        Some((*self.ids.get(index)?, self.vectors.get(index)?))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn embedder_id(&self) -> &str {
        &self.embedder_id
    }
}
