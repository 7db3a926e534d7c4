//! Load the package catalog from a JSON file.
//!
//! The catalog is a JSON array of package records, read once at startup.
//! Validation is strict: a single malformed record fails the whole load,
//! because everything downstream assumes the catalog is well-formed.

use crate::error::{CatalogError, Result};
use crate::types::{Catalog, TicketPackage};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Load and validate a catalog from a JSON file.
    ///
    /// # Arguments
    /// * `path` - Path to a JSON array of ticket packages
    ///
    /// # Returns
    /// A fully indexed catalog, or the first error encountered.
    pub fn load_from_json(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CatalogError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let raw = fs::read_to_string(path)?;
        let packages: Vec<TicketPackage> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::ParseError {
                file: path.display().to_string(),
                source,
            })?;

        let catalog = Catalog::from_packages(packages)?;
        info!(
            "Loaded {} packages from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Build a validated catalog from already-parsed packages.
    ///
    /// Used by the loader and by tests that construct catalogs in code.
    pub fn from_packages(packages: Vec<TicketPackage>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut catalog = Catalog::new();

        for package in packages {
            validate_package(&package)?;
            if !seen.insert(package.id) {
                return Err(CatalogError::DuplicateId(package.id));
            }
            catalog.insert_package(package);
        }

        Ok(catalog)
    }
}

/// Field-level validation for a single package.
fn validate_package(package: &TicketPackage) -> Result<()> {
    if !package.price.is_finite() || package.price < 0.0 {
        return Err(CatalogError::InvalidValue {
            id: package.id,
            field: "price".to_string(),
            value: package.price.to_string(),
        });
    }
    if package.location.trim().is_empty() {
        return Err(CatalogError::InvalidValue {
            id: package.id,
            field: "location".to_string(),
            value: "<empty>".to_string(),
        });
    }
    if package.sport.trim().is_empty() {
        return Err(CatalogError::InvalidValue {
            id: package.id,
            field: "sport".to_string(),
            value: "<empty>".to_string(),
        });
    }
    Ok(())
}
