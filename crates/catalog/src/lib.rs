//! # Catalog Crate
//!
//! This crate owns the ticket-package domain model and the in-memory
//! catalog store the recommendation engine searches.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (TicketPackage, HospitalityLevel, Catalog)
//! - **preferences**: Structured user preferences with conversation merging
//! - **loader**: Load and validate the catalog from a JSON file
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! // Load the catalog once at startup
//! let catalog = Catalog::load_from_json(Path::new("data/catalog.json"))?;
//!
//! // Query data
//! let package = catalog.get(1).unwrap();
//! let basketball = catalog.by_sport("Basketball");
//!
//! println!("{} packages, {} basketball", catalog.len(), basketball.len());
//! ```
//!
//! The catalog is read-only after load and shared behind an `Arc`; every
//! downstream component (encoder, scorers, ranking engine) borrows it.

// Public modules
pub mod error;
pub mod types;
pub mod preferences;
pub mod loader;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use preferences::{BudgetRange, UserPreferences};
pub use types::{Catalog, HospitalityLevel, PackageId, TicketPackage};
