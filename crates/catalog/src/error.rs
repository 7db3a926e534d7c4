//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading and validating the catalog.
///
/// Malformed input is the one hard failure mode in the system: loading
/// fails fast here with a clearly identified validation error instead of
/// letting bad records reach the scoring path.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open catalog file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The catalog JSON couldn't be parsed
    #[error("Parse error in {file}: {source}")]
    ParseError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// A package field had an invalid value
    #[error("Invalid value for {field} in package {id}: {value}")]
    InvalidValue {
        id: u32,
        field: String,
        value: String,
    },

    /// Two packages share an id
    #[error("Duplicate package id: {0}")]
    DuplicateId(u32),

    /// Catalog-level validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, CatalogError>;
