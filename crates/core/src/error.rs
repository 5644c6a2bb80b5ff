//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, recoverable business failures.
/// Sink I/O problems are handled at the catalog boundary and never
/// surface through this type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    /// An entry with this name already exists. The existing entry is
    /// preserved untouched.
    #[error("product '{0}' already exists")]
    DuplicateProduct(String),

    /// No entry under this name.
    #[error("product '{0}' not found")]
    ProductNotFound(String),

    /// A sale asked for more units than are on hand. Stock is left
    /// unchanged.
    #[error("insufficient stock for '{name}': requested {requested}, available {available}")]
    InsufficientStock {
        name: String,
        requested: i64,
        available: i64,
    },
}

impl CatalogError {
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateProduct(name.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::ProductNotFound(name.into())
    }
}
