//! `stockbook-core` — shared domain foundation.
//!
//! This crate contains **pure domain** primitives (no storage concerns).

pub mod error;

pub use error::{CatalogError, CatalogResult};
