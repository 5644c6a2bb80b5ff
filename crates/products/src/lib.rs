//! `stockbook-products` — catalog entry value and per-kind behavior.

pub mod product;

pub use product::{Product, ProductKind};
