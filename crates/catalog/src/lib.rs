//! `stockbook-catalog` — the owning product collection and its operations.
//!
//! The catalog coordinates three injectable collaborators: a snapshot sink
//! (full overwrite), an audit sink (append only), and a clock. Production
//! implementations live in `stockbook-storage`; in-memory ones in
//! [`sink::memory`].

pub mod audit;
pub mod catalog;
pub mod sink;

pub use audit::AuditEvent;
pub use catalog::{Catalog, RESTOCK_AMOUNT};
pub use sink::{AuditSink, Clock, SnapshotSink};
