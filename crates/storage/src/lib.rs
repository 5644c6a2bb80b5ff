//! `stockbook-storage` — file-backed sink implementations and the
//! wall-clock timestamp source.

pub mod clock;
pub mod file;

pub use clock::LocalClock;
pub use file::{FileAuditSink, FileSnapshotSink};
