//! `stockbook-cli` — interactive menu over the catalog.
//!
//! The menu runs against any `BufRead`/`Write` pair, so sessions are
//! scriptable in tests. All numeric range validation lives here; the
//! domain layer trusts its inputs.

pub mod config;
pub mod input;
pub mod menu;
pub mod telemetry;

pub use config::Config;
