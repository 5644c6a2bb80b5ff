//! Environment-derived runtime settings.

use std::env;
use std::path::PathBuf;

/// File locations for the snapshot and the audit log.
#[derive(Debug, Clone)]
pub struct Config {
    pub snapshot_path: PathBuf,
    pub audit_log_path: PathBuf,
}

impl Config {
    /// Resolve paths from `STOCKBOOK_SNAPSHOT` and `STOCKBOOK_AUDIT_LOG`,
    /// falling back to files in the working directory.
    pub fn from_env() -> Self {
        Self {
            snapshot_path: env::var_os("STOCKBOOK_SNAPSHOT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("inventory.txt")),
            audit_log_path: env::var_os("STOCKBOOK_AUDIT_LOG")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("transaction_log.txt")),
        }
    }
}
