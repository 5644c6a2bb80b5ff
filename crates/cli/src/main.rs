use std::io;

use anyhow::{Context, Result};

use stockbook_catalog::Catalog;
use stockbook_cli::{Config, menu, telemetry};
use stockbook_storage::{FileAuditSink, FileSnapshotSink, LocalClock};

fn main() -> Result<()> {
    telemetry::init();

    let config = Config::from_env();
    tracing::debug!(?config, "resolved file locations");

    let mut catalog = Catalog::new(
        FileSnapshotSink::new(&config.snapshot_path),
        FileAuditSink::new(&config.audit_log_path),
        LocalClock,
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::run(&mut stdin.lock(), &mut stdout.lock(), &mut catalog)
        .context("interactive session failed")
}
