//! File-backed sinks. Both open their file per call and hold no handle
//! between operations, so a failed write never wedges the session.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use stockbook_catalog::{AuditSink, SnapshotSink};

/// Snapshot destination that rewrites the whole file on every export.
#[derive(Debug)]
pub struct FileSnapshotSink {
    path: PathBuf,
}

impl FileSnapshotSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotSink for FileSnapshotSink {
    fn overwrite(&mut self, lines: &[String]) -> io::Result<()> {
        let mut file = File::create(&self.path)?;
        for line in lines {
            writeln!(file, "{line}")?;
        }
        Ok(())
    }
}

/// Audit destination that appends one line per event, creating the file
/// on first use.
#[derive(Debug)]
pub struct FileAuditSink {
    path: PathBuf,
}

impl FileAuditSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AuditSink for FileAuditSink {
    fn append(&mut self, line: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn overwrite_replaces_prior_snapshot_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.txt");
        let mut sink = FileSnapshotSink::new(&path);

        sink.overwrite(&[
            "Laptop | Electronics | 5 | ".to_string(),
            "Milk | Food | 8 | ".to_string(),
        ])
        .unwrap();
        sink.overwrite(&["Milk | Food | 3 | ".to_string()]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Milk | Food | 3 | \n");
    }

    #[test]
    fn overwrite_with_no_products_leaves_an_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.txt");
        let mut sink = FileSnapshotSink::new(&path);

        sink.overwrite(&["Laptop | Electronics | 5 | ".to_string()])
            .unwrap();
        sink.overwrite(&[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn append_accumulates_lines_across_calls_and_sink_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transaction_log.txt");

        let mut sink = FileAuditSink::new(&path);
        sink.append("2025-05-09 12:00:00 Sale - Widget | Quantity: 3")
            .unwrap();
        sink.append("2025-05-09 12:00:01 Discount - Widget | Discount: 20%")
            .unwrap();

        // A fresh sink over the same path keeps appending.
        let mut reopened = FileAuditSink::new(&path);
        reopened
            .append("2025-05-09 12:00:02 Restock - Widget | Quantity: 10")
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("2025-05-09 12:00:00 Sale"));
        assert!(lines[2].starts_with("2025-05-09 12:00:02 Restock"));
    }

    #[test]
    fn append_fails_when_the_parent_directory_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("transaction_log.txt");
        let mut sink = FileAuditSink::new(&path);
        assert!(sink.append("line").is_err());
    }
}
