//! Injectable storage and clock collaborators.

use std::io;

/// Full-overwrite destination for catalog snapshots.
///
/// Each call replaces whatever the sink held before; snapshots never
/// accumulate.
pub trait SnapshotSink {
    fn overwrite(&mut self, lines: &[String]) -> io::Result<()>;
}

/// Append-only destination for audit lines.
pub trait AuditSink {
    fn append(&mut self, line: &str) -> io::Result<()>;
}

/// Opaque timestamp source.
///
/// Production implementations format local time as `YYYY-MM-DD HH:MM:SS`;
/// tests pin a fixed instant.
pub trait Clock {
    fn timestamp(&self) -> String;
}

/// In-memory collaborators. Handles are cheap clones over shared state so
/// a test can keep one and inspect it after the catalog takes ownership of
/// the other.
pub mod memory {
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    use super::{AuditSink, Clock, SnapshotSink};

    /// Retains only the most recent overwrite.
    #[derive(Debug, Clone, Default)]
    pub struct MemorySnapshotSink {
        lines: Rc<RefCell<Vec<String>>>,
    }

    impl MemorySnapshotSink {
        pub fn new() -> Self {
            Self::default()
        }

        /// Contents as of the last `overwrite` call.
        pub fn lines(&self) -> Vec<String> {
            self.lines.borrow().clone()
        }
    }

    impl SnapshotSink for MemorySnapshotSink {
        fn overwrite(&mut self, lines: &[String]) -> io::Result<()> {
            *self.lines.borrow_mut() = lines.to_vec();
            Ok(())
        }
    }

    /// Accumulates every appended line for the life of the sink.
    #[derive(Debug, Clone, Default)]
    pub struct MemoryAuditSink {
        lines: Rc<RefCell<Vec<String>>>,
    }

    impl MemoryAuditSink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn lines(&self) -> Vec<String> {
            self.lines.borrow().clone()
        }

        pub fn len(&self) -> usize {
            self.lines.borrow().len()
        }

        pub fn is_empty(&self) -> bool {
            self.lines.borrow().is_empty()
        }
    }

    impl AuditSink for MemoryAuditSink {
        fn append(&mut self, line: &str) -> io::Result<()> {
            self.lines.borrow_mut().push(line.to_string());
            Ok(())
        }
    }

    /// Clock pinned to one formatted instant.
    #[derive(Debug, Clone)]
    pub struct FixedClock(pub &'static str);

    impl Clock for FixedClock {
        fn timestamp(&self) -> String {
            self.0.to_string()
        }
    }
}
