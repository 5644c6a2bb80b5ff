//! Wall-clock timestamp source.

use chrono::Local;

use stockbook_catalog::Clock;

/// Formats the current local time as `YYYY-MM-DD HH:MM:SS`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn timestamp(&self) -> String {
        Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
