use chrono::{DateTime, Local};

/// Source of wall-clock time for id assignment and timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}
