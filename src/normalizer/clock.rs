use chrono::{DateTime, SecondsFormat, Utc};

/// Source of the `timestamp` stamped on every normalized record.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    fn timestamp(&self) -> String {
        format_timestamp(self.now())
    }
}

/// Formats like the browser's `Date.prototype.toISOString()`: `2024-01-01T00:00:00.000Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
