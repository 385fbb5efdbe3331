//! Time source for record timestamps.
//! `createdAt` / `updatedAt` are stored at millisecond resolution, RFC 3339 with a `Z` suffix.
// region:    --- Imports
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde_json::Value;
use std::sync::Mutex;

// endregion: --- Imports

// region:    --- Clock
/// Current-time source injected into the registry
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to. Used by tests.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now = *now + by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

// endregion: --- Clock

// region:    --- Timestamp Conversion
/// Read the clock and truncate to whole milliseconds
pub fn record_time(clock: &dyn Clock) -> DateTime<Utc> {
    let now = clock.now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}

/// Read the clock and render the value stored in a record field
pub fn record_timestamp(clock: &dyn Clock) -> Value {
    Value::String(format_timestamp(record_time(clock)))
}

pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a stored timestamp field. `None` for anything that is not an RFC 3339 string.
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    let text = value.as_str()?;
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

// endregion: --- Timestamp Conversion
