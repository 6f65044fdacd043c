//! Clock access
//!
//! Parsers stamp imported bookmarks with the current time and the
//! exporter prints a date label; both go through [`Clock`] so tests can
//! pin the values.

use chrono::{Local, TimeZone, Utc};

/// Source of timestamps and human-readable dates
pub trait Clock {
    /// Milliseconds since the Unix epoch
    fn timestamp_millis(&self) -> i64;

    /// Current local date, e.g. `2025/5/11`
    fn date_label(&self) -> String;
}

/// Wall clock in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn timestamp_millis(&self) -> i64 {
        Local::now().timestamp_millis()
    }

    fn date_label(&self) -> String {
        Local::now().format("%Y/%-m/%-d").to_string()
    }
}

/// Clock frozen at a fixed instant; dates are reported in UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    millis: i64,
}

impl FixedClock {
    pub fn new(millis: i64) -> Self {
        Self { millis }
    }
}

impl Clock for FixedClock {
    fn timestamp_millis(&self) -> i64 {
        self.millis
    }

    fn date_label(&self) -> String {
        match Utc.timestamp_millis_opt(self.millis).single() {
            Some(at) => at.format("%Y/%-m/%-d").to_string(),
            None => String::new(),
        }
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn timestamp_millis(&self) -> i64 {
        (**self).timestamp_millis()
    }

    fn date_label(&self) -> String {
        (**self).date_label()
    }
}
