//! Clock abstraction so time-dependent logic is deterministic under test.

use chrono::{DateTime, NaiveDate, Utc};

/// Source of the current time for default timestamps and day windowing.
///
/// All calendar math in the ledger is pinned to UTC so that the day a given
/// entry lands in does not depend on where the process happens to run.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn now_epoch_ms(&self) -> i64 {
        self.now().timestamp_millis()
    }

    /// Current UTC calendar date, time-of-day truncated.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a fixed instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
