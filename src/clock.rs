//! Injectable wall-clock abstraction
//!
//! Freshness decisions compare `now` against stored timestamps. Routing the
//! clock through a trait lets tests simulate time passage deterministically
//! instead of sleeping.

use chrono::{DateTime, Utc};

/// Source of the current time for freshness comparisons.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
