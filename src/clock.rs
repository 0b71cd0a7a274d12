//! Source of the current date/time for every operation.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Represents an entity responsible for providing the current local time.
/// Operations sample it once so a computation stays internally consistent,
/// and tests pin it with [`FixedClock`].
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
