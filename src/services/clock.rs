//! Source of "today" for due-date checks.

use chrono::{Local, NaiveDate};

/// Supplies the current local calendar date.
pub trait ClockTrait: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the system clock in the local timezone on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl ClockTrait for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl ClockTrait for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
