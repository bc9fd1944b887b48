//! Clock capability for resolving ongoing entries.

use chrono::{Local, NaiveDate};

/// Source of "today" for ongoing-entry calculations.
///
/// Every derivation that must resolve an ongoing entry takes a clock, so
/// the reference point is explicit rather than ambient: production
/// wiring passes [`SystemClock`], deterministic callers pin a date with
/// [`FixedClock`]. Nothing is cached; an ongoing entry's duration grows
/// as the clock advances.
pub trait Clock {
    /// The current calendar date.
    fn today(&self) -> NaiveDate;
}

/// Reads the local calendar date fresh on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to a fixed date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
