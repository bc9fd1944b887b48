//! Month-level date helpers.
//!
//! All timeline math is month-granular: entries start on the 1st and end
//! on the last day of a month, and the linear layout buckets the axis by
//! month. These helpers keep that arithmetic in one place.

use chrono::{Datelike, Months, NaiveDate};

use crate::entry::ValidationError;

/// First day of the date's month.
#[must_use]
pub fn first_day(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 exists in every month")
}

/// Last day of the date's month.
#[must_use]
pub fn last_day(date: NaiveDate) -> NaiveDate {
    let next_month = first_day(date) + Months::new(1);
    next_month
        .pred_opt()
        .expect("a first-of-month has a previous day")
}

/// Number of days in the date's month.
#[must_use]
pub fn days_in(date: NaiveDate) -> u32 {
    last_day(date).day()
}

/// Absolute month index (`year * 12 + month`), for linear bucket math.
#[must_use]
pub fn index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

/// Parses a `YYYY-MM` form value into the first day of that month.
pub fn parse(value: &str) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::InvalidMonth {
        value: value.to_string(),
    };

    let (year, month) = value.split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)
}

/// Short display label, e.g. `Jan 2020`.
#[must_use]
pub fn label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}
