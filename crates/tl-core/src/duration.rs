//! Duration calculation and formatting.

use chrono::{Datelike, NaiveDate};

use crate::clock::Clock;
use crate::entry::TimelineEntry;

/// Inclusive whole-month count between two dates.
///
/// Computed as `(end.year - start.year) * 12 + (end.month - start.month)
/// + 1`, minus one when the end's day-of-month is earlier than the
/// start's (the final month hasn't completed). The result is clamped to
/// a floor of 1: every range counts as at least one month, including a
/// reversed range (contract violation, tolerated rather than surfaced).
#[must_use]
pub fn months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    let mut months = (i64::from(end.year()) - i64::from(start.year())) * 12
        + i64::from(end.month())
        - i64::from(start.month())
        + 1;
    if end.day() < start.day() {
        months -= 1;
    }
    u32::try_from(months.max(1)).unwrap_or(u32::MAX)
}

/// Duration of one entry in whole months.
///
/// Ongoing entries end at the clock's current date, so their duration
/// grows as time passes.
pub fn entry_duration_months<C: Clock>(entry: &TimelineEntry, clock: &C) -> u32 {
    months_between(entry.start_date, entry.effective_end(clock.today()))
}

/// Formats a month count as `"{y}y{m}m"`, collapsing zero parts.
///
/// `0` renders as `"0m"`; callers normally never see it because
/// [`months_between`] floors at 1.
#[must_use]
pub fn format_duration(months: u32) -> String {
    let years = months / 12;
    let remainder = months % 12;

    if years == 0 {
        format!("{remainder}m")
    } else if remainder == 0 {
        format!("{years}y")
    } else {
        format!("{years}y{remainder}m")
    }
}
