//! Calendar-grid projection: day fractions within a single month cell.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};

use crate::clock::Clock;
use crate::entry::TimelineEntry;
use crate::month;

use super::{Span, stack_rows};

/// Horizontal placement within one month cell, in percent of the cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPosition {
    pub left_pct: f64,
    pub width_pct: f64,
}

/// An entry positioned and stacked within one month cell.
#[derive(Debug, Clone, Copy)]
pub struct PlacedEntry<'a> {
    pub entry: &'a TimelineEntry,
    pub position: CellPosition,
    pub row: usize,
}

/// Years touched by any entry's start or effective end; the current year
/// alone when there are no entries.
pub fn year_range<C: Clock>(entries: &[TimelineEntry], clock: &C) -> RangeInclusive<i32> {
    let today = clock.today();

    let mut min_year: Option<i32> = None;
    let mut max_year: Option<i32> = None;
    for entry in entries {
        for year in [entry.start_date.year(), entry.effective_end(today).year()] {
            min_year = Some(min_year.map_or(year, |y| y.min(year)));
            max_year = Some(max_year.map_or(year, |y| y.max(year)));
        }
    }

    match (min_year, max_year) {
        (Some(min), Some(max)) => min..=max,
        _ => today.year()..=today.year(),
    }
}

/// Day-fraction placement of an entry within the given month's cell.
///
/// `month` is 1-based. Returns `None` when the entry's range does not
/// intersect the month (or the year/month pair is not a real month).
/// Multi-month entries are clipped independently per cell: an entry
/// spanning December through February fills the whole January cell.
pub fn position_in_month<C: Clock>(
    entry: &TimelineEntry,
    year: i32,
    month: u32,
    clock: &C,
) -> Option<CellPosition> {
    let month_start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let month_end = month::last_day(month_start);

    let entry_start = entry.start_date;
    let entry_end = entry.effective_end(clock.today());
    if entry_end < month_start || entry_start > month_end {
        return None;
    }

    let total_days = month::days_in(month_start);
    let start_day = if entry_start <= month_start {
        1
    } else {
        entry_start.day()
    };
    let end_day = if entry_end >= month_end {
        total_days
    } else {
        entry_end.day()
    };
    // Reachable only with a reversed range inside one month; render nothing.
    if end_day < start_day {
        return None;
    }

    Some(CellPosition {
        left_pct: f64::from(start_day - 1) / f64::from(total_days) * 100.0,
        width_pct: f64::from(end_day - start_day + 1) / f64::from(total_days) * 100.0,
    })
}

/// Entries intersecting the given month, positioned and stacked.
pub fn month_cell<'a, C: Clock>(
    entries: &'a [TimelineEntry],
    year: i32,
    month: u32,
    clock: &C,
) -> Vec<PlacedEntry<'a>> {
    let positioned: Vec<(&TimelineEntry, CellPosition)> = entries
        .iter()
        .filter_map(|entry| {
            position_in_month(entry, year, month, clock).map(|position| (entry, position))
        })
        .collect();

    let spans: Vec<Span> = positioned
        .iter()
        .map(|(_, position)| Span::new(position.left_pct, position.left_pct + position.width_pct))
        .collect();
    let rows = stack_rows(&spans);

    positioned
        .into_iter()
        .zip(rows)
        .map(|((entry, position), row)| PlacedEntry {
            entry,
            position,
            row,
        })
        .collect()
}
