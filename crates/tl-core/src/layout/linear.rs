//! Continuous-axis projection: month fractions across the full range.

use chrono::{Datelike, Months, NaiveDate};

use crate::clock::Clock;
use crate::entry::TimelineEntry;
use crate::month;

/// Horizontal placement on the line axis, in percent of the axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePosition {
    pub left_pct: f64,
    pub width_pct: f64,
}

/// One month tick on the axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthMarker {
    /// First day of the marker's month.
    pub month: NaiveDate,
    pub position_pct: f64,
    /// January markers carry the year label instead of a month name.
    pub year_start: bool,
}

/// One wrapped row of the vertical layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    /// Month offset of the row's first bucket within the range.
    pub start_offset: u32,
    /// Month buckets in this row; the final row may be short.
    pub months: u32,
}

/// The global month range spanned by a set of entries, divided into
/// month buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearRange {
    start: NaiveDate,
    total_months: u32,
}

impl LinearRange {
    /// Range covering every entry's start and effective end; January
    /// through December of the current year when there are no entries.
    pub fn from_entries<C: Clock>(entries: &[TimelineEntry], clock: &C) -> Self {
        let today = clock.today();

        let mut earliest: Option<NaiveDate> = None;
        let mut latest: Option<NaiveDate> = None;
        for entry in entries {
            for date in [entry.start_date, entry.effective_end(today)] {
                earliest = Some(earliest.map_or(date, |d| d.min(date)));
                latest = Some(latest.map_or(date, |d| d.max(date)));
            }
        }

        match (earliest, latest) {
            (Some(first), Some(last)) => Self::from_bounds(first, last),
            _ => Self {
                start: NaiveDate::from_ymd_opt(today.year(), 1, 1)
                    .expect("January 1st exists in every year"),
                total_months: 12,
            },
        }
    }

    fn from_bounds(first: NaiveDate, last: NaiveDate) -> Self {
        let start = month::first_day(first);
        let total = month::index(last) - month::index(start) + 1;
        Self {
            start,
            total_months: u32::try_from(total.max(1)).unwrap_or(u32::MAX),
        }
    }

    /// First day of the range's first month.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Number of month buckets on the axis.
    #[must_use]
    pub const fn total_months(&self) -> u32 {
        self.total_months
    }

    /// One tick per month bucket.
    #[must_use]
    pub fn markers(&self) -> Vec<MonthMarker> {
        (0..self.total_months)
            .map(|offset| {
                let marker_month = self.start + Months::new(offset);
                MonthMarker {
                    month: marker_month,
                    position_pct: f64::from(offset) / f64::from(self.total_months) * 100.0,
                    year_start: marker_month.month() == 1,
                }
            })
            .collect()
    }

    /// An entry's half-open `[start, end)` month-bucket offsets within
    /// this range.
    pub fn month_span<C: Clock>(&self, entry: &TimelineEntry, clock: &C) -> (i64, i64) {
        let base = month::index(self.start);
        let start = month::index(entry.start_date) - base;
        let end = month::index(entry.effective_end(clock.today())) - base + 1;
        (start, end)
    }

    /// Unclipped placement across the full axis; the entry is drawn once
    /// at its full width.
    #[allow(clippy::cast_precision_loss)]
    pub fn position<C: Clock>(&self, entry: &TimelineEntry, clock: &C) -> LinePosition {
        let (start, end) = self.month_span(entry, clock);
        let total = f64::from(self.total_months);
        LinePosition {
            left_pct: start as f64 / total * 100.0,
            width_pct: (end - start) as f64 / total * 100.0,
        }
    }

    /// Rows of `months_per_row` buckets for the wrapped layout.
    #[must_use]
    pub fn rows(&self, months_per_row: u32) -> Vec<RowRange> {
        let per_row = months_per_row.max(1);
        (0..self.total_months.div_ceil(per_row))
            .map(|row| {
                let start_offset = row * per_row;
                RowRange {
                    start_offset,
                    months: per_row.min(self.total_months - start_offset),
                }
            })
            .collect()
    }

    /// Re-clips an entry to one row's sub-range with the same fraction
    /// math applied to the row's months.
    ///
    /// Returns `None` when the entry misses the row entirely, including
    /// an entry whose span only touches the row boundary (a zero-width
    /// fragment is not drawn).
    #[allow(clippy::cast_precision_loss)]
    pub fn clip_to_row<C: Clock>(
        &self,
        entry: &TimelineEntry,
        row: RowRange,
        clock: &C,
    ) -> Option<LinePosition> {
        let (start, end) = self.month_span(entry, clock);
        let row_start = i64::from(row.start_offset);
        let row_end = row_start + i64::from(row.months);
        if end <= row_start || start >= row_end {
            return None;
        }

        let clipped_start = start.max(row_start) - row_start;
        let clipped_end = end.min(row_end) - row_start;
        let row_months = f64::from(row.months);
        Some(LinePosition {
            left_pct: clipped_start as f64 / row_months * 100.0,
            width_pct: (clipped_end - clipped_start) as f64 / row_months * 100.0,
        })
    }
}
