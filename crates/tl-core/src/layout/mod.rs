//! Interval layout engine.
//!
//! Maps entry date ranges onto percentage coordinates (a calendar month
//! grid or a continuous month axis) and assigns stacking rows so
//! temporally overlapping entries never share a display lane.

mod calendar;
mod linear;

pub use calendar::{CellPosition, PlacedEntry, month_cell, position_in_month, year_range};
pub use linear::{LinePosition, LinearRange, MonthMarker, RowRange};

/// A half-open `[start, end)` span in a shared coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub start: f64,
    pub end: f64,
}

impl Span {
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    fn width(self) -> f64 {
        self.end - self.start
    }

    /// Touching endpoints do not overlap. This is deliberately stricter
    /// than the label aggregator's merge rule, which joins touching
    /// intervals; the two thresholds must stay distinct.
    fn overlaps(self, other: Self) -> bool {
        !(self.end <= other.start || self.start >= other.end)
    }
}

/// Assigns a stacking row to every span, aligned with the input order.
///
/// Spans are visited by `(start ascending, width descending)`; each
/// takes the lowest existing row with no overlapping occupant, opening a
/// new row when none is free. Greedy interval coloring: deterministic
/// for a given input, but not guaranteed to reach the minimum row count.
#[must_use]
pub fn stack_rows(spans: &[Span]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..spans.len()).collect();
    order.sort_by(|&a, &b| {
        spans[a]
            .start
            .total_cmp(&spans[b].start)
            .then_with(|| spans[b].width().total_cmp(&spans[a].width()))
    });

    let mut rows = vec![0; spans.len()];
    let mut occupied: Vec<Vec<Span>> = Vec::new();
    for index in order {
        let span = spans[index];
        let row = occupied
            .iter()
            .position(|placed| placed.iter().all(|other| !span.overlaps(*other)))
            .unwrap_or_else(|| {
                occupied.push(Vec::new());
                occupied.len() - 1
            });
        occupied[row].push(span);
        rows[index] = row;
    }

    rows
}
