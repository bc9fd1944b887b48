//! Shared helpers for CLI commands.

use anyhow::{Result, bail};
use chrono::NaiveDate;
use tl_core::{TimelineData, TimelineEntry, month};

/// Resolves an entry by exact id or unique id prefix.
pub fn resolve_entry<'a>(data: &'a TimelineData, id: &str) -> Result<&'a TimelineEntry> {
    if let Some(entry) = data.entries.iter().find(|e| e.id.as_str() == id) {
        return Ok(entry);
    }

    let mut matches = data
        .entries
        .iter()
        .filter(|e| e.id.as_str().starts_with(id));
    match (matches.next(), matches.next()) {
        (Some(entry), None) => Ok(entry),
        (Some(_), Some(_)) => bail!("entry id is ambiguous: {id}"),
        (None, _) => bail!("entry not found: {id}"),
    }
}

/// Short id shown in tables and confirmations.
#[must_use]
pub fn short_id(entry: &TimelineEntry) -> &str {
    let id = entry.id.as_str();
    &id[..8.min(id.len())]
}

/// Human period string: `Jan 2020 - Mar 2023`, `Jan 2020 - Present`, or
/// a single month when start and end coincide.
#[must_use]
pub fn format_period(start: NaiveDate, end: Option<NaiveDate>) -> String {
    let start_label = month::label(start);
    match end {
        None => format!("{start_label} - Present"),
        Some(end) => {
            let end_label = month::label(end);
            if start_label == end_label {
                start_label
            } else {
                format!("{start_label} - {end_label}")
            }
        }
    }
}

/// Maps a percent position onto character columns of a fixed-width
/// strip. Returns `(start column, column count)`; anything visible gets
/// at least one column.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
#[must_use]
pub fn percent_to_columns(left_pct: f64, width_pct: f64, columns: usize) -> (usize, usize) {
    let total = columns as f64;
    let start = ((left_pct / 100.0) * total).round() as usize;
    let start = start.min(columns.saturating_sub(1));
    let width = ((width_pct / 100.0) * total).round() as usize;
    let width = width.clamp(1, columns - start);
    (start, width)
}

/// Paints a span onto a character strip.
pub fn paint_span(strip: &mut [char], left_pct: f64, width_pct: f64, fill: char) {
    let (start, width) = percent_to_columns(left_pct, width_pct, strip.len());
    for cell in &mut strip[start..start + width] {
        *cell = fill;
    }
}
