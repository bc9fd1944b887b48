//! Line command: continuous month axis with one bar per entry.
//!
//! Horizontal mode draws each entry once across the whole axis,
//! unclipped. Vertical mode wraps the axis into rows of a configurable
//! month count and re-clips every entry to the rows it touches.

use std::io::Write;

use anyhow::Result;
use chrono::{Datelike, Months};
use tl_core::{
    Clock, LinearRange, TimelineData, TimelineEntry, entry_duration_months, format_duration, month,
};

use crate::Config;
use crate::commands::util::{paint_span, percent_to_columns};
use crate::store;

/// Character width of the horizontal axis.
const AXIS_COLUMNS: usize = 72;

/// Character width of one month bucket in the wrapped layout.
const BUCKET_COLUMNS: usize = 12;

fn sorted_entries(data: &TimelineData) -> Vec<&TimelineEntry> {
    let mut entries: Vec<_> = data.entries.iter().collect();
    entries.sort_by_key(|entry| entry.start_date);
    entries
}

fn entry_caption<C: Clock>(entry: &TimelineEntry, clock: &C) -> String {
    format!(
        "{} ({})",
        entry.name,
        format_duration(entry_duration_months(entry, clock))
    )
}

fn render_horizontal<C: Clock>(data: &TimelineData, clock: &C) -> String {
    use std::fmt::Write as _;

    let range = LinearRange::from_entries(&data.entries, clock);

    let mut ticks = vec!['─'; AXIS_COLUMNS];
    let mut years = vec![' '; AXIS_COLUMNS];
    for marker in range.markers() {
        let (column, _) = percent_to_columns(marker.position_pct, 0.0, AXIS_COLUMNS);
        ticks[column] = if marker.year_start { '┼' } else { '┴' };
        if marker.year_start {
            for (offset, digit) in marker.month.format("%Y").to_string().chars().enumerate() {
                if column + offset < AXIS_COLUMNS {
                    years[column + offset] = digit;
                }
            }
        }
    }

    let mut output = String::new();
    writeln!(output, "{}", data.name).unwrap();
    writeln!(output, "  {}", ticks.iter().collect::<String>()).unwrap();
    let years: String = years.iter().collect();
    writeln!(output, "  {}", years.trim_end()).unwrap();

    for entry in sorted_entries(data) {
        let position = range.position(entry, clock);
        let mut strip = vec![' '; AXIS_COLUMNS];
        paint_span(&mut strip, position.left_pct, position.width_pct, '█');
        writeln!(
            output,
            "  {}  {}",
            strip.iter().collect::<String>(),
            entry_caption(entry, clock)
        )
        .unwrap();
    }

    output
}

#[allow(clippy::cast_possible_truncation)]
fn render_vertical<C: Clock>(data: &TimelineData, months_per_row: u32, clock: &C) -> String {
    use std::fmt::Write as _;

    let range = LinearRange::from_entries(&data.entries, clock);
    let entries = sorted_entries(data);

    let mut output = String::new();
    writeln!(output, "{}", data.name).unwrap();

    for row in range.rows(months_per_row) {
        let columns = row.months as usize * BUCKET_COLUMNS;

        let mut header = String::new();
        for offset in 0..row.months {
            let bucket = range.start() + Months::new(row.start_offset + offset);
            let label = if bucket.month() == 1 || offset == 0 {
                month::label(bucket)
            } else {
                bucket.format("%b").to_string()
            };
            write!(header, "{:<width$}", label, width = BUCKET_COLUMNS).unwrap();
        }

        let mut axis = vec!['─'; columns];
        for offset in 0..row.months {
            axis[offset as usize * BUCKET_COLUMNS] = '┬';
        }

        writeln!(output, "\n  {}", header.trim_end()).unwrap();
        writeln!(output, "  {}", axis.iter().collect::<String>()).unwrap();

        for entry in &entries {
            let Some(position) = range.clip_to_row(entry, row, clock) else {
                continue;
            };
            let mut strip = vec![' '; columns];
            paint_span(&mut strip, position.left_pct, position.width_pct, '█');
            writeln!(
                output,
                "  {}  {}",
                strip.iter().collect::<String>(),
                entry_caption(entry, clock)
            )
            .unwrap();
        }
    }

    output
}

pub fn run<W: Write, C: Clock>(
    writer: &mut W,
    config: &Config,
    vertical: bool,
    clock: &C,
) -> Result<()> {
    let data = store::load(&config.timeline_path)?;
    let output = if vertical {
        render_vertical(&data, config.months_per_row, clock)
    } else {
        render_horizontal(&data, clock)
    };
    write!(writer, "{output}")?;
    Ok(())
}
