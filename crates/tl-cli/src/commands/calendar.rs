//! Calendar command: per-year grid of stacked month bars.
//!
//! Each month renders as a fixed-width strip; entries are placed by the
//! layout engine's day fractions and stacked so overlapping entries get
//! their own line within the cell.

use std::io::Write;

use anyhow::Result;
use tl_core::{Clock, PlacedEntry, TimelineData, month_cell, year_range};

use crate::Config;
use crate::commands::util::paint_span;
use crate::store;

/// Character width of one month strip.
const CELL_COLUMNS: usize = 24;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One line per stacking row; an empty cell renders a single blank strip.
fn render_cell(cell: &[PlacedEntry<'_>]) -> Vec<String> {
    let row_count = cell.iter().map(|placed| placed.row + 1).max().unwrap_or(1);

    (0..row_count)
        .map(|row| {
            let mut strip = vec!['·'; CELL_COLUMNS];
            let mut names: Vec<&str> = Vec::new();
            for placed in cell.iter().filter(|placed| placed.row == row) {
                paint_span(
                    &mut strip,
                    placed.position.left_pct,
                    placed.position.width_pct,
                    '█',
                );
                names.push(&placed.entry.name);
            }

            let strip: String = strip.into_iter().collect();
            if names.is_empty() {
                format!("│{strip}│")
            } else {
                format!("│{strip}│ {}", names.join(", "))
            }
        })
        .collect()
}

fn render<C: Clock>(data: &TimelineData, clock: &C) -> String {
    use std::fmt::Write as _;

    let mut output = String::new();
    writeln!(output, "{}", data.name).unwrap();

    for year in year_range(&data.entries, clock) {
        writeln!(output, "\n{year}").unwrap();
        for (number, name) in (1u32..).zip(MONTHS) {
            let cell = month_cell(&data.entries, year, number, clock);
            for (line_index, line) in render_cell(&cell).iter().enumerate() {
                if line_index == 0 {
                    writeln!(output, "  {name}  {line}").unwrap();
                } else {
                    writeln!(output, "       {line}").unwrap();
                }
            }
        }
    }

    output
}

pub fn run<W: Write, C: Clock>(writer: &mut W, config: &Config, clock: &C) -> Result<()> {
    let data = store::load(&config.timeline_path)?;
    write!(writer, "{}", render(&data, clock))?;
    Ok(())
}
