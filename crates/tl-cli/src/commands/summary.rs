//! Summary command: total non-overlapping duration per label.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use tl_core::{Clock, Label, TimelineData, format_duration, label_durations};

use crate::Config;
use crate::store;

/// One summary row.
#[derive(Debug, Serialize)]
struct SummaryRow {
    label: String,
    months: u32,
    duration: String,
}

/// Label totals sorted by duration descending, label name as tie-break.
fn rows<C: Clock>(data: &TimelineData, clock: &C) -> Vec<SummaryRow> {
    let mut totals: Vec<(Label, u32)> = label_durations(&data.entries, clock).into_iter().collect();
    totals.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    totals
        .into_iter()
        .map(|(label, months)| SummaryRow {
            label: label.into(),
            months,
            duration: format_duration(months),
        })
        .collect()
}

/// Generates a 10-character proportional bar.
/// Values <5% of max get a single block for visibility.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn proportion_bar(value: u32, max: u32) -> String {
    if max == 0 {
        return "░░░░░░░░░░".to_string();
    }

    let ratio = f64::from(value) / f64::from(max);
    let filled = if ratio < 0.05 && value > 0 {
        1
    } else {
        (ratio * 10.0).round().min(10.0) as usize
    };

    let empty = 10 - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

fn format_summary(rows: &[SummaryRow]) -> String {
    use std::fmt::Write as _;

    let mut output = String::new();
    writeln!(output, "LABEL SUMMARY").unwrap();
    writeln!(output, "─────────────").unwrap();

    let label_width = rows
        .iter()
        .map(|row| row.label.chars().count())
        .max()
        .unwrap_or(0);
    let max_months = rows.iter().map(|row| row.months).max().unwrap_or(0);

    for row in rows {
        writeln!(
            output,
            "{:<label_width$}  {:>7}  {}",
            row.label,
            row.duration,
            proportion_bar(row.months, max_months)
        )
        .unwrap();
    }

    output
}

pub fn run<W: Write, C: Clock>(writer: &mut W, config: &Config, json: bool, clock: &C) -> Result<()> {
    let data = store::load(&config.timeline_path)?;
    let rows = rows(&data, clock);

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&rows)?)?;
        return Ok(());
    }

    if rows.is_empty() {
        writeln!(writer, "No labeled entries.")?;
        return Ok(());
    }

    write!(writer, "{}", format_summary(&rows))?;
    Ok(())
}
