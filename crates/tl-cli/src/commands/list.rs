//! List command: tabular view of entries sorted by start month.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use tl_core::{Clock, Label, TimelineData, entry_duration_months, format_duration};

use crate::Config;
use crate::commands::util::format_period;
use crate::store;

/// One table/JSON row.
#[derive(Debug, Serialize)]
struct ListRow<'a> {
    id: &'a str,
    name: &'a str,
    period: String,
    months: u32,
    duration: String,
    labels: Vec<&'a str>,
    note: &'a str,
}

fn rows<'a, C: Clock>(data: &'a TimelineData, clock: &C) -> Vec<ListRow<'a>> {
    let mut entries: Vec<_> = data.entries.iter().collect();
    entries.sort_by_key(|entry| entry.start_date);

    entries
        .into_iter()
        .map(|entry| {
            let months = entry_duration_months(entry, clock);
            ListRow {
                id: entry.id.as_str(),
                name: &entry.name,
                period: format_period(entry.start_date, entry.end_date),
                months,
                duration: format_duration(months),
                labels: entry.labels.iter().map(Label::as_str).collect(),
                note: &entry.note,
            }
        })
        .collect()
}

fn format_table(data: &TimelineData, rows: &[ListRow<'_>]) -> String {
    use std::fmt::Write as _;

    let mut output = String::new();
    writeln!(output, "{}", data.name).unwrap();

    let name_width = rows
        .iter()
        .map(|row| row.name.chars().count())
        .chain(["NAME".len()])
        .max()
        .unwrap_or(0);
    let period_width = rows
        .iter()
        .map(|row| row.period.chars().count())
        .chain(["PERIOD".len()])
        .max()
        .unwrap_or(0);

    writeln!(
        output,
        "{:<8}  {:<name_width$}  {:<period_width$}  {:>8}  LABELS / NOTE",
        "ID", "NAME", "PERIOD", "DURATION"
    )
    .unwrap();

    for row in rows {
        let labels = if row.labels.is_empty() {
            "—".to_string()
        } else {
            row.labels.join(", ")
        };
        let note = if row.note.is_empty() { "—" } else { row.note };
        let id_short = &row.id[..8.min(row.id.len())];
        writeln!(
            output,
            "{id_short:<8}  {:<name_width$}  {:<period_width$}  {:>8}  {labels} / {note}",
            row.name, row.period, row.duration
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
        writeln!(writer, "No entries in \"{}\".", data.name)?;
        writeln!(writer, "Hint: run 'tl add' to create one.")?;
        return Ok(());
    }

    write!(writer, "{}", format_table(&data, &rows))?;
    Ok(())
}
