//! Add command: create a new entry with a fresh id.

use std::io::Write;

use anyhow::{Context, Result};
use tl_core::{Clock, EntryId, Label, TimelineEntry, entry_duration_months, format_duration, month};
use uuid::Uuid;

use crate::Config;
use crate::cli::AddArgs;
use crate::commands::util::{format_period, short_id};
use crate::store;

pub fn run<W: Write, C: Clock>(
    writer: &mut W,
    config: &Config,
    args: &AddArgs,
    clock: &C,
) -> Result<()> {
    let start = month::parse(&args.start).context("invalid --start")?;
    let end = args
        .end
        .as_deref()
        .map(month::parse)
        .transpose()
        .context("invalid --end")?;
    let labels = args
        .labels
        .iter()
        .map(Label::new)
        .collect::<Result<Vec<_>, _>>()
        .context("invalid --label")?;

    let id = EntryId::new(Uuid::new_v4().to_string()).context("generated id was empty")?;
    let entry = TimelineEntry::new(
        id,
        args.name.clone(),
        args.note.clone(),
        args.color.clone(),
        labels,
        start,
        end,
    )?;

    let mut data = store::load(&config.timeline_path)?;
    let duration = format_duration(entry_duration_months(&entry, clock));
    let summary = format!(
        "Added {}  {} ({}, {})",
        short_id(&entry),
        entry.name,
        format_period(entry.start_date, entry.end_date),
        duration
    );
    data.insert(entry);
    store::save(&config.timeline_path, &data)?;

    writeln!(writer, "{summary}")?;
    Ok(())
}
