//! Edit command: replace an entry wholesale.
//!
//! Entries are immutable values, so an edit builds a full replacement
//! from the existing entry plus whichever fields were given, then swaps
//! it in keyed by id.

use std::io::Write;

use anyhow::{Context, Result};
use tl_core::{Label, TimelineEntry, month};

use crate::Config;
use crate::cli::EditArgs;
use crate::commands::util::{format_period, resolve_entry, short_id};
use crate::store;

pub fn run<W: Write>(writer: &mut W, config: &Config, args: &EditArgs) -> Result<()> {
    let mut data = store::load(&config.timeline_path)?;
    let current = resolve_entry(&data, &args.id)?.clone();

    let start = match &args.start {
        Some(value) => month::parse(value).context("invalid --start")?,
        None => current.start_date,
    };
    let end = if args.ongoing {
        None
    } else {
        match &args.end {
            Some(value) => Some(month::parse(value).context("invalid --end")?),
            None => current.end_date,
        }
    };
    let labels = match &args.labels {
        Some(labels) => labels
            .iter()
            .map(Label::new)
            .collect::<Result<Vec<_>, _>>()
            .context("invalid --label")?,
        None => current.labels.clone(),
    };

    let replacement = TimelineEntry::new(
        current.id.clone(),
        args.name.clone().unwrap_or_else(|| current.name.clone()),
        args.note.clone().unwrap_or_else(|| current.note.clone()),
        args.color.clone().unwrap_or_else(|| current.color.clone()),
        labels,
        start,
        end,
    )?;

    let summary = format!(
        "Updated {}  {} ({})",
        short_id(&replacement),
        replacement.name,
        format_period(replacement.start_date, replacement.end_date)
    );
    data.replace(replacement);
    store::save(&config.timeline_path, &data)?;

    writeln!(writer, "{summary}")?;
    Ok(())
}
