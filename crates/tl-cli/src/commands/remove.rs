//! Remove command: delete an entry by id.

use std::io::Write;

use anyhow::Result;
use tl_core::EntryId;

use crate::Config;
use crate::commands::util::{resolve_entry, short_id};
use crate::store;

pub fn run<W: Write>(writer: &mut W, config: &Config, id: &str) -> Result<()> {
    let mut data = store::load(&config.timeline_path)?;

    let entry = resolve_entry(&data, id)?;
    let summary = format!("Removed {}  {}", short_id(entry), entry.name);
    let full_id: EntryId = entry.id.clone();

    data.remove(&full_id);
    store::save(&config.timeline_path, &data)?;

    writeln!(writer, "{summary}")?;
    Ok(())
}
