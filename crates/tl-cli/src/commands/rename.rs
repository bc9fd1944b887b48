//! Rename command: set the timeline name.

use std::io::Write;

use anyhow::{Result, bail};

use crate::Config;
use crate::store;

pub fn run<W: Write>(writer: &mut W, config: &Config, name: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        bail!("timeline name cannot be empty");
    }

    let mut data = store::load(&config.timeline_path)?;
    data.name = name.to_string();
    store::save(&config.timeline_path, &data)?;

    writeln!(writer, "Renamed timeline to \"{name}\"")?;
    Ok(())
}
