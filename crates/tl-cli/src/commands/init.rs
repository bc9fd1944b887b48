//! Init command: create a fresh timeline file.

use std::io::Write;

use anyhow::{Result, bail};
use tl_core::TimelineData;

use crate::Config;
use crate::store;

pub fn run<W: Write>(writer: &mut W, config: &Config, name: Option<&str>) -> Result<()> {
    if config.timeline_path.exists() {
        bail!(
            "timeline already exists: {}",
            config.timeline_path.display()
        );
    }

    let data = name.map_or_else(TimelineData::default, TimelineData::new);
    store::save(&config.timeline_path, &data)?;

    writeln!(
        writer,
        "Created timeline \"{}\" at {}",
        data.name,
        config.timeline_path.display()
    )?;
    Ok(())
}
