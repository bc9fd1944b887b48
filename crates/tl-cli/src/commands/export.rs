//! Export command: print the timeline state blob.

use std::io::Write;

use anyhow::{Context, Result};

use crate::Config;
use crate::store;

pub fn run<W: Write>(writer: &mut W, config: &Config) -> Result<()> {
    let data = store::load(&config.timeline_path)?;
    let blob = tl_core::encode(&data).context("failed to encode timeline state")?;
    writeln!(writer, "{blob}")?;
    Ok(())
}
