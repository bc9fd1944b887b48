//! Import command: replace the timeline from a state blob.
//!
//! Unlike the store's silent fallback for a damaged file, importing a
//! bad blob is an explicit user action and fails loudly.

use std::io::{Read, Write};

use anyhow::{Context, Result};

use crate::Config;
use crate::store;

pub fn run<W: Write, R: Read>(
    writer: &mut W,
    input: &mut R,
    config: &Config,
    blob: Option<&str>,
) -> Result<()> {
    let blob = match blob {
        Some(blob) => blob.to_string(),
        None => {
            let mut buffer = String::new();
            input
                .read_to_string(&mut buffer)
                .context("failed to read blob from stdin")?;
            buffer
        }
    };

    let data = tl_core::decode(&blob).context("invalid timeline blob")?;
    store::save(&config.timeline_path, &data)?;

    writeln!(
        writer,
        "Imported \"{}\" ({} entries)",
        data.name,
        data.entries.len()
    )?;
    Ok(())
}
