//! Timeline blob persistence.
//!
//! The persisted form is exactly the codec's URL-safe blob, held in a
//! single small file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tl_core::TimelineData;

/// Loads the timeline from the blob file.
///
/// A missing file means an empty default timeline. An unparseable blob
/// also falls back to the default, logged but never fatal, so a damaged
/// file degrades to a fresh start instead of wedging every command.
pub fn load(path: &Path) -> Result<TimelineData> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no timeline file, starting empty");
        return Ok(TimelineData::default());
    }

    let blob =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    match tl_core::decode(&blob) {
        Ok(data) => Ok(data),
        Err(error) => {
            tracing::warn!(
                %error,
                path = %path.display(),
                "unparseable timeline state, falling back to empty"
            );
            Ok(TimelineData::default())
        }
    }
}

/// Saves the timeline as an encoded blob, creating parent directories.
pub fn save(path: &Path, data: &TimelineData) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let blob = tl_core::encode(data).context("failed to encode timeline state")?;
    fs::write(path, blob).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
