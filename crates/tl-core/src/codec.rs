//! Reversible timeline-state blob codec.
//!
//! The whole timeline serializes to a flat text blob (JSON in unpadded
//! URL-safe base64) so state can live in a page address or a plain text
//! file. Decoding is the exact inverse: every field survives the round
//! trip, dates to the day, ongoing entries as `null` ends.

use base64ct::{Base64UrlUnpadded, Encoding};
use thiserror::Error;

use crate::entry::TimelineData;

/// Errors surfaced by the state codec.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The blob was not valid base64.
    #[error("state blob is not valid base64")]
    Base64(#[from] base64ct::Error),

    /// The payload did not describe a timeline.
    #[error("malformed timeline state: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encodes the timeline into a URL-safe text blob.
pub fn encode(data: &TimelineData) -> Result<String, CodecError> {
    let json = serde_json::to_vec(data)?;
    Ok(Base64UrlUnpadded::encode_string(&json))
}

/// Decodes a blob produced by [`encode`].
///
/// Surrounding whitespace is tolerated; anything else malformed yields a
/// typed error so consumers can fall back to a default timeline.
pub fn decode(blob: &str) -> Result<TimelineData, CodecError> {
    let bytes = Base64UrlUnpadded::decode_vec(blob.trim())?;
    Ok(serde_json::from_slice(&bytes)?)
}
