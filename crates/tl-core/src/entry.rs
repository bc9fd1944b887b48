//! Timeline data model with validation.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::month;

/// Validation errors for the timeline data model.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// The end month was before the start month.
    #[error("end month {end} is before start month {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },

    /// A month value could not be parsed.
    #[error("invalid month: {value} (expected YYYY-MM)")]
    InvalidMonth { value: String },
}

/// Generates a validated non-empty string newtype with common trait
/// implementations.
macro_rules! define_string_newtype {
    (
        $(#[$meta:meta])*
        $name:ident, $field_name:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a new value after validation.
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                if value.is_empty() {
                    return Err(ValidationError::Empty { field: $field_name });
                }
                Ok(Self(value))
            }

            /// Returns the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_string_newtype!(
    /// A validated entry identifier.
    ///
    /// Entry IDs must be non-empty strings. They are assigned once at
    /// creation by the editing layer and never reused.
    EntryId, "entry ID"
);

define_string_newtype!(
    /// A validated entry label.
    ///
    /// Labels must be non-empty strings. An entry may carry the same
    /// label more than once; the list is kept as given.
    Label, "label"
);

/// A single dated entry on the timeline.
///
/// Entries are immutable values: edits replace the whole entry (keyed by
/// id), never individual fields. Dates are month-granular: the start is
/// normalized to the 1st of its month and the end to the last day of its
/// month. A missing end date means the entry is ongoing and extends to
/// the current date for all calculations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    /// Unique identifier, assigned at creation.
    pub id: EntryId,

    /// Non-empty display name.
    pub name: String,

    /// Free-text note, may be empty.
    #[serde(default)]
    pub note: String,

    /// Opaque color token, preserved exactly through serialization.
    pub color: String,

    /// Ordered labels; duplicates are permitted and not deduplicated.
    #[serde(default)]
    pub labels: Vec<Label>,

    /// First day of the start month.
    pub start_date: NaiveDate,

    /// Last day of the end month, or `None` for ongoing entries.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl TimelineEntry {
    /// Creates a validated entry, normalizing the dates to month
    /// boundaries.
    ///
    /// Rejects an empty name and an end month before the start month.
    pub fn new(
        id: EntryId,
        name: impl Into<String>,
        note: impl Into<String>,
        color: impl Into<String>,
        labels: Vec<Label>,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::Empty { field: "entry name" });
        }

        let start_date = month::first_day(start);
        let end_date = end.map(month::last_day);
        if let Some(end_date) = end_date {
            if end_date < start_date {
                return Err(ValidationError::EndBeforeStart {
                    start: start_date,
                    end: end_date,
                });
            }
        }

        Ok(Self {
            id,
            name,
            note: note.into(),
            color: color.into(),
            labels,
            start_date,
            end_date,
        })
    }

    /// End date used for calculations: the entry's own end, or `today`
    /// for ongoing entries.
    #[must_use]
    pub fn effective_end(&self, today: NaiveDate) -> NaiveDate {
        self.end_date.unwrap_or(today)
    }

    /// True when the entry has no end date.
    #[must_use]
    pub const fn is_ongoing(&self) -> bool {
        self.end_date.is_none()
    }
}

/// A named timeline: an ordered collection of entries.
///
/// Entry order is insertion order; display layers re-sort as needed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineData {
    /// Display name of the timeline.
    pub name: String,

    /// Entries in insertion order.
    #[serde(default)]
    pub entries: Vec<TimelineEntry>,
}

impl Default for TimelineData {
    fn default() -> Self {
        Self {
            name: "My Timeline".to_string(),
            entries: Vec::new(),
        }
    }
}

impl TimelineData {
    /// Creates an empty timeline with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Appends a new entry.
    pub fn insert(&mut self, entry: TimelineEntry) {
        self.entries.push(entry);
    }

    /// Replaces the entry with the same id wholesale.
    ///
    /// Returns false (and changes nothing) when no entry has that id.
    pub fn replace(&mut self, entry: TimelineEntry) -> bool {
        match self.entries.iter_mut().find(|e| e.id == entry.id) {
            Some(slot) => {
                *slot = entry;
                true
            }
            None => false,
        }
    }

    /// Removes the entry with the given id.
    ///
    /// Returns false when no entry has that id.
    pub fn remove(&mut self, id: &EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| &e.id != id);
        self.entries.len() != before
    }

    /// Looks up an entry by id.
    #[must_use]
    pub fn get(&self, id: &EntryId) -> Option<&TimelineEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }
}
