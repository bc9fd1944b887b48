//! Core domain logic for the timeline visualizer.
//!
//! This crate contains the pure types and logic for:
//! - Duration: inclusive month counts and `"{y}y{m}m"` formatting
//! - Label aggregation: merged-interval duration totals per label
//! - Layout: calendar-cell and linear projections with row stacking
//! - Codec: the reversible URL-safe state blob
//!
//! Everything here is synchronous and stateless; derivations are
//! recomputed from the entry collection on every call. The only ambient
//! input, the current date for ongoing entries, is injected through the
//! [`Clock`] trait.

pub mod clock;
pub mod codec;
pub mod duration;
pub mod entry;
pub mod labels;
pub mod layout;
pub mod month;

pub use clock::{Clock, FixedClock, SystemClock};
pub use codec::{CodecError, decode, encode};
pub use duration::{entry_duration_months, format_duration, months_between};
pub use entry::{EntryId, Label, TimelineData, TimelineEntry, ValidationError};
pub use labels::{DateInterval, label_durations, merge_intervals};
pub use layout::{
    CellPosition, LinePosition, LinearRange, MonthMarker, PlacedEntry, RowRange, Span, month_cell,
    position_in_month, stack_rows, year_range,
};
