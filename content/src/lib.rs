//! `almanac-content` — deterministic content selection for the almanac card.
//!
//! Maps a `(month, day)` pair to the record the card renders: a dated
//! override when one exists, otherwise a deterministically chosen entry
//! from the generic knowledge table, with quote and mood injection so the
//! caller never sees a partial record.
//!
//! Pure and total for every real calendar day: no I/O, no state, and the
//! same inputs always produce the same output.

mod event;
mod resolve;
mod tables;

pub use event::{AlmanacEvent, Mood, StaticEvent};
pub use resolve::{DAYS_PER_MONTH, days_in_month, resolve};
