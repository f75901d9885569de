//! Wire-level schedule records and the immutable snapshot.
//!
//! These structs mirror the source endpoint's JSON payload field for
//! field. The snapshot preserves record order exactly as received: no
//! sorting, no deduplication, so "first match" semantics downstream stay
//! deterministic.

use serde::{Deserialize, Serialize};

/// A calendar day's working-hour window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Day {
    pub id: i64,
    /// ISO 8601 calendar date, e.g. "2025-02-15".
    pub date: String,
    pub start: String, // HH:MM
    pub end: String, // HH:MM
}

/// A booked, unavailable time range within a day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeslot {
    pub id: i64,
    pub day_id: i64,
    pub start: String, // HH:MM
    pub end: String, // HH:MM
}

/// The complete in-memory schedule, loaded atomically and read-only for
/// the lifetime of the engine built on top of it.
///
/// A `Timeslot` whose `day_id` matches no `Day` stays in the collection
/// but is invisible to day-scoped queries, since lookups go through the
/// owning day's id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSnapshot {
    pub days: Vec<Day>,
    pub timeslots: Vec<Timeslot>,
}
