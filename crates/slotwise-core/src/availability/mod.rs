//! Availability queries over a fixed schedule snapshot.
//!
//! The engine owns an immutable [`ScheduleSnapshot`] and answers four
//! questions about it: which intervals are busy on a date, which are free,
//! whether a requested interval is available, and where the earliest slot
//! of a given duration is. Every query is pure; "nothing matches" comes
//! back as an empty vector, `false` or `None`, never as an error.

use serde::{Deserialize, Serialize};

use crate::clock;
use crate::error::Result;
use crate::schedule::{Day, ScheduleSnapshot};
use crate::source;

/// A concrete bookable slot returned by the duration search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub date: String,
    pub start: String,
    pub end: String,
}

/// Query engine over one immutable schedule snapshot.
///
/// Constructed once, queried any number of times. There is no refresh: a
/// caller wanting fresh data fetches a new engine.
#[derive(Debug)]
pub struct Availability {
    snapshot: ScheduleSnapshot,
}

impl Availability {
    /// Fetch the snapshot from `endpoint` and build the engine.
    ///
    /// This is the only operation that performs I/O; see
    /// [`source::fetch_snapshot`] for the failure taxonomy.
    pub async fn fetch(endpoint: &str) -> Result<Self> {
        let snapshot = source::fetch_snapshot(endpoint).await?;
        Ok(Self::new(snapshot))
    }

    /// Build the engine over an already-loaded snapshot.
    pub fn new(snapshot: ScheduleSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn snapshot(&self) -> &ScheduleSnapshot {
        &self.snapshot
    }

    /// Serialize the snapshot back to its wire-level JSON shape.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.snapshot)
    }

    /// Find the first day whose date matches exactly.
    ///
    /// Dates are expected to be unique but duplicates are not rejected;
    /// the first occurrence in snapshot order wins.
    pub fn find_day(&self, date: &str) -> Option<&Day> {
        self.snapshot.days.iter().find(|day| day.date == date)
    }

    /// All booked intervals for `date`, in snapshot order.
    ///
    /// Raw intervals as stored: possibly overlapping, not sorted, not
    /// merged. Unknown dates yield an empty vector.
    pub fn busy_slots(&self, date: &str) -> Vec<(String, String)> {
        let Some(day) = self.find_day(date) else {
            return Vec::new();
        };

        self.snapshot
            .timeslots
            .iter()
            .filter(|slot| slot.day_id == day.id)
            .map(|slot| (slot.start.clone(), slot.end.clone()))
            .collect()
    }

    /// Booked intervals for `day` converted to minute pairs.
    fn busy_minutes(&self, day: &Day) -> Vec<(u32, u32)> {
        self.snapshot
            .timeslots
            .iter()
            .filter(|slot| slot.day_id == day.id)
            .filter_map(|slot| {
                Some((clock::to_minutes(&slot.start)?, clock::to_minutes(&slot.end)?))
            })
            .collect()
    }

    /// Maximal free intervals within `date`'s working hours, sorted by
    /// start time ascending.
    ///
    /// A single sweep merges overlapping, adjacent and nested busy
    /// intervals: the cursor only moves forward, and a gap is emitted
    /// whenever the next busy start lies strictly beyond it. A day fully
    /// covered by bookings (or with a zero-length working window) yields
    /// no free intervals; a day with no bookings yields exactly one.
    pub fn free_slots(&self, date: &str) -> Vec<(String, String)> {
        let Some(day) = self.find_day(date) else {
            return Vec::new();
        };
        let (Some(work_start), Some(work_end)) =
            (clock::to_minutes(&day.start), clock::to_minutes(&day.end))
        else {
            return Vec::new();
        };

        let mut busy = self.busy_minutes(day);
        busy.sort_by_key(|&(start, _)| start);

        let mut free = Vec::new();
        let mut cursor = work_start;

        for (start, end) in busy {
            if start > cursor {
                free.push((clock::to_hhmm(cursor), clock::to_hhmm(start)));
            }
            cursor = cursor.max(end);
        }

        if cursor < work_end {
            free.push((clock::to_hhmm(cursor), clock::to_hhmm(work_end)));
        }

        free
    }

    /// Whether the requested interval is bookable on `date`.
    ///
    /// The request must lie inside the day's working window (zero-padded
    /// "HH:MM" strings compare lexicographically exactly like their minute
    /// values, so the boundary check stays on strings). Overlap against
    /// bookings is strict: intervals that merely touch at an endpoint do
    /// not conflict. Unknown dates and unparseable request times are
    /// simply unavailable.
    pub fn is_available(&self, date: &str, start: &str, end: &str) -> bool {
        let Some(day) = self.find_day(date) else {
            return false;
        };

        if start < day.start.as_str() || end > day.end.as_str() {
            return false;
        }

        let (Some(req_start), Some(req_end)) = (clock::to_minutes(start), clock::to_minutes(end))
        else {
            return false;
        };

        for (busy_start, busy_end) in self.busy_minutes(day) {
            if req_start < busy_end && req_end > busy_start {
                return false;
            }
        }

        true
    }

    /// Earliest slot of exactly `duration_minutes`, searching days in
    /// date order and each day's free intervals in start order.
    ///
    /// The first free interval long enough wins and is truncated to the
    /// requested duration; no attempt is made to find a tighter fit.
    /// Returns `None` when no interval fits.
    pub fn find_slot_for_duration(&self, duration_minutes: u32) -> Option<Slot> {
        let mut days: Vec<&Day> = self.snapshot.days.iter().collect();
        days.sort_by(|a, b| a.date.cmp(&b.date));

        for day in days {
            for (start, end) in self.free_slots(&day.date) {
                let (Some(start_min), Some(end_min)) =
                    (clock::to_minutes(&start), clock::to_minutes(&end))
                else {
                    continue;
                };

                if end_min - start_min >= duration_minutes {
                    return Some(Slot {
                        date: day.date.clone(),
                        start,
                        end: clock::to_hhmm(start_min + duration_minutes),
                    });
                }
            }
        }

        None
    }
}
