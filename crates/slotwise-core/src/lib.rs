//! # Slotwise Core Library
//!
//! This library answers availability queries against a day's worth of
//! already-booked time intervals. A schedule snapshot (working days plus
//! busy timeslots) is fetched once from a remote endpoint at construction
//! time; every query after that is a pure, read-only computation over the
//! immutable snapshot.
//!
//! ## Architecture
//!
//! - **Schedule model**: the wire-level `Day`/`Timeslot` records and the
//!   `ScheduleSnapshot` they are loaded into
//! - **Source**: a one-shot HTTP fetch that classifies transport, protocol
//!   and data-shape failures
//! - **Availability engine**: busy/free interval computation, point
//!   availability checks, and first-fit duration search
//!
//! ## Key Components
//!
//! - [`Availability`]: query engine over a fixed snapshot
//! - [`ScheduleSnapshot`]: the immutable in-memory schedule
//! - [`SchedulerError`]: construction-time failure taxonomy

pub mod availability;
pub mod clock;
pub mod error;
pub mod schedule;
pub mod source;

pub use availability::{Availability, Slot};
pub use error::{Result, SchedulerError};
pub use schedule::{Day, ScheduleSnapshot, Timeslot};
