//! One-shot snapshot fetch from the schedule endpoint.
//!
//! A single GET with a bounded timeout; any failure is classified into the
//! [`SchedulerError`] taxonomy and surfaced immediately. No retries, no
//! partial snapshots.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::clock;
use crate::error::{Result, SchedulerError};
use crate::schedule::ScheduleSnapshot;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetch and validate the schedule snapshot from `endpoint`.
///
/// Exactly one request is made. Errors are classified as connection,
/// protocol, data-shape or unclassified failures; on success every time
/// string in the payload is known to parse as "HH:MM", so no query built
/// on the snapshot can fail later.
pub async fn fetch_snapshot(endpoint: &str) -> Result<ScheduleSnapshot> {
    let url = Url::parse(endpoint)
        .map_err(|e| SchedulerError::DataShape(format!("invalid endpoint URL: {e}")))?;

    let client = Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| SchedulerError::Unclassified(e.to_string()))?;

    let response = client.get(url).send().await.map_err(classify_transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(SchedulerError::Protocol {
            status: status.as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| SchedulerError::Unclassified(e.to_string()))?;

    let snapshot: ScheduleSnapshot = serde_json::from_str(&body)?;
    validate_times(&snapshot)?;

    Ok(snapshot)
}

fn classify_transport(err: reqwest::Error) -> SchedulerError {
    if err.is_timeout() {
        SchedulerError::connection("Server response timeout exceeded", Some(err))
    } else if err.is_connect() {
        SchedulerError::connection("Failed to connect to server", Some(err))
    } else {
        SchedulerError::Unclassified(err.to_string())
    }
}

/// Reject any record carrying a time that does not parse as "HH:MM".
///
/// Range ordering (start < end) is deliberately not checked; degenerate
/// ranges are handled by the availability engine as stored.
fn validate_times(snapshot: &ScheduleSnapshot) -> Result<()> {
    for day in &snapshot.days {
        for time in [&day.start, &day.end] {
            if clock::to_minutes(time).is_none() {
                return Err(SchedulerError::DataShape(format!(
                    "day {}: invalid time \"{time}\"",
                    day.id
                )));
            }
        }
    }

    for slot in &snapshot.timeslots {
        for time in [&slot.start, &slot.end] {
            if clock::to_minutes(time).is_none() {
                return Err(SchedulerError::DataShape(format!(
                    "timeslot {}: invalid time \"{time}\"",
                    slot.id
                )));
            }
        }
    }

    Ok(())
}
