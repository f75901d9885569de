//! Core error types for slotwise-core.
//!
//! Every variant is a construction-time failure: the snapshot fetch either
//! produces a complete snapshot or fails with one of these. Query
//! operations never return an error; "no data matches" is expressed with
//! empty results, `false`, or `None`.

use thiserror::Error;

/// Core error type for slotwise-core.
#[derive(Error, Debug)]
pub enum SchedulerError {
    /// Request timed out or the connection could not be established
    #[error("Connection failure: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The source responded with a non-success status code
    #[error("Server returned HTTP {status}")]
    Protocol { status: u16 },

    /// The response was not parseable as the expected shape
    #[error("Invalid server data: {0}")]
    DataShape(String),

    /// Any other unexpected failure during fetch or parse
    #[error("Unknown error: {0}")]
    Unclassified(String),
}

impl SchedulerError {
    pub(crate) fn connection(message: impl Into<String>, source: Option<reqwest::Error>) -> Self {
        SchedulerError::Connection {
            message: message.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for SchedulerError {
    fn from(err: serde_json::Error) -> Self {
        SchedulerError::DataShape(err.to_string())
    }
}

/// Result type alias for SchedulerError
pub type Result<T, E = SchedulerError> = std::result::Result<T, E>;
