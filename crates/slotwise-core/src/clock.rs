//! "HH:MM" wall-clock strings and minutes-since-midnight.
//!
//! Times cross the API boundary as zero-padded "HH:MM" strings; all
//! interval arithmetic happens on minutes (0-1439). Conversion is exact in
//! both directions.

use chrono::{NaiveTime, Timelike};

/// Parse a strict "HH:MM" string into minutes since midnight.
///
/// Exactly two zero-padded digit pairs separated by a colon; chrono alone
/// is too lenient here (`%H` accepts single-digit hours), and anything
/// looser would break the lexicographic working-hours boundary check,
/// which relies on string order matching minute order.
pub fn to_minutes(time: &str) -> Option<u32> {
    let bytes = time.as_bytes();
    let well_formed = bytes.len() == 5
        && bytes[2] == b':'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || b.is_ascii_digit());
    if !well_formed {
        return None;
    }

    let t = NaiveTime::parse_from_str(time, "%H:%M").ok()?;
    Some(t.hour() * 60 + t.minute())
}

/// Format minutes since midnight as a zero-padded "HH:MM" string.
pub fn to_hhmm(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
