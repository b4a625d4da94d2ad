//! Parse provider JSON bodies into a timestamp.
//!
//! Providers disagree on the field name (`datetime` for worldtimeapi,
//! `currentDateTime` for timeapi.io) and on the zone suffix, so the parser
//! accepts either field, strips sub-second precision and any suffix, and
//! applies one fixed format.

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::retry::FetchError;

/// The subset of the provider response we care about. Unknown fields
/// (timezone, offsets, day-of-year and friends) are ignored.
#[derive(Debug, Deserialize)]
struct TimeResponse {
    #[serde(default)]
    datetime: Option<String>,
    #[serde(default, rename = "currentDateTime")]
    current_date_time: Option<String>,
}

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
// "YYYY-MM-DDTHH:MM:SS"
const TIMESTAMP_LEN: usize = 19;

/// Extracts and parses the timestamp from a JSON body.
pub fn parse_time_body(body: &str) -> Result<NaiveDateTime, FetchError> {
    let resp: TimeResponse = serde_json::from_str(body)
        .map_err(|e| FetchError::Parse(format!("invalid JSON: {e}")))?;
    let raw = resp
        .datetime
        .or(resp.current_date_time)
        .ok_or_else(|| FetchError::Parse("no datetime or currentDateTime field".to_string()))?;
    parse_timestamp(&raw)
}

/// Parses an ISO-8601-like timestamp, discarding sub-second precision and
/// any trailing zone designator before applying the fixed format.
pub(crate) fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, FetchError> {
    let head = raw
        .get(..TIMESTAMP_LEN)
        .ok_or_else(|| FetchError::Parse(format!("timestamp too short: {raw:?}")))?;
    NaiveDateTime::parse_from_str(head, TIMESTAMP_FORMAT)
        .map_err(|e| FetchError::Parse(format!("bad timestamp {raw:?}: {e}")))
}
