//! Calendar date decoding for transaction records and CLI arguments.
//!
//! Input files carry either plain dates (`2019-01-05`) or full
//! timestamps (`2019-01-05T10:30:00Z`). Only the calendar day is kept.

use crate::utils::config::DATE_FORMAT;
use crate::utils::error::LoadError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Parse a calendar date from a plain date or a timestamp string
///
/// **Public** - used by the record deserializer and the CLI
///
/// # Errors
/// * `LoadError::InvalidFormat` - value is neither a date nor a timestamp
pub fn parse_date(value: &str) -> Result<NaiveDate, LoadError> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Ok(date);
    }

    // Timestamps with an offset keep the day as written, not the UTC day
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.date_naive());
    }

    if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(timestamp.date());
    }

    Err(LoadError::InvalidFormat(format!(
        "Invalid transaction date '{}'",
        value
    )))
}

/// Serde adapter for `Transaction::transaction_date`
pub(crate) fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(serde::de::Error::custom)
}
