//! Timestamp conversion between unix epochs and RFC 3339.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TimestampInfo {
    pub unix_seconds: i64,
    pub unix_millis: i64,
    pub rfc3339: String,
    pub date: String,
    pub weekday: String,
    /// Offset relative to the reference instant, e.g. "3 hours ago".
    pub relative: String,
}

impl TimestampInfo {
    fn from_datetime(dt: DateTime<Utc>, reference: DateTime<Utc>) -> TimestampInfo {
        TimestampInfo {
            unix_seconds: dt.timestamp(),
            unix_millis: dt.timestamp_millis(),
            rfc3339: dt.to_rfc3339(),
            date: dt.format("%Y-%m-%d").to_string(),
            weekday: dt.format("%A").to_string(),
            relative: relative_offset(dt, reference),
        }
    }
}

fn relative_offset(dt: DateTime<Utc>, reference: DateTime<Utc>) -> String {
    let delta = reference.signed_duration_since(dt);
    let past = delta.num_seconds() >= 0;
    let secs = delta.num_seconds().abs();
    let (amount, word) = if secs < 60 {
        (secs, "second")
    } else if secs < 3600 {
        (secs / 60, "minute")
    } else if secs < 86400 {
        (secs / 3600, "hour")
    } else if secs < 31536000 {
        (secs / 86400, "day")
    } else {
        (secs / 31536000, "year")
    };
    let plural = if amount == 1 { "" } else { "s" };
    if past {
        format!("{} {}{} ago", amount, word, plural)
    } else {
        format!("in {} {}{}", amount, word, plural)
    }
}

/// Parse a timestamp input and describe it relative to `reference`.
///
/// Auto-detection: an integer of up to 11 digits is unix seconds, a longer
/// one is unix milliseconds; anything else must parse as RFC 3339.
pub fn describe(input: &str, reference: DateTime<Utc>) -> Result<TimestampInfo> {
    let input = input.trim();
    if input.is_empty() {
        bail!("Empty timestamp input");
    }
    let digits_only = input
        .strip_prefix('-')
        .unwrap_or(input)
        .chars()
        .all(|c| c.is_ascii_digit());
    if digits_only {
        let n: i64 = input.parse().context("Timestamp out of range")?;
        let dt = if input.trim_start_matches('-').len() > 11 {
            DateTime::from_timestamp_millis(n)
        } else {
            DateTime::from_timestamp(n, 0)
        };
        let dt = dt.with_context(|| format!("Timestamp out of range: {}", input))?;
        return Ok(TimestampInfo::from_datetime(dt, reference));
    }
    let dt = DateTime::parse_from_rfc3339(input)
        .with_context(|| format!("Not a unix timestamp or RFC 3339 datetime: {}", input))?;
    Ok(TimestampInfo::from_datetime(dt.with_timezone(&Utc), reference))
}

/// Like [`describe`], relative to the current clock.
pub fn describe_now(input: &str) -> Result<TimestampInfo> {
    describe(input, Utc::now())
}
