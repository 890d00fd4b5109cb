//! Timestamp parsing.
//!
//! A timestamp string becomes an [`Instant`]: milliseconds since the Unix
//! epoch, or an invalid marker when nothing recognises it. Invalid instants
//! are carried through arithmetic instead of being reported as errors.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use std::fmt;

/// Instants further than this from the epoch are out of range.
const MAX_EPOCH_MILLIS: i64 = 8_640_000_000_000_000;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// chrono encodes a leap second as nanoseconds past one second.
const LEAP_NANOS: u32 = 1_000_000_000;

const OFFSET_NO_SECONDS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M%:z"];

const UTC_NO_SECONDS: &[&str] = &["%Y-%m-%dT%H:%MZ", "%Y-%m-%d %H:%MZ"];

const LOCAL_DATE_TIME: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instant(Option<i64>);

impl Instant {
    pub const INVALID: Self = Self(None);

    pub fn from_millis(millis: i64) -> Self {
        if millis.unsigned_abs() > MAX_EPOCH_MILLIS as u64 {
            Self::INVALID
        } else {
            Self(Some(millis))
        }
    }

    pub fn now() -> Self {
        Utc::now().into()
    }

    /// Parses `s`, falling back to [`Instant::INVALID`].
    ///
    /// Strings carrying an offset (RFC 3339, RFC 2822) are absolute. A bare
    /// date, year-month or year is midnight UTC on its first day; a date-time
    /// without an offset is local time. `24:00` is midnight of the next day
    /// and leap seconds are rejected.
    pub fn parse(s: &str) -> Self {
        match parse_millis(s.trim()) {
            Some(millis) => Self::from_millis(millis),
            None => {
                tracing::debug!(timestamp = s, "unrecognised timestamp, using invalid instant");
                Self::INVALID
            }
        }
    }

    pub fn millis(&self) -> Option<i64> {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_millis(dt.timestamp_millis())
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.and_then(|ms| Utc.timestamp_millis_opt(ms).single()) {
            Some(dt) => write!(f, "{}", dt.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)),
            None => f.write_str("Invalid Date"),
        }
    }
}

fn parse_millis(s: &str) -> Option<i64> {
    match end_of_day(s) {
        Some(midnight) => parse_exact(&midnight).map(|ms| ms + MILLIS_PER_DAY),
        None => parse_exact(s),
    }
}

fn parse_exact(s: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return no_leap(dt).map(|dt| dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return no_leap(dt).map(|dt| dt.timestamp_millis());
    }
    for fmt in OFFSET_NO_SECONDS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.timestamp_millis());
        }
    }
    for fmt in UTC_NO_SECONDS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc().timestamp_millis());
        }
    }
    if let Some(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| year_month(s))
    {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| naive.and_utc().timestamp_millis());
    }
    for fmt in LOCAL_DATE_TIME {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            // nonexistent local times (DST gaps) stay unparsed
            return no_leap(naive).and_then(|naive| {
                Local
                    .from_local_datetime(&naive)
                    .earliest()
                    .map(|dt| dt.timestamp_millis())
            });
        }
    }
    None
}

fn no_leap<T: Timelike>(t: T) -> Option<T> {
    if t.nanosecond() >= LEAP_NANOS {
        None
    } else {
        Some(t)
    }
}

/// `YYYY` or `YYYY-MM`, as the first day of that year or month.
fn year_month(s: &str) -> Option<NaiveDate> {
    let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    let mut parts = s.split('-');
    let year = parts.next().filter(|y| y.len() == 4 && digits(*y))?;
    let month = match parts.next() {
        Some(m) if m.len() == 2 && digits(m) => m.parse().ok()?,
        Some(_) => return None,
        None => 1,
    };
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month, 1)
}

/// Rewrites `YYYY-MM-DDT24:00[:00[.000]][offset]` to the same day at `00:00`.
/// The caller adds the day back.
fn end_of_day(s: &str) -> Option<String> {
    let sep = s.get(10..11)?;
    if (sep != "T" && sep != " ") || s.get(11..16)? != "24:00" {
        return None;
    }
    let tail = &s[16..];
    let clock = if let Some(rest) = tail.strip_suffix('Z') {
        rest
    } else if tail.len() >= 6 && matches!(tail.as_bytes()[tail.len() - 6], b'+' | b'-') {
        &tail[..tail.len() - 6]
    } else {
        tail
    };
    if !clock.chars().all(|c| matches!(c, ':' | '.' | '0')) {
        return None;
    }
    Some(format!("{}00:00{}", &s[..11], tail))
}
