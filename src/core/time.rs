//! Timestamps and time intervals.
//!
//! CZML carries times as ISO 8601 text. A [`Timestamp`] keeps that text
//! verbatim once validated; a [`TimeInterval`] is a `start/end` pair.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Serialize, Serializer};

use crate::util::{Error, Result};

/// Earliest representable instant, used as the open start of an interval.
pub const MIN_TIME: &str = "0000-00-00T00:00:00Z";

/// Latest representable instant, used as the open end of an interval.
pub const MAX_TIME: &str = "9999-12-31T24:00:00Z";

/// An ISO 8601 instant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Timestamp(String);

impl Timestamp {
    /// Parse and validate ISO 8601 text.
    pub fn parse(text: &str) -> Result<Self> {
        if is_iso8601(text) {
            Ok(Self(text.to_string()))
        } else {
            Err(Error::InvalidTime(text.to_string()))
        }
    }

    /// Format a UTC instant with microsecond precision.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(format!("{}Z", dt.format("%Y-%m-%dT%H:%M:%S%.6f")))
    }

    /// Get the text form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to a UTC instant. Sentinels have no instant.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.0)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_datetime(dt)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

fn is_iso8601(text: &str) -> bool {
    if text == MIN_TIME || text == MAX_TIME {
        return true;
    }
    let trimmed = text.strip_suffix('Z').unwrap_or(text);
    DateTime::parse_from_rfc3339(text).is_ok()
        || NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
        || NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M").is_ok()
        || NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok()
}

// ============================================================================
// TimeInterval
// ============================================================================

/// A closed time interval, written `start/end`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimeInterval {
    start: Timestamp,
    end: Timestamp,
}

impl Default for TimeInterval {
    fn default() -> Self {
        Self {
            start: Timestamp(MIN_TIME.to_string()),
            end: Timestamp(MAX_TIME.to_string()),
        }
    }
}

impl TimeInterval {
    /// Create an interval from two instants.
    pub fn new(start: impl Into<Timestamp>, end: impl Into<Timestamp>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Create an interval from ISO 8601 text for both ends.
    pub fn from_strs(start: &str, end: &str) -> Result<Self> {
        Ok(Self {
            start: Timestamp::parse(start)?,
            end: Timestamp::parse(end)?,
        })
    }

    /// Interval open at the start.
    pub fn until(end: impl Into<Timestamp>) -> Self {
        Self { end: end.into(), ..Self::default() }
    }

    /// Interval open at the end.
    pub fn since(start: impl Into<Timestamp>) -> Self {
        Self { start: start.into(), ..Self::default() }
    }

    /// Parse `start/end` text.
    pub fn parse(text: &str) -> Result<Self> {
        match text.split_once('/') {
            Some((start, end)) if !end.contains('/') => Self::from_strs(start, end),
            _ => Err(Error::InvalidTime(format!(
                "{text}: interval must be written start/end"
            ))),
        }
    }

    /// Get start instant.
    pub fn start(&self) -> &Timestamp {
        &self.start
    }

    /// Get end instant.
    pub fn end(&self) -> &Timestamp {
        &self.end
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start, self.end)
    }
}

impl Serialize for TimeInterval {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

// ============================================================================
// Availability
// ============================================================================

/// The times during which a packet has data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Availability {
    /// One interval, written as a string.
    Single(TimeInterval),
    /// Several intervals, written as an array of strings.
    Multiple(Vec<TimeInterval>),
}

impl Availability {
    /// Iterate over the intervals.
    pub fn intervals(&self) -> &[TimeInterval] {
        match self {
            Self::Single(i) => std::slice::from_ref(i),
            Self::Multiple(v) => v,
        }
    }
}

impl From<TimeInterval> for Availability {
    fn from(interval: TimeInterval) -> Self {
        Self::Single(interval)
    }
}

impl From<Vec<TimeInterval>> for Availability {
    fn from(intervals: Vec<TimeInterval>) -> Self {
        Self::Multiple(intervals)
    }
}

impl Serialize for Availability {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Single(i) => i.serialize(s),
            Self::Multiple(v) => s.collect_seq(v),
        }
    }
}
