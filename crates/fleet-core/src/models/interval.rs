//! Closed time intervals and the overlap predicate.

use jiff::{
    civil::{Date, DateTime},
    tz::TimeZone,
    Timestamp,
};
use serde::{Deserialize, Serialize};

use crate::error::{FleetError, Result};

/// Whether the closed intervals `[a_start, a_end]` and `[b_start, b_end]`
/// share at least one point.
///
/// Touching endpoints count as overlapping, and point intervals
/// (`start == end`) are handled like any other.
///
/// # Examples
///
/// ```rust
/// use fleet_core::models::overlaps;
///
/// assert!(overlaps(10, 20, 20, 30));
/// assert!(!overlaps(10, 20, 21, 30));
/// assert!(overlaps(5, 5, 5, 5));
/// ```
pub fn overlaps<T: PartialOrd>(a_start: T, a_end: T, b_start: T, b_end: T) -> bool {
    a_start <= b_end && b_start <= a_end
}

/// A closed time window `[start, end]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Interval {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl Interval {
    /// Builds a window; a missing `end` makes it the single instant `start`.
    ///
    /// # Errors
    ///
    /// Returns `FleetError::InvalidInput` when `end` precedes `start`.
    pub fn new(start: Timestamp, end: Option<Timestamp>) -> Result<Self> {
        let end = end.unwrap_or(start);
        if end < start {
            return Err(FleetError::invalid_input("endAt")
                .with_reason(format!("endAt ({end}) is before startAt ({start})")));
        }
        Ok(Self { start, end })
    }

    /// A zero-length window at `at`.
    pub fn instant(at: Timestamp) -> Self {
        Self { start: at, end: at }
    }

    /// Parses the textual bounds accepted by the query interfaces.
    ///
    /// A missing start is a caller error reported on the `startAt` field.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self> {
        let start = match start.map(str::trim).filter(|s| !s.is_empty()) {
            Some(s) => parse_instant("startAt", s)?,
            None => {
                return Err(FleetError::invalid_input("startAt").with_reason("startAt est obligatoire"))
            }
        };
        let end = match end.map(str::trim).filter(|s| !s.is_empty()) {
            Some(s) => Some(parse_instant("endAt", s)?),
            None => None,
        };
        Self::new(start, end)
    }

    /// Closed-interval intersection test.
    pub fn overlaps(&self, other: &Interval) -> bool {
        overlaps(self.start, self.end, other.start, other.end)
    }

    /// Bounds as epoch milliseconds, the unit used in storage.
    pub fn as_millis(&self) -> (i64, i64) {
        (self.start.as_millisecond(), self.end.as_millisecond())
    }
}

/// Parses an instant in one of the accepted forms:
///
/// - RFC 3339 with an offset: `2024-01-15T08:00:00Z`, `2024-01-15T09:00+01:00`
/// - civil date-time without offset, read as UTC: `2024-01-15T08:00`
/// - bare date, read as midnight UTC: `2024-01-15`
pub fn parse_instant(field: &str, value: &str) -> Result<Timestamp> {
    if let Ok(ts) = value.parse::<Timestamp>() {
        return Ok(ts);
    }

    let civil = value
        .parse::<DateTime>()
        .or_else(|_| value.parse::<Date>().map(|d| d.to_datetime(jiff::civil::Time::midnight())));

    civil
        .and_then(|dt| dt.to_zoned(TimeZone::UTC))
        .map(|zdt| zdt.timestamp())
        .map_err(|e| {
            FleetError::invalid_input(field).with_reason(format!("'{value}' is not a valid date: {e}"))
        })
}
