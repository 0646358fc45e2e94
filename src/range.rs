use std::{cmp::Ordering, fmt, str::FromStr};

use chrono::{DateTime, SecondsFormat, Utc};
use chrono_tz::Tz;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize};

use crate::consts::{MS_PER_DAY, RANGE_SEPARATOR};
use crate::zone::{self, Instant};

/// An immutable pair of instants with `begin <= end`.
///
/// The constructor normalizes reversed operands by swapping, so a range can
/// never be observed out of order. By convention the generators and the JSON
/// encoder place `end` on the last representable millisecond of the last
/// included day; the type itself does not re-impose that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    begin: Instant,
    end:   Instant,
}

/// Error type for range parsing and decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Input did not contain exactly one separator between two instants.
    #[error("Invalid range format (expected '<begin>;<end>'): {0}")]
    InvalidFormat(String),

    /// One of the endpoints is not a valid ISO 8601 instant.
    #[error("Invalid ISO 8601 instant: {0}")]
    InvalidInstant(String),
}

impl DateRange {
    /// Creates a range from two endpoints, ordering them ascending.
    ///
    /// Reversed operands are swapped rather than rejected; the widget must
    /// stay usable no matter which day the user picked first.
    pub fn new(a: Instant, b: Instant) -> Self {
        if a <= b {
            Self { begin: a, end: b }
        } else {
            Self { begin: b, end: a }
        }
    }

    /// Returns the first included instant.
    pub const fn begin(&self) -> Instant {
        self.begin
    }

    /// Returns the last instant (exclusive for [`Self::contains`]).
    pub const fn end(&self) -> Instant {
        self.end
    }

    /// True iff `begin <= t < end`, compared as absolute instants.
    pub fn contains(&self, t: Instant) -> bool {
        self.begin <= t && t < self.end
    }

    /// Whole days covered by the range, truncating any partial day.
    pub fn days(&self) -> i64 {
        (self.end - self.begin).num_milliseconds() / MS_PER_DAY
    }

    /// Human caption for the range in `zone`: `"on <date>"` when both
    /// endpoints share a local calendar day, else `"from <date> to <date>"`.
    pub fn format(&self, zone: Tz) -> String {
        if zone::same_day(zone, self.begin, self.end) {
            format!("on {}", zone::format_date(zone, self.begin))
        } else {
            format!(
                "from {} to {}",
                zone::format_date(zone, self.begin),
                zone::format_date(zone, self.end)
            )
        }
    }
}

fn iso(t: Instant) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse_instant(s: &str) -> Result<Instant, RangeError> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| RangeError::InvalidInstant(s.to_owned()))
}

/// String form: `"<ISO8601 begin>;<ISO8601 end>"`, both UTC.
impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{RANGE_SEPARATOR}{}", iso(self.begin), iso(self.end))
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split(RANGE_SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(begin), Some(end), None) => {
                Ok(Self::new(parse_instant(begin)?, parse_instant(end)?))
            },
            _ => Err(RangeError::InvalidFormat(s.to_owned())),
        }
    }
}

impl PartialOrd for DateRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateRange {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare begin instants first, then end instants
        match self.begin.cmp(&other.begin) {
            Ordering::Equal => self.end.cmp(&other.end),
            ord => ord,
        }
    }
}

/// JSON form: `{"begin": <ISO8601>, "end": <ISO8601>}` with `end` extended
/// to the last millisecond of its UTC day.
///
/// The extension is intentional and not mirrored by [`fmt::Display`]: the
/// JSON form feeds consumers that expect day-inclusive semantics, while the
/// string form round-trips exactly.
impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut out = serializer.serialize_struct("DateRange", 2)?;
        out.serialize_field("begin", &iso(self.begin))?;
        out.serialize_field("end", &iso(zone::end_of_utc_day(self.end)))?;
        out.end()
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wire {
            begin: String,
            end:   String,
        }

        // The source is expected to carry an already end-of-day `end`;
        // decoding does not re-extend it.
        let wire = Wire::deserialize(deserializer)?;
        let begin = parse_instant(&wire.begin).map_err(serde::de::Error::custom)?;
        let end = parse_instant(&wire.end).map_err(serde::de::Error::custom)?;
        Ok(Self::new(begin, end))
    }
}
