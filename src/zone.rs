//! Zone-local day and month boundary arithmetic.
//!
//! Instants are absolute UTC points; everything here only decides where a
//! local calendar day or month begins or ends for a given [`Tz`].

use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;

/// An absolute point in time, millisecond resolution, zone-independent.
pub type Instant = DateTime<Utc>;

/// Resolves a zone-local wall-clock time to an absolute instant.
///
/// Ambiguous local times (DST fold) resolve to the earlier instant; local
/// times skipped by a DST gap are retried one hour later.
fn resolve_local(zone: Tz, naive: NaiveDateTime) -> Instant {
    zone.from_local_datetime(&naive)
        .earliest()
        .or_else(|| zone.from_local_datetime(&(naive + Duration::hours(1))).earliest())
        .map_or_else(|| Utc.from_utc_datetime(&naive), |t| t.with_timezone(&Utc))
}

/// First instant of the local calendar day containing `t`.
pub fn start_of_day(zone: Tz, t: Instant) -> Instant {
    let date = t.with_timezone(&zone).date_naive();
    resolve_local(zone, date.and_time(NaiveTime::MIN))
}

/// Last representable millisecond of the local calendar day containing `t`.
pub fn end_of_day(zone: Tz, t: Instant) -> Instant {
    start_of_day(zone, add_days(zone, t, 1)) - Duration::milliseconds(1)
}

/// Shifts `t` by whole local calendar days, preserving the wall-clock time.
///
/// Out-of-range dates leave `t` unchanged.
pub fn add_days(zone: Tz, t: Instant, days: i64) -> Instant {
    let local = t.with_timezone(&zone).naive_local();
    let shifted = if days >= 0 {
        local.date().checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        local.date().checked_sub_days(Days::new(days.unsigned_abs()))
    };
    match shifted {
        Some(date) => resolve_local(zone, date.and_time(local.time())),
        None => t,
    }
}

/// First instant of the local calendar month containing `t`.
pub fn start_of_month(zone: Tz, t: Instant) -> Instant {
    let local = t.with_timezone(&zone).date_naive();
    first_of(zone, local.year(), local.month(), t)
}

/// First instant of the month after the one containing `t`.
pub fn start_of_next_month(zone: Tz, t: Instant) -> Instant {
    let local = t.with_timezone(&zone).date_naive();
    let (year, month) = if local.month() == 12 {
        (local.year() + 1, 1)
    } else {
        (local.year(), local.month() + 1)
    };
    first_of(zone, year, month, t)
}

/// First instant of the month before the one containing `t`.
pub fn start_of_previous_month(zone: Tz, t: Instant) -> Instant {
    let local = t.with_timezone(&zone).date_naive();
    let (year, month) = if local.month() == 1 {
        (local.year() - 1, 12)
    } else {
        (local.year(), local.month() - 1)
    };
    first_of(zone, year, month, t)
}

fn first_of(zone: Tz, year: i32, month: u32, fallback: Instant) -> Instant {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(first) => resolve_local(zone, first.and_time(NaiveTime::MIN)),
        None => fallback,
    }
}

/// True when both instants fall on the same local calendar day.
pub fn same_day(zone: Tz, a: Instant, b: Instant) -> bool {
    a.with_timezone(&zone).date_naive() == b.with_timezone(&zone).date_naive()
}

/// Local weekday of `t`.
pub fn weekday(zone: Tz, t: Instant) -> Weekday {
    t.with_timezone(&zone).weekday()
}

/// Local calendar date of `t` as zero-padded `YYYY-MM-DD`.
pub fn format_date(zone: Tz, t: Instant) -> String {
    t.with_timezone(&zone).format("%Y-%m-%d").to_string()
}

/// Last representable millisecond of the UTC calendar day containing `t`.
///
/// Used by the JSON encoding of a range, which pins its end to UTC
/// regardless of the display zone.
pub fn end_of_utc_day(t: Instant) -> Instant {
    let next = t.date_naive().and_time(NaiveTime::MIN) + Duration::days(1);
    Utc.from_utc_datetime(&next) - Duration::milliseconds(1)
}
