//! Predefined range shortcuts offered next to the calendars.

use chrono::Duration;
use chrono_tz::Tz;

use crate::range::DateRange;
use crate::zone::{self, Instant};

/// A named, pre-computed range shortcut such as "Last 7 days".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub label: String,
    pub range: DateRange,
}

impl Preset {
    fn new(label: &str, range: DateRange) -> Self {
        Self {
            label: label.to_owned(),
            range,
        }
    }
}

/// The stock shortcut list, derived from `today` in `zone`.
///
/// All "last N" ranges end one millisecond before today's local midnight so
/// they never include the current day. The configuration can replace this
/// generator entirely.
pub fn default_presets(zone: Tz, today: Instant) -> Vec<Preset> {
    let day_start = zone::start_of_day(zone, today);
    let yesterday = zone::add_days(zone, today, -1);
    let month_start = zone::start_of_month(zone, today);
    let last_midnight = day_start - Duration::milliseconds(1);

    vec![
        Preset::new(
            "Today",
            DateRange::new(day_start, zone::end_of_day(zone, today)),
        ),
        Preset::new(
            "Yesterday",
            DateRange::new(
                zone::start_of_day(zone, yesterday),
                zone::end_of_day(zone, yesterday),
            ),
        ),
        Preset::new(
            "Last 7 days",
            DateRange::new(zone::add_days(zone, day_start, -7), last_midnight),
        ),
        Preset::new(
            "Last 30 days",
            DateRange::new(zone::add_days(zone, day_start, -30), last_midnight),
        ),
        Preset::new("This month", DateRange::new(month_start, today)),
        Preset::new(
            "Last month",
            DateRange::new(
                zone::start_of_previous_month(zone, today),
                month_start - Duration::milliseconds(1),
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use chrono_tz::Tz::UTC;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Instant {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    fn preset(presets: &[Preset], label: &str) -> DateRange {
        presets
            .iter()
            .find(|p| p.label == label)
            .unwrap_or_else(|| panic!("missing preset {label}"))
            .range
    }

    #[test]
    fn test_labels_and_order() {
        let presets = default_presets(UTC, utc(2019, 7, 15, 10, 30, 0));
        let labels: Vec<&str> = presets.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Today",
                "Yesterday",
                "Last 7 days",
                "Last 30 days",
                "This month",
                "Last month"
            ]
        );
    }

    #[test]
    fn test_today_spans_local_day() {
        let today = utc(2019, 7, 15, 10, 30, 0);
        let range = preset(&default_presets(UTC, today), "Today");
        assert_eq!(range.begin(), utc(2019, 7, 15, 0, 0, 0));
        assert_eq!(
            range.end(),
            utc(2019, 7, 15, 23, 59, 59) + Duration::milliseconds(999)
        );
    }

    #[test]
    fn test_yesterday_spans_previous_day() {
        let today = utc(2019, 7, 15, 10, 30, 0);
        let range = preset(&default_presets(UTC, today), "Yesterday");
        assert_eq!(range.begin(), utc(2019, 7, 14, 0, 0, 0));
        assert_eq!(
            range.end(),
            utc(2019, 7, 14, 23, 59, 59) + Duration::milliseconds(999)
        );
    }

    #[test]
    fn test_last_7_days_ends_before_midnight() {
        let today = utc(2019, 7, 15, 10, 30, 0);
        let range = preset(&default_presets(UTC, today), "Last 7 days");
        assert_eq!(range.begin(), utc(2019, 7, 8, 0, 0, 0));
        assert_eq!(
            range.end(),
            utc(2019, 7, 14, 23, 59, 59) + Duration::milliseconds(999)
        );
        assert_eq!(range.days(), 6);
    }

    #[test]
    fn test_last_30_days() {
        let today = utc(2019, 7, 15, 10, 30, 0);
        let range = preset(&default_presets(UTC, today), "Last 30 days");
        assert_eq!(range.begin(), utc(2019, 6, 15, 0, 0, 0));
        assert_eq!(
            range.end(),
            utc(2019, 7, 14, 23, 59, 59) + Duration::milliseconds(999)
        );
    }

    #[test]
    fn test_this_month_ends_at_today() {
        let today = utc(2019, 7, 15, 10, 30, 0);
        let range = preset(&default_presets(UTC, today), "This month");
        assert_eq!(range.begin(), utc(2019, 7, 1, 0, 0, 0));
        assert_eq!(range.end(), today);
    }

    #[test]
    fn test_last_month_ends_before_month_start() {
        let today = utc(2019, 7, 15, 10, 30, 0);
        let range = preset(&default_presets(UTC, today), "Last month");
        assert_eq!(range.begin(), utc(2019, 6, 1, 0, 0, 0));
        assert_eq!(
            range.end(),
            utc(2019, 6, 30, 23, 59, 59) + Duration::milliseconds(999)
        );
    }

    #[test]
    fn test_last_month_across_year_boundary() {
        let today = utc(2020, 1, 10, 8, 0, 0);
        let range = preset(&default_presets(UTC, today), "Last month");
        assert_eq!(range.begin(), utc(2019, 12, 1, 0, 0, 0));
        assert_eq!(
            range.end(),
            utc(2019, 12, 31, 23, 59, 59) + Duration::milliseconds(999)
        );
    }
}
