//! Month-view grid computation and day-cell classification.

use chrono::Weekday;
use chrono_tz::Tz;

use crate::consts::{GRID_LEAD_DAYS, GRID_ROWS, GRID_TRAIL_DAYS};
use crate::range::DateRange;
use crate::step::Step;
use crate::zone::{self, Instant};

/// Computes the 6x7 grid of day instants for the month containing `anchor`.
///
/// Candidate days run from seven days before to forty-two days after the
/// anchor's day; leading days are dropped until the first one
/// falling on `week_start`, and the first six full weeks are kept. The
/// result always covers the anchor's whole month plus lead and trail days
/// from the adjacent months, whatever the month length or alignment.
pub fn calendar_grid(zone: Tz, week_start: Weekday, anchor: Instant) -> Vec<Vec<Instant>> {
    let base = zone::start_of_day(zone, anchor);
    let days: Vec<Instant> = (-GRID_LEAD_DAYS..GRID_TRAIL_DAYS)
        .map(|offset| zone::add_days(zone, base, offset))
        .skip_while(|day| zone::weekday(zone, *day) != week_start)
        .collect();
    days.chunks(7).take(GRID_ROWS).map(<[Instant]>::to_vec).collect()
}

/// Formats the seven weekday headers, rotated to begin at `week_start`.
pub fn weekday_names<F>(formatter: F, week_start: Weekday) -> Vec<String>
where
    F: Fn(Weekday) -> String,
{
    std::iter::successors(Some(week_start), |day| Some(day.succ()))
        .take(7)
        .map(formatter)
        .collect()
}

/// Render-time classification of a single day cell.
///
/// Derived on demand from the selection state, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellState {
    /// Cell is a selected endpoint.
    pub active:         bool,
    /// Cell is the first day of the working selection.
    pub is_range_start: bool,
    /// Cell is the last day of the completed selection.
    pub is_range_end:   bool,
    /// Cell lies inside the completed selection (half-open on the end).
    pub in_range:       bool,
    /// Cell lies on the preview path between the anchor and the hovered day.
    pub in_hover_path:  bool,
    /// Cell is beyond `today` while future picking is off; not pickable.
    pub disabled:       bool,
}

/// Classifies `day` against the current step, hover preview and today anchor.
pub fn classify_day(
    zone: Tz,
    step: Step,
    hovered: Option<Instant>,
    today: Instant,
    allow_future: bool,
    day: Instant,
) -> CellState {
    let mut cell = CellState {
        disabled: !allow_future && day > today,
        ..CellState::default()
    };

    match step {
        Step::Initial => {},
        Step::Begin(begin) => {
            cell.is_range_start = zone::same_day(zone, begin, day);
            if let Some(hovered) = hovered {
                let path = DateRange::new(begin, hovered);
                cell.in_hover_path = path.contains(day) || zone::same_day(zone, hovered, day);
            }
        },
        Step::Complete(range) => {
            cell.is_range_start = zone::same_day(zone, range.begin(), day);
            cell.is_range_end = zone::same_day(zone, range.end(), day);
            cell.in_range = range.contains(day);
        },
    }

    cell.active = cell.is_range_start || cell.is_range_end;
    cell
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Utc};
    use chrono_tz::Tz::UTC;

    fn utc(y: i32, mo: u32, d: u32) -> Instant {
        Utc.with_ymd_and_hms(y, mo, d, 0, 0, 0).unwrap()
    }

    fn days_of(row: &[Instant]) -> Vec<u32> {
        row.iter().map(|d| d.with_timezone(&UTC).day()).collect()
    }

    #[test]
    fn test_grid_shape_is_six_by_seven() {
        for month in 1..=12 {
            let grid = calendar_grid(UTC, Weekday::Mon, utc(2019, month, 1));
            assert_eq!(grid.len(), 6, "month {month}");
            for row in &grid {
                assert_eq!(row.len(), 7, "month {month}");
            }
        }
    }

    #[test]
    fn test_grid_days_are_consecutive() {
        let grid = calendar_grid(UTC, Weekday::Mon, utc(2019, 7, 1));
        let flat: Vec<Instant> = grid.into_iter().flatten().collect();
        for pair in flat.windows(2) {
            assert_eq!(zone::add_days(UTC, pair[0], 1), pair[1]);
        }
    }

    #[test]
    fn test_grid_july_2019_week_starts_monday() {
        let grid = calendar_grid(UTC, Weekday::Mon, utc(2019, 7, 1));

        // First row reaches back into June, last row crosses into August
        assert_eq!(days_of(&grid[0]), vec![24, 25, 26, 27, 28, 29, 30]);
        assert_eq!(grid[0][0], utc(2019, 6, 24));
        assert_eq!(days_of(&grid[5]), vec![29, 30, 31, 1, 2, 3, 4]);
        assert_eq!(grid[5][6], utc(2019, 8, 4));

        // Every day of July appears exactly once
        let flat: Vec<Instant> = grid.into_iter().flatten().collect();
        for day in 1..=31 {
            assert_eq!(
                flat.iter().filter(|d| **d == utc(2019, 7, day)).count(),
                1,
                "July {day}"
            );
        }
    }

    #[test]
    fn test_grid_rows_start_on_week_start() {
        for week_start in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ] {
            let grid = calendar_grid(UTC, week_start, utc(2019, 7, 1));
            for row in &grid {
                assert_eq!(zone::weekday(UTC, row[0]), week_start);
            }
        }
    }

    #[test]
    fn test_weekday_names_rotation() {
        let names = weekday_names(|d| format!("{d:?}"), Weekday::Mon);
        assert_eq!(names, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);

        let names = weekday_names(|d| format!("{d:?}"), Weekday::Sun);
        assert_eq!(names, ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);

        // First header always matches the start day, whatever it is
        for start in [Weekday::Tue, Weekday::Thu, Weekday::Sat] {
            let names = weekday_names(|d| format!("{d:?}"), start);
            assert_eq!(names[0], format!("{start:?}"));
            assert_eq!(names.len(), 7);
        }
    }

    #[test]
    fn test_classify_begin_step_marks_start() {
        let step = Step::Begin(utc(2019, 7, 10));
        let cell = classify_day(UTC, step, None, utc(2019, 7, 15), true, utc(2019, 7, 10));
        assert!(cell.is_range_start);
        assert!(cell.active);
        assert!(!cell.in_range);
        assert!(!cell.in_hover_path);
    }

    #[test]
    fn test_classify_hover_path() {
        let step = Step::Begin(utc(2019, 7, 10));
        let hovered = Some(utc(2019, 7, 14));
        let today = utc(2019, 7, 20);

        let inside = classify_day(UTC, step, hovered, today, true, utc(2019, 7, 12));
        assert!(inside.in_hover_path);

        let hovered_cell = classify_day(UTC, step, hovered, today, true, utc(2019, 7, 14));
        assert!(hovered_cell.in_hover_path);

        let outside = classify_day(UTC, step, hovered, today, true, utc(2019, 7, 16));
        assert!(!outside.in_hover_path);
    }

    #[test]
    fn test_classify_hover_path_backwards() {
        // Hovering before the anchor previews the swapped range
        let step = Step::Begin(utc(2019, 7, 10));
        let hovered = Some(utc(2019, 7, 4));
        let cell = classify_day(UTC, step, hovered, utc(2019, 7, 20), true, utc(2019, 7, 6));
        assert!(cell.in_hover_path);
    }

    #[test]
    fn test_classify_complete_step() {
        let range = DateRange::new(utc(2019, 7, 10), utc(2019, 7, 14));
        let step = Step::Complete(range);
        let today = utc(2019, 7, 20);

        let start = classify_day(UTC, step, None, today, true, utc(2019, 7, 10));
        assert!(start.is_range_start && start.active && start.in_range);

        let end = classify_day(UTC, step, None, today, true, utc(2019, 7, 14));
        assert!(end.is_range_end && end.active);
        // Half-open containment excludes the end instant itself
        assert!(!end.in_range);

        let middle = classify_day(UTC, step, None, today, true, utc(2019, 7, 12));
        assert!(middle.in_range && !middle.active);

        let outside = classify_day(UTC, step, None, today, true, utc(2019, 7, 16));
        assert!(!outside.in_range && !outside.active);
    }

    #[test]
    fn test_classify_disables_future_days() {
        let today = utc(2019, 7, 15);
        let future = classify_day(UTC, Step::Initial, None, today, false, utc(2019, 7, 16));
        assert!(future.disabled);

        let past = classify_day(UTC, Step::Initial, None, today, false, utc(2019, 7, 14));
        assert!(!past.disabled);

        let allowed = classify_day(UTC, Step::Initial, None, today, true, utc(2019, 7, 16));
        assert!(!allowed.disabled);
    }
}
