/// Milliseconds per calendar day, used for day-count truncation.
pub const MS_PER_DAY: i64 = 86_400_000;

/// Separator between the two instants of the string range form.
pub const RANGE_SEPARATOR: char = ';';

/// Rows in a month grid (always six weeks).
pub const GRID_ROWS: usize = 6;

/// Cells per grid row (one week).
pub const GRID_COLS: usize = 7;

/// Days generated before the month anchor when building a grid, so the
/// first displayed week can reach back into the previous month.
pub(crate) const GRID_LEAD_DAYS: i64 = 7;

/// Days generated after the month anchor when building a grid.
pub(crate) const GRID_TRAIL_DAYS: i64 = 42;

/// English month names used by the default month-label formatter
/// (index 0 is January; chrono's `month0` indexes directly into this).
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Two-letter English weekday names used by the default weekday formatter
/// (index 0 is Monday, matching chrono's `num_days_from_monday`).
pub const WEEKDAY_NAMES: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];
