//! Static behavioral options and user-facing label hooks.

use chrono::{Datelike, Weekday};
use chrono_tz::Tz;

use crate::consts::{MONTH_NAMES, WEEKDAY_NAMES};
use crate::presets::{self, Preset};
use crate::zone::Instant;

/// Generator of the predefined range shortcuts from the today anchor.
pub type PresetGenerator = fn(Tz, Instant) -> Vec<Preset>;

/// Formats the header label of a visible calendar month.
pub type MonthFormatter = fn(Tz, Instant) -> String;

/// Formats one weekday column header.
pub type WeekdayFormatter = fn(Weekday) -> String;

/// Behavioral configuration of the picker.
///
/// Reconfiguring is replacing the whole value; nothing here changes after
/// construction. [`Config::default`] is the documented baseline.
#[derive(Debug, Clone)]
pub struct Config {
    /// Allow picking days after the today anchor. When off, future cells
    /// are disabled and month placement biases toward the range end.
    pub allow_future:            bool,
    /// Clicking a preset commits it immediately instead of only staging it.
    pub apply_range_immediately: bool,
    /// Panel is always open and the close intent is ignored.
    pub sticky:                  bool,
    /// First day of the displayed week.
    pub week_start:              Weekday,
    /// Caption shown while no range is selected.
    pub no_range_caption:        String,
    /// Zone used for all day and month boundary computation.
    pub zone:                    Tz,
    /// Shortcut generator; defaults to [`presets::default_presets`].
    pub predefined_ranges:       PresetGenerator,
    /// Month header formatter; defaults to English `"July 2019"` style.
    pub month_formatter:         MonthFormatter,
    /// Weekday header formatter; defaults to two-letter English names.
    pub weekday_formatter:       WeekdayFormatter,
    /// User-facing button and prompt labels.
    pub translations:            Translations,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allow_future:            true,
            apply_range_immediately: true,
            sticky:                  false,
            week_start:              Weekday::Mon,
            no_range_caption:        "N/A".to_owned(),
            zone:                    Tz::UTC,
            predefined_ranges:       presets::default_presets,
            month_formatter:         default_month_formatter,
            weekday_formatter:       default_weekday_formatter,
            translations:            Translations::default(),
        }
    }
}

/// English month header, e.g. `"July 2019"`.
pub fn default_month_formatter(zone: Tz, month: Instant) -> String {
    let local = month.with_timezone(&zone);
    format!("{} {}", MONTH_NAMES[local.month0() as usize], local.year())
}

/// Two-letter English weekday header, e.g. `"Mo"`.
pub fn default_weekday_formatter(weekday: Weekday) -> String {
    WEEKDAY_NAMES[weekday.num_days_from_monday() as usize].to_owned()
}

/// User-facing labels for the picker chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translations {
    pub close:      String,
    pub clear:      String,
    pub apply:      String,
    pub pick_start: String,
    pub pick_end:   String,
}

impl Default for Translations {
    fn default() -> Self {
        Self {
            close:      "Close".to_owned(),
            clear:      "Clear".to_owned(),
            apply:      "Apply".to_owned(),
            pick_start: "Pick a start date".to_owned(),
            pick_end:   "Pick an end date".to_owned(),
        }
    }
}
