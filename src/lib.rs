mod clock;
mod config;
mod consts;
mod grid;
mod prelude;
mod presets;
mod range;
mod state;
mod step;
pub mod zone;

pub use clock::{Clock, SystemClock, fetch_now};
pub use config::{
    Config, MonthFormatter, PresetGenerator, Translations, WeekdayFormatter,
    default_month_formatter, default_weekday_formatter,
};
pub use consts::*;
pub use grid::{CellState, calendar_grid, weekday_names};
pub use presets::{Preset, default_presets};
pub use range::{DateRange, RangeError};
pub use state::{Intent, PickerState};
pub use step::Step;
pub use zone::Instant;
