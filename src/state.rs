//! Aggregate picker state and its intent-driven transition function.

use chrono::DateTime;

use crate::config::Config;
use crate::grid::{self, CellState};
use crate::prelude::*;
use crate::presets::Preset;
use crate::range::DateRange;
use crate::step::Step;
use crate::zone::{self, Instant};

/// A discrete user (or clock) event submitted to [`PickerState::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Intent {
    /// A day cell was picked.
    #[display(fmt = "pick")]
    Pick(Instant),
    /// Commit a range (or none) and close the panel.
    #[display(fmt = "apply")]
    Apply(Option<DateRange>),
    /// Drop the committed range; same as `Apply(None)`.
    #[display(fmt = "clear")]
    Clear,
    /// Stage a predefined range without closing the panel.
    #[display(fmt = "set-preset")]
    SetPreset(DateRange),
    /// Close the panel, discarding any in-progress pick.
    #[display(fmt = "close")]
    Close,
    /// Open the panel and reposition the visible months.
    #[display(fmt = "open")]
    Open,
    /// A day cell is hovered while picking the second endpoint.
    #[display(fmt = "hover")]
    Hover(Instant),
    /// Shift both visible months one month forward.
    #[display(fmt = "nav-next")]
    NavNext,
    /// Shift both visible months one month back.
    #[display(fmt = "nav-prev")]
    NavPrev,
    /// Reposition the today anchor, typically from the one-shot clock fetch.
    #[display(fmt = "set-today")]
    SetToday(Instant),
}

/// Immutable picker state; every transition returns a replacement value.
///
/// The visible months keep the invariant that `right_month` is exactly one
/// calendar month after `left_month`; every transition that moves one moves
/// the other.
#[derive(Debug, Clone)]
pub struct PickerState {
    config:      Config,
    current:     Option<DateRange>,
    step:        Step,
    left_month:  Instant,
    right_month: Instant,
    hovered:     Option<Instant>,
    opened:      bool,
    disabled:    bool,
    today:       Instant,
}

impl PickerState {
    /// Creates a picker anchored at the Unix epoch.
    ///
    /// The host is expected to follow up with [`Intent::SetToday`], usually
    /// fed from [`crate::fetch_now`]; until then the calendars show
    /// January 1970.
    pub fn init(config: Config, range: Option<DateRange>) -> Self {
        let today = DateTime::UNIX_EPOCH;
        let (left_month, right_month) = months_for(&config, range, today);
        Self {
            config,
            current: range,
            step: Step::from_range(range),
            left_month,
            right_month,
            hovered: None,
            opened: false,
            disabled: false,
            today,
        }
    }

    /// Applies one intent and returns the next state.
    ///
    /// Every branch is total: malformed or inapplicable intents (picking a
    /// disabled day, opening a sticky panel) leave the state unchanged.
    pub fn update(self, intent: Intent) -> Self {
        tracing::debug!(intent = %intent, "picker transition");
        match intent {
            Intent::Pick(picked) => self.pick(picked),
            Intent::Apply(range) => self.apply(range),
            Intent::Clear => self.apply(None),
            Intent::SetPreset(range) => self.set_preset(range),
            Intent::Close => self.close(),
            Intent::Open => self.open(),
            Intent::Hover(over) => self.hover(over),
            Intent::NavNext => self.nav_next(),
            Intent::NavPrev => self.nav_prev(),
            Intent::SetToday(today) => self.set_today(today),
        }
    }

    /// Routes a preset click according to `apply_range_immediately`.
    pub fn pick_preset(self, range: DateRange) -> Self {
        if self.config.apply_range_immediately {
            self.apply(Some(range))
        } else {
            self.set_preset(range)
        }
    }

    fn pick(mut self, picked: Instant) -> Self {
        if self.disabled {
            return self;
        }
        // Disabled cells are not pickable
        if !self.config.allow_future && picked > self.today {
            tracing::debug!("ignored pick of disabled future day");
            return self;
        }
        self.step = self.step.next(picked);
        if !self.step.is_picking() {
            self.hovered = None;
        }
        self
    }

    fn apply(mut self, range: Option<DateRange>) -> Self {
        self.current = range;
        self.step = Step::from_range(range);
        self.hovered = None;
        self.opened = false;
        self.reposition()
    }

    fn set_preset(mut self, range: DateRange) -> Self {
        // Like apply, but the panel stays open so the user can still
        // confirm or cancel.
        self.current = Some(range);
        self.step = Step::Complete(range);
        self.hovered = None;
        self.reposition()
    }

    fn close(mut self) -> Self {
        self.opened = false;
        self.step = Step::from_range(self.current);
        self.hovered = None;
        self
    }

    fn open(mut self) -> Self {
        if self.config.sticky {
            return self;
        }
        self.opened = true;
        self.reposition()
    }

    fn hover(mut self, over: Instant) -> Self {
        self.hovered = if self.step.is_picking() {
            Some(over)
        } else {
            None
        };
        self
    }

    fn nav_next(mut self) -> Self {
        self.left_month = self.right_month;
        self.right_month = zone::start_of_next_month(self.config.zone, self.right_month);
        self
    }

    fn nav_prev(mut self) -> Self {
        self.right_month = self.left_month;
        self.left_month = zone::start_of_previous_month(self.config.zone, self.left_month);
        self
    }

    fn set_today(mut self, today: Instant) -> Self {
        self.today = today;
        self.reposition()
    }

    fn reposition(mut self) -> Self {
        let (left, right) = months_for(&self.config, self.current, self.today);
        self.left_month = left;
        self.right_month = right;
        self
    }

    /// Replaces the configuration and repositions the visible months.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self.reposition()
    }

    /// Toggles the whole-widget disabled flag.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The committed selection, if any.
    pub const fn current(&self) -> Option<DateRange> {
        self.current
    }

    /// The working selection state, possibly diverged from `current`.
    pub const fn step(&self) -> Step {
        self.step
    }

    /// Anchors of the two visible months, left then right.
    pub const fn months(&self) -> (Instant, Instant) {
        (self.left_month, self.right_month)
    }

    /// The today anchor used for future-disabling and month placement.
    pub const fn today(&self) -> Instant {
        self.today
    }

    /// The hovered day used for preview-path highlighting, if any.
    pub const fn hovered(&self) -> Option<Instant> {
        self.hovered
    }

    /// True when the panel should render; sticky panels are always open.
    pub const fn is_opened(&self) -> bool {
        self.config.sticky || self.opened
    }

    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Text-input caption: the formatted range or the no-range placeholder.
    pub fn caption(&self) -> String {
        self.current.map_or_else(
            || self.config.no_range_caption.clone(),
            |range| range.format(self.config.zone),
        )
    }

    /// Shortcut list derived from the current today anchor.
    pub fn presets(&self) -> Vec<Preset> {
        (self.config.predefined_ranges)(self.config.zone, self.today)
    }

    /// Day cells of the left visible month.
    pub fn left_grid(&self) -> Vec<Vec<Instant>> {
        grid::calendar_grid(self.config.zone, self.config.week_start, self.left_month)
    }

    /// Day cells of the right visible month.
    pub fn right_grid(&self) -> Vec<Vec<Instant>> {
        grid::calendar_grid(self.config.zone, self.config.week_start, self.right_month)
    }

    /// Classifies one day cell against the current selection state.
    pub fn classify(&self, day: Instant) -> CellState {
        grid::classify_day(
            self.config.zone,
            self.step,
            self.hovered,
            self.today,
            self.config.allow_future,
            day,
        )
    }

    /// Header label for a visible month anchor.
    pub fn month_label(&self, month: Instant) -> String {
        (self.config.month_formatter)(self.config.zone, month)
    }

    /// Weekday column headers, rotated to the configured week start.
    pub fn weekday_labels(&self) -> Vec<String> {
        grid::weekday_names(self.config.weekday_formatter, self.config.week_start)
    }
}

/// Month-placement rule for the two visible calendars.
fn months_for(config: &Config, range: Option<DateRange>, today: Instant) -> (Instant, Instant) {
    let zone = config.zone;
    match range {
        Some(range) if config.allow_future => {
            let left = zone::start_of_month(zone, range.begin());
            (left, zone::start_of_next_month(zone, left))
        },
        Some(range) => {
            let right = zone::start_of_month(zone, range.end());
            (zone::start_of_previous_month(zone, right), right)
        },
        None => {
            let right = zone::start_of_month(zone, today);
            (zone::start_of_previous_month(zone, right), right)
        },
    }
}
