use crate::range::DateRange;
use crate::zone::Instant;

/// Two-click pick interaction state.
///
/// Only [`Step::Complete`] carries a range; transitions are pure functions
/// of the current step and the picked day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    /// No date picked yet.
    #[default]
    Initial,
    /// First date picked, awaiting the second.
    Begin(Instant),
    /// Both endpoints resolved.
    Complete(DateRange),
}

impl Step {
    /// Advances the interaction with a newly picked instant.
    ///
    /// Picking from `Initial` or `Complete` starts a fresh selection;
    /// picking before the current anchor re-anchors instead of producing a
    /// reversed range; picking the anchor itself completes a single-day
    /// range.
    pub fn next(self, picked: Instant) -> Self {
        match self {
            Self::Initial | Self::Complete(_) => Self::Begin(picked),
            Self::Begin(begin) if picked >= begin => {
                Self::Complete(DateRange::new(begin, picked))
            },
            Self::Begin(_) => Self::Begin(picked),
        }
    }

    /// `Complete` when a range is present, else `Initial`.
    pub fn from_range(range: Option<DateRange>) -> Self {
        range.map_or(Self::Initial, Self::Complete)
    }

    /// Extracts the range, only from `Complete`.
    pub const fn range(&self) -> Option<DateRange> {
        match self {
            Self::Complete(range) => Some(*range),
            Self::Initial | Self::Begin(_) => None,
        }
    }

    /// True while the first endpoint is picked and the second is pending.
    pub const fn is_picking(&self) -> bool {
        matches!(self, Self::Begin(_))
    }
}
