//! Selectable time ranges for trend queries.

use chrono::{Duration, NaiveDateTime};

/// The three time ranges offered by the dashboard's range selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeWindow {
    /// The 24 hours before the reference instant.
    Last24Hours,
    /// The 7 days before the reference instant.
    Last7Days,
    /// The 30 days before the reference instant.
    Last30Days,
}

impl TimeWindow {
    /// All windows in ascending length order.
    pub const ALL: [TimeWindow; 3] = [Self::Last24Hours, Self::Last7Days, Self::Last30Days];

    /// Display label matching the range selector options.
    pub fn label(self) -> &'static str {
        match self {
            Self::Last24Hours => "Last 24 Hours",
            Self::Last7Days => "Last 7 Days",
            Self::Last30Days => "Last 30 Days",
        }
    }

    /// Length of the window.
    pub fn duration(self) -> Duration {
        match self {
            Self::Last24Hours => Duration::hours(24),
            Self::Last7Days => Duration::days(7),
            Self::Last30Days => Duration::days(30),
        }
    }

    /// Earliest timestamp (inclusive) falling inside the window that
    /// ends at `now`.
    pub fn cutoff(self, now: NaiveDateTime) -> NaiveDateTime {
        now - self.duration()
    }
}
