//! # aura-series
//!
//! Derived series and snapshots for the air quality dashboard data:
//! time-window cutoffs for the range selector, the per-site AQI trend,
//! and the latest-reading status card values.

mod error;
mod snapshot;
mod trend;
mod window;

pub use error::SeriesError;
pub use snapshot::{Pollutant, SiteSnapshot, pollutant_levels};
pub use trend::{TrendPoint, aqi_trend};
pub use window::TimeWindow;
