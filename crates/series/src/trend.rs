//! AQI trend derivation over a time window.

use chrono::NaiveDateTime;

use aura_index::BreakpointTable;
use aura_store::Reading;

use crate::error::SeriesError;
use crate::window::TimeWindow;

/// One point of an AQI trend series.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    /// Measurement timestamp.
    pub timestamp: NaiveDateTime,
    /// PM2.5 concentration (µg/m³).
    pub pm25: f64,
    /// Index computed from the PM2.5 concentration.
    pub aqi: u16,
}

/// Derives the AQI trend for one site over a window ending at `now`.
///
/// Readings before the window cutoff are dropped; the rest are sorted
/// ascending by timestamp and the index is computed per point. An empty
/// window yields an empty series, not an error.
///
/// # Errors
///
/// Returns [`SeriesError::Index`] if any reading carries a concentration
/// the breakpoint table rejects.
pub fn aqi_trend(
    readings: &[Reading],
    table: &BreakpointTable,
    window: TimeWindow,
    now: NaiveDateTime,
) -> Result<Vec<TrendPoint>, SeriesError> {
    let cutoff = window.cutoff(now);
    let mut points = readings
        .iter()
        .filter(|r| r.timestamp >= cutoff)
        .map(|r| {
            Ok(TrendPoint {
                timestamp: r.timestamp,
                pm25: r.pm25,
                aqi: table.compute(r.pm25)?,
            })
        })
        .collect::<Result<Vec<_>, SeriesError>>()?;
    points.sort_by_key(|p| p.timestamp);
    Ok(points)
}
