//! Measurement row record.

use chrono::NaiveDateTime;
use rusqlite::Row;

/// One row of the measurements table: a timestamped set of pollutant
/// concentrations and weather values for a monitoring site.
///
/// Timestamps are naive; the source table carries no timezone.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    /// Monitoring site name.
    pub site: String,
    /// Measurement timestamp (stored as SQLite TEXT).
    pub timestamp: NaiveDateTime,
    /// PM2.5 concentration (µg/m³).
    pub pm25: f64,
    /// PM10 concentration (µg/m³).
    pub pm10: f64,
    /// Nitrogen dioxide concentration (µg/m³).
    pub no2: f64,
    /// Ozone concentration (µg/m³).
    pub o3: f64,
    /// Air temperature (°C).
    pub temperature: f64,
    /// Relative humidity (%).
    pub humidity: f64,
    /// Site latitude (degrees).
    pub latitude: f64,
    /// Site longitude (degrees).
    pub longitude: f64,
}

impl Reading {
    /// Column list shared by every query, in `from_row` order.
    pub(crate) const COLUMNS: &'static str =
        "site, datetime, pm25, pm10, no2, o3, temperature, humidity, latitude, longitude";

    /// Maps a query row (selected with [`COLUMNS`](Self::COLUMNS)) to a `Reading`.
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            site: row.get(0)?,
            timestamp: row.get(1)?,
            pm25: row.get(2)?,
            pm10: row.get(3)?,
            no2: row.get(4)?,
            o3: row.get(5)?,
            temperature: row.get(6)?,
            humidity: row.get(7)?,
            latitude: row.get(8)?,
            longitude: row.get(9)?,
        })
    }
}
