//! Per-site snapshot data derived from the newest reading.

use chrono::NaiveDateTime;

use aura_index::{AqiBand, BreakpointTable};
use aura_store::Reading;

use crate::error::SeriesError;

/// The four pollutants shown on the comparison card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pollutant {
    Pm25,
    Pm10,
    No2,
    O3,
}

impl Pollutant {
    /// All pollutants in display order.
    pub const ALL: [Pollutant; 4] = [Self::Pm25, Self::Pm10, Self::No2, Self::O3];

    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pm25 => "PM2.5",
            Self::Pm10 => "PM10",
            Self::No2 => "NO₂",
            Self::O3 => "O₃",
        }
    }

    /// Extracts this pollutant's concentration from a reading.
    pub fn value(self, reading: &Reading) -> f64 {
        match self {
            Self::Pm25 => reading.pm25,
            Self::Pm10 => reading.pm10,
            Self::No2 => reading.no2,
            Self::O3 => reading.o3,
        }
    }
}

/// Labeled pollutant concentrations in display order.
pub fn pollutant_levels(reading: &Reading) -> [(Pollutant, f64); 4] {
    [
        (Pollutant::Pm25, reading.pm25),
        (Pollutant::Pm10, reading.pm10),
        (Pollutant::No2, reading.no2),
        (Pollutant::O3, reading.o3),
    ]
}

/// Status-card data for one site, derived from its newest reading.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteSnapshot {
    pub site: String,
    pub last_updated: NaiveDateTime,
    pub aqi: u16,
    pub band: AqiBand,
    pub pm25: f64,
    pub pm10: f64,
    pub no2: f64,
    pub o3: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl SiteSnapshot {
    /// Builds the snapshot, computing index and band from PM2.5.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::Index`] if the reading's concentration is
    /// rejected by the breakpoint table.
    pub fn from_reading(
        reading: &Reading,
        table: &BreakpointTable,
    ) -> Result<Self, SeriesError> {
        let aqi = table.compute(reading.pm25)?;
        Ok(Self {
            site: reading.site.clone(),
            last_updated: reading.timestamp,
            aqi,
            band: AqiBand::from_index(aqi),
            pm25: reading.pm25,
            pm10: reading.pm10,
            no2: reading.no2,
            o3: reading.o3,
            temperature: reading.temperature,
            humidity: reading.humidity,
            latitude: reading.latitude,
            longitude: reading.longitude,
        })
    }
}
