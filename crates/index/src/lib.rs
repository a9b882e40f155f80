//! # aura-index
//!
//! Pure PM2.5 air quality index computation.
//!
//! Maps a pollutant mass concentration (µg/m³) onto the 0-500 US EPA
//! index scale via a validated breakpoint table, and classifies index
//! values into six health bands with stable label and color tokens.
//! Everything here is stateless and side-effect free; the two entry
//! points may be called concurrently from any number of callers.
//!
//! # Quick start
//!
//! ```rust
//! use aura_index::{AqiBand, BreakpointTable};
//!
//! let table = BreakpointTable::pm25();
//! let aqi = table.compute(100.0).unwrap();
//! assert_eq!(aqi, 196);
//!
//! let band = AqiBand::from_index(aqi);
//! assert_eq!(band.label(), "Unhealthy");
//! assert_eq!(band.color(), "#ff0000");
//! ```

mod band;
mod breakpoint;
mod error;

pub use band::AqiBand;
pub use breakpoint::{BreakpointTable, Segment};
pub use error::IndexError;
