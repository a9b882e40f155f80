//! # aura-store
//!
//! Read-only SQLite access to the DEFRA UK air quality measurements
//! table. Provides the site list, the newest reading per site, and
//! per-site history queries that downstream trend and snapshot
//! derivation consume.

mod error;
mod reading;
mod store;

pub use error::StoreError;
pub use reading::Reading;
pub use store::AirStore;
