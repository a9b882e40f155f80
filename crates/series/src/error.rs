//! Error types for the aura-series crate.

use aura_index::IndexError;

/// Error type for all fallible operations in the aura-series crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Index computation failed for a reading.
    #[error("index computation failed: {0}")]
    Index(#[from] IndexError),
}
