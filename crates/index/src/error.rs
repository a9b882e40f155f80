//! Error types for the aura-index crate.

/// Error type for all fallible operations in the aura-index crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IndexError {
    /// Returned when a concentration is negative.
    #[error("negative concentration: {value} µg/m³ (must be >= 0)")]
    NegativeConcentration {
        /// The offending concentration value.
        value: f64,
    },

    /// Returned when a concentration is NaN or infinite.
    #[error("concentration is not finite")]
    NonFiniteConcentration,

    /// Returned when a breakpoint table fails validation.
    #[error("invalid breakpoint table: {reason}")]
    InvalidTable {
        /// Description of the problem.
        reason: String,
    },
}
