//! Error types for the quoting engine

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using our QuoteError
pub type Result<T> = std::result::Result<T, QuoteError>;

/// Main error type for quoting operations
///
/// Every variant is raised synchronously at the offending call. Strategies are
/// immutable, so an error never leaves a chain in a half-built state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuoteError {
    /// Base delivery type is not in the registry
    #[error("Unknown delivery type: {0}")]
    UnknownBaseType(String),

    /// Negative weight or distance handed to cost/time
    #[error("Invalid shipment facts: {field} must be non-negative, got {value}")]
    InvalidShipmentFacts { field: &'static str, value: Decimal },

    /// Insurance requested with a negative declared value
    #[error("Invalid declared value: {0} (must be non-negative)")]
    InvalidDeclaredValue(Decimal),

    /// Operation not offered by this delivery chain
    #[error("Not supported: {0}")]
    NotSupported(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl QuoteError {
    pub(crate) fn negative(field: &'static str, value: Decimal) -> Self {
        QuoteError::InvalidShipmentFacts { field, value }
    }
}
