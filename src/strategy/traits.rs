use rust_decimal::Decimal;

use crate::common::errors::Result;
use crate::strategy::express::ExpressService;

/// Core delivery strategy trait
///
/// A strategy prices one way of delivering a shipment. Implementations are
/// immutable once constructed: `cost`, `time` and `description` are pure
/// functions of their arguments and construction-time parameters.
///
/// # Implementation Notes
///
/// - Negative weight or distance is a caller error and must be reported as
///   `QuoteError::InvalidShipmentFacts` before any computation happens
/// - For any non-negative input, `cost` is >= 0 and `time` never fails
/// - `description` is non-empty and human readable
///
/// # Example
///
/// ```ignore
/// struct FlatRate;
///
/// impl DeliveryStrategy for FlatRate {
///     fn cost(&self, weight: Decimal, distance: Decimal) -> Result<Decimal> {
///         check_weight(weight)?;
///         check_distance(distance)?;
///         Ok(dec!(4.99))
///     }
///
///     fn time(&self, distance: Decimal) -> Result<u32> {
///         check_distance(distance)?;
///         Ok(5)
///     }
///
///     fn description(&self) -> String { "Flat rate".to_string() }
/// }
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait DeliveryStrategy: Send + Sync {
    /// Shipping cost for `weight` kilograms over `distance` kilometers
    fn cost(&self, weight: Decimal, distance: Decimal) -> Result<Decimal>;

    /// Delivery time in whole days for `distance` kilometers
    fn time(&self, distance: Decimal) -> Result<u32>;

    /// Human-readable name of this delivery option
    fn description(&self) -> String;

    /// Express side service (tracking, feature flags), if this strategy offers one
    ///
    /// Default implementation returns None.
    fn express_service(&self) -> Option<ExpressService> {
        None
    }
}

/// Boxed strategy for dynamic dispatch
pub type BoxedStrategy = Box<dyn DeliveryStrategy>;
