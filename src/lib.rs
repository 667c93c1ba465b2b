//! DeliveryQuote Library
//!
//! A composable shipment quoting engine: a base delivery strategy combined
//! with optional express, insurance and weekend add-ons yields a
//! deterministic cost, delivery time and description for an order.

pub mod common;
pub mod config;
pub mod quoting;
pub mod strategy;

// Re-export commonly used types
pub use common::errors::{QuoteError, Result};
pub use common::types::{Order, OrderItem, Quote, ShipmentFacts};
pub use config::types::AppConfig;
pub use quoting::{cheapest, compare, quote, track_shipment};

// Strategy types
pub use strategy::{
    available_base_types, build, BaseKind, BaseStrategy, BoxedStrategy, DeclaredValue,
    DeliveryStrategy, ExpressFeatures, ExpressService, Modifier, OptionSet, ShippingChain, TrackingStatus,
};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: strategies can be shared across threads freely.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send_sync<T: Send + Sync>() {}

        require_send_sync::<BaseStrategy>();
        require_send_sync::<Modifier>();
        require_send_sync::<ShippingChain>();
        require_send_sync::<BoxedStrategy>();
        require_send_sync::<Quote>();
    }
}
