//! Delivery strategies and their composition
//!
//! This module provides the pricing side of the engine: base delivery
//! strategies, the add-on modifiers that adjust them, and the chain builder
//! that turns a base type name plus an option set into one strategy.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  build("courier", options)                                  │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  BaseKind registry → BaseStrategy::Courier                  │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ShippingChain { base, [Express, Insurance(v), Weekend] }   │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  cost = fold(+ surcharge)   time = fold(min cap)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Components
//!
//! - [`DeliveryStrategy`]: Trait every strategy implements
//! - [`BaseStrategy`]: Courier, Postal, Pickup and the internal Express tariff
//! - [`Modifier`]: Express, Insurance and Weekend add-ons
//! - [`ShippingChain`]: A base plus modifiers, folded in order
//! - [`ExpressService`]: Tracking and feature lookups for express chains
//!
//! # Example
//!
//! ```ignore
//! use delivery_quote::strategy::{build, DeliveryStrategy, OptionSet};
//!
//! let chain = build("courier", &OptionSet::new().with_express().with_weekend())?;
//! let cost = chain.cost(dec!(2.5), dec!(150))?;
//! let days = chain.time(dec!(150))?;
//! assert_eq!(chain.description(), "Courier + Express + Weekend");
//! ```

mod base;
mod chain;
mod express;
mod modifiers;
mod traits;
mod types;

pub use base::BaseStrategy;

pub use chain::{available_base_types, build, ShippingChain};

pub use express::{ExpressFeatures, ExpressService, TrackingStatus};

pub use modifiers::{
    DeclaredValue, Modifier, EXPRESS_BLEND, INSURANCE_RATE, WEEKEND_MAX_DAYS, WEEKEND_SURCHARGE,
};

pub use traits::{BoxedStrategy, DeliveryStrategy};

#[cfg(test)]
pub use traits::MockDeliveryStrategy;

pub use types::{BaseKind, OptionSet};
