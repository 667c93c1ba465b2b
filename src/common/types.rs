//! Shared types: shipment facts, orders and quotes

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::errors::{QuoteError, Result};

/// Reject a negative weight (kilograms)
pub fn check_weight(weight: Decimal) -> Result<Decimal> {
    if weight < Decimal::ZERO {
        return Err(QuoteError::negative("weight", weight));
    }
    Ok(weight)
}

/// Reject a negative distance (kilometers)
pub fn check_distance(distance: Decimal) -> Result<Decimal> {
    if distance < Decimal::ZERO {
        return Err(QuoteError::negative("distance", distance));
    }
    Ok(distance)
}

/// Validated physical facts about a shipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentFacts {
    /// Total weight in kilograms
    pub weight: Decimal,
    /// Distance to destination in kilometers
    pub distance: Decimal,
}

impl ShipmentFacts {
    /// Create shipment facts, rejecting negative weight or distance
    pub fn new(weight: Decimal, distance: Decimal) -> Result<Self> {
        Ok(Self {
            weight: check_weight(weight)?,
            distance: check_distance(distance)?,
        })
    }
}

/// A single line of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    /// Weight in kilograms
    pub weight: Decimal,
    /// Item price, only used to derive a declared value
    #[serde(default)]
    pub price: Decimal,
}

impl OrderItem {
    pub fn new(name: impl Into<String>, weight: Decimal) -> Self {
        Self {
            name: name.into(),
            weight,
            price: Decimal::ZERO,
        }
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }
}

/// An order to be shipped
///
/// Created per request and discarded once the quote is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub items: Vec<OrderItem>,
    /// Declared value of the goods, added to the shipping cost in the quote total
    pub declared_total_value: Decimal,
    /// Distance to destination in kilometers
    pub distance: Decimal,
}

impl Order {
    pub fn new(items: Vec<OrderItem>, declared_total_value: Decimal, distance: Decimal) -> Self {
        Self {
            items,
            declared_total_value,
            distance,
        }
    }

    /// Create an order whose declared value is the sum of item prices
    pub fn from_items(items: Vec<OrderItem>, distance: Decimal) -> Self {
        let declared_total_value = items
            .iter()
            .fold(Decimal::ZERO, |total, item| total.saturating_add(item.price));
        Self::new(items, declared_total_value, distance)
    }

    /// Total weight of all items, saturating at `Decimal::MAX`
    pub fn weight(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |total, item| total.saturating_add(item.weight))
    }

    /// Validated weight and distance for pricing this order
    pub fn facts(&self) -> Result<ShipmentFacts> {
        ShipmentFacts::new(self.weight(), self.distance)
    }
}

/// Computed shipping quote for an order against a delivery strategy
///
/// Derived on every request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub description: String,
    pub cost: Decimal,
    pub delivery_days: u32,
    /// Declared order value plus shipping cost
    pub total_with_shipping: Decimal,
}
