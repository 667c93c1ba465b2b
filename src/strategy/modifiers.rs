use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::common::errors::{QuoteError, Result};
use crate::strategy::base::BaseStrategy;

/// Share of the standalone express tariff added on top of the inner cost
pub const EXPRESS_BLEND: Decimal = dec!(0.5);
/// Insurance premium as a fraction of the declared value
pub const INSURANCE_RATE: Decimal = dec!(0.01);
/// Flat weekend delivery surcharge
pub const WEEKEND_SURCHARGE: Decimal = dec!(7.0);
/// Weekend delivery caps delivery time at this many days
pub const WEEKEND_MAX_DAYS: u32 = 2;

/// Non-negative declared value of insured goods
///
/// Only constructible through [`DeclaredValue::new`] (or `TryFrom<Decimal>`),
/// deserialization included, so a negative amount never reaches pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct DeclaredValue(Decimal);

impl DeclaredValue {
    pub fn new(amount: Decimal) -> Result<Self> {
        if amount < Decimal::ZERO {
            return Err(QuoteError::InvalidDeclaredValue(amount));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for DeclaredValue {
    type Error = QuoteError;

    fn try_from(amount: Decimal) -> Result<Self> {
        Self::new(amount)
    }
}

impl From<DeclaredValue> for Decimal {
    fn from(value: DeclaredValue) -> Self {
        value.0
    }
}

/// Add-on applied on top of an inner delivery strategy
///
/// Every modifier's cost contribution is additive and every time contribution
/// is a `min` against a value that does not depend on the inner result. Both
/// operations commute, so a set of modifiers yields the same cost and time in
/// any order; only the description text follows application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Modifier {
    /// Blend in half of the standalone express tariff and its delivery time
    Express,
    /// Insure the declared value of the goods
    Insurance { declared_value: DeclaredValue },
    /// Guarantee weekend delivery
    Weekend,
}

impl Modifier {
    /// Insurance for `declared_value`, which must be non-negative
    pub fn insurance(declared_value: Decimal) -> Result<Self> {
        Ok(Modifier::Insurance {
            declared_value: DeclaredValue::new(declared_value)?,
        })
    }

    /// Amount this modifier adds to the inner cost, never negative
    pub fn surcharge(&self, weight: Decimal, distance: Decimal) -> Decimal {
        match self {
            Modifier::Express => BaseStrategy::Express
                .tariff_cost(weight, distance)
                .saturating_mul(EXPRESS_BLEND),
            Modifier::Insurance { declared_value } => {
                declared_value.amount().saturating_mul(INSURANCE_RATE)
            }
            Modifier::Weekend => WEEKEND_SURCHARGE,
        }
    }

    /// Upper bound this modifier places on delivery days, if any
    pub fn day_cap(&self, distance: Decimal) -> Option<u32> {
        match self {
            Modifier::Express => Some(BaseStrategy::Express.tariff_days(distance)),
            Modifier::Insurance { .. } => None,
            Modifier::Weekend => Some(WEEKEND_MAX_DAYS),
        }
    }

    /// Adjust the inner strategy's cost, saturating at `Decimal::MAX`
    pub fn adjust_cost(&self, inner_cost: Decimal, weight: Decimal, distance: Decimal) -> Decimal {
        inner_cost.saturating_add(self.surcharge(weight, distance))
    }

    /// Adjust the inner strategy's delivery days
    pub fn adjust_time(&self, inner_days: u32, distance: Decimal) -> u32 {
        match self.day_cap(distance) {
            Some(cap) => inner_days.min(cap),
            None => inner_days,
        }
    }

    /// Suffix appended to the inner description
    pub fn label(&self) -> &'static str {
        match self {
            Modifier::Express => "Express",
            Modifier::Insurance { .. } => "Insurance",
            Modifier::Weekend => "Weekend",
        }
    }

    pub fn is_express(&self) -> bool {
        matches!(self, Modifier::Express)
    }
}
