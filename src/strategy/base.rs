use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::common::errors::Result;
use crate::common::types::{check_distance, check_weight};
use crate::strategy::traits::DeliveryStrategy;

/// Whole days for `distance` at `km_per_day`, truncated toward zero
///
/// Saturates at `u32::MAX` for distances too large to represent.
pub(crate) fn whole_days(distance: Decimal, km_per_day: Decimal) -> u32 {
    (distance / km_per_day).trunc().to_u32().unwrap_or(u32::MAX)
}

/// Base delivery variants with fixed tariffs
///
/// | Base    | cost(weight, distance)    | time(distance)      |
/// |---------|---------------------------|---------------------|
/// | Courier | 5 + 0.5·distance + weight | max(3, ⌊distance/50⌋)  |
/// | Postal  | 2 + 0.5·weight            | max(7, ⌊distance/30⌋)  |
/// | Pickup  | 0                         | 0                   |
/// | Express | 10 + distance             | max(1, ⌊distance/100⌋) |
///
/// `Express` is never selectable by name; it only backs the express modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseStrategy {
    Courier,
    Postal,
    Pickup,
    Express,
}

impl BaseStrategy {
    /// Tariff cost, assuming inputs were already validated
    ///
    /// Saturates at `Decimal::MAX` instead of overflowing.
    pub(crate) fn tariff_cost(&self, weight: Decimal, distance: Decimal) -> Decimal {
        match self {
            BaseStrategy::Courier => dec!(5.0)
                .saturating_add(distance.saturating_mul(dec!(0.5)))
                .saturating_add(weight.saturating_mul(dec!(1.0))),
            BaseStrategy::Postal => dec!(2.0).saturating_add(weight.saturating_mul(dec!(0.5))),
            BaseStrategy::Pickup => Decimal::ZERO,
            BaseStrategy::Express => dec!(10.0).saturating_add(distance.saturating_mul(dec!(1.0))),
        }
    }

    /// Tariff delivery days, assuming distance was already validated
    pub(crate) fn tariff_days(&self, distance: Decimal) -> u32 {
        match self {
            BaseStrategy::Courier => whole_days(distance, dec!(50)).max(3),
            BaseStrategy::Postal => whole_days(distance, dec!(30)).max(7),
            BaseStrategy::Pickup => 0,
            BaseStrategy::Express => whole_days(distance, dec!(100)).max(1),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BaseStrategy::Courier => "Courier",
            BaseStrategy::Postal => "Postal",
            BaseStrategy::Pickup => "Pickup",
            BaseStrategy::Express => "Express",
        }
    }
}

impl std::fmt::Display for BaseStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl DeliveryStrategy for BaseStrategy {
    fn cost(&self, weight: Decimal, distance: Decimal) -> Result<Decimal> {
        let weight = check_weight(weight)?;
        let distance = check_distance(distance)?;
        Ok(self.tariff_cost(weight, distance))
    }

    fn time(&self, distance: Decimal) -> Result<u32> {
        Ok(self.tariff_days(check_distance(distance)?))
    }

    fn description(&self) -> String {
        self.name().to_string()
    }
}
