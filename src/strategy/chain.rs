//! Chain builder: resolves a base type plus options into one composed strategy

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::common::errors::Result;
use crate::common::types::{check_distance, check_weight};
use crate::strategy::base::BaseStrategy;
use crate::strategy::express::ExpressService;
use crate::strategy::modifiers::Modifier;
use crate::strategy::traits::DeliveryStrategy;
use crate::strategy::types::{BaseKind, OptionSet};

/// A base strategy plus an ordered list of modifiers
///
/// Evaluation validates inputs once, prices the base, then folds each
/// modifier over the running (cost, days) pair. Appending a modifier with
/// [`ShippingChain::wrap`] is the same as wrapping the chain built so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingChain {
    base: BaseStrategy,
    modifiers: Vec<Modifier>,
}

impl ShippingChain {
    /// A chain with no modifiers
    pub fn new(base: BaseStrategy) -> Self {
        Self {
            base,
            modifiers: Vec::new(),
        }
    }

    /// Apply `modifier` on top of everything already in the chain
    pub fn wrap(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Modifiers in application order, innermost first
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    pub fn has_express(&self) -> bool {
        self.modifiers.iter().any(Modifier::is_express)
    }
}

impl From<BaseStrategy> for ShippingChain {
    fn from(base: BaseStrategy) -> Self {
        Self::new(base)
    }
}

impl DeliveryStrategy for ShippingChain {
    fn cost(&self, weight: Decimal, distance: Decimal) -> Result<Decimal> {
        let weight = check_weight(weight)?;
        let distance = check_distance(distance)?;
        let base = self.base.tariff_cost(weight, distance);
        Ok(self
            .modifiers
            .iter()
            .fold(base, |cost, modifier| modifier.adjust_cost(cost, weight, distance)))
    }

    fn time(&self, distance: Decimal) -> Result<u32> {
        let distance = check_distance(distance)?;
        let base = self.base.tariff_days(distance);
        Ok(self
            .modifiers
            .iter()
            .fold(base, |days, modifier| modifier.adjust_time(days, distance)))
    }

    fn description(&self) -> String {
        self.modifiers
            .iter()
            .fold(self.base.description(), |text, modifier| {
                format!("{} + {}", text, modifier.label())
            })
    }

    fn express_service(&self) -> Option<ExpressService> {
        self.has_express().then_some(ExpressService)
    }
}

/// Build the composed strategy for a base type name and option set
///
/// Modifiers are applied in the canonical order Express → Insurance → Weekend.
/// The order only affects the description; cost and time are the same in any
/// order.
///
/// # Errors
/// * `QuoteError::UnknownBaseType` - `base_type` is not courier, postal or pickup
/// * `QuoteError::InvalidDeclaredValue` - insurance requested with a negative value
#[instrument(skip(options), fields(express = options.express, insurance = options.insurance, weekend = options.weekend))]
pub fn build(base_type: &str, options: &OptionSet) -> Result<ShippingChain> {
    let kind: BaseKind = base_type.parse()?;
    let mut chain = ShippingChain::new(kind.strategy());

    if options.express {
        chain = chain.wrap(Modifier::Express);
    }
    if options.insurance {
        chain = chain.wrap(Modifier::insurance(options.declared_value)?);
    }
    if options.weekend {
        chain = chain.wrap(Modifier::Weekend);
    }

    debug!("Built delivery chain: {}", chain.description());
    Ok(chain)
}

/// Names accepted by [`build`]
pub fn available_base_types() -> Vec<&'static str> {
    BaseKind::names()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::errors::QuoteError;
    use rust_decimal_macros::dec;

    fn full_options() -> OptionSet {
        OptionSet::new()
            .with_express()
            .with_insurance(dec!(1050))
            .with_weekend()
    }

    #[test]
    fn test_plain_build_matches_base() {
        let chain = build("courier", &OptionSet::new()).unwrap();
        assert_eq!(chain, ShippingChain::new(BaseStrategy::Courier));
        assert_eq!(
            chain.cost(dec!(2.5), dec!(150)).unwrap(),
            BaseStrategy::Courier.cost(dec!(2.5), dec!(150)).unwrap()
        );
        assert_eq!(chain.description(), "Courier");
    }

    #[test]
    fn test_canonical_order() {
        let chain = build("courier", &full_options()).unwrap();
        assert_eq!(
            chain.modifiers(),
            &[
                Modifier::Express,
                Modifier::insurance(dec!(1050)).unwrap(),
                Modifier::Weekend,
            ]
        );
        assert_eq!(chain.description(), "Courier + Express + Insurance + Weekend");
    }

    #[test]
    fn test_full_courier_chain() {
        let chain = build("courier", &full_options()).unwrap();
        assert_eq!(chain.cost(dec!(2.5), dec!(150)).unwrap(), dec!(180.0));
        assert_eq!(chain.time(dec!(150)).unwrap(), 1);
    }

    #[test]
    fn test_unknown_base_type() {
        assert_eq!(
            build("teleport", &OptionSet::new()),
            Err(QuoteError::UnknownBaseType("teleport".to_string()))
        );
        assert!(build("express", &OptionSet::new().with_express()).is_err());
    }

    #[test]
    fn test_negative_declared_value_rejected_only_with_insurance() {
        let mut options = OptionSet::new();
        options.declared_value = dec!(-10);
        assert!(build("postal", &options).is_ok());

        options.insurance = true;
        assert_eq!(
            build("postal", &options),
            Err(QuoteError::InvalidDeclaredValue(dec!(-10)))
        );
    }

    #[test]
    fn test_express_service_only_with_express() {
        let plain = build("courier", &OptionSet::new().with_weekend()).unwrap();
        assert!(plain.express_service().is_none());

        let express = build("courier", &OptionSet::new().with_express()).unwrap();
        assert!(express.express_service().is_some());
    }

    #[test]
    fn test_chain_validates_inputs() {
        let chain = build("pickup", &full_options()).unwrap();
        assert!(chain.cost(dec!(-1), dec!(0)).is_err());
        assert!(chain.time(dec!(-1)).is_err());
    }

    #[test]
    fn test_wrap_matches_build() {
        let wrapped = ShippingChain::from(BaseStrategy::Postal)
            .wrap(Modifier::Express)
            .wrap(Modifier::Weekend);
        let built = build("postal", &OptionSet::new().with_express().with_weekend()).unwrap();
        assert_eq!(wrapped, built);
    }

    #[test]
    fn test_huge_inputs_saturate_instead_of_panicking() {
        let chain = build("courier", &full_options()).unwrap();
        assert_eq!(chain.cost(Decimal::MAX, Decimal::MAX).unwrap(), Decimal::MAX);
        // express days saturate too, so only the weekend cap applies
        assert_eq!(chain.time(Decimal::MAX).unwrap(), 2);

        let chain = build("courier", &OptionSet::new().with_express()).unwrap();
        assert_eq!(chain.cost(Decimal::MAX, Decimal::MAX).unwrap(), Decimal::MAX);
    }

    #[test]
    fn test_deserialized_chain_rejects_negative_insurance() {
        let json = r#"{"base":"pickup","modifiers":[{"kind":"insurance","declared_value":"-500"}]}"#;
        assert!(serde_json::from_str::<ShippingChain>(json).is_err());

        let json = r#"{"base":"pickup","modifiers":[{"kind":"insurance","declared_value":"500"}]}"#;
        let chain: ShippingChain = serde_json::from_str(json).unwrap();
        assert_eq!(chain.cost(dec!(0), dec!(0)).unwrap(), dec!(5));
    }

    #[test]
    fn test_available_base_types() {
        assert_eq!(available_base_types(), vec!["courier", "pickup", "postal"]);
    }
}
