//! Quote assembly and shipment tracking
//!
//! Both entry points are pure: they only call the strategy's read-only
//! operations and build a fresh result.

use tracing::{debug, instrument};

use crate::common::errors::{QuoteError, Result};
use crate::common::types::{Order, Quote};
use crate::strategy::{DeliveryStrategy, TrackingStatus};

/// Price `order` against `strategy`
///
/// Weight is the sum of item weights; the total adds the order's declared
/// value to the shipping cost. The order is validated before the strategy is
/// consulted.
///
/// # Errors
/// * `QuoteError::InvalidShipmentFacts` - the item weight sum or the distance is negative
#[instrument(skip_all, fields(distance = %order.distance, items = order.items.len()))]
pub fn quote<S>(strategy: &S, order: &Order) -> Result<Quote>
where
    S: DeliveryStrategy + ?Sized,
{
    let facts = order.facts()?;
    let cost = strategy.cost(facts.weight, facts.distance)?;
    let delivery_days = strategy.time(facts.distance)?;
    let description = strategy.description();

    debug!(
        "Quoted {}: cost={} days={} weight={}",
        description, cost, delivery_days, facts.weight
    );

    Ok(Quote {
        description,
        cost,
        delivery_days,
        total_with_shipping: order.declared_total_value.saturating_add(cost),
    })
}

/// Quote the same order against several strategies, preserving input order
pub fn compare<'a, S, I>(order: &Order, strategies: I) -> Result<Vec<Quote>>
where
    S: DeliveryStrategy + ?Sized + 'a,
    I: IntoIterator<Item = &'a S>,
{
    strategies
        .into_iter()
        .map(|strategy| quote(strategy, order))
        .collect()
}

/// Cheapest quote among `quotes`, ties broken by fewer delivery days
pub fn cheapest(quotes: &[Quote]) -> Option<&Quote> {
    quotes
        .iter()
        .min_by(|a, b| a.cost.cmp(&b.cost).then(a.delivery_days.cmp(&b.delivery_days)))
}

/// Look up a shipment through the chain's express service
///
/// # Errors
/// * `QuoteError::NotSupported` - the chain has no express modifier
pub fn track_shipment<S>(strategy: &S, tracking_id: &str) -> Result<TrackingStatus>
where
    S: DeliveryStrategy + ?Sized,
{
    let service = strategy.express_service().ok_or_else(|| {
        QuoteError::NotSupported(format!(
            "tracking requires express delivery ({})",
            strategy.description()
        ))
    })?;
    Ok(service.track(tracking_id))
}
