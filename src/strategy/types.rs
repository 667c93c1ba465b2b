use std::collections::BTreeMap;
use std::str::FromStr;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::errors::QuoteError;
use crate::strategy::base::BaseStrategy;

/// Base delivery types a caller may request by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseKind {
    Courier,
    Postal,
    Pickup,
}

/// Read-only name → base type registry, built once on first use
static REGISTRY: Lazy<BTreeMap<&'static str, BaseKind>> = Lazy::new(|| {
    BTreeMap::from([
        ("courier", BaseKind::Courier),
        ("postal", BaseKind::Postal),
        ("pickup", BaseKind::Pickup),
    ])
});

impl BaseKind {
    /// Resolve a base type by name (case-insensitive, surrounding whitespace ignored)
    pub fn lookup(name: &str) -> Option<Self> {
        REGISTRY.get(name.trim().to_lowercase().as_str()).copied()
    }

    /// Registered base type names, sorted
    pub fn names() -> Vec<&'static str> {
        REGISTRY.keys().copied().collect()
    }

    /// All registered base types, in name order
    pub fn all() -> Vec<Self> {
        REGISTRY.values().copied().collect()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BaseKind::Courier => "courier",
            BaseKind::Postal => "postal",
            BaseKind::Pickup => "pickup",
        }
    }

    /// The strategy this name selects
    pub fn strategy(&self) -> BaseStrategy {
        match self {
            BaseKind::Courier => BaseStrategy::Courier,
            BaseKind::Postal => BaseStrategy::Postal,
            BaseKind::Pickup => BaseStrategy::Pickup,
        }
    }
}

impl FromStr for BaseKind {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| QuoteError::UnknownBaseType(s.to_string()))
    }
}

impl std::fmt::Display for BaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Add-ons requested for a delivery
///
/// `declared_value` is only consulted when `insurance` is set, and must then
/// be non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSet {
    #[serde(default)]
    pub express: bool,
    #[serde(default)]
    pub insurance: bool,
    #[serde(default)]
    pub declared_value: Decimal,
    #[serde(default)]
    pub weekend: bool,
}

impl OptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_express(mut self) -> Self {
        self.express = true;
        self
    }

    pub fn with_insurance(mut self, declared_value: Decimal) -> Self {
        self.insurance = true;
        self.declared_value = declared_value;
        self
    }

    pub fn with_weekend(mut self) -> Self {
        self.weekend = true;
        self
    }
}
