//! Express side service: shipment tracking and feature flags
//!
//! These lookups are informational. They never feed into cost or time, and the
//! tracking data is fixed in-process data with no network behavior.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Status record returned by a tracking lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingStatus {
    pub tracking_number: String,
    pub status: String,
    /// ETA label, e.g. "Tomorrow"
    pub estimated_delivery: String,
    pub current_location: String,
    pub last_update: NaiveDateTime,
}

/// Features that come with express handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressFeatures {
    pub priority_handling: bool,
    pub real_time_tracking: bool,
    pub guaranteed_delivery: bool,
    pub signature_required: bool,
}

/// Express carrier service backing the express modifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpressService;

impl ExpressService {
    /// Express insurance rate: 2% of the declared value
    pub const INSURANCE_RATE: Decimal = dec!(0.02);

    /// Look up a shipment by tracking number
    pub fn track(&self, tracking_number: &str) -> TrackingStatus {
        TrackingStatus {
            tracking_number: tracking_number.to_string(),
            status: "In transit".to_string(),
            estimated_delivery: "Tomorrow".to_string(),
            current_location: "Sorting center".to_string(),
            last_update: last_scan(),
        }
    }

    /// Feature flags; all enabled whenever express is active
    pub fn features(&self) -> ExpressFeatures {
        ExpressFeatures {
            priority_handling: true,
            real_time_tracking: true,
            guaranteed_delivery: true,
            signature_required: true,
        }
    }

    /// Premium for the carrier's own express insurance
    ///
    /// Quoted separately; chain pricing uses the insurance modifier instead.
    pub fn express_insurance(&self, value: Decimal) -> Decimal {
        value.saturating_mul(Self::INSURANCE_RATE)
    }
}

fn last_scan() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .and_then(|date| date.and_hms_opt(14, 30, 0))
        .unwrap_or_default()
}
