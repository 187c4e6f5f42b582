//! Delivery fee calculation and distance zoning.
//!
//! Pure functions over [`GeoPoint`] pairs. Fees are whole Rupiah: within
//! the free zone delivery is free, beyond it every started kilometer is
//! charged at a flat rate. Pickup orders never incur a fee.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::geo::{GeoPoint, haversine_distance_meters};

/// Radius of the free delivery zone in kilometers. The boundary itself is
/// inside the zone: exactly 2.0 km is free.
pub const FREE_ZONE_RADIUS_KM: f64 = 2.0;

/// Fee in whole Rupiah per started kilometer beyond the free zone.
pub const FEE_PER_EXCESS_KM: i64 = 3_000;

/// Whether the customer wants the order delivered or picks it up themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Delivery,
    Pickup,
}

impl OrderType {
    /// Lowercase wire/storage form, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Delivery => "delivery",
            Self::Pickup => "pickup",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an order type from storage or CLI input.
#[derive(Debug, thiserror::Error)]
#[error("unknown order type: {0:?}")]
pub struct UnknownOrderType(String);

impl FromStr for OrderType {
    type Err = UnknownOrderType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "delivery" => Ok(Self::Delivery),
            "pickup" => Ok(Self::Pickup),
            other => Err(UnknownOrderType(other.to_string())),
        }
    }
}

/// Result of a fee calculation.
///
/// A derived value with no lifecycle of its own: recomputed whenever the
/// customer location or order type changes, and embedded into the order
/// record at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeeQuote {
    /// Delivery fee in whole Rupiah. Always a non-negative multiple of
    /// [`FEE_PER_EXCESS_KM`].
    pub fee_amount: i64,
    /// Great-circle distance between customer and merchant. Zero for
    /// pickup orders, which skip the distance computation entirely.
    pub distance_meters: f64,
    /// True when the order is a delivery within the free zone. Pickup
    /// orders report `false` even though no fee concept applies to them;
    /// callers render the "free delivery" badge off this flag, so the
    /// literal value is kept stable.
    pub is_free_zone: bool,
}

/// Applies the zoning policy to an already-measured delivery distance.
pub fn fee_for_distance(distance_meters: f64) -> FeeQuote {
    let distance_km = distance_meters / 1000.0;

    if distance_km <= FREE_ZONE_RADIUS_KM {
        return FeeQuote {
            fee_amount: 0,
            distance_meters,
            is_free_zone: true,
        };
    }

    // Every started kilometer beyond the zone is charged in full.
    let excess_km = (distance_km - FREE_ZONE_RADIUS_KM).ceil() as i64;

    FeeQuote {
        fee_amount: excess_km * FEE_PER_EXCESS_KM,
        distance_meters,
        is_free_zone: false,
    }
}

/// Quotes the delivery fee for a customer/merchant pair.
///
/// Pickup orders short-circuit without measuring the distance. Delivery
/// orders measure the great-circle distance and apply
/// [`fee_for_distance`]. Total over all finite inputs; coordinate range
/// checking is the caller's job.
pub fn quote(customer: GeoPoint, merchant: GeoPoint, order_type: OrderType) -> FeeQuote {
    match order_type {
        OrderType::Pickup => FeeQuote {
            fee_amount: 0,
            distance_meters: 0.0,
            is_free_zone: false,
        },
        OrderType::Delivery => fee_for_distance(haversine_distance_meters(customer, merchant)),
    }
}
