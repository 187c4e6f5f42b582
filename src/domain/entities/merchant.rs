//! Merchant entity with a fixed pickup/dispatch location.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::geo::GeoPoint;

/// A merchant registered on the platform.
///
/// The coordinates are the single dispatch point all delivery distances are
/// measured against. Deactivated merchants stay in the registry for order
/// history but cannot be quoted against or ordered from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Merchant {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Merchant {
    /// The merchant's fixed location as a [`GeoPoint`].
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// Input data for registering a new merchant.
///
/// New merchants are active immediately. Coordinate ranges are validated at
/// the API/CLI boundary before this struct is built.
#[derive(Debug, Clone)]
pub struct NewMerchant {
    pub name: String,
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

/// Partial update for an existing merchant.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct MerchantPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_active: Option<bool>,
}
