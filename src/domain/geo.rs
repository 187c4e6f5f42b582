//! Geographic coordinates and great-circle distance.

use serde::{Deserialize, Serialize};

/// Earth's mean radius in meters.
///
/// Persisted distances were produced with this exact constant; do not swap
/// it for the equatorial radius or a WGS84 ellipsoid.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A latitude/longitude pair identifying a customer's delivery location or
/// a merchant's fixed location.
///
/// The type performs no range checking. Callers (API DTO validation, CLI
/// argument parsing) are responsible for rejecting coordinates outside
/// [-90, 90] x [-180, 180] before they reach the pricing core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a point from decimal degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns `(latitude, longitude)` in radians.
    #[inline]
    pub fn to_radians(self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

/// Calculates the great-circle distance between two points in meters.
///
/// Uses the haversine formula on a spherical Earth of [`EARTH_RADIUS_M`].
/// The formula is symmetric in its arguments and returns exactly `0.0` for
/// identical points. Non-finite inputs propagate through to the result.
#[inline]
pub fn haversine_distance_meters(from: GeoPoint, to: GeoPoint) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}
