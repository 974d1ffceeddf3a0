//! Geographic primitives: lat/lng points and distance calculations.
//!
//! Two distance measures live here:
//!
//! - **Planar degree distance**: degrees treated as Cartesian units; feeds the
//!   confidence formula.
//! - **Haversine distance**: great-circle km; feeds pickup ETA and fare
//!   estimates.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Planar distance in degrees: `sqrt(dLat² + dLng²)`.
///
/// Latitude/longitude are treated as Cartesian coordinates with no
/// great-circle correction. This is the distance measure the confidence
/// formula is tuned against; it is not a geodesic measure and degrades
/// away from the equator.
pub fn planar_degree_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let dlat = a.lat - b.lat;
    let dlng = a.lng - b.lng;
    (dlat * dlat + dlng * dlng).sqrt()
}

/// Haversine distance in kilometers between two points.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let (lat1, lon1) = (a.lat.to_radians(), a.lng.to_radians());
    let (lat2, lon2) = (b.lat.to_radians(), b.lng.to_radians());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let sin_dlat = (dlat * 0.5).sin();
    let sin_dlon = (dlon * 0.5).sin();
    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}
