//! Pickup ETA and fare estimation for candidate display.

/// Average speed for ETA estimation (km/h).
pub const AVG_SPEED_KMH: f64 = 40.0;

/// Base fare in rupees.
pub const BASE_FARE: f64 = 30.0;

/// Per-kilometer rate in rupees.
pub const PER_KM_RATE: f64 = 18.0;

/// Estimate pickup ETA in milliseconds from the pickup distance.
pub fn estimate_pickup_eta_ms(distance_km: f64) -> u64 {
    if distance_km <= 0.0 {
        return 1000; // Minimum 1 second
    }
    let eta_hours = distance_km / AVG_SPEED_KMH;
    (eta_hours * 3600.0 * 1000.0).max(1000.0) as u64
}

/// Estimate the fare for a pickup at the given distance.
///
/// Formula: `fare = BASE_FARE + (distance_km * PER_KM_RATE)`
pub fn estimate_fare(distance_km: f64) -> f64 {
    BASE_FARE + (distance_km.max(0.0) * PER_KM_RATE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eta_has_a_one_second_floor() {
        assert_eq!(estimate_pickup_eta_ms(0.0), 1000);
        assert_eq!(estimate_pickup_eta_ms(-1.0), 1000);
        assert_eq!(estimate_pickup_eta_ms(0.001), 1000);
    }

    #[test]
    fn eta_scales_with_distance() {
        // 40 km at 40 km/h is one hour
        assert_eq!(estimate_pickup_eta_ms(40.0), 60 * 60 * 1000);
        assert!(estimate_pickup_eta_ms(1.2) > estimate_pickup_eta_ms(0.8));
    }

    #[test]
    fn fare_includes_base_and_distance() {
        let fare = estimate_fare(0.8);
        assert!(fare >= BASE_FARE, "fare should be at least base fare");
        let expected = BASE_FARE + (0.8 * PER_KM_RATE);
        assert!((fare - expected).abs() < 1e-9, "fare calculation should match formula");
    }

    #[test]
    fn negative_distance_falls_back_to_base_fare() {
        assert_eq!(estimate_fare(-2.0), BASE_FARE);
    }
}
