//! Demo fixtures: a small Bengaluru driver fleet and a passenger profile.
//!
//! Shared by the example binary, benchmarks, and integration tests so they
//! all exercise the same data.

use crate::geo::GeoPoint;
use crate::profiles::{
    DriverCandidate, DriverId, PassengerId, PassengerProfile, TimePreference, Vehicle,
};

/// Default search origin for the demo fleet (central Bengaluru).
pub const DEMO_ORIGIN: GeoPoint = GeoPoint {
    lat: 12.9716,
    lng: 77.5946,
};

pub fn demo_passenger() -> PassengerProfile {
    PassengerProfile {
        id: PassengerId(1),
        name: "John Doe".to_string(),
        rating: 4.8,
        total_trips: 42,
        verified: true,
    }
}

pub fn demo_time_preference() -> TimePreference {
    TimePreference::now()
}

/// Three demo drivers at varying distances from [`DEMO_ORIGIN`].
pub fn demo_drivers() -> Vec<DriverCandidate> {
    vec![
        DriverCandidate {
            id: DriverId(1),
            name: "Sarah Wilson".to_string(),
            rating: 4.9,
            position: GeoPoint::new(12.9716, 77.5946),
            vehicle: Vehicle {
                model: "Honda City".to_string(),
                plate: "KA 01 AB 1234".to_string(),
            },
            phone: "+91 9876543211".to_string(),
        },
        DriverCandidate {
            id: DriverId(2),
            name: "Mike Johnson".to_string(),
            rating: 4.7,
            position: GeoPoint::new(12.9500, 77.6000),
            vehicle: Vehicle {
                model: "Toyota Camry".to_string(),
                plate: "KA 02 CD 5678".to_string(),
            },
            phone: "+91 9876543212".to_string(),
        },
        DriverCandidate {
            id: DriverId(3),
            name: "Emily Chen".to_string(),
            rating: 4.8,
            position: GeoPoint::new(12.9800, 77.5800),
            vehicle: Vehicle {
                model: "Maruti Swift".to_string(),
                plate: "KA 03 EF 9012".to_string(),
            },
            phone: "+91 9876543213".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_drivers_have_unique_ids() {
        let drivers = demo_drivers();
        let mut ids: Vec<DriverId> = drivers.iter().map(|d| d.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), drivers.len());
    }

    #[test]
    fn demo_data_round_trips_through_json() {
        let drivers = demo_drivers();
        let json = serde_json::to_string(&drivers).expect("serialize");
        let back: Vec<DriverCandidate> = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, drivers);
    }
}
