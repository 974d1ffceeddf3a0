//! Candidate ranking: score a candidate set and order it for display.
//!
//! Scoring each candidate is an independent pure computation; this module is
//! the caller-side step that maps a model over the candidate set, attaches
//! the pickup ETA and fare estimates shown next to each match, and sorts by
//! confidence.

use serde::Serialize;

use crate::geo::{distance_km, GeoPoint};
use crate::pricing::{estimate_fare, estimate_pickup_eta_ms};
use crate::profiles::{DriverCandidate, DriverId, PassengerProfile, TimePreference};
use crate::scoring::{ConfidenceBreakdown, ConfidenceModel};

/// A scored candidate with the values the match list displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedMatch {
    pub driver_id: DriverId,
    pub breakdown: ConfidenceBreakdown,
    /// Haversine pickup distance in km (display value; the confidence
    /// formula uses planar degree distance internally).
    pub pickup_distance_km: f64,
    pub pickup_eta_ms: u64,
    pub fare_estimate: f64,
}

impl RankedMatch {
    pub fn confidence(&self) -> u8 {
        self.breakdown.confidence
    }
}

/// Score every candidate and return them ordered by descending confidence.
///
/// The sort is stable: candidates with equal confidence keep their input
/// order. Candidate ratings and positions are accepted as-is.
pub fn rank_candidates(
    model: &dyn ConfidenceModel,
    passenger: &PassengerProfile,
    passenger_location: GeoPoint,
    time_preference: &TimePreference,
    candidates: &[DriverCandidate],
) -> Vec<RankedMatch> {
    let mut ranked: Vec<RankedMatch> = candidates
        .iter()
        .map(|candidate| {
            let breakdown = model.score(
                candidate.position,
                passenger_location,
                time_preference,
                candidate.rating,
                passenger.rating,
            );
            let pickup_distance_km = distance_km(candidate.position, passenger_location);
            RankedMatch {
                driver_id: candidate.id,
                breakdown,
                pickup_distance_km,
                pickup_eta_ms: estimate_pickup_eta_ms(pickup_distance_km),
                fare_estimate: estimate_fare(pickup_distance_km),
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.breakdown.confidence.cmp(&a.breakdown.confidence));
    ranked
}

/// The single best candidate, if any.
pub fn best_match(
    model: &dyn ConfidenceModel,
    passenger: &PassengerProfile,
    passenger_location: GeoPoint,
    time_preference: &TimePreference,
    candidates: &[DriverCandidate],
) -> Option<RankedMatch> {
    rank_candidates(
        model,
        passenger,
        passenger_location,
        time_preference,
        candidates,
    )
    .into_iter()
    .next()
}
