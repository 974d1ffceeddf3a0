use crate::geo::{planar_degree_distance, GeoPoint};
use crate::profiles::TimePreference;

use super::model::ConfidenceModel;
use super::schedule::{RandomizedSchedule, ScheduleCompatibility};
use super::types::ConfidenceBreakdown;

/// Scale factor converting planar degree distance into the 0–100 distance
/// penalty. Any separation beyond 0.1 degree (~11 km at the equator)
/// collapses the distance score to 0. Behavioral tuning knob; changing it
/// changes every ranking downstream.
pub const DISTANCE_SENSITIVITY: f64 = 1000.0;

/// Maps the summed 0–5 ratings onto a 0–100 scale.
pub const RATING_SCALE: f64 = 10.0;

/// Upper bound of the confidence range.
pub const MAX_CONFIDENCE: f64 = 100.0;

/// Heuristic confidence model: unweighted average of distance, rating, and
/// schedule sub-scores.
///
/// # Algorithm
///
/// 1. `distance = sqrt(dLat² + dLng²)` (planar degrees)
/// 2. `distance_score = max(0, 100 - distance * 1000)`
/// 3. `rating_score = (driver_rating + passenger_rating) * 10`
/// 4. `schedule_score` from the injected [`ScheduleCompatibility`]
/// 5. `confidence = round((distance_score + rating_score + schedule_score) / 3)`,
///    clamped to 100
///
/// Rounding is half-away-from-zero (`f64::round`). With the default
/// randomized schedule term, repeated calls on identical inputs can return
/// different confidences; inject [`super::FixedSchedule`] for end-to-end
/// determinism.
#[derive(Debug)]
pub struct HeuristicModel {
    schedule: Box<dyn ScheduleCompatibility>,
}

impl HeuristicModel {
    pub fn new(schedule: Box<dyn ScheduleCompatibility>) -> Self {
        Self { schedule }
    }

    /// Randomized schedule term with a reproducible sequence.
    pub fn with_schedule_seed(seed: u64) -> Self {
        Self::new(Box::new(RandomizedSchedule::seeded(seed)))
    }
}

impl Default for HeuristicModel {
    fn default() -> Self {
        Self::new(Box::new(RandomizedSchedule::new()))
    }
}

impl ConfidenceModel for HeuristicModel {
    fn score(
        &self,
        driver_location: GeoPoint,
        passenger_location: GeoPoint,
        time_preference: &TimePreference,
        driver_rating: f64,
        passenger_rating: f64,
    ) -> ConfidenceBreakdown {
        let distance = planar_degree_distance(driver_location, passenger_location);
        let distance_score = (MAX_CONFIDENCE - distance * DISTANCE_SENSITIVITY).max(0.0);
        let rating_score = (driver_rating + passenger_rating) * RATING_SCALE;
        let schedule_score = self.schedule.compatibility(time_preference);

        let average = (distance_score + rating_score + schedule_score) / 3.0;
        // Saturating f64 -> u8 cast floors negative averages at 0
        let confidence = average.round().min(MAX_CONFIDENCE) as u8;

        ConfidenceBreakdown {
            distance_score,
            rating_score,
            schedule_score,
            confidence,
        }
    }
}
