use crate::geo::GeoPoint;
use crate::profiles::TimePreference;

use super::types::ConfidenceBreakdown;

/// Trait for models that score how well a driver matches a passenger.
///
/// A confidence model combines proximity, reputation, and
/// schedule-compatibility signals into a single 0–100 confidence value that
/// downstream ranking and display use to order candidates.
///
/// # Examples
///
/// ```
/// use match_core::geo::GeoPoint;
/// use match_core::profiles::TimePreference;
/// use match_core::scoring::{ConfidenceModel, FixedSchedule, HeuristicModel};
///
/// let model = HeuristicModel::new(Box::new(FixedSchedule(90.0)));
/// let confidence = model.confidence(
///     GeoPoint::new(12.9716, 77.5946),
///     GeoPoint::new(12.9716, 77.5946),
///     &TimePreference::now(),
///     4.9,
///     4.8,
/// );
/// assert_eq!(confidence, 96);
/// ```
pub trait ConfidenceModel: Send + Sync {
    /// Score a single driver/passenger pairing.
    ///
    /// Ratings are on a 0–5 scale and accepted as-is; out-of-range values do
    /// not error (the final confidence is clamped to [0, 100]). The call is
    /// side-effect free and holds no cross-call state, so scoring N
    /// candidates concurrently is safe.
    fn score(
        &self,
        driver_location: GeoPoint,
        passenger_location: GeoPoint,
        time_preference: &TimePreference,
        driver_rating: f64,
        passenger_rating: f64,
    ) -> ConfidenceBreakdown;

    /// Convenience: the final confidence value without the breakdown.
    fn confidence(
        &self,
        driver_location: GeoPoint,
        passenger_location: GeoPoint,
        time_preference: &TimePreference,
        driver_rating: f64,
        passenger_rating: f64,
    ) -> u8 {
        self.score(
            driver_location,
            passenger_location,
            time_preference,
            driver_rating,
            passenger_rating,
        )
        .confidence
    }
}
