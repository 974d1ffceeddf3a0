//! Profile and candidate data consumed by scoring and ranking.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DriverId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PassengerId(pub u64);

/// Desired pickup window as an opaque token (e.g. `"now"`, `"today 18:00"`).
///
/// Carried through scoring but not parsed: the shipping schedule model does
/// not inspect its content. Kept as a dedicated type so a real
/// schedule-compatibility calculation can start interpreting it without an
/// API change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePreference(String);

impl TimePreference {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Immediate pickup, the most common preference.
    pub fn now() -> Self {
        Self::new("now")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TimePreference {
    fn default() -> Self {
        Self::now()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub model: String,
    pub plate: String,
}

/// A driver offered to the ranking step as a potential match.
///
/// `rating` is on a 0–5 scale and is accepted as-is; out-of-range values are
/// not rejected here (the confidence formula clamps its output instead).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverCandidate {
    pub id: DriverId,
    pub name: String,
    pub rating: f64,
    pub position: GeoPoint,
    pub vehicle: Vehicle,
    pub phone: String,
}

/// The passenger requesting a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassengerProfile {
    pub id: PassengerId,
    pub name: String,
    pub rating: f64,
    pub total_trips: u32,
    pub verified: bool,
}
