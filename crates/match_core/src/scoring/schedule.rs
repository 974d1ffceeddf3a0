//! Schedule-compatibility term of the confidence formula.
//!
//! The shipping implementation is a randomized placeholder: it samples
//! uniformly from [80, 100) and ignores the time preference's content.
//! Replacing it with a real time-window overlap calculation is a product
//! decision that has not been taken; callers needing determinism inject
//! [`FixedSchedule`] or a seeded [`RandomizedSchedule`].

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::profiles::TimePreference;

/// Floor of the placeholder compatibility range.
pub const SCHEDULE_FLOOR: f64 = 80.0;

/// Width of the placeholder range; samples land in
/// `[SCHEDULE_FLOOR, SCHEDULE_FLOOR + SCHEDULE_SPAN)`.
pub const SCHEDULE_SPAN: f64 = 20.0;

/// Trait for the schedule-compatibility sub-score.
pub trait ScheduleCompatibility: Send + Sync + std::fmt::Debug {
    /// Compatibility score for the given pickup preference.
    ///
    /// The shipping implementation does not inspect `preference`; it is
    /// passed through so real implementations can.
    fn compatibility(&self, preference: &TimePreference) -> f64;
}

/// Uniform random compatibility in [80, 100).
///
/// Unseeded instances draw from the thread RNG, so repeated calls with
/// identical inputs yield different scores. Seeded instances produce a
/// reproducible sequence (`StdRng`), useful for replayable demos and tests.
#[derive(Debug)]
pub struct RandomizedSchedule {
    rng: Option<Mutex<StdRng>>,
}

impl RandomizedSchedule {
    pub fn new() -> Self {
        Self { rng: None }
    }

    /// Reproducible sequence from the given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Some(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }
}

impl Default for RandomizedSchedule {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleCompatibility for RandomizedSchedule {
    fn compatibility(&self, _preference: &TimePreference) -> f64 {
        let u: f64 = match &self.rng {
            Some(rng) => match rng.lock() {
                Ok(mut guard) => guard.gen(),
                // Fallback: sample without the seeded stream if the mutex is poisoned
                Err(_) => rand::thread_rng().gen(),
            },
            None => rand::thread_rng().gen(),
        };
        SCHEDULE_FLOOR + u * SCHEDULE_SPAN
    }
}

/// Pins the schedule term to a constant.
///
/// Used by tests and benchmarks, and by callers that need the confidence
/// value to be deterministic end-to-end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSchedule(pub f64);

impl ScheduleCompatibility for FixedSchedule {
    fn compatibility(&self, _preference: &TimePreference) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn randomized_stays_in_range() {
        let schedule = RandomizedSchedule::new();
        let pref = TimePreference::now();
        for _ in 0..1000 {
            let score = schedule.compatibility(&pref);
            assert!(
                (SCHEDULE_FLOOR..SCHEDULE_FLOOR + SCHEDULE_SPAN).contains(&score),
                "score {} outside [80, 100)",
                score
            );
        }
    }

    #[test]
    fn seeded_sequences_are_reproducible() {
        let a = RandomizedSchedule::seeded(42);
        let b = RandomizedSchedule::seeded(42);
        let pref = TimePreference::now();
        for _ in 0..10 {
            assert_eq!(a.compatibility(&pref), b.compatibility(&pref));
        }
    }

    #[test]
    fn fixed_returns_its_value() {
        let schedule = FixedSchedule(87.5);
        assert_eq!(schedule.compatibility(&TimePreference::now()), 87.5);
    }
}
