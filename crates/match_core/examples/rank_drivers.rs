//! Rank the demo driver fleet for the demo passenger and print the results.
//!
//! Run with: cargo run -p match_core --example rank_drivers

use match_core::fixtures::{demo_drivers, demo_passenger, demo_time_preference, DEMO_ORIGIN};
use match_core::ranking::rank_candidates;
use match_core::scoring::HeuristicModel;

fn main() {
    let passenger = demo_passenger();
    let drivers = demo_drivers();
    let model = HeuristicModel::default();

    let ranked = rank_candidates(
        &model,
        &passenger,
        DEMO_ORIGIN,
        &demo_time_preference(),
        &drivers,
    );

    println!(
        "--- Candidate ranking for {} ({} drivers) ---",
        passenger.name,
        drivers.len()
    );
    for (i, m) in ranked.iter().enumerate() {
        let driver = drivers
            .iter()
            .find(|d| d.id == m.driver_id)
            .expect("ranked ids come from the candidate set");
        let eta_min = (m.pickup_eta_ms as f64 / 60_000.0).ceil() as u64;
        println!(
            "  {}. {}% match  {} ({:.1}) - {}  {:.1} km away, ~{} min, est. Rs {:.0}",
            i + 1,
            m.confidence(),
            driver.name,
            driver.rating,
            driver.vehicle.model,
            m.pickup_distance_km,
            eta_min,
            m.fare_estimate,
        );
        println!(
            "       distance {:.1} / rating {:.1} / schedule {:.1}",
            m.breakdown.distance_score, m.breakdown.rating_score, m.breakdown.schedule_score,
        );
    }
}
