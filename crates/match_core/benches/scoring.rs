//! Performance benchmarks for match_core using Criterion.rs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use match_core::fixtures::{demo_passenger, DEMO_ORIGIN};
use match_core::geo::GeoPoint;
use match_core::profiles::{DriverCandidate, DriverId, TimePreference, Vehicle};
use match_core::ranking::rank_candidates;
use match_core::scoring::{ConfidenceModel, FixedSchedule, HeuristicModel};

fn random_fleet(count: usize, seed: u64) -> Vec<DriverCandidate> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| DriverCandidate {
            id: DriverId(i as u64),
            name: format!("Driver {}", i),
            rating: rng.gen_range(3.0..=5.0),
            position: GeoPoint::new(
                DEMO_ORIGIN.lat + rng.gen_range(-0.05..=0.05),
                DEMO_ORIGIN.lng + rng.gen_range(-0.05..=0.05),
            ),
            vehicle: Vehicle {
                model: "Bench Car".to_string(),
                plate: format!("KA 00 BM {:04}", i),
            },
            phone: String::new(),
        })
        .collect()
}

fn bench_single_score(c: &mut Criterion) {
    let model = HeuristicModel::new(Box::new(FixedSchedule(90.0)));
    let pref = TimePreference::now();
    let driver = GeoPoint::new(12.9500, 77.6000);

    c.bench_function("single_score", |b| {
        b.iter(|| {
            black_box(model.score(
                black_box(driver),
                black_box(DEMO_ORIGIN),
                &pref,
                black_box(4.7),
                black_box(4.8),
            ))
        });
    });
}

fn bench_rank_candidates(c: &mut Criterion) {
    let model = HeuristicModel::new(Box::new(FixedSchedule(90.0)));
    let passenger = demo_passenger();
    let pref = TimePreference::now();

    let mut group = c.benchmark_group("rank_candidates");
    for count in [10usize, 100, 1000] {
        let fleet = random_fleet(count, 42);
        group.bench_with_input(BenchmarkId::from_parameter(count), &fleet, |b, fleet| {
            b.iter(|| {
                black_box(rank_candidates(
                    &model,
                    &passenger,
                    DEMO_ORIGIN,
                    &pref,
                    fleet,
                ))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_score, bench_rank_candidates);
criterion_main!(benches);
