// Criterion benchmarks for Amora Engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use amora_engine::core::{
    find_users_within_radius, haversine_distance, scoring::interest_similarity,
    CompatibilityEngine,
};
use amora_engine::models::{GeoPoint, UserRecord};

fn create_candidate(id: usize, lat: f64, lon: f64) -> UserRecord {
    UserRecord::new(id.to_string(), format!("User {}", id))
        .with_location(GeoPoint {
            latitude: lat,
            longitude: lon,
        })
        .with_interests(["music", "hiking", "cooking"])
        .with_traits(["open", "curious"])
}

fn bench_haversine_distance(c: &mut Criterion) {
    let a = GeoPoint {
        latitude: 40.7128,
        longitude: -74.0060,
    };
    let b = GeoPoint {
        latitude: 40.72,
        longitude: -74.01,
    };

    c.bench_function("haversine_distance", |bench| {
        bench.iter(|| haversine_distance(black_box(a), black_box(b)));
    });
}

fn bench_interest_similarity(c: &mut Criterion) {
    let a: Vec<String> = ["music", "hiking", "cooking", "chess", "painting"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let b: Vec<String> = ["music", "running", "cooking", "films"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    c.bench_function("interest_similarity", |bench| {
        bench.iter(|| interest_similarity(black_box(&a), black_box(&b)));
    });
}

fn bench_compatibility(c: &mut Criterion) {
    let engine = CompatibilityEngine::with_defaults();
    let a = create_candidate(1, 40.7128, -74.0060);
    let b = create_candidate(2, 40.72, -74.01);

    c.bench_function("compatibility_pair", |bench| {
        bench.iter(|| engine.compatibility(black_box(&a), black_box(&b)));
    });
}

fn bench_nearby(c: &mut Criterion) {
    let target = create_candidate(0, 40.7128, -74.0060);

    let mut group = c.benchmark_group("nearby");

    for candidate_count in [10, 100, 1000].iter() {
        let candidates: Vec<UserRecord> = (1..=*candidate_count)
            .map(|i| {
                let lat_offset = (i as f64 * 0.001) % 0.5;
                let lon_offset = (i as f64 * 0.001) % 0.5;
                create_candidate(i, 40.7128 + lat_offset, -74.0060 + lon_offset)
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(candidate_count),
            &candidates,
            |bench, candidates| {
                bench.iter(|| find_users_within_radius(black_box(&target), candidates, 25.0));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_interest_similarity,
    bench_compatibility,
    bench_nearby
);
criterion_main!(benches);
