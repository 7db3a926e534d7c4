//! Benchmarks for encoding and scoring.
//!
//! Run with: cargo bench --package scoring
//!
//! Uses a synthetic catalog so the benches need no data files.

use catalog::{Catalog, HospitalityLevel, TicketPackage, UserPreferences};
use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use encoder::{Embedder, RuleBasedEmbedder};
use scoring::{
    AttributeStrategy, LinearScanStrategy, RankRequest, ScoringStrategy, VectorCache,
};
use std::sync::Arc;

const CITIES: &[&str] = &["New York", "Los Angeles", "Chicago", "Boston", "Miami"];
const SPORTS: &[&str] = &["Basketball", "Football", "Baseball", "Hockey"];

fn synthetic_catalog(count: u32) -> Catalog {
    let packages = (0..count)
        .map(|i| TicketPackage {
            id: i + 1,
            price: 50.0 + (i % 20) as f32 * 45.0,
            venue: format!("Venue {}", i % 12),
            event_date: NaiveDate::from_ymd_opt(2026, 1 + (i % 12), 1 + (i % 28)).unwrap(),
            sport: SPORTS[i as usize % SPORTS.len()].to_string(),
            seating_category: "Lower Bowl".to_string(),
            hospitality_type: "Club Lounge".to_string(),
            hospitality_venue: "Concourse".to_string(),
            hospitality_level: Some(HospitalityLevel::Gold),
            location: CITIES[i as usize % CITIES.len()].to_string(),
            available_tickets: i % 60,
            description: "Great seats with a view".to_string(),
        })
        .collect();
    Catalog::from_packages(packages).expect("valid synthetic catalog")
}

fn bench_encode_query(c: &mut Criterion) {
    let embedder = RuleBasedEmbedder::new(NaiveDate::from_ymd_opt(2026, 8, 8).unwrap());

    c.bench_function("encode_query", |b| {
        b.iter(|| {
            let vector = embedder
                .encode_query(black_box("VIP basketball in New York for 4 people under $500"))
                .unwrap();
            black_box(vector)
        })
    });
}

fn bench_build_vector_cache(c: &mut Criterion) {
    let catalog = synthetic_catalog(1000);
    let embedder = RuleBasedEmbedder::new(NaiveDate::from_ymd_opt(2026, 8, 8).unwrap());

    c.bench_function("build_vector_cache_1000", |b| {
        b.iter(|| {
            let cache = VectorCache::build(black_box(&catalog), &embedder);
            black_box(cache)
        })
    });
}

fn bench_linear_scan(c: &mut Criterion) {
    let catalog = synthetic_catalog(1000);
    let embedder: Arc<dyn Embedder> = Arc::new(RuleBasedEmbedder::new(
        NaiveDate::from_ymd_opt(2026, 8, 8).unwrap(),
    ));
    let cache = Arc::new(VectorCache::build(&catalog, embedder.as_ref()));
    let strategy = LinearScanStrategy::new(cache, embedder);
    let request = RankRequest::Query("basketball in chicago this weekend".to_string());

    c.bench_function("linear_scan_1000", |b| {
        b.iter(|| {
            let scored = strategy.score(black_box(&request), &catalog).unwrap();
            black_box(scored)
        })
    });
}

fn bench_attribute_match(c: &mut Criterion) {
    let catalog = synthetic_catalog(1000);
    let strategy = AttributeStrategy::new();
    let request = RankRequest::Preferences(UserPreferences {
        location: Some("Chicago".to_string()),
        sport: Some("Hockey".to_string()),
        party_size: Some(4),
        ..Default::default()
    });

    c.bench_function("attribute_match_1000", |b| {
        b.iter(|| {
            let scored = strategy.score(black_box(&request), &catalog).unwrap();
            black_box(scored)
        })
    });
}

criterion_group!(
    benches,
    bench_encode_query,
    bench_build_vector_cache,
    bench_linear_scan,
    bench_attribute_match
);
criterion_main!(benches);
