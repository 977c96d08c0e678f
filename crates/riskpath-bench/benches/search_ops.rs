//! Criterion micro-benchmarks for parse, expansion, and search.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use riskpath_bench::{expanded_profile, puzzle_profile, stress_profile};
use riskpath_map::{expand, Coord, RiskMap};
use riskpath_search::{lowest_total_risk, Search};
use riskpath_test_utils::CANONICAL_MAP;

/// Benchmark: parse the canonical 10x10 text fixture.
fn bench_parse_canonical(c: &mut Criterion) {
    c.bench_function("parse_canonical_10x10", |b| {
        b.iter(|| RiskMap::parse(black_box(CANONICAL_MAP)).unwrap());
    });
}

/// Benchmark: expand the canonical map by factor 5 (100 -> 2,500 cells).
fn bench_expand_factor_5(c: &mut Criterion) {
    let map = puzzle_profile();
    c.bench_function("expand_canonical_x5", |b| {
        b.iter(|| expand(black_box(&map), 5).unwrap());
    });
}

/// Benchmark: corner-to-corner search on the unexpanded fixture.
fn bench_search_puzzle(c: &mut Criterion) {
    let map = puzzle_profile();
    let end = map.bottom_right();
    c.bench_function("search_canonical_10x10", |b| {
        b.iter(|| lowest_total_risk(black_box(&map), Coord::new(0, 0), end).unwrap());
    });
}

/// Benchmark: corner-to-corner search on the factor-5 expansion.
fn bench_search_expanded(c: &mut Criterion) {
    let map = expanded_profile();
    let end = map.bottom_right();
    c.bench_function("search_canonical_50x50", |b| {
        b.iter(|| lowest_total_risk(black_box(&map), Coord::new(0, 0), end).unwrap());
    });
}

/// Benchmark: corner-to-corner search with route recording on a 250K
/// cell random map.
fn bench_search_stress_with_route(c: &mut Criterion) {
    let map = stress_profile(7);
    let end = map.bottom_right();
    c.bench_function("search_random_500x500_route", |b| {
        b.iter(|| {
            Search::new(black_box(&map))
                .record_route(true)
                .run(Coord::new(0, 0), end)
                .unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_parse_canonical,
    bench_expand_factor_5,
    bench_search_puzzle,
    bench_search_expanded,
    bench_search_stress_with_route,
);
criterion_main!(benches);
