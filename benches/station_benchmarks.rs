use chrono::{Duration as ChronoDuration, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pi_weather_station::{dashboard::render, DashboardState, Reading, Stats, StatsMemo};

/// A day of once-a-minute readings, newest first
fn history(count: usize) -> Vec<Reading> {
    let now = Utc::now();
    (0..count)
        .map(|i| Reading {
            id: (count - i) as i64,
            temperature: 40.0 + (i % 17) as f64 * 0.25,
            timestamp: now - ChronoDuration::minutes(i as i64),
        })
        .collect()
}

/// Benchmark statistics over growing histories
fn bench_stats(c: &mut Criterion) {
    for count in [60, 1440, 10080].iter() {
        let readings = history(*count);
        c.bench_with_input(BenchmarkId::new("stats", count), &readings, |b, readings| {
            b.iter(|| Stats::from_readings(readings))
        });
    }
}

/// Benchmark JSON serialization and parsing of the reading list
fn bench_json(c: &mut Criterion) {
    let readings = history(1440);
    let json = serde_json::to_string(&readings).expect("Should serialize");

    c.bench_function("json_serialization", |b| {
        b.iter(|| serde_json::to_string(&readings).expect("Should serialize"))
    });

    c.bench_function("json_deserialization", |b| {
        b.iter(|| serde_json::from_str::<Vec<Reading>>(&json).expect("Should deserialize"))
    });
}

/// Benchmark rendering a populated dashboard
fn bench_render(c: &mut Criterion) {
    let mut state = DashboardState::new();
    state.apply(Ok(history(1440)));
    let mut memo = StatsMemo::new();

    c.bench_function("render_populated", |b| {
        b.iter(|| render(&state.view(&mut memo)))
    });
}

criterion_group!(benches, bench_stats, bench_json, bench_render);
criterion_main!(benches);
