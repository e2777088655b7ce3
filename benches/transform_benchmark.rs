//! Benchmarks for the record transformations.

use coinframe::core::{Field, Record};
use coinframe::transform::{
    daily_percent_change_by_coin, join_by_date_coin, normalize_by_coin, rolling_average_by_coin,
    top_n_by_market_cap,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const COINS: [&str; 8] = ["BTC", "ETH", "SOL", "ADA", "XRP", "DOT", "AVAX", "LINK"];

/// Generate `days` of records for every coin, in shuffled order.
fn generate_records(days: usize, seed: u64) -> Vec<Record> {
    let mut rng = StdRng::seed_from_u64(seed);
    let base = chrono::NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date");

    let mut records: Vec<Record> = (0..days)
        .flat_map(|d| {
            let date = (base + chrono::Duration::days(d as i64))
                .format("%Y-%m-%d")
                .to_string();
            COINS
                .iter()
                .map(|coin| {
                    Record::new(
                        date.clone(),
                        *coin,
                        rng.gen_range(1.0..50_000.0),
                        rng.gen_range(1e3..1e9),
                        rng.gen_range(1e6..1e12),
                    )
                })
                .collect::<Vec<_>>()
        })
        .collect();
    records.shuffle(&mut rng);
    records
}

fn bench_windowed(c: &mut Criterion) {
    let mut group = c.benchmark_group("windowed");

    for days in [30, 365, 1825].iter() {
        let records = generate_records(*days, 42);

        group.bench_with_input(BenchmarkId::new("rolling_average", days), days, |b, _| {
            b.iter(|| rolling_average_by_coin(black_box(&records), Field::Price.accessor(), 7))
        });

        group.bench_with_input(BenchmarkId::new("percent_change", days), days, |b, _| {
            b.iter(|| daily_percent_change_by_coin(black_box(&records), Field::Price.accessor()))
        });

        group.bench_with_input(BenchmarkId::new("normalize", days), days, |b, _| {
            b.iter(|| normalize_by_coin(black_box(&records), Field::Price.accessor()))
        });
    }

    group.finish();
}

fn bench_join_and_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("join_and_rank");

    for days in [30, 365, 1825].iter() {
        let left = generate_records(*days, 7);
        let right = generate_records(*days, 8);

        group.bench_with_input(BenchmarkId::new("join_by_date_coin", days), days, |b, _| {
            b.iter(|| join_by_date_coin(black_box(&left), black_box(&right)))
        });

        group.bench_with_input(BenchmarkId::new("top_n", days), days, |b, _| {
            b.iter(|| top_n_by_market_cap(black_box(&left), 5))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_windowed, bench_join_and_rank);
criterion_main!(benches);
