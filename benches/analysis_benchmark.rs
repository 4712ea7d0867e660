/// Benchmarks for loading, aggregating and charting the show data.
use criterion::{criterion_group, criterion_main, Criterion};
use hotones_dashboard::analysis::{clear_session_cache, load_data, load_data_cached, DashboardAggregates};
use hotones_dashboard::plotting::render_charts;
use hotones_dashboard::{DashboardConfig, DataPaths};
use std::fmt::Write;
use std::fs;
use tempfile::TempDir;

const SEASONS: u32 = 20;
const EPISODES_PER_SEASON: u32 = 15;

/// Write a synthetic dataset of `SEASONS` seasons with ten sauces each.
fn setup_large_dataset() -> (TempDir, DataPaths) {
    let temp_dir = TempDir::new().unwrap();

    let mut episodes = String::from("season,episode_overall,title,guest,finished,views\n");
    let mut seasons = String::from("season,episodes,original_release,last_release\n");
    let mut sauces = String::from("season,sauce_number,sauce_name,scoville\n");

    let mut overall = 0;
    for season in 1..=SEASONS {
        writeln!(seasons, "{},{},2015-08-27,2016-01-01", season, EPISODES_PER_SEASON).unwrap();
        for number in 1..=10u32 {
            let scoville = 1500 * u64::from(number).pow(4) + u64::from(season) * 1000;
            writeln!(sauces, "{},{},Sauce {}-{},{}", season, number, season, number, scoville).unwrap();
        }
        for _ in 0..EPISODES_PER_SEASON {
            overall += 1;
            writeln!(
                episodes,
                "{},{},Episode {},Guest {},{},{}",
                season,
                overall,
                overall,
                overall % 120,
                overall % 7 != 0,
                (overall * 7919) % 5_000_000
            )
            .unwrap();
        }
    }

    fs::write(temp_dir.path().join("episodes.csv"), episodes).unwrap();
    fs::write(temp_dir.path().join("seasons.csv"), seasons).unwrap();
    fs::write(temp_dir.path().join("sauces.csv"), sauces).unwrap();
    let paths = DataPaths::in_dir(temp_dir.path());
    (temp_dir, paths)
}

fn bench_load(c: &mut Criterion) {
    let (_dir, paths) = setup_large_dataset();

    c.bench_function("load_data", |b| b.iter(|| load_data(&paths).unwrap()));

    c.bench_function("load_data_cached", |b| {
        clear_session_cache();
        b.iter(|| load_data_cached(&paths).unwrap())
    });
}

fn bench_aggregate_and_render(c: &mut Criterion) {
    let (_dir, paths) = setup_large_dataset();
    let dataset = load_data(&paths).unwrap();
    let config = DashboardConfig::default();

    c.bench_function("compute_aggregates", |b| {
        b.iter(|| DashboardAggregates::compute(&dataset, &config))
    });

    let aggregates = DashboardAggregates::compute(&dataset, &config);
    c.bench_function("render_charts", |b| b.iter(|| render_charts(&aggregates).unwrap()));
}

criterion_group!(benches, bench_load, bench_aggregate_and_render);
criterion_main!(benches);
