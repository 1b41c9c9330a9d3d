//! Criterion benchmarks for the simulation hot path.
//!
//! Benchmarks:
//! 1. A full one-year run (252 ticks) with DRIP on and off
//! 2. A single tick over a multi-ticker price map

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chrono::NaiveDate;
use paperfolio_core::domain::{
    Difficulty, PendingTrade, PriceData, PricePoint, Scenario, TradeAction, TradeSource,
};
use paperfolio_core::engine::{
    advance_tick, Granularity, SimulationConfig, SimulationMode, SimulationState,
};

fn make_series(days: usize, base: f64) -> Vec<PricePoint> {
    let start = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
    (0..days)
        .map(|i| {
            let close = base + (i as f64 * 0.1).sin() * base * 0.05;
            PricePoint {
                date: start + chrono::Duration::days(i as i64),
                open: close - 0.3,
                high: close + 1.5,
                low: close - 1.5,
                close,
                volume: 1_000_000,
            }
        })
        .collect()
}

fn make_prices(days: usize) -> PriceData {
    PriceData::from([
        ("SPY".to_string(), make_series(days, 100.0)),
        ("NVDA".to_string(), make_series(days, 250.0)),
        ("BTC".to_string(), make_series(days, 30_000.0)),
    ])
}

fn make_state(drip: bool) -> SimulationState {
    let mut state = SimulationState::new(SimulationConfig {
        starting_capital: 100_000.0,
        scenario: Scenario {
            slug: "bench".into(),
            name: "Bench".into(),
            start_date: NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2020, 12, 31).unwrap(),
            description: String::new(),
            snark_description: String::new(),
            color: "blue".into(),
            difficulty: Difficulty::Medium,
            risk_free_rate: 0.02,
            events: Vec::new(),
        },
        allocations: Vec::new(),
        rules: Vec::new(),
        mode: SimulationMode::Movie,
        granularity: Granularity::Daily,
        drip,
    });
    state.pending_trades = vec![
        PendingTrade {
            ticker: "SPY".into(),
            action: TradeAction::Buy,
            amount: 40_000.0,
            source: TradeSource::Manual,
        },
        PendingTrade {
            ticker: "NVDA".into(),
            action: TradeAction::Buy,
            amount: 30_000.0,
            source: TradeSource::Manual,
        },
    ];
    state
}

fn bench_full_year(c: &mut Criterion) {
    let prices = make_prices(252);
    let mut group = c.benchmark_group("full_year_run");
    for drip in [false, true] {
        group.bench_with_input(
            BenchmarkId::new("drip", drip),
            &drip,
            |b, &drip| {
                b.iter(|| {
                    let mut state = make_state(drip);
                    while !state.is_complete {
                        state = advance_tick(&state, black_box(&prices));
                    }
                    black_box(state.portfolio.total_value)
                })
            },
        );
    }
    group.finish();
}

fn bench_single_tick(c: &mut Criterion) {
    let prices = make_prices(252);
    let state = make_state(true);
    c.bench_function("single_tick", |b| {
        b.iter(|| advance_tick(black_box(&state), black_box(&prices)))
    });
}

criterion_group!(benches, bench_full_year, bench_single_tick);
criterion_main!(benches);
