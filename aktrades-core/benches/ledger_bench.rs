//! Criterion benchmarks for the ledger apply path.
//!
//! Benchmarks:
//! 1. Open/close round trips on a single ticker
//! 2. Bulk exit across a deep FIFO queue
//! 3. Mixed fill stream across many tickers

use aktrades_core::{Fill, Ledger, Side};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// ── Helpers ──────────────────────────────────────────────────────────

fn make_stream(n: usize, tickers: usize) -> Vec<Fill> {
    (0..n)
        .map(|i| {
            let side = if (i / 3) % 2 == 0 { Side::Long } else { Side::Short };
            let price = 100.0 + (i as f64 * 0.1).sin() * 10.0;
            Fill::new(format!("T{}", i % tickers), side, 1 + (i % 7) as i64, price)
        })
        .collect()
}

// ── Benchmarks ───────────────────────────────────────────────────────

fn bench_round_trip(c: &mut Criterion) {
    c.bench_function("ledger_round_trip", |b| {
        b.iter(|| {
            let mut ledger = Ledger::new(20.0);
            ledger.apply(Fill::new("NIFTY", Side::Long, 10, 100.0));
            ledger.apply(Fill::new("NIFTY", Side::Short, 10, 101.0));
            black_box(ledger.running_pnl())
        })
    });
}

fn bench_deep_queue_exit(c: &mut Criterion) {
    let mut group = c.benchmark_group("ledger_deep_queue_exit");
    for depth in [10_usize, 100, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut ledger = Ledger::new(0.0);
                for i in 0..depth {
                    ledger.apply(Fill::new("NIFTY", Side::Long, 1, 100.0 + i as f64));
                }
                ledger.apply(Fill::new("NIFTY", Side::Short, depth as i64, 150.0));
                black_box(ledger.running_pnl())
            })
        });
    }
    group.finish();
}

fn bench_mixed_stream(c: &mut Criterion) {
    let stream = make_stream(10_000, 50);
    c.bench_function("ledger_mixed_stream_10k", |b| {
        b.iter(|| {
            let mut ledger = Ledger::new(20.0);
            for fill in &stream {
                ledger.apply(fill.clone());
            }
            black_box(ledger.net_pnl())
        })
    });
}

criterion_group!(
    benches,
    bench_round_trip,
    bench_deep_queue_exit,
    bench_mixed_stream
);
criterion_main!(benches);
