//! # Kale-Chain Ledger Benchmarks
//!
//! | Operation | Shape |
//! |-----------|-------|
//! | `record_trade` | three-key atomic batch plus profile upsert |
//! | `list_trades_by_trader` | prefix scan plus one lookup per hit |
//! | `list_all_trades` | bounded range scan |
//! | `export_genesis` | full ledger and profile scan |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kc_03_trade_ledger::PageRequest;
use kc_tests::fixtures::{addr, ctx, random_address, seeded_rng, Harness};
use rand::Rng;
use shared_types::Address;

fn populated(trades: usize, traders: &[Address]) -> Harness {
    let mut rng = seeded_rng(7);
    let mut h = Harness::new();
    let mut ctx = ctx(&mut h.store);
    for _ in 0..trades {
        let trader = &traders[rng.gen_range(0..traders.len())];
        h.ledger
            .record_trade_with_profit(&mut ctx, trader, 100_000, rng.gen_range(-50..50))
            .unwrap();
    }
    drop(ctx);
    h
}

fn bench_record_trade(c: &mut Criterion) {
    let mut group = c.benchmark_group("kc-03-record-trade");
    let trader = addr("kale1bench");

    group.bench_function("record_trade_single", |b| {
        let mut h = Harness::new();
        b.iter(|| {
            let mut ctx = ctx(&mut h.store);
            black_box(h.ledger.record_trade(&mut ctx, &trader, 100_000).unwrap())
        })
    });
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("kc-03-queries");
    let mut rng = seeded_rng(11);
    let traders: Vec<Address> = (0..20).map(|_| random_address(&mut rng)).collect();

    for size in [100usize, 1_000, 10_000] {
        let mut h = populated(size, &traders);
        let ctx = ctx(&mut h.store);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("list_trades_by_trader", size), &size, |b, _| {
            b.iter(|| black_box(h.ledger.list_trades_by_trader(&ctx, &traders[0]).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("list_all_trades_page", size), &size, |b, _| {
            b.iter(|| black_box(h.ledger.list_all_trades(&ctx, &PageRequest::first(100)).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("export_genesis", size), &size, |b, _| {
            b.iter(|| black_box(h.genesis.export_genesis(&ctx).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_record_trade, bench_queries);
criterion_main!(benches);
