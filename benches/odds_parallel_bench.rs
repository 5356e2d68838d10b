//! Matchup estimator: sequential vs. parallel batches.
//!
//! Run with: `cargo bench --bench odds_parallel`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use heroes_vs::battle::WeaponKind;
use heroes_vs::odds::estimate_matchup;
use heroes_vs::parallel::WorkerPool;

fn bench_odds(c: &mut Criterion) {
    let rounds = 200_000u32;
    let mut group = c.benchmark_group("odds");
    group.sample_size(20);
    group.throughput(Throughput::Elements(u64::from(rounds)));

    for workers in [1usize, 0] {
        let label = if workers == 0 { "all_cores" } else { "single" };
        group.bench_with_input(BenchmarkId::new("sword_vs_book", label), &workers, |b, &workers| {
            let pool = WorkerPool::with_workers(workers);
            b.iter(|| {
                estimate_matchup(
                    WeaponKind::Sword,
                    WeaponKind::SpellBook,
                    black_box(rounds),
                    7,
                    &pool,
                )
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_odds);
criterion_main!(benches);
