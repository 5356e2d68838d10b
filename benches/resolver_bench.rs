//! Resolver throughput: single damage rolls and full rounds.
//!
//! Run with: `cargo bench --bench resolver`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use heroes_vs::battle::{resolve_round, roll_damage, CombatantInput, Rng, WeaponKind, WeaponSelection};

fn bench_roll_damage(c: &mut Criterion) {
    let mut group = c.benchmark_group("roll_damage");
    group.throughput(Throughput::Elements(1));
    for weapon in WeaponKind::ALL {
        group.bench_function(weapon.label(), |b| {
            let mut rng = Rng::new(7);
            b.iter(|| roll_damage(black_box(weapon), &mut rng))
        });
    }
    group.finish();
}

fn bench_resolve_round(c: &mut Criterion) {
    let hero = CombatantInput::new("  Zed  ", WeaponSelection::Sword);
    let villain = CombatantInput::new("Roc", WeaponSelection::SpellBook);
    c.bench_function("resolve_round", |b| {
        let mut rng = Rng::new(11);
        b.iter(|| resolve_round(black_box(&hero), black_box(&villain), &mut rng))
    });
}

criterion_group!(benches, bench_roll_damage, bench_resolve_round);
criterion_main!(benches);
