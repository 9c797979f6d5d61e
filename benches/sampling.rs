use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fake_dice::{parse_predicate, rewrite_roll_with, CompareOp, Predicate, RolledDice, RolledDie};
use rand::{rngs::StdRng, SeedableRng};

pub fn benchmark_parsing(c: &mut Criterion) {
    c.bench_function("parse target", |b| b.iter(|| parse_predicate(black_box(">=10"))));
    c.bench_function("parse invalid target", |b| {
        b.iter(|| parse_predicate(black_box("==10")))
    });
}

pub fn benchmark_sampling(c: &mut Criterion) {
    let predicate = Predicate::new(CompareOp::GreaterThanOrEqual, 500);
    c.bench_function("sample d1000", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| predicate.sample_with(black_box(1000), &mut rng));
    });
    c.bench_function("rewrite cursed dice", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(1);
            let mut rolled = RolledDice::new(vec![RolledDie::roll_with(444, 999, &mut rng)], 0);
            rewrite_roll_with(&mut rolled, &predicate, &mut rng);
        });
    });
}

criterion_group!(benches, benchmark_parsing, benchmark_sampling);
criterion_main!(benches);
