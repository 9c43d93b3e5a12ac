use criterion::{criterion_group, criterion_main, Criterion};
use domino_core::DominoGroup;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_full_set(c: &mut Criterion) {
    c.bench_function("full_set_repeat_4", |b| {
        b.iter(|| DominoGroup::full_set(4).len());
    });
}

fn bench_random_build_and_sort(c: &mut Criterion) {
    c.bench_function("random_1000_sorted", |b| {
        b.iter(|| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            let mut group = DominoGroup::random(1000, &mut rng);
            group.sort();
            group.len()
        });
    });
}

fn bench_partition(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let base = DominoGroup::random(1000, &mut rng);
    c.bench_function("extract_with_pip_1000", |b| {
        b.iter(|| {
            let mut group = base.clone();
            let sixes = group.extract_with_pip(6);
            (group.len(), sixes.len())
        });
    });
}

criterion_group!(
    benches,
    bench_full_set,
    bench_random_build_and_sort,
    bench_partition
);
criterion_main!(benches);
