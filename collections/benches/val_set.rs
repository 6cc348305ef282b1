use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use valset::ValSet;

fn insert_remove(values: &[u32]) -> usize {
    let mut set = ValSet::new();
    for &v in values {
        set.add(v);
    }
    let len = set.len();
    for &v in values {
        set.remove(&v);
    }
    len
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(79837224973);

    for &n in &[20, 100, 1000] {
        let values: Vec<u32> = (0..n).map(|_| rng.random_range(0..n as u32)).collect();
        let name = format!("valset-insert-remove-{n}");
        c.bench_function(&name, |b| b.iter(|| insert_remove(black_box(&values))));

        let a: ValSet<u32> = (0..n).map(|_| rng.random_range(0..n as u32)).collect();
        let other: ValSet<u32> = (0..n).map(|_| rng.random_range(0..n as u32)).collect();
        c.bench_function(&format!("valset-union-{n}"), |b| b.iter(|| black_box(&a) + black_box(&other)));
        c.bench_function(&format!("valset-intersection-{n}"), |b| {
            b.iter(|| black_box(&a) * black_box(&other))
        });
        c.bench_function(&format!("valset-symmetric-difference-{n}"), |b| {
            b.iter(|| black_box(&a) / black_box(&other))
        });
    }
}

criterion_group!(benches, criterion_benchmark);

criterion_main!(benches);
