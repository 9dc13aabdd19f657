//! Criterion benchmarks for square transforms and orbit enumeration.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use squares::rand::{draw_square, ReplayToken, SquareCfg};
use squares::{Square, SquareSymmetries, Symmetries};

fn sample(index: u64) -> Square {
    draw_square(SquareCfg::default(), ReplayToken { seed: 17, index }).unwrap()
}

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("square");
    for &degrees in &[0i32, 90, 45] {
        group.bench_with_input(BenchmarkId::new("rotate_by", degrees), &degrees, |b, &d| {
            b.iter_batched(
                || sample(1),
                |sq| {
                    let _r = sq.rotate_by(d);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.bench_function("translate_by", |b| {
        let sq = sample(2);
        b.iter(|| sq.translate_by(1.25, -3.5))
    });
    group.finish();
}

fn bench_symmetries(c: &mut Criterion) {
    let mut group = c.benchmark_group("symmetries");
    group.bench_function("symmetries_of", |b| {
        let sq = sample(3);
        b.iter(|| SquareSymmetries.symmetries_of(&sq))
    });
    group.bench_function("are_symmetric_miss", |b| {
        let sq = sample(4);
        let other = sq.translate_by(0.25, 0.0);
        b.iter(|| SquareSymmetries.are_symmetric(&sq, &other))
    });
    group.finish();
}

criterion_group!(benches, bench_transforms, bench_symmetries);
criterion_main!(benches);
