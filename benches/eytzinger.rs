use criterion::{Criterion, criterion_group, criterion_main};
use selector::{EytzingerTree, OrderIndex, ceiling};
use std::hint::black_box;

fn benchmark_ceiling(c: &mut Criterion) {
    let sizes = vec![100i32, 1_000, 10_000, 100_000, 1_000_000];

    for size in sizes {
        // Even values only, so odd keys miss and exercise the bound path.
        let data: Vec<i32> = (0..size).map(|v| v * 2).collect();
        let eytz = EytzingerTree::new(&data);
        let index = OrderIndex::new(&data).unwrap();
        let step = (size / 100) as usize;

        let mut group = c.benchmark_group(format!("ceiling_size_{}", size));

        group.bench_function("linear_scan", |b| {
            b.iter(|| {
                for key in (0..size * 2).step_by(step * 2) {
                    black_box(ceiling(&data, key | 1).ok());
                }
            });
        });

        group.bench_function("std_partition_point", |b| {
            b.iter(|| {
                for key in (0..size * 2).step_by(step * 2) {
                    let pos = data.partition_point(|&v| v < (key | 1));
                    black_box(data.get(pos));
                }
            });
        });

        group.bench_function("eytzinger_simple", |b| {
            b.iter(|| {
                for key in (0..size * 2).step_by(step * 2) {
                    black_box(eytz.ceiling(key | 1));
                }
            });
        });

        group.bench_function("eytzinger_branchless", |b| {
            b.iter(|| {
                for key in (0..size * 2).step_by(step * 2) {
                    black_box(eytz.ceiling_branchless(key | 1));
                }
            });
        });

        #[cfg(feature = "nightly")]
        group.bench_function("eytzinger_prefetch", |b| {
            b.iter(|| {
                for key in (0..size * 2).step_by(step * 2) {
                    black_box(eytz.ceiling_prefetch(key | 1));
                }
            });
        });

        group.bench_function("order_index", |b| {
            b.iter(|| {
                for key in (0..size * 2).step_by(step * 2) {
                    black_box(index.ceiling(key | 1).ok());
                }
            });
        });

        group.finish();
    }
}

criterion_group!(benches, benchmark_ceiling);
criterion_main!(benches);
