//! Merge + sort throughput over synthetic dumps

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use statmerge::{merge_dumps, sort_by_cost, StatRecord};

fn synthetic_dump(rng: &mut StdRng, len: usize, id_space: i64) -> Vec<StatRecord> {
    (0..len)
        .map(|_| StatRecord {
            id: rng.gen_range(0..id_space),
            count: rng.gen_range(-1_000..1_000),
            cost: rng.gen_range(-100.0..100.0),
            primary: rng.gen_bool(0.5),
            mode: rng.gen_range(0..8),
        })
        .collect()
}

fn bench_merge_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_sort");

    for &len in &[1_000usize, 10_000, 100_000] {
        // Half-size id space guarantees plenty of duplicate keys
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        let a = synthetic_dump(&mut rng, len, (len / 2) as i64 + 1);
        let b = synthetic_dump(&mut rng, len, (len / 2) as i64 + 1);

        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bench, _| {
            bench.iter_batched(
                || (a.clone(), b.clone()),
                |(a, b)| {
                    let mut merged = merge_dumps(a, b);
                    sort_by_cost(&mut merged);
                    merged
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_merge_sort);
criterion_main!(benches);
