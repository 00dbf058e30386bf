use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use kth_largest::select::Algorithm;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn random_input(rng: &mut ChaCha20Rng, size: usize) -> Vec<i64> {
    (0..size).map(|_| rng.gen_range(1..=size as i64)).collect()
}

fn bench_selection(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    for size in SIZES {
        let input = random_input(&mut rng, size);
        let mut group = c.benchmark_group(format!("kth largest: n={size}"));
        for k in [1, (size / 2).max(1), size] {
            for algorithm in Algorithm::ALL {
                group.bench_with_input(
                    BenchmarkId::new(algorithm.name(), k),
                    &k,
                    |b, &k| {
                        b.iter_batched(
                            || input.clone(),
                            |mut nums| black_box(algorithm.select(&mut nums, k, &mut rng)),
                            BatchSize::SmallInput,
                        )
                    },
                );
            }
        }
        group.finish();
    }
}

criterion_group!(benches, bench_selection);
criterion_main!(benches);
