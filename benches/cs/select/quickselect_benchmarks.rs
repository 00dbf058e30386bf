use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use kth_largest::select::randomized_quickselect;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

const SIZES: [usize; 4] = [1_000, 10_000, 100_000, 1_000_000];

fn bench_quickselect_inputs(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let mut group = c.benchmark_group("quickselect: input shape");

    for size in SIZES {
        let random: Vec<u32> = (0..size).map(|_| rng.gen()).collect();
        let sorted: Vec<u32> = (0..size as u32).collect();
        let reversed: Vec<u32> = (0..size as u32).rev().collect();
        let duplicates = vec![7u32; size];

        for (shape, input) in [
            ("random", &random),
            ("sorted", &sorted),
            ("reversed", &reversed),
            ("duplicates", &duplicates),
        ] {
            group.bench_with_input(BenchmarkId::new(shape, size), input, |b, input| {
                b.iter_batched(
                    || input.clone(),
                    |mut nums| {
                        black_box(randomized_quickselect::kth_largest(
                            &mut nums,
                            size / 2,
                            &mut rng,
                        ))
                    },
                    BatchSize::LargeInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_quickselect_inputs);
criterion_main!(benches);
