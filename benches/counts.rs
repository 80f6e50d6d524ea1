use criterion::*;
use flagsort::utils::get_counts;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

fn counts_benchmark(c: &mut Criterion) {
    let n = 50_000_000;
    let mut rng = StdRng::seed_from_u64(0);
    let inputs: Vec<u32> = (0..n).map(|_| rng.gen()).collect();

    let input_sets: Vec<Vec<u32>> = vec![
        inputs.clone(),
        inputs[..10_000_000].to_vec(),
        inputs[..1_000_000].to_vec(),
        inputs[..100_000].to_vec(),
        inputs[..10_000].to_vec(),
        inputs[..1_000].to_vec(),
    ];

    drop(inputs);

    let mut group = c.benchmark_group("counts");
    group.sample_size(30);
    group.measurement_time(Duration::from_secs(10));
    for set in input_sets.iter() {
        let l = set.len();
        group.throughput(Throughput::Elements(l as u64));
        group.bench_with_input(BenchmarkId::new("get_counts", l), set, |bench, set| {
            bench.iter(|| black_box(get_counts(set, 3, usize::MAX)));
        });

        group.bench_with_input(
            BenchmarkId::new("get_counts_unrolled", l),
            set,
            |bench, set| {
                bench.iter(|| black_box(get_counts(set, 3, 0)));
            },
        );
    }
    group.finish();
}

criterion_group!(counts, counts_benchmark);
criterion_main!(counts);
