use bootci::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::LogNormal;

/// Right-skewed day-of-year style data
fn generate_skewed_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = LogNormal::new(4.7, 0.1).unwrap();
    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

fn bench_quantile_ci(c: &mut Criterion) {
    let mut group = c.benchmark_group("quantile_ci");
    group.sample_size(10);
    let data = generate_skewed_data(500, 42);

    for method in IntervalMethod::ALL {
        for bootstraps in [1_000, 10_000] {
            let config = CiConfig::default().with_bootstraps(bootstraps).with_method(method);
            group.bench_with_input(
                BenchmarkId::new(method.name(), bootstraps),
                &data,
                |b, data| {
                    b.iter(|| {
                        let mut rng = ChaCha8Rng::seed_from_u64(1);
                        quantile_ci(black_box(data), 0.9, &config, &mut rng)
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_mean_ci(c: &mut Criterion) {
    let mut group = c.benchmark_group("mean_ci");
    group.sample_size(10);

    for size in [50, 1_000, 10_000] {
        let data = generate_skewed_data(size, 7);
        let config = CiConfig::default().with_bootstraps(10_000);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| {
                let mut rng = ChaCha8Rng::seed_from_u64(2);
                mean_ci(black_box(data), &config, &mut rng)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_quantile_ci, bench_mean_ci);
criterion_main!(benches);
