//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// Install a fmt subscriber honouring `RUST_LOG`, once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Deterministic generator for a test case
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// `1.0, 2.0, ..., n`
pub fn one_to(n: usize) -> Vec<f64> {
    (1..=n).map(|i| i as f64).collect()
}

/// Normal sample with fixed seed
pub fn normal_sample(n: usize, mean: f64, sd: f64, seed: u64) -> Vec<f64> {
    let mut rng = seeded(seed);
    let normal = Normal::new(mean, sd).unwrap();
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}
