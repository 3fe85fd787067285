//! Benchmark command
//!
//! Times the solver on a batch of random secret codes, one game at a time.

use super::test_all::{BatchConfig, TestAllStatistics, summarize, test_code};
use crate::core::Code;
use rand::Rng;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub stats: TestAllStatistics,
    pub duration: Duration,
    pub codes_per_second: f64,
}

/// Draw `count` random secret codes
pub fn random_codes<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Code> {
    (0..count).map(|_| Code::random(rng)).collect()
}

/// Run benchmark on a set of secret codes
///
/// Unlike `run_test_all`, games run sequentially so the timing reflects the
/// cost of a single solve.
#[must_use]
pub fn run_benchmark(secrets: &[Code], config: BatchConfig) -> BenchmarkResult {
    let start = Instant::now();

    let results: Vec<_> = secrets
        .iter()
        .map(|&secret| test_code(secret, config))
        .collect();

    let duration = start.elapsed();
    let codes_per_second = if duration.is_zero() {
        0.0
    } else {
        secrets.len() as f64 / duration.as_secs_f64()
    };

    BenchmarkResult {
        stats: summarize(&results, duration),
        duration,
        codes_per_second,
    }
}
