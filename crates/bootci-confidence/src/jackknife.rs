//! Leave-one-out jackknife
//!
//! The jackknife values feed the BCa acceleration estimate. Deletions are
//! grouped into blocks so each task reuses one workspace.

use crate::bootstrap::DEFAULT_CHUNK_SIZE;
use bootci_core::{CancellationToken, Error, ExecutionEngine, ResampleWorkspace, Result};
use bootci_statistic::SampleStatistic;
use tracing::{debug, instrument};

/// Statistic of the sample with each observation deleted in turn
///
/// Entry `i` is the statistic of `sample` without element `i`, so the output
/// has the same length and order as the input.
#[instrument(skip_all, fields(n = sample.len(), statistic = statistic.name()))]
pub fn jackknife_values<E, S>(
    engine: &E,
    sample: &[f64],
    statistic: &S,
    cancellation: Option<&CancellationToken>,
) -> Result<Vec<f64>>
where
    E: ExecutionEngine,
    S: SampleStatistic,
{
    let n = sample.len();
    if n < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: n,
        });
    }

    let n_blocks = n.div_ceil(DEFAULT_CHUNK_SIZE);
    let blocks = engine.execute_batch(n_blocks, |block| -> Result<Vec<f64>> {
        let start = block * DEFAULT_CHUNK_SIZE;
        let end = (start + DEFAULT_CHUNK_SIZE).min(n);
        let mut workspace = ResampleWorkspace::with_capacity(n);
        let mut values = Vec::with_capacity(end - start);

        for skip in start..end {
            if cancellation.is_some_and(CancellationToken::is_cancelled) {
                return Err(Error::Cancelled { requested: n });
            }
            let remaining = workspace.leave_one_out(sample, skip);
            values.push(statistic.evaluate_in_place(remaining));
        }
        Ok(values)
    });

    let mut values = Vec::with_capacity(n);
    for block in blocks {
        values.extend(block?);
    }

    debug!(n_values = values.len(), "jackknife completed");
    Ok(values)
}

/// BCa acceleration from jackknife values
///
/// `a = sum((mean - J_i)^3) / (6 * (sum((mean - J_i)^2))^1.5)`
///
/// Fails with a computation error when every jackknife value is equal, since
/// the denominator is then zero.
pub fn acceleration(jackknife: &[f64]) -> Result<f64> {
    if jackknife.is_empty() {
        return Err(Error::InvalidInput("No jackknife values".to_string()));
    }

    let n = jackknife.len() as f64;
    let jack_mean = jackknife.iter().sum::<f64>() / n;

    let (sum_sq, sum_cube) = jackknife.iter().fold((0.0, 0.0), |(sq, cube), &j| {
        let d = jack_mean - j;
        (sq + d * d, cube + d * d * d)
    });

    if sum_sq == 0.0 {
        return Err(Error::Computation(
            "Jackknife values have zero variance; acceleration is undefined".to_string(),
        ));
    }

    let a = sum_cube / (6.0 * sum_sq.powf(1.5));
    if !a.is_finite() {
        return Err(Error::Computation(format!("Acceleration is not finite: {a}")));
    }
    Ok(a)
}
