//! Loop-versus-bulk timing of the same dot product
//!
//! The loop strategy accumulates one product per iteration with explicit
//! indexing. The bulk strategy hands both slices to a compute backend, which
//! multiplies pairwise and reduces in as few passes as the hardware allows.
//! Durations are wall-clock and depend entirely on the host.

use crate::primitives::{best_available_backend, ComputePrimitives};
use crate::{Error, Numeric, Result};
use std::hint::black_box;
use std::time::{Duration, Instant};
use tracing::{info, instrument};

/// Results and elapsed time of both strategies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedComparison {
    pub loop_result: f64,
    pub bulk_result: f64,
    pub loop_elapsed: Duration,
    pub bulk_elapsed: Duration,
    pub backend: &'static str,
}

impl TimedComparison {
    /// The dot product (bulk strategy)
    pub fn result(&self) -> f64 {
        self.bulk_result
    }

    /// Whether both strategies agree up to `rel_tol` relative error
    ///
    /// The two strategies sum in different orders, so exact equality is not
    /// expected.
    pub fn results_agree(&self, rel_tol: f64) -> bool {
        let scale = self.loop_result.abs().max(self.bulk_result.abs()).max(1.0);
        (self.loop_result - self.bulk_result).abs() <= rel_tol * scale
    }

    /// `loop_elapsed / bulk_elapsed`, or `None` when the bulk run was too
    /// fast to measure
    pub fn speedup(&self) -> Option<f64> {
        let bulk = self.bulk_elapsed.as_secs_f64();
        (bulk > 0.0).then(|| self.loop_elapsed.as_secs_f64() / bulk)
    }
}

/// Dot product by explicit indexed accumulation
#[allow(clippy::needless_range_loop)]
pub fn loop_dot_product<T: Numeric>(a: &[T], b: &[T]) -> T::Aggregate {
    let n = a.len().min(b.len());
    let mut total = <T::Aggregate as num_traits::Zero>::zero();
    for i in 0..n {
        total += <T::Aggregate as From<T>>::from(a[i]) * <T::Aggregate as From<T>>::from(b[i]);
    }
    total
}

/// Time the loop strategy against `primitives.dot_product`
///
/// # Errors
/// `LengthMismatch` when `a` and `b` differ in length.
#[instrument(skip_all, fields(len = a.len(), backend = primitives.backend_name()))]
pub fn timed_comparison_with<T, P>(primitives: &P, a: &[T], b: &[T]) -> Result<TimedComparison>
where
    T: Numeric,
    P: ComputePrimitives<T>,
{
    if a.len() != b.len() {
        return Err(Error::length_mismatch(b.len(), a.len(), "timed comparison"));
    }

    let start = Instant::now();
    let loop_result = black_box(loop_dot_product(black_box(a), black_box(b)));
    let loop_elapsed = start.elapsed();

    let start = Instant::now();
    let bulk_result = black_box(primitives.dot_product(black_box(a), black_box(b)));
    let bulk_elapsed = start.elapsed();

    let comparison = TimedComparison {
        loop_result: loop_result.into(),
        bulk_result: bulk_result.into(),
        loop_elapsed,
        bulk_elapsed,
        backend: primitives.backend_name(),
    };

    info!(
        loop_ms = loop_elapsed.as_secs_f64() * 1e3,
        bulk_ms = bulk_elapsed.as_secs_f64() * 1e3,
        speedup = comparison.speedup().unwrap_or(f64::NAN),
        "timed comparison finished"
    );

    Ok(comparison)
}

/// Time the loop strategy against the best available backend
pub fn timed_comparison(a: &[f64], b: &[f64]) -> Result<TimedComparison> {
    timed_comparison_with(&best_available_backend::<f64>(), a, b)
}
