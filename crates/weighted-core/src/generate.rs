//! Seeded random inputs for large comparisons and benchmarks

use crate::matrix::element_count;
use crate::{Error, Matrix, Result};
use rand::distributions::{Distribution, Uniform};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// `len` values drawn uniformly from `[0, 1)`
pub fn random_vector(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Uniform::new(0.0, 1.0).sample_iter(&mut rng).take(len).collect()
}

/// `len` values drawn uniformly from `[low, high)`
///
/// # Errors
/// `InvalidParameter` unless `low < high` and both are finite.
pub fn random_uniform(len: usize, low: f64, high: f64, seed: u64) -> Result<Vec<f64>> {
    if !(low.is_finite() && high.is_finite() && low < high) {
        return Err(Error::InvalidParameter(format!(
            "uniform range [{low}, {high}) is empty or not finite"
        )));
    }
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Ok(Uniform::new(low, high).sample_iter(&mut rng).take(len).collect())
}

/// `rows x cols` matrix of values drawn uniformly from `[0, 1)`
///
/// # Errors
/// `InvalidParameter` when `rows * cols` overflows `usize`.
pub fn random_matrix(rows: usize, cols: usize, seed: u64) -> Result<Matrix<f64>> {
    let len = element_count(rows, cols)?;
    Matrix::from_vec(rows, cols, random_vector(len, seed))
}
