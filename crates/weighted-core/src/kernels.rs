//! Weighted-sum kernels
//!
//! Kernels sit between the primitives (one dot product) and callers that
//! think in vectors and matrices. They own an execution engine, validate
//! operand shapes, and turn a matrix-vector product into one independent
//! dot product per row.

use crate::execution::{auto_engine, ExecutionEngine};
use crate::primitives::{best_available_backend, ComputePrimitives};
use crate::{Error, Matrix, Numeric, Result, SelectBackend};
use std::marker::PhantomData;
use tracing::{debug, instrument};

/// Base trait for kernels built on compute primitives
pub trait ComputeKernel<T: Numeric = f64>: Clone + Send + Sync {
    /// The type of primitives used by this kernel
    type Primitives: ComputePrimitives<T>;

    /// Get the primitives used by this kernel
    fn primitives(&self) -> &Self::Primitives;

    /// Name of this kernel for debugging/logging
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Kernel computing weighted sums of vectors and matrix rows
#[derive(Clone)]
pub struct WeightedSumKernel<T: Numeric, E: ExecutionEngine<T>> {
    engine: E,
    _phantom: PhantomData<T>,
}

impl<T: Numeric, E: ExecutionEngine<T>> WeightedSumKernel<T, E> {
    /// Create new kernel
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            _phantom: PhantomData,
        }
    }

    /// The engine driving batch evaluation
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Σ values[i] * weights[i]
    ///
    /// # Errors
    /// `LengthMismatch` when the operands differ in length.
    pub fn weighted_sum(&self, values: &[T], weights: &[T]) -> Result<T::Aggregate> {
        if values.len() != weights.len() {
            return Err(Error::length_mismatch(
                weights.len(),
                values.len(),
                "weighted sum",
            ));
        }
        Ok(self.primitives().dot_product(values, weights))
    }

    /// Weighted sum of every row, in row order
    ///
    /// A matrix without rows yields an empty result for any weight vector.
    ///
    /// # Errors
    /// `ShapeMismatch` when the row length differs from `weights.len()`.
    #[instrument(skip_all, fields(kernel = self.name(), rows = matrix.n_rows(), cols = matrix.n_cols()))]
    pub fn batch_weighted_sum(&self, matrix: &Matrix<T>, weights: &[T]) -> Result<Vec<T::Aggregate>> {
        if matrix.n_rows() == 0 {
            return Ok(Vec::new());
        }
        if matrix.n_cols() != weights.len() {
            return Err(Error::shape_mismatch(
                weights.len(),
                matrix.n_cols(),
                "batch weighted sum",
            ));
        }

        debug!(
            backend = self.primitives().backend_name(),
            strategy = ?self.engine.strategy(),
            "evaluating rows"
        );

        let primitives = self.primitives();
        Ok(self
            .engine
            .execute_batch(matrix.n_rows(), |i| primitives.dot_product(matrix.row(i), weights)))
    }
}

impl<T: Numeric, E: ExecutionEngine<T>> ComputeKernel<T> for WeightedSumKernel<T, E> {
    type Primitives = E::Primitives;

    fn primitives(&self) -> &Self::Primitives {
        self.engine.primitives()
    }

    fn name(&self) -> &'static str {
        "Weighted Sum Kernel"
    }
}

/// Create a kernel for the given execution engine
pub fn create_kernel<T: Numeric, E: ExecutionEngine<T>>(engine: &E) -> WeightedSumKernel<T, E> {
    WeightedSumKernel::new(engine.clone())
}

/// Weighted sum with the best backend for `T`
///
/// ```rust
/// use weighted_core::weighted_sum;
///
/// let apples = weighted_sum(&[73.0f64, 67.0, 43.0], &[0.3, 0.2, 0.5]).unwrap();
/// assert!((apples - 56.8).abs() < 1e-9);
/// ```
pub fn weighted_sum<T: SelectBackend>(values: &[T], weights: &[T]) -> Result<T::Aggregate> {
    if values.len() != weights.len() {
        return Err(Error::length_mismatch(
            weights.len(),
            values.len(),
            "weighted sum",
        ));
    }
    Ok(best_available_backend::<T>().dot_product(values, weights))
}

/// Matrix-vector product on the automatically selected engine
pub fn batch_weighted_sum(matrix: &Matrix<f64>, weights: &[f64]) -> Result<Vec<f64>> {
    WeightedSumKernel::new(auto_engine()).batch_weighted_sum(matrix, weights)
}
