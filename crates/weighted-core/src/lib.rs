//! Core traits and types for weighted sums
//!
//! This crate provides the layered architecture the rest of the workspace
//! builds on.
//!
//! # Architecture Overview
//!
//! 1. **Layer 1: Primitives** - dot products on scalar or AVX2 backends
//! 2. **Layer 2: Execution Engines** - sequential or Rayon-parallel batches
//! 3. **Layer 3: Kernels** - shape-checked weighted sums over vectors and
//!    matrix rows, plus loop-versus-bulk timing
//!
//! # Example
//!
//! ```rust
//! use weighted_core::{
//!     execution::scalar_sequential, Matrix, WeightedSumKernel,
//! };
//!
//! let kernel = WeightedSumKernel::new(scalar_sequential());
//! let regions = Matrix::from_rows(&[[73.0, 67.0, 43.0], [91.0, 88.0, 64.0]]).unwrap();
//! let yields = kernel.batch_weighted_sum(&regions, &[0.3, 0.2, 0.5]).unwrap();
//!
//! assert!((yields[0] - 56.8).abs() < 1e-9);
//! assert!((yields[1] - 76.9).abs() < 1e-9);
//! ```

pub mod error;
pub mod execution;
#[cfg(feature = "rand")]
pub mod generate;
pub mod kernels;
pub mod matrix;
pub mod numeric;
pub mod primitives;
pub mod timing;

pub use error::{Error, Result};

pub use execution::{
    auto_engine, scalar_sequential, simd_sequential, ExecutionEngine, ExecutionStrategy,
    SequentialEngine,
};
#[cfg(feature = "parallel")]
pub use execution::{scalar_parallel, simd_parallel, ParallelEngine};

pub use primitives::{
    best_available_backend, best_backend_name, scalar_backend, Avx2Backend, ComputePrimitives,
    ScalarBackend, SelectBackend,
};

pub use kernels::{batch_weighted_sum, weighted_sum, ComputeKernel, WeightedSumKernel};
pub use matrix::Matrix;
pub use numeric::Numeric;
pub use timing::{loop_dot_product, timed_comparison, timed_comparison_with, TimedComparison};

#[cfg(feature = "rand")]
pub use generate::{random_matrix, random_uniform, random_vector};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        batch_weighted_sum, timed_comparison, weighted_sum, ComputePrimitives, ExecutionEngine,
        Matrix, Numeric, Result, WeightedSumKernel,
    };

    pub use crate::error::Error;

    #[cfg(feature = "parallel")]
    pub use crate::execution::simd_parallel;
    pub use crate::execution::{scalar_sequential, simd_sequential, ExecutionStrategy};
}
