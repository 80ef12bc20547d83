//! Weighted sums, batched matrix-vector products and delimited-text tables
//!
//! This crate re-exports the workspace members:
//!
//! - [`weighted_core`]: dot products on scalar or AVX2 backends, sequential and
//!   parallel batch engines, weighted-sum kernels and loop-versus-bulk timing
//! - [`weighted_table`]: reading and writing delimited tables and appending derived
//!   weighted-sum columns
//!
//! # Example
//!
//! ```rust
//! use weighted_sum::prelude::*;
//!
//! let regions = Matrix::from_rows(&[[73.0, 67.0, 43.0], [69.0, 96.0, 70.0]]).unwrap();
//! let yields = batch_weighted_sum(&regions, &[0.3, 0.2, 0.5]).unwrap();
//!
//! assert!((yields[0] - 56.8).abs() < 1e-9);
//! assert!((yields[1] - 74.9).abs() < 1e-9);
//! ```

pub use weighted_core;
pub use weighted_table;

pub use weighted_core::{
    batch_weighted_sum, random_matrix, random_vector, timed_comparison, weighted_sum, Matrix,
    TimedComparison, WeightedSumKernel,
};
pub use weighted_table::{
    parse_delimited, read_table, serialize_delimited, write_table, DerivedColumnConfig,
    PipelineConfig, Table, TableConfig,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use weighted_core::prelude::*;
    pub use weighted_table::{
        read_table, serialize_delimited, write_table, PipelineConfig, Table, TableConfig,
    };
}
