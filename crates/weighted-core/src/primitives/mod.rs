//! Computational primitives with compile-time dispatch
//!
//! # Architecture
//!
//! - Single `ComputePrimitives<T>` trait for all operations
//! - Concrete backend types: `ScalarBackend`, `Avx2Backend`
//! - Compile-time backend selection with runtime CPU validation
//!
//! # Usage
//!
//! ```rust
//! use weighted_core::primitives::{best_available_backend, ComputePrimitives};
//!
//! let backend = best_available_backend::<f64>();
//! let dot = backend.dot_product(&[1.0f64, 2.0, 3.0], &[4.0, 5.0, 6.0]);
//! assert!((dot - 32.0).abs() < 1e-12);
//! ```

pub mod backends;
pub mod traits;

pub use backends::{best_available_backend, Avx2Backend, ScalarBackend, SelectBackend};
pub use traits::ComputePrimitives;

/// Create a scalar backend (always available)
pub fn scalar_backend() -> ScalarBackend {
    ScalarBackend::new()
}

/// Create an AVX2 backend, degrading to scalar kernels when unsupported
pub fn avx2_backend() -> Avx2Backend {
    Avx2Backend::new()
}

/// Get the best available backend name for `f64`
pub fn best_backend_name() -> &'static str {
    if Avx2Backend::is_available() {
        "avx2"
    } else {
        "scalar"
    }
}
