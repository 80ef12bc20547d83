//! Operation-centric modules for AVX2 compute primitives
//!
//! Each operation lives in its own module with type-specific implementations.

pub mod dot_product;

pub use dot_product::DotProduct;
