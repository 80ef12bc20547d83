//! Dot product operation for AVX2 backend
//!
//! Computes Σ(a[i] * b[i]) with FMA lanes for floats; integer types reuse
//! the indexed loop from [`crate::timing::loop_dot_product`].

mod f32;
mod f64;

use crate::Numeric;

/// Trait for dot product operation
pub trait DotProduct<T: Numeric> {
    /// Compute dot product with AVX2 optimizations
    ///
    /// # Safety
    /// The CPU must support AVX2 and FMA.
    unsafe fn compute(a: &[T], b: &[T]) -> T::Aggregate;
}

impl DotProduct<f32> for f32 {
    unsafe fn compute(a: &[f32], b: &[f32]) -> f64 {
        f32::dot_product_f32(a, b)
    }
}

impl DotProduct<f64> for f64 {
    unsafe fn compute(a: &[f64], b: &[f64]) -> f64 {
        f64::dot_product_f64(a, b)
    }
}

// Integer types have no FMA lane; accumulate in the aggregate type instead
macro_rules! impl_dot_product_fallback {
    ($type:ty) => {
        impl DotProduct<$type> for $type {
            unsafe fn compute(a: &[$type], b: &[$type]) -> <$type as Numeric>::Aggregate {
                crate::timing::loop_dot_product(a, b)
            }
        }
    };
}

impl_dot_product_fallback!(i32);
impl_dot_product_fallback!(u32);
