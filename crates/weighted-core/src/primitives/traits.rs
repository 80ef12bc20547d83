//! Unified generic compute primitives trait

use crate::numeric::Numeric;
use num_traits::Zero;

/// Unified trait for computational primitives with generic numeric support
///
/// This trait provides low-level operations optimized for different backends
/// (scalar, AVX2) with compile-time dispatch. Callers validate operand
/// lengths before reaching this layer; implementations only read the common
/// prefix of both slices.
pub trait ComputePrimitives<T: Numeric = f64>: Clone + Send + Sync {
    /// Get the name of this backend
    fn backend_name(&self) -> &'static str;

    /// Get the SIMD width (number of elements processed in parallel)
    fn simd_width(&self) -> usize {
        1
    }

    /// Compute dot product of two vectors: Σ(a[i] * b[i])
    fn dot_product(&self, a: &[T], b: &[T]) -> T::Aggregate {
        debug_assert_eq!(a.len(), b.len(), "Operands must have same length");

        a.iter()
            .zip(b.iter())
            .map(|(&x, &y)| <T::Aggregate as From<T>>::from(x) * <T::Aggregate as From<T>>::from(y))
            .fold(<T::Aggregate as Zero>::zero(), |acc, x| acc + x)
    }
}
