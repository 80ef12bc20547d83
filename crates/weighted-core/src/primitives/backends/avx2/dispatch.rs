//! Compile-time dispatch for AVX2 type-specific implementations

use super::ops::DotProduct;
use crate::Numeric;

/// Trait for type-specific AVX2 dispatch
///
/// Implemented for each supported element type so the backend resolves the
/// kernel at compile time.
pub trait Avx2TypeDispatch: Numeric + DotProduct<Self> {
    fn backend_name() -> &'static str;
    fn simd_width() -> usize;

    /// # Safety
    /// The CPU must support AVX2 and FMA.
    unsafe fn dot_product_impl(a: &[Self], b: &[Self]) -> Self::Aggregate {
        <Self as DotProduct<Self>>::compute(a, b)
    }
}

impl Avx2TypeDispatch for f32 {
    fn backend_name() -> &'static str {
        "avx2"
    }

    fn simd_width() -> usize {
        8
    }
}

impl Avx2TypeDispatch for f64 {
    fn backend_name() -> &'static str {
        "avx2"
    }

    fn simd_width() -> usize {
        4
    }
}

impl Avx2TypeDispatch for i32 {
    fn backend_name() -> &'static str {
        "avx2 (scalar fallback)"
    }

    fn simd_width() -> usize {
        1
    }
}

impl Avx2TypeDispatch for u32 {
    fn backend_name() -> &'static str {
        "avx2 (scalar fallback)"
    }

    fn simd_width() -> usize {
        1
    }
}
