//! AVX2 backend with operation-centric organization
//!
//! Kernels are compiled only for `x86_64` with the `avx2` feature. The CPU is
//! probed once at construction; on hosts without AVX2/FMA the backend keeps
//! working through the scalar path instead of failing.

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
mod dispatch;
#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
mod ops;

use crate::primitives::{ComputePrimitives, ScalarBackend};
use crate::Numeric;

/// AVX2 backend for x86_64 processors
#[derive(Clone, Copy, Debug)]
pub struct Avx2Backend {
    enabled: bool,
}

impl Avx2Backend {
    /// Create a new AVX2 backend
    ///
    /// Falls back to scalar kernels (with a warning) when the build or the
    /// CPU lacks AVX2 and FMA.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let enabled = Self::is_available();
        if !enabled {
            tracing::warn!("AVX2 backend requested but unavailable, using scalar kernels");
        }
        Self { enabled }
    }

    /// Check if AVX2 and FMA are available on this CPU and compiled in
    pub fn is_available() -> bool {
        #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
        {
            is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma")
        }
        #[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
        {
            false
        }
    }

    /// Whether the SIMD kernels are in use
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
impl<T> ComputePrimitives<T> for Avx2Backend
where
    T: Numeric + self::dispatch::Avx2TypeDispatch,
{
    fn backend_name(&self) -> &'static str {
        if self.enabled {
            T::backend_name()
        } else {
            "avx2 (scalar fallback)"
        }
    }

    fn simd_width(&self) -> usize {
        if self.enabled {
            T::simd_width()
        } else {
            1
        }
    }

    fn dot_product(&self, a: &[T], b: &[T]) -> T::Aggregate {
        debug_assert_eq!(a.len(), b.len(), "Operands must have same length");
        if self.enabled {
            // Safety: CPU support was checked in new()
            unsafe { T::dot_product_impl(a, b) }
        } else {
            ScalarBackend.dot_product(a, b)
        }
    }
}

// Fallback for non-AVX2 builds
#[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
impl<T: Numeric> ComputePrimitives<T> for Avx2Backend {
    fn backend_name(&self) -> &'static str {
        "avx2 (unavailable)"
    }

    fn dot_product(&self, a: &[T], b: &[T]) -> T::Aggregate {
        ScalarBackend.dot_product(a, b)
    }
}
