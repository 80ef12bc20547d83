//! Concrete backend implementations
//!
//! Plain types with compile-time dispatch: no boxing, no trait objects.

pub mod avx2;
pub mod scalar;

pub use avx2::Avx2Backend;
pub use scalar::ScalarBackend;

use super::ComputePrimitives;
use crate::Numeric;

/// Backend selection trait for automatic backend choice
pub trait SelectBackend: Numeric {
    /// The backend type to use for this numeric type
    type Backend: ComputePrimitives<Self>;

    /// Get an instance of the backend
    fn backend() -> Self::Backend;
}

// Integer types gain nothing from the AVX2 kernels
impl SelectBackend for i32 {
    type Backend = ScalarBackend;
    fn backend() -> Self::Backend {
        ScalarBackend
    }
}

impl SelectBackend for u32 {
    type Backend = ScalarBackend;
    fn backend() -> Self::Backend {
        ScalarBackend
    }
}

// Floats use AVX2 when compiled in; the backend itself degrades to scalar
// kernels on CPUs without support
macro_rules! impl_select_float_backend {
    ($type:ty) => {
        impl SelectBackend for $type {
            #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
            type Backend = Avx2Backend;

            #[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
            type Backend = ScalarBackend;

            fn backend() -> Self::Backend {
                #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
                {
                    Avx2Backend::new()
                }
                #[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
                {
                    ScalarBackend
                }
            }
        }
    };
}

impl_select_float_backend!(f32);
impl_select_float_backend!(f64);

/// Get the best available backend for the current platform
pub fn best_available_backend<T: SelectBackend>() -> T::Backend {
    T::backend()
}
