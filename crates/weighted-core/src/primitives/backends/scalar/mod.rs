//! Portable backend
//!
//! Uses the iterator-based defaults of [`ComputePrimitives`] for every
//! element type. This is the reference the SIMD backends are tested against.

use crate::primitives::ComputePrimitives;
use crate::Numeric;

/// Backend with no SIMD requirements, available on every target
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarBackend;

impl ScalarBackend {
    pub fn new() -> Self {
        Self
    }
}

impl<T: Numeric> ComputePrimitives<T> for ScalarBackend {
    fn backend_name(&self) -> &'static str {
        "scalar"
    }
}
