//! Generic numeric trait for type-safe weighted sums
//!
//! Element types (`f64`, `f32`, `i32`, `u32`) carry an associated aggregate
//! type used for accumulation, so narrow inputs are summed in `f64` and
//! integer products cannot overflow.

use bytemuck::Pod;
use num_traits::{Float, Num};
use std::fmt::Debug;

/// Base trait for element types that can take part in a weighted sum
pub trait Numeric: Pod + Num + Copy + PartialOrd + Debug + Send + Sync {
    /// Type used for accumulation (dot products, batch results)
    type Aggregate: Float + From<Self> + Into<f64> + Debug + Send + Sync + std::ops::AddAssign;
}

impl Numeric for f64 {
    type Aggregate = f64;
}

impl Numeric for f32 {
    type Aggregate = f64; // Use f64 for better precision in aggregates
}

impl Numeric for i32 {
    type Aggregate = f64; // Use f64 to prevent overflow
}

impl Numeric for u32 {
    type Aggregate = f64; // Use f64 to prevent overflow
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_trait() {
        // For f64 the aggregate is f64, so this is a no-op
        let agg = <f64 as Numeric>::Aggregate::from(5.0f64);
        assert_eq!(agg, 5.0);
    }

    #[test]
    fn test_integer_aggregates_do_not_overflow() {
        let a = <i32 as Numeric>::Aggregate::from(i32::MAX);
        let b = <i32 as Numeric>::Aggregate::from(i32::MAX);
        assert!(a * b > i32::MAX as f64);

        let big = <u32 as Numeric>::Aggregate::from(u32::MAX);
        assert_eq!(big, u32::MAX as f64);
    }
}
