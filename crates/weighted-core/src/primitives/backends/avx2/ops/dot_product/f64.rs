//! AVX2 dot product implementation for f64

use std::arch::x86_64::*;

/// AVX2 implementation of dot product for f64
///
/// Two independent accumulators hide FMA latency; the tail is summed in
/// scalar order after the horizontal reduction.
#[target_feature(enable = "avx2", enable = "fma")]
pub unsafe fn dot_product_f64(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len());
    if n == 0 {
        return 0.0;
    }

    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();

    let mut acc0 = _mm256_setzero_pd();
    let mut acc1 = _mm256_setzero_pd();

    let mut i = 0;
    while i + 8 <= n {
        acc0 = _mm256_fmadd_pd(_mm256_loadu_pd(a_ptr.add(i)), _mm256_loadu_pd(b_ptr.add(i)), acc0);
        acc1 = _mm256_fmadd_pd(
            _mm256_loadu_pd(a_ptr.add(i + 4)),
            _mm256_loadu_pd(b_ptr.add(i + 4)),
            acc1,
        );
        i += 8;
    }
    if i + 4 <= n {
        acc0 = _mm256_fmadd_pd(_mm256_loadu_pd(a_ptr.add(i)), _mm256_loadu_pd(b_ptr.add(i)), acc0);
        i += 4;
    }

    let mut lanes = [0.0f64; 4];
    _mm256_storeu_pd(lanes.as_mut_ptr(), _mm256_add_pd(acc0, acc1));
    let mut sum = (lanes[0] + lanes[1]) + (lanes[2] + lanes[3]);

    while i < n {
        sum += a[i] * b[i];
        i += 1;
    }

    sum
}
