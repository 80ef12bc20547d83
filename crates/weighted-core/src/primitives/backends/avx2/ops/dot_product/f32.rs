//! AVX2 dot product implementation for f32

use std::arch::x86_64::*;

/// AVX2 implementation of dot product for f32
///
/// Each 8-lane load is widened to two f64 vectors before the FMA so the
/// result carries the same precision as the scalar aggregate.
#[target_feature(enable = "avx2", enable = "fma")]
pub unsafe fn dot_product_f32(a: &[f32], b: &[f32]) -> f64 {
    let n = a.len().min(b.len());
    if n == 0 {
        return 0.0;
    }

    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();

    let mut acc_lo = _mm256_setzero_pd();
    let mut acc_hi = _mm256_setzero_pd();

    let mut i = 0;
    while i + 8 <= n {
        let a_vec = _mm256_loadu_ps(a_ptr.add(i));
        let b_vec = _mm256_loadu_ps(b_ptr.add(i));

        let a_lo = _mm256_cvtps_pd(_mm256_castps256_ps128(a_vec));
        let b_lo = _mm256_cvtps_pd(_mm256_castps256_ps128(b_vec));
        let a_hi = _mm256_cvtps_pd(_mm256_extractf128_ps::<1>(a_vec));
        let b_hi = _mm256_cvtps_pd(_mm256_extractf128_ps::<1>(b_vec));

        acc_lo = _mm256_fmadd_pd(a_lo, b_lo, acc_lo);
        acc_hi = _mm256_fmadd_pd(a_hi, b_hi, acc_hi);
        i += 8;
    }

    let mut lanes = [0.0f64; 4];
    _mm256_storeu_pd(lanes.as_mut_ptr(), _mm256_add_pd(acc_lo, acc_hi));
    let mut sum = (lanes[0] + lanes[1]) + (lanes[2] + lanes[3]);

    while i < n {
        sum += a[i] as f64 * b[i] as f64;
        i += 1;
    }

    sum
}
