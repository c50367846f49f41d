//! Ordered double-precision comparisons.
//!
//! Operands arrive as raw register bits. On x86-64 the predicates lower
//! to a single `comisd`; elsewhere the scalar comparisons give the same
//! results, since IEEE comparisons on NaN operands are false either way.

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::{_mm_comile_sd, _mm_comilt_sd, _mm_set_sd};

/// Ordered less-or-equal: `fs <= ft`, false when either operand is NaN.
#[inline]
pub fn cmp_ole_64(fs: u64, ft: u64) -> bool {
    #[cfg(target_arch = "x86_64")]
    // SAFETY: SSE2 is part of the x86-64 baseline.
    unsafe {
        let fs = _mm_set_sd(f64::from_bits(fs));
        let ft = _mm_set_sd(f64::from_bits(ft));
        _mm_comile_sd(fs, ft) != 0
    }

    #[cfg(not(target_arch = "x86_64"))]
    {
        f64::from_bits(fs) <= f64::from_bits(ft)
    }
}

/// Ordered less-than: `fs < ft`, false when either operand is NaN.
#[inline]
pub fn cmp_olt_64(fs: u64, ft: u64) -> bool {
    #[cfg(target_arch = "x86_64")]
    // SAFETY: SSE2 is part of the x86-64 baseline.
    unsafe {
        let fs = _mm_set_sd(f64::from_bits(fs));
        let ft = _mm_set_sd(f64::from_bits(ft));
        _mm_comilt_sd(fs, ft) != 0
    }

    #[cfg(not(target_arch = "x86_64"))]
    {
        f64::from_bits(fs) < f64::from_bits(ft)
    }
}
