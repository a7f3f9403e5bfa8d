//! AVX2 backend implementation
//!
//! Overrides the kernels whose 4-lane form returns exactly the sequential
//! reference result. Order-dependent reductions (`abs_sum`, `sum`, `dot`,
//! `l1_norm`, the L2 norms, the running sums and products) and the strided
//! kernels keep the default bodies.

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
mod ops;
#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
mod utils;

use crate::error::{Error, Result};
use crate::primitives::KernelPrimitives;

/// AVX2 backend for x86_64 processors
///
/// Only obtainable through [`Avx2Backend::new`] or [`Avx2Backend::try_new`],
/// which verify CPU support; every kernel relies on that check.
#[derive(Clone, Copy, Debug)]
pub struct Avx2Backend {
    _checked: (),
}

impl Avx2Backend {
    /// Create a new AVX2 backend
    ///
    /// # Panics
    /// Panics if the CPU doesn't support AVX2 instructions
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        match Self::try_new() {
            Ok(backend) => backend,
            Err(e) => panic!("{e}"),
        }
    }

    /// Create a new AVX2 backend, reporting missing support as an error
    pub fn try_new() -> Result<Self> {
        #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
        {
            if !is_x86_feature_detected!("avx2") {
                return Err(Error::FeatureNotAvailable(
                    "AVX2 backend requested but CPU doesn't support AVX2 instructions".to_string(),
                ));
            }
            Ok(Self { _checked: () })
        }
        #[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
        {
            Err(Error::FeatureNotAvailable(
                "AVX2 backend not available: not compiled with AVX2 support".to_string(),
            ))
        }
    }

    /// Check if AVX2 is available on this CPU
    pub fn is_available() -> bool {
        #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
        {
            is_x86_feature_detected!("avx2")
        }
        #[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
        {
            false
        }
    }
}

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
impl KernelPrimitives for Avx2Backend {
    fn backend_name(&self) -> &'static str {
        "avx2"
    }

    fn simd_width(&self) -> usize {
        ops::LANES
    }

    fn add_const(&self, alpha: f64, x: &mut [f64]) {
        // Safety: We checked CPU support in try_new()
        unsafe { ops::elementwise::add_const_f64(alpha, x) }
    }

    fn add(&self, dst: &mut [f64], src: &[f64]) {
        // Safety: We checked CPU support in try_new()
        unsafe { ops::elementwise::add_f64(dst, src) }
    }

    fn scale(&self, alpha: f64, x: &mut [f64]) {
        // Safety: We checked CPU support in try_new()
        unsafe { ops::elementwise::scale_f64(alpha, x) }
    }

    fn axpy(&self, alpha: f64, x: &[f64], y: &mut [f64]) {
        // Safety: We checked CPU support in try_new()
        unsafe { ops::elementwise::axpy_f64(alpha, x, y) }
    }

    fn axpy_to<'a>(&self, dst: &'a mut [f64], alpha: f64, x: &[f64], y: &[f64]) -> &'a mut [f64] {
        // Safety: We checked CPU support in try_new()
        unsafe { ops::elementwise::axpy_to_f64(dst, alpha, x, y) }
    }

    fn div(&self, dst: &mut [f64], src: &[f64]) {
        // Safety: We checked CPU support in try_new()
        unsafe { ops::elementwise::div_f64(dst, src) }
    }

    fn div_to<'a>(&self, dst: &'a mut [f64], x: &[f64], y: &[f64]) -> &'a mut [f64] {
        // Safety: We checked CPU support in try_new()
        unsafe { ops::elementwise::div_to_f64(dst, x, y) }
    }

    fn linf_norm(&self, s: &[f64], t: &[f64]) -> f64 {
        // Safety: We checked CPU support in try_new()
        unsafe { ops::linf_norm::linf_norm_f64(s, t) }
    }
}

// Fallback for non-AVX2 builds; no value of the type can be constructed
#[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
impl KernelPrimitives for Avx2Backend {
    fn backend_name(&self) -> &'static str {
        "avx2 (unavailable)"
    }
}
