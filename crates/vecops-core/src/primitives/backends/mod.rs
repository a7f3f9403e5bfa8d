//! Backend implementations and runtime selection
//!
//! Concrete backend types with direct implementations, plus [`AutoBackend`],
//! a `Copy` enum holding whichever backend this process selected.

pub mod avx2;
pub mod scalar;

pub use avx2::Avx2Backend;
pub use scalar::ScalarBackend;

use std::sync::OnceLock;

use super::KernelPrimitives;
use crate::stride::Stride;

/// The backend chosen for this process
#[derive(Clone, Copy, Debug)]
#[cfg_attr(not(all(target_arch = "x86_64", feature = "avx2")), allow(dead_code))]
pub enum AutoBackend {
    Scalar(ScalarBackend),
    Avx2(Avx2Backend),
}

macro_rules! dispatch {
    ($self:ident, $backend:ident => $call:expr) => {
        match $self {
            AutoBackend::Scalar($backend) => $call,
            AutoBackend::Avx2($backend) => $call,
        }
    };
}

impl KernelPrimitives for AutoBackend {
    fn backend_name(&self) -> &'static str {
        dispatch!(self, b => b.backend_name())
    }

    fn simd_width(&self) -> usize {
        dispatch!(self, b => b.simd_width())
    }

    fn abs_sum(&self, x: &[f64]) -> f64 {
        dispatch!(self, b => b.abs_sum(x))
    }

    fn sum(&self, x: &[f64]) -> f64 {
        dispatch!(self, b => b.sum(x))
    }

    fn dot(&self, x: &[f64], y: &[f64]) -> f64 {
        dispatch!(self, b => b.dot(x, y))
    }

    fn add_const(&self, alpha: f64, x: &mut [f64]) {
        dispatch!(self, b => b.add_const(alpha, x))
    }

    fn add(&self, dst: &mut [f64], src: &[f64]) {
        dispatch!(self, b => b.add(dst, src))
    }

    fn scale(&self, alpha: f64, x: &mut [f64]) {
        dispatch!(self, b => b.scale(alpha, x))
    }

    fn axpy(&self, alpha: f64, x: &[f64], y: &mut [f64]) {
        dispatch!(self, b => b.axpy(alpha, x, y))
    }

    fn axpy_to<'a>(&self, dst: &'a mut [f64], alpha: f64, x: &[f64], y: &[f64]) -> &'a mut [f64] {
        dispatch!(self, b => b.axpy_to(dst, alpha, x, y))
    }

    fn cum_sum<'a>(&self, dst: &'a mut [f64], src: &[f64]) -> &'a mut [f64] {
        dispatch!(self, b => b.cum_sum(dst, src))
    }

    fn cum_prod<'a>(&self, dst: &'a mut [f64], src: &[f64]) -> &'a mut [f64] {
        dispatch!(self, b => b.cum_prod(dst, src))
    }

    fn div(&self, dst: &mut [f64], src: &[f64]) {
        dispatch!(self, b => b.div(dst, src))
    }

    fn div_to<'a>(&self, dst: &'a mut [f64], x: &[f64], y: &[f64]) -> &'a mut [f64] {
        dispatch!(self, b => b.div_to(dst, x, y))
    }

    fn l1_norm(&self, s: &[f64], t: &[f64]) -> f64 {
        dispatch!(self, b => b.l1_norm(s, t))
    }

    fn linf_norm(&self, s: &[f64], t: &[f64]) -> f64 {
        dispatch!(self, b => b.linf_norm(s, t))
    }

    fn l2_norm(&self, x: &[f64]) -> f64 {
        dispatch!(self, b => b.l2_norm(x))
    }

    fn l2_distance(&self, s: &[f64], t: &[f64]) -> f64 {
        dispatch!(self, b => b.l2_distance(s, t))
    }

    #[track_caller]
    fn abs_sum_inc(&self, x: &[f64], stride: Stride) -> f64 {
        dispatch!(self, b => b.abs_sum_inc(x, stride))
    }

    #[track_caller]
    fn sum_inc(&self, x: &[f64], stride: Stride) -> f64 {
        dispatch!(self, b => b.sum_inc(x, stride))
    }

    #[track_caller]
    fn dot_inc(&self, x: &[f64], sx: Stride, y: &[f64], sy: Stride) -> f64 {
        dispatch!(self, b => b.dot_inc(x, sx, y, sy))
    }

    #[track_caller]
    fn l2_norm_inc(&self, x: &[f64], stride: Stride) -> f64 {
        dispatch!(self, b => b.l2_norm_inc(x, stride))
    }

    #[track_caller]
    fn scale_inc(&self, alpha: f64, x: &mut [f64], stride: Stride) {
        dispatch!(self, b => b.scale_inc(alpha, x, stride))
    }

    #[track_caller]
    fn axpy_inc(&self, alpha: f64, x: &[f64], sx: Stride, y: &mut [f64], sy: Stride) {
        dispatch!(self, b => b.axpy_inc(alpha, x, sx, y, sy))
    }
}

static SELECTED: OnceLock<AutoBackend> = OnceLock::new();

fn select_backend() -> AutoBackend {
    #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
    {
        if let Ok(backend) = Avx2Backend::try_new() {
            return AutoBackend::Avx2(backend);
        }
        log::debug!("AVX2 compiled in but not supported by this CPU");
    }
    AutoBackend::Scalar(ScalarBackend::new())
}

/// Get the best available backend for the current platform
///
/// Selected on first use and fixed for the rest of the process.
pub fn best_available_backend() -> AutoBackend {
    *SELECTED.get_or_init(|| {
        let backend = select_backend();
        log::debug!("vector kernels using {} backend", backend.backend_name());
        backend
    })
}

/// Get the best available backend name
pub fn best_backend_name() -> &'static str {
    best_available_backend().backend_name()
}
