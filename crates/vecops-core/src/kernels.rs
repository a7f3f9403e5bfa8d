//! Free-function kernel API
//!
//! Each function routes through [`best_available_backend`]. Results do not
//! depend on which backend was picked. Multi-sequence kernels follow the
//! common-prefix rule: they work over `min` of the input lengths, leave
//! the rest of every buffer untouched and never fail on a mismatch.

use crate::primitives::{best_available_backend, KernelPrimitives};
use crate::stride::Stride;

/// Sum of absolute values, left to right
///
/// ```rust
/// assert_eq!(vecops_core::abs_sum(&[8.0, -8.0, 8.0, -8.0, 8.0]), 40.0);
/// assert_eq!(vecops_core::abs_sum(&[]), 0.0);
/// assert!(vecops_core::abs_sum(&[f64::NAN]).is_nan());
/// ```
#[inline]
pub fn abs_sum(x: &[f64]) -> f64 {
    best_available_backend().abs_sum(x)
}

/// Sum of elements, left to right
#[inline]
pub fn sum(x: &[f64]) -> f64 {
    best_available_backend().sum(x)
}

/// Dot product over the common prefix
#[inline]
pub fn dot(x: &[f64], y: &[f64]) -> f64 {
    best_available_backend().dot(x, y)
}

/// Add `alpha` to every element of `x`
///
/// ```rust
/// let mut x = [-f64::INFINITY, 4.0];
/// vecops_core::add_const(f64::INFINITY, &mut x);
/// assert!(x[0].is_nan());
/// assert_eq!(x[1], f64::INFINITY);
/// ```
#[inline]
pub fn add_const(alpha: f64, x: &mut [f64]) {
    best_available_backend().add_const(alpha, x)
}

/// `dst[i] += src[i]` over the common prefix
///
/// ```rust
/// let mut dst = [1.0, 2.0, 3.0];
/// vecops_core::add(&mut dst, &[1.0]);
/// assert_eq!(dst, [2.0, 2.0, 3.0]);
/// ```
#[inline]
pub fn add(dst: &mut [f64], src: &[f64]) {
    best_available_backend().add(dst, src)
}

/// Multiply every element of `x` by `alpha`
#[inline]
pub fn scale(alpha: f64, x: &mut [f64]) {
    best_available_backend().scale(alpha, x)
}

/// `y[i] += alpha * x[i]` over the common prefix
#[inline]
pub fn axpy(alpha: f64, x: &[f64], y: &mut [f64]) {
    best_available_backend().axpy(alpha, x, y)
}

/// `dst[i] = alpha * x[i] + y[i]`; returns the written prefix of `dst`
#[inline]
pub fn axpy_to<'a>(dst: &'a mut [f64], alpha: f64, x: &[f64], y: &[f64]) -> &'a mut [f64] {
    best_available_backend().axpy_to(dst, alpha, x, y)
}

/// Running sum of `src` into `dst`; returns the written prefix of `dst`
///
/// ```rust
/// let mut dst = [0.0; 4];
/// let out = vecops_core::cum_sum(&mut dst, &[1.0, 2.0, 3.0]);
/// assert_eq!(out, &[1.0, 3.0, 6.0]);
/// ```
#[inline]
pub fn cum_sum<'a>(dst: &'a mut [f64], src: &[f64]) -> &'a mut [f64] {
    best_available_backend().cum_sum(dst, src)
}

/// Running product of `src` into `dst`; returns the written prefix of `dst`
#[inline]
pub fn cum_prod<'a>(dst: &'a mut [f64], src: &[f64]) -> &'a mut [f64] {
    best_available_backend().cum_prod(dst, src)
}

/// `dst[i] /= src[i]` over the common prefix
#[inline]
pub fn div(dst: &mut [f64], src: &[f64]) {
    best_available_backend().div(dst, src)
}

/// `dst[i] = x[i] / y[i]`; returns the written prefix of `dst`
#[inline]
pub fn div_to<'a>(dst: &'a mut [f64], x: &[f64], y: &[f64]) -> &'a mut [f64] {
    best_available_backend().div_to(dst, x, y)
}

/// Σ|s_i - t_i| over the common prefix
///
/// ```rust
/// assert_eq!(vecops_core::l1_norm(&[2.0, 4.0, 6.0], &[1.0, 2.0, 3.0, 4.0]), 6.0);
/// ```
#[inline]
pub fn l1_norm(s: &[f64], t: &[f64]) -> f64 {
    best_available_backend().l1_norm(s, t)
}

/// max|s_i - t_i| over the common prefix; a NaN difference wins
///
/// ```rust
/// let inf = f64::INFINITY;
/// assert_eq!(vecops_core::linf_norm(&[0.0, 1.0, 0.0], &[1.0, 1.0, inf]), inf);
/// assert!(vecops_core::linf_norm(&[inf, 4.0], &[inf, 3.0]).is_nan());
/// ```
#[inline]
pub fn linf_norm(s: &[f64], t: &[f64]) -> f64 {
    best_available_backend().linf_norm(s, t)
}

/// Euclidean norm, scaled so large elements do not overflow
#[inline]
pub fn l2_norm(x: &[f64]) -> f64 {
    best_available_backend().l2_norm(x)
}

/// Euclidean distance over the common prefix
#[inline]
pub fn l2_distance(s: &[f64], t: &[f64]) -> f64 {
    best_available_backend().l2_distance(s, t)
}

/// Sum of absolute values of the strided elements of `x`
///
/// Reads only `x[0], x[inc], ..., x[(count-1)*inc]`.
///
/// # Panics
/// Panics if `x.len() < stride.extent()`.
///
/// ```rust
/// use vecops_core::{abs_sum_inc, Stride};
///
/// let x = [1.0, 99.0, -2.0, 99.0, 3.0];
/// assert_eq!(abs_sum_inc(&x, Stride::new(3, 2).unwrap()), 6.0);
/// ```
#[inline]
#[track_caller]
pub fn abs_sum_inc(x: &[f64], stride: Stride) -> f64 {
    best_available_backend().abs_sum_inc(x, stride)
}

/// Sum of the strided elements of `x`
#[inline]
#[track_caller]
pub fn sum_inc(x: &[f64], stride: Stride) -> f64 {
    best_available_backend().sum_inc(x, stride)
}

/// Strided dot product over the common prefix of the two counts
#[inline]
#[track_caller]
pub fn dot_inc(x: &[f64], sx: Stride, y: &[f64], sy: Stride) -> f64 {
    best_available_backend().dot_inc(x, sx, y, sy)
}

/// Euclidean norm of the strided elements of `x`
#[inline]
#[track_caller]
pub fn l2_norm_inc(x: &[f64], stride: Stride) -> f64 {
    best_available_backend().l2_norm_inc(x, stride)
}

/// Multiply the strided elements of `x` by `alpha`
#[inline]
#[track_caller]
pub fn scale_inc(alpha: f64, x: &mut [f64], stride: Stride) {
    best_available_backend().scale_inc(alpha, x, stride)
}

/// `y_k += alpha * x_k` over the common prefix of the two counts
#[inline]
#[track_caller]
pub fn axpy_inc(alpha: f64, x: &[f64], sx: Stride, y: &mut [f64], sy: Stride) {
    best_available_backend().axpy_inc(alpha, x, sx, y, sy)
}
