//! Operation modules for the AVX2 backend
//!
//! Only kernels whose vector form is bit-identical to the sequential
//! reference live here: lane-independent elementwise updates and the
//! NaN-sticky maximum. Vector loads cover whole 4-lane chunks inside the
//! common prefix; the tail is finished one element at a time.

pub mod elementwise;
pub mod linf_norm;

/// f64 lanes in a 256-bit register
pub(crate) const LANES: usize = 4;
