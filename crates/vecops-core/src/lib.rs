//! Vector kernels over `f64` sequences
//!
//! This crate is the numerical layer beneath dense and banded matrix types:
//! elementwise arithmetic, reductions, prefix accumulations and norms, in
//! contiguous and strided form.
//!
//! # Contract
//!
//! - **Sequential order**: every reduction is a left-to-right fold (see
//!   [`accumulate`]), so NaN and infinity propagation is reproducible.
//!   SIMD backends only accelerate kernels whose results are unchanged.
//! - **Common prefix**: kernels over several sequences work on the shortest
//!   length and leave the rest untouched. Differing lengths are not errors.
//! - **Extent**: no kernel reads or writes outside the logical extent it is
//!   given. Strided kernels take a [`Stride`] and touch only
//!   `0, inc, ..., (count-1)*inc`.
//! - **No state**: kernels allocate nothing and keep nothing between calls.
//!
//! # Example
//!
//! ```rust
//! use vecops_core::{abs_sum_inc, cum_sum, linf_norm, Stride};
//!
//! let mut dst = [0.0; 4];
//! assert_eq!(cum_sum(&mut dst, &[1.0, 2.0, 3.0]), &[1.0, 3.0, 6.0]);
//!
//! let x = [-1.0, 0.0, -2.0, 0.0, -3.0];
//! assert_eq!(abs_sum_inc(&x, Stride::new(3, 2)?), 6.0);
//!
//! assert_eq!(linf_norm(&[2.0, 4.0, 6.0], &[1.0, 2.0, 3.0, 4.0]), 3.0);
//! # Ok::<(), vecops_core::Error>(())
//! ```

pub mod accumulate;
pub mod error;
pub mod guard;
pub mod kernels;
pub mod primitives;
pub mod stride;

pub use error::{Error, GuardRegion, Result};
pub use kernels::{
    abs_sum, abs_sum_inc, add, add_const, axpy, axpy_inc, axpy_to, cum_prod, cum_sum, div,
    div_to, dot, dot_inc, l1_norm, l2_distance, l2_norm, l2_norm_inc, linf_norm, scale,
    scale_inc, sum, sum_inc,
};
pub use primitives::{
    best_available_backend, best_backend_name, scalar_backend, AutoBackend, Avx2Backend,
    KernelPrimitives, ScalarBackend,
};
pub use stride::Stride;

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
pub use primitives::avx2_backend;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::accumulate::common_prefix_len;
    pub use crate::error::{Error, Result};
    pub use crate::kernels::*;
    pub use crate::primitives::{KernelPrimitives, ScalarBackend};
    pub use crate::stride::Stride;
}
