//! Compute backends for the vector kernels
//!
//! # Architecture
//!
//! - Single [`KernelPrimitives`] trait whose default methods are the
//!   sequential reference for every kernel
//! - Concrete backend types: [`ScalarBackend`], [`Avx2Backend`]
//! - [`AutoBackend`] picked once at runtime by [`best_available_backend`]
//! - No heap allocation or dynamic dispatch
//!
//! # Usage
//!
//! ```rust
//! use vecops_core::primitives::{KernelPrimitives, ScalarBackend};
//!
//! let backend = ScalarBackend::new();
//! assert_eq!(backend.abs_sum(&[-1.0, -2.0, -3.0]), 6.0);
//! ```

pub mod backends;
pub mod traits;

pub use backends::{
    best_available_backend, best_backend_name, AutoBackend, Avx2Backend, ScalarBackend,
};
pub use traits::KernelPrimitives;

/// Create a scalar backend (always available)
pub fn scalar_backend() -> ScalarBackend {
    ScalarBackend::new()
}

/// Create an AVX2 backend (panics if not supported)
#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
pub fn avx2_backend() -> Avx2Backend {
    Avx2Backend::new()
}
