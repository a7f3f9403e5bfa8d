//! Scalar backend implementation
//!
//! This backend is the sequential reference: it uses the default method
//! bodies of [`KernelPrimitives`] without any SIMD instructions.

use crate::primitives::KernelPrimitives;

/// Scalar backend - always available
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarBackend;

impl ScalarBackend {
    pub fn new() -> Self {
        Self
    }
}

impl KernelPrimitives for ScalarBackend {
    fn backend_name(&self) -> &'static str {
        "scalar"
    }

    // All kernels use the default implementations from the trait
}
