//! Vector kernel layer for dense and banded linear algebra
//!
//! Re-exports [`vecops_core`], the f64 kernel crate: elementwise arithmetic,
//! reductions, prefix accumulations and norms over contiguous and strided
//! sequences, with IEEE-754 special values propagated in a fixed sequential
//! order.
//!
//! ```rust
//! use vecops::prelude::*;
//!
//! let mut dst = [2.0, 4.0, 6.0];
//! div(&mut dst, &[1.0, 2.0, 3.0]);
//! assert_eq!(dst, [2.0, 2.0, 2.0]);
//! ```

pub use vecops_core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use vecops_core::prelude::*;
}
