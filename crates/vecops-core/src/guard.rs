//! Guard-region harness for kernel tests
//!
//! Wraps a sequence in sentinel padding so a test can assert that a kernel
//! wrote nothing outside the logical extent it was given. Sentinels are
//! chosen by the caller; picking a value that would change the result if it
//! were read (e.g. `1.0` for a sum) makes stray reads show up in the result
//! as well.
//!
//! ```rust
//! use vecops_core::guard::{GuardConfig, Guarded};
//!
//! let mut dst = Guarded::new(&[1.0, 2.0, 3.0], GuardConfig::default());
//! vecops_core::add(dst.as_mut_slice(), &[1.0]);
//! assert_eq!(dst.as_slice(), &[2.0, 2.0, 3.0]);
//! assert!(dst.check().is_ok());
//! ```

use crate::error::{Error, GuardRegion, Result};
use crate::stride::Stride;

/// NaN-aware equality: equal values, or both NaN
#[inline]
pub fn same(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// NaN-aware slice equality
pub fn same_slice(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| same(x, y))
}

/// Padding layout for guarded buffers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuardConfig {
    /// Sentinel cells on each side
    pub guard_len: usize,
    /// Value written to every sentinel cell
    pub sentinel: f64,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            guard_len: 4,
            sentinel: 1.0,
        }
    }
}

impl GuardConfig {
    /// Set the number of sentinel cells on each side
    pub fn with_guard_len(mut self, guard_len: usize) -> Self {
        self.guard_len = guard_len;
        self
    }

    /// Set the sentinel value
    pub fn with_sentinel(mut self, sentinel: f64) -> Self {
        self.sentinel = sentinel;
        self
    }
}

/// A contiguous sequence with sentinel padding on both sides
#[derive(Debug, Clone)]
pub struct Guarded {
    buf: Vec<f64>,
    len: usize,
    config: GuardConfig,
}

impl Guarded {
    /// Copy `values` into a padded buffer
    pub fn new(values: &[f64], config: GuardConfig) -> Self {
        let g = config.guard_len;
        let mut buf = vec![config.sentinel; values.len() + 2 * g];
        buf[g..g + values.len()].copy_from_slice(values);
        Self {
            buf,
            len: values.len(),
            config,
        }
    }

    /// Logical length
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the logical extent is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The logical extent
    pub fn as_slice(&self) -> &[f64] {
        let g = self.config.guard_len;
        &self.buf[g..g + self.len]
    }

    /// The logical extent, mutable
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        let g = self.config.guard_len;
        &mut self.buf[g..g + self.len]
    }

    /// The whole buffer, sentinels included
    pub fn raw(&self) -> &[f64] {
        &self.buf
    }

    /// Find the first modified sentinel
    pub fn check(&self) -> Result<()> {
        let g = self.config.guard_len;
        let sentinel = self.config.sentinel;
        let back = g + self.len;
        let violation = (0..g)
            .find(|&i| !same(self.buf[i], sentinel))
            .map(|i| (GuardRegion::Front, i))
            .or_else(|| {
                (back..self.buf.len())
                    .find(|&i| !same(self.buf[i], sentinel))
                    .map(|i| (GuardRegion::Back, i - back))
            });
        report(violation)
    }

    /// Boolean form of [`Guarded::check`]
    pub fn is_intact(&self) -> bool {
        self.check().is_ok()
    }
}

/// A strided sequence with sentinels around it and in every gap
///
/// Logical element k sits at offset `k * inc` of the logical region, whose
/// length is exactly the stride extent `(count-1)*inc + 1`.
#[derive(Debug, Clone)]
pub struct GuardedInc {
    buf: Vec<f64>,
    stride: Stride,
    config: GuardConfig,
}

impl GuardedInc {
    /// Scatter `values` into a padded strided buffer
    ///
    /// Fails with [`Error::InvalidDimension`] for a non-positive increment.
    pub fn new(values: &[f64], inc: isize, config: GuardConfig) -> Result<Self> {
        let stride = Stride::new(values.len(), inc)?;
        let g = config.guard_len;
        let mut buf = vec![config.sentinel; stride.extent() + 2 * g];
        for (offset, &v) in stride.offsets().zip(values) {
            buf[g + offset] = v;
        }
        Ok(Self {
            buf,
            stride,
            config,
        })
    }

    /// Descriptor of the logical elements
    pub fn stride(&self) -> Stride {
        self.stride
    }

    /// The logical region (elements and gaps)
    pub fn as_slice(&self) -> &[f64] {
        let g = self.config.guard_len;
        &self.buf[g..g + self.stride.extent()]
    }

    /// The logical region, mutable
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        let g = self.config.guard_len;
        &mut self.buf[g..g + self.stride.extent()]
    }

    /// Copy out the logical elements
    pub fn gather(&self) -> Vec<f64> {
        self.stride.gather(self.as_slice())
    }

    /// Find the first modified sentinel, including gap cells
    pub fn check(&self) -> Result<()> {
        let g = self.config.guard_len;
        let sentinel = self.config.sentinel;
        let extent = self.stride.extent();
        let inc = self.stride.inc();
        let violation = self.buf.iter().enumerate().find_map(|(i, &v)| {
            if same(v, sentinel) {
                return None;
            }
            if i < g {
                Some((GuardRegion::Front, i))
            } else if i >= g + extent {
                Some((GuardRegion::Back, i - g - extent))
            } else if (i - g) % inc != 0 {
                Some((GuardRegion::Interior, i - g))
            } else {
                None
            }
        });
        report(violation)
    }

    /// Boolean form of [`GuardedInc::check`]
    pub fn is_intact(&self) -> bool {
        self.check().is_ok()
    }
}

fn report(violation: Option<(GuardRegion, usize)>) -> Result<()> {
    match violation {
        None => Ok(()),
        Some((region, index)) => {
            log::error!("guard violated in {region} region at index {index}");
            Err(Error::GuardViolation { region, index })
        }
    }
}
