//! Strided addressing descriptor
//!
//! A [`Stride`] names `count` logical elements located at offsets
//! `0, inc, 2*inc, ..., (count-1)*inc` from the start of a buffer. The
//! descriptor is validated once when it is built (positive increment, no
//! overflow) and once per call against the buffer it is applied to; the
//! strided kernels then walk the buffer with `step_by`, which never reads a
//! skipped or trailing element.

use crate::error::{Error, Result};

/// (count, increment) descriptor for strided sequences
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Stride {
    count: usize,
    inc: usize,
}

impl Stride {
    /// Build a descriptor for `count` elements spaced `inc` apart
    ///
    /// Non-positive increments are rejected with
    /// [`Error::InvalidDimension`]: reverse traversal is not part of the
    /// kernel contract. An extent that does not fit in `usize` is rejected the
    /// same way.
    pub fn new(count: usize, inc: isize) -> Result<Self> {
        if inc <= 0 {
            return Err(Error::non_positive_increment(inc));
        }
        let inc = inc as usize;
        let fits = match count.checked_sub(1) {
            Some(last) => last.checked_mul(inc).and_then(|l| l.checked_add(1)).is_some(),
            None => true,
        };
        if !fits {
            return Err(Error::InvalidDimension(format!(
                "stride extent overflows: count {count}, increment {inc}"
            )));
        }
        Ok(Self { count, inc })
    }

    /// Contiguous descriptor (`inc == 1`)
    pub const fn unit(count: usize) -> Self {
        Self { count, inc: 1 }
    }

    /// Number of logical elements
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Offset between successive logical elements
    pub const fn inc(&self) -> usize {
        self.inc
    }

    /// Whether the descriptor names no elements
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Offset of the last logical element, `None` when empty
    pub fn last_offset(&self) -> Option<usize> {
        self.count.checked_sub(1).map(|k| k * self.inc)
    }

    /// Minimum buffer length that holds every logical element
    ///
    /// This is `(count-1)*inc + 1`, not `count*inc`: nothing after the last
    /// logical element belongs to the sequence.
    pub fn extent(&self) -> usize {
        self.last_offset().map_or(0, |last| last + 1)
    }

    /// Same increment, fewer elements
    pub fn truncate(self, count: usize) -> Self {
        Self {
            count: count.min(self.count),
            inc: self.inc,
        }
    }

    /// Verify that a buffer of length `len` covers the extent
    pub fn check(&self, len: usize) -> Result<()> {
        let extent = self.extent();
        if len < extent {
            return Err(Error::shape_mismatch(extent, len, "strided sequence"));
        }
        Ok(())
    }

    /// Panicking form of [`Stride::check`] used at kernel entry
    #[inline]
    #[track_caller]
    pub(crate) fn assert_fits(&self, len: usize) {
        if let Err(e) = self.check(len) {
            panic!("{e}");
        }
    }

    /// Buffer offsets of the logical elements, in order
    pub fn offsets(&self) -> impl Iterator<Item = usize> {
        let inc = self.inc;
        (0..self.count).map(move |k| k * inc)
    }

    /// Logical elements of `data`
    ///
    /// # Panics
    /// Panics if `data` is shorter than [`Stride::extent`].
    #[track_caller]
    pub fn iter<'a>(&self, data: &'a [f64]) -> impl Iterator<Item = &'a f64> + 'a {
        self.assert_fits(data.len());
        data.iter().step_by(self.inc).take(self.count)
    }

    /// Mutable logical elements of `data`
    ///
    /// # Panics
    /// Panics if `data` is shorter than [`Stride::extent`].
    #[track_caller]
    pub fn iter_mut<'a>(&self, data: &'a mut [f64]) -> impl Iterator<Item = &'a mut f64> + 'a {
        self.assert_fits(data.len());
        data.iter_mut().step_by(self.inc).take(self.count)
    }

    /// Copy the logical elements into a new vector
    pub fn gather(&self, data: &[f64]) -> Vec<f64> {
        self.iter(data).copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_increment() {
        assert!(matches!(Stride::new(3, 0), Err(Error::InvalidDimension(_))));
        assert!(matches!(Stride::new(3, -1), Err(Error::InvalidDimension(_))));
        assert!(matches!(Stride::new(0, 0), Err(Error::InvalidDimension(_))));
    }

    #[test]
    fn test_rejects_overflowing_extent() {
        assert!(matches!(
            Stride::new(4, isize::MAX),
            Err(Error::InvalidDimension(_))
        ));
        // A single element never overflows, whatever the increment
        assert!(Stride::new(1, isize::MAX).is_ok());
    }

    #[test]
    fn test_extent() {
        assert_eq!(Stride::new(0, 5).unwrap().extent(), 0);
        assert_eq!(Stride::new(1, 5).unwrap().extent(), 1);
        assert_eq!(Stride::new(3, 5).unwrap().extent(), 11);
        assert_eq!(Stride::unit(4).extent(), 4);
        assert_eq!(Stride::new(3, 5).unwrap().last_offset(), Some(10));
        assert_eq!(Stride::unit(0).last_offset(), None);
    }

    #[test]
    fn test_check() {
        let stride = Stride::new(3, 4).unwrap();
        assert!(stride.check(9).is_ok());
        assert!(stride.check(100).is_ok());
        match stride.check(8) {
            Err(Error::ShapeMismatch {
                expected, actual, ..
            }) => {
                assert_eq!(expected, 9);
                assert_eq!(actual, 8);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(Stride::unit(0).check(0).is_ok());
    }

    #[test]
    fn test_offsets_and_gather() {
        let stride = Stride::new(3, 2).unwrap();
        assert_eq!(stride.offsets().collect::<Vec<_>>(), vec![0, 2, 4]);
        let data = [1.0, -1.0, 2.0, -1.0, 3.0];
        assert_eq!(stride.gather(&data), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_iter_mut_touches_only_logical_elements() {
        let stride = Stride::new(2, 3).unwrap();
        let mut data = [0.0; 4];
        for v in stride.iter_mut(&mut data) {
            *v = 9.0;
        }
        assert_eq!(data, [9.0, 0.0, 0.0, 9.0]);
    }

    #[test]
    fn test_truncate() {
        let stride = Stride::new(5, 2).unwrap();
        assert_eq!(stride.truncate(3), Stride::new(3, 2).unwrap());
        assert_eq!(stride.truncate(10), stride);
    }

    #[test]
    #[should_panic(expected = "Shape mismatch")]
    fn test_iter_panics_on_short_buffer() {
        let stride = Stride::new(3, 3).unwrap();
        let data = [0.0; 6];
        let _ = stride.iter(&data).count();
    }
}
